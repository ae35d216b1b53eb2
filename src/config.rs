use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_CATALOG_PATH: &str = "data/fuels.json";

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub catalog_path: PathBuf,
    // read once, never re-evaluated
    pub authenticated: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|value| value.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            port,
            catalog_path: resolve_catalog_path(),
            authenticated: env::var("FUEL_POS_AUTHENTICATED")
                .map(|value| parse_flag(&value))
                .unwrap_or(false),
        }
    }
}

pub fn resolve_catalog_path() -> PathBuf {
    catalog_path_from(env::var("FUEL_CATALOG_PATH").ok())
}

fn catalog_path_from(value: Option<String>) -> PathBuf {
    match value {
        Some(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_CATALOG_PATH),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes"
    )
}
