use crate::models::FuelType;
use std::path::Path;
use tokio::fs;
use tracing::{error, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    fuels: Vec<FuelType>,
}

impl Catalog {
    pub fn new(fuels: Vec<FuelType>) -> Self {
        let fuels = fuels
            .into_iter()
            .map(|mut fuel| {
                if !fuel.price_per_liter.is_finite() || fuel.price_per_liter < 0.0 {
                    warn!("fuel {} has invalid price {}, using 0", fuel.id, fuel.price_per_liter);
                    fuel.price_per_liter = 0.0;
                }
                fuel
            })
            .collect();
        Self { fuels }
    }

    pub fn fuels(&self) -> &[FuelType] {
        &self.fuels
    }

    pub fn find(&self, id: &str) -> Option<&FuelType> {
        self.fuels.iter().find(|fuel| fuel.id == id)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(vec![
            FuelType::new("1", "A95", 54.99),
            FuelType::new("2", "A95+", 57.49),
            FuelType::new("3", "ДП", 52.99),
            FuelType::new("4", "Газ", 34.49),
        ])
    }
}

pub async fn load_catalog(path: &Path) -> Catalog {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice::<Vec<FuelType>>(&bytes) {
            Ok(fuels) => {
                info!("loaded {} fuels from {}", fuels.len(), path.display());
                Catalog::new(fuels)
            }
            Err(err) => {
                error!("failed to parse catalog file: {err}");
                Catalog::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Catalog::default(),
        Err(err) => {
            error!("failed to read catalog file: {err}");
            Catalog::default()
        }
    }
}
