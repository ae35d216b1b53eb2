pub mod app;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod pricing;
pub mod sanitize;
pub mod state;
pub mod ui;
pub mod widget;

pub use app::router;
pub use catalog::{load_catalog, Catalog};
pub use config::Settings;
pub use state::AppState;
pub use widget::{CalculatorWidget, Transition, WidgetEvent};
