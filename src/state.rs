use crate::catalog::Catalog;
use crate::widget::CalculatorWidget;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub authenticated: bool,
}

impl AppState {
    pub fn new(catalog: Catalog, authenticated: bool) -> Self {
        Self {
            catalog: Arc::new(catalog),
            authenticated,
        }
    }

    pub fn widget(&self) -> CalculatorWidget {
        CalculatorWidget::new(self.authenticated)
    }
}
