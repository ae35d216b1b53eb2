use serde::{Deserialize, Serialize};

pub const DISCOUNT_PER_LITER: f64 = 2.0;

pub const CURRENCY_LABEL: &str = "UAH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    #[default]
    Volume,
    Amount,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelSelection {
    pub id: String,
    pub display_name: String,
    pub price_per_liter: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelType {
    pub id: String,
    pub name: String,
    pub price_per_liter: f64,
}

impl FuelType {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price_per_liter: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price_per_liter,
        }
    }

    pub fn to_selection(&self) -> FuelSelection {
        FuelSelection {
            id: self.id.clone(),
            display_name: self.name.clone(),
            price_per_liter: self.price_per_liter,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub input_mode: InputMode,
    pub raw_input_text: String,
    pub is_authenticated: bool,
    pub discount_per_liter: f64,
}

impl CalculatorState {
    pub fn new(is_authenticated: bool) -> Self {
        Self {
            input_mode: InputMode::Volume,
            raw_input_text: String::new(),
            is_authenticated,
            discount_per_liter: DISCOUNT_PER_LITER,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedResult {
    // both rounded to 2 decimals
    pub volume_liters: f64,
    pub total_amount: f64,
    pub effective_price_per_liter: f64,
    pub is_valid: bool,
    pub validation_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmissionFields {
    pub fuel_type_id: Option<String>,
    pub volume: String,
    pub total_amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModePresentation {
    pub mode: InputMode,
    pub label: &'static str,
    pub icon: &'static str,
    pub placeholder: &'static str,
    pub shows_derived_volume: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetView {
    pub presentation: ModePresentation,
    pub input: String,
    pub selected_fuel: Option<String>,
    pub total_price: String,
    pub calculated_volume: String,
    pub submission: SubmissionFields,
    pub error: Option<String>,
    pub submit_enabled: bool,
}

#[derive(Debug, Deserialize)]
pub struct QuoteRequest {
    pub raw_input: String,
    #[serde(default)]
    pub caret: Option<usize>,
    #[serde(default)]
    pub fuel_id: Option<String>,
    #[serde(default)]
    pub mode: InputMode,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub input: String,
    pub caret: usize,
    pub view: WidgetView,
}

#[derive(Debug, Deserialize)]
pub struct KeyRequest {
    pub key: String,
}

#[derive(Debug, Serialize)]
pub struct KeyResponse {
    pub rejected: bool,
}
