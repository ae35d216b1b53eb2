use crate::models::{
    CalculatorState, DerivedResult, FuelSelection, InputMode, ModePresentation, SubmissionFields,
    WidgetView,
};
use crate::pricing::{compute_with_discount, format_fixed2, format_total, format_volume};
use crate::sanitize::{adjust_caret, is_rejected_key, sanitize_input};

#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent {
    KeyDown(String),
    Input { text: String, caret: usize },
    SelectFuel(FuelSelection),
    SwitchMode(InputMode),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    KeyRejected,
    KeyAccepted,
    InputEdited { text: String, caret: usize },
    FuelSelected,
    ModeSwitched { from: InputMode, to: InputMode },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorWidget {
    state: CalculatorState,
    fuel: Option<FuelSelection>,
}

impl CalculatorWidget {
    pub fn new(is_authenticated: bool) -> Self {
        Self {
            state: CalculatorState::new(is_authenticated),
            fuel: None,
        }
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn fuel(&self) -> Option<&FuelSelection> {
        self.fuel.as_ref()
    }

    pub fn apply(&mut self, event: WidgetEvent) -> Transition {
        match event {
            WidgetEvent::KeyDown(key) => self.key_down(&key),
            WidgetEvent::Input { text, caret } => self.input(&text, caret),
            WidgetEvent::SelectFuel(fuel) => self.select_fuel(fuel),
            WidgetEvent::SwitchMode(mode) => self.switch_mode(mode),
        }
    }

    pub fn key_down(&self, key: &str) -> Transition {
        if is_rejected_key(key) {
            Transition::KeyRejected
        } else {
            Transition::KeyAccepted
        }
    }

    pub fn input(&mut self, text: &str, caret: usize) -> Transition {
        let sanitized = sanitize_input(text);
        let caret = adjust_caret(text, caret, &sanitized);
        self.state.raw_input_text = sanitized.clone();
        Transition::InputEdited {
            text: sanitized,
            caret,
        }
    }

    pub fn select_fuel(&mut self, fuel: FuelSelection) -> Transition {
        self.fuel = Some(fuel);
        Transition::FuelSelected
    }

    // the raw text is kept and reinterpreted under the new mode
    pub fn switch_mode(&mut self, mode: InputMode) -> Transition {
        let from = self.state.input_mode;
        self.state.input_mode = mode;
        Transition::ModeSwitched { from, to: mode }
    }

    pub fn result(&self) -> DerivedResult {
        compute_with_discount(
            &self.state.raw_input_text,
            self.fuel.as_ref(),
            self.state.input_mode,
            self.state.is_authenticated,
            self.state.discount_per_liter,
        )
    }

    pub fn view(&self) -> WidgetView {
        let result = self.result();
        WidgetView {
            presentation: presentation(self.state.input_mode),
            input: self.state.raw_input_text.clone(),
            selected_fuel: self.fuel.as_ref().map(|fuel| fuel.display_name.clone()),
            total_price: format_total(result.total_amount),
            calculated_volume: format_volume(result.volume_liters),
            submission: SubmissionFields {
                fuel_type_id: self.fuel.as_ref().map(|fuel| fuel.id.clone()),
                volume: format_fixed2(result.volume_liters),
                total_amount: format_fixed2(result.total_amount),
            },
            submit_enabled: result.is_valid,
            error: result.validation_message,
        }
    }
}

pub fn presentation(mode: InputMode) -> ModePresentation {
    match mode {
        InputMode::Volume => ModePresentation {
            mode,
            label: "Volume (liters):",
            icon: "fas fa-tint",
            placeholder: "Enter volume",
            shows_derived_volume: false,
        },
        InputMode::Amount => ModePresentation {
            mode,
            label: "Amount (UAH):",
            icon: "fas fa-money-bill-wave",
            placeholder: "Enter amount",
            shows_derived_volume: true,
        },
    }
}
