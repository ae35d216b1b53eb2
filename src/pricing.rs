use crate::models::{CURRENCY_LABEL, DISCOUNT_PER_LITER, DerivedResult, FuelSelection, InputMode};

pub const MISSING_FUEL_MESSAGE: &str = "select a fuel type.";
pub const MIN_VOLUME_MESSAGE: &str = "volume must be at least 1 liter.";
pub const MIN_VOLUME_LITERS: f64 = 1.0;

pub fn effective_price(fuel: Option<&FuelSelection>, is_authenticated: bool, discount: f64) -> f64 {
    let Some(fuel) = fuel else {
        return 0.0;
    };
    let discount = if is_authenticated { discount } else { 0.0 };
    (fuel.price_per_liter - discount).max(0.0)
}

pub fn compute(
    raw_input_text: &str,
    fuel: Option<&FuelSelection>,
    mode: InputMode,
    is_authenticated: bool,
) -> DerivedResult {
    compute_with_discount(raw_input_text, fuel, mode, is_authenticated, DISCOUNT_PER_LITER)
}

pub fn compute_with_discount(
    raw_input_text: &str,
    fuel: Option<&FuelSelection>,
    mode: InputMode,
    is_authenticated: bool,
    discount_per_liter: f64,
) -> DerivedResult {
    let value = parse_input(raw_input_text);
    let price = effective_price(fuel, is_authenticated, discount_per_liter);

    let (volume, amount) = if price <= 0.0 {
        (0.0, 0.0)
    } else {
        match mode {
            InputMode::Volume => (value, value * price),
            InputMode::Amount => (value / price, value),
        }
    };
    // overflow on extreme prices (including the rounding scale) reads as nothing to sell
    let (volume, amount) = if round2(volume).is_finite() && round2(amount).is_finite() {
        (volume, amount)
    } else {
        (0.0, 0.0)
    };

    // validation looks at the unrounded volume
    let validation_message = if fuel.is_none() {
        Some(MISSING_FUEL_MESSAGE.to_string())
    } else if volume < MIN_VOLUME_LITERS {
        Some(MIN_VOLUME_MESSAGE.to_string())
    } else {
        None
    };

    DerivedResult {
        volume_liters: round2(volume),
        total_amount: round2(amount),
        effective_price_per_liter: price,
        is_valid: validation_message.is_none(),
        validation_message,
    }
}

/// Reads the leading decimal number of `text`; anything unparsable counts as zero.
/// A trailing point reads as `.0`, so `"12."` is twelve.
pub fn parse_input(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let mut seen_point = false;
    let end = trimmed
        .char_indices()
        .find(|(_, c)| {
            if c.is_ascii_digit() {
                false
            } else if *c == '.' && !seen_point {
                seen_point = true;
                false
            } else {
                true
            }
        })
        .map(|(idx, _)| idx)
        .unwrap_or(trimmed.len());

    let mut number = trimmed[..end].to_string();
    if number.ends_with('.') {
        number.push('0');
    }
    number
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub fn format_fixed2(value: f64) -> String {
    format!("{:.2}", round2(value))
}

pub fn format_total(amount: f64) -> String {
    format!("{} {CURRENCY_LABEL}", format_fixed2(amount))
}

pub fn format_volume(volume: f64) -> String {
    format!("Volume: {} L", format_fixed2(volume))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fuel(price: f64) -> FuelSelection {
        FuelSelection {
            id: "a95".to_string(),
            display_name: "A95".to_string(),
            price_per_liter: price,
        }
    }

    #[test]
    fn volume_mode_derives_amount() {
        let a95 = fuel(25.0);
        let result = compute("10", Some(&a95), InputMode::Volume, false);
        assert_eq!(result.total_amount, 250.0);
        assert_eq!(result.volume_liters, 10.0);
        assert!(result.is_valid);
        assert_eq!(result.validation_message, None);
        assert_eq!(format_total(result.total_amount), "250.00 UAH");
    }

    #[test]
    fn amount_mode_applies_discount() {
        let a95 = fuel(25.0);
        let result = compute("46", Some(&a95), InputMode::Amount, true);
        assert_eq!(result.effective_price_per_liter, 23.0);
        assert_eq!(result.volume_liters, 2.0);
        assert_eq!(result.total_amount, 46.0);
        assert!(result.is_valid);
        assert_eq!(format_volume(result.volume_liters), "Volume: 2.00 L");
    }

    #[test]
    fn missing_fuel_wins_over_volume_check() {
        let result = compute("5", None, InputMode::Volume, false);
        assert_eq!(result.effective_price_per_liter, 0.0);
        assert_eq!(result.volume_liters, 0.0);
        assert_eq!(result.total_amount, 0.0);
        assert!(!result.is_valid);
        assert_eq!(result.validation_message.as_deref(), Some(MISSING_FUEL_MESSAGE));
    }

    #[test]
    fn volume_below_one_liter_is_invalid() {
        let diesel = fuel(10.0);
        let result = compute("0.5", Some(&diesel), InputMode::Volume, false);
        assert_eq!(result.volume_liters, 0.5);
        assert_eq!(result.total_amount, 5.0);
        assert!(!result.is_valid);
        assert_eq!(result.validation_message.as_deref(), Some(MIN_VOLUME_MESSAGE));
    }

    #[test]
    fn validation_uses_unrounded_volume() {
        // 9.99 / 10 = 0.999 liters, displayed as 1.00
        let diesel = fuel(10.0);
        let result = compute("9.99", Some(&diesel), InputMode::Amount, false);
        assert_eq!(result.volume_liters, 1.0);
        assert!(!result.is_valid);
    }

    #[test]
    fn zero_effective_price_yields_zero_without_division() {
        let cheap = fuel(2.0);
        for mode in [InputMode::Volume, InputMode::Amount] {
            let result = compute("50", Some(&cheap), mode, true);
            assert_eq!(result.effective_price_per_liter, 0.0);
            assert_eq!(result.volume_liters, 0.0);
            assert_eq!(result.total_amount, 0.0);
            assert!(!result.is_valid);
        }
    }

    #[test]
    fn overflowing_values_are_zero_and_invalid() {
        let huge = fuel(1e300);
        let result = compute("99999999.9", Some(&huge), InputMode::Volume, false);
        assert_eq!(result.total_amount, 0.0);
        assert_eq!(result.volume_liters, 0.0);
        assert!(!result.is_valid);
        assert_eq!(format_total(result.total_amount), "0.00 UAH");

        let tiny = fuel(1e-300);
        let result = compute("99999999.9", Some(&tiny), InputMode::Amount, false);
        assert_eq!(result.volume_liters, 0.0);
        assert_eq!(result.total_amount, 0.0);
        assert!(!result.is_valid);
        assert_eq!(result.validation_message.as_deref(), Some(MIN_VOLUME_MESSAGE));
    }

    #[test]
    fn discount_floors_at_zero() {
        let cheap = fuel(1.5);
        assert_eq!(effective_price(Some(&cheap), true, DISCOUNT_PER_LITER), 0.0);
        assert_eq!(effective_price(Some(&cheap), false, DISCOUNT_PER_LITER), 1.5);
    }

    #[test]
    fn derived_values_match_rounded_formulas() {
        let price = 53.49;
        let selection = fuel(price);
        for input in ["1", "2.5", "17.3", "999.9", "12345678.9"] {
            let value: f64 = input.parse().unwrap();
            let by_volume = compute(input, Some(&selection), InputMode::Volume, false);
            assert_eq!(by_volume.total_amount, round2(value * price));
            let by_amount = compute(input, Some(&selection), InputMode::Amount, false);
            assert_eq!(by_amount.volume_liters, round2(value / price));
        }
    }

    #[test]
    fn compute_is_idempotent() {
        let a95 = fuel(54.99);
        let first = compute("33.3", Some(&a95), InputMode::Amount, true);
        let second = compute("33.3", Some(&a95), InputMode::Amount, true);
        assert_eq!(first, second);
    }

    #[test]
    fn parse_input_is_lenient() {
        assert_eq!(parse_input(""), 0.0);
        assert_eq!(parse_input("abc"), 0.0);
        assert_eq!(parse_input("."), 0.0);
        assert_eq!(parse_input("12."), 12.0);
        assert_eq!(parse_input("12abc"), 12.0);
        assert_eq!(parse_input(" 7.5"), 7.5);
        assert_eq!(parse_input("1.2.3"), 1.2);
    }

    #[test]
    fn formats_two_decimals() {
        assert_eq!(format_fixed2(0.0), "0.00");
        assert_eq!(format_fixed2(2.0 / 3.0), "0.67");
        assert_eq!(format_total(1234.5), "1234.50 UAH");
    }
}
