//! Display formatting for amounts and quantities
//!
//! Values are stored exactly; rounding and grouping happen only here.

use rust_decimal::Decimal;

const CURRENCY_SYMBOL: &str = "₹";

/// Format a monetary value with the currency symbol, thousands grouping,
/// and two decimals, e.g. `₹1,234.50`.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value.round_dp(2);
    let negative = rounded.is_sign_negative();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let sign = if negative { "-" } else { "" };
    format!(
        "{}{}{}.{}",
        sign,
        CURRENCY_SYMBOL,
        group_thousands(int_part),
        frac_part
    )
}

/// Format a quantity with up to two decimals, trailing zeros trimmed,
/// and an optional unit suffix, e.g. `1,250.5 kg`.
pub fn format_quantity(value: Decimal, unit: Option<&str>) -> String {
    let text = format!("{:.2}", value.round_dp(2));
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));
    let frac_trimmed = frac_part.trim_end_matches('0');

    let mut formatted = group_thousands(int_part);
    if !frac_trimmed.is_empty() {
        formatted.push('.');
        formatted.push_str(frac_trimmed);
    }

    match unit {
        Some(u) if !u.is_empty() => format!("{} {}", formatted, u),
        _ => formatted,
    }
}

fn group_thousands(digits: &str) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}{}", sign, grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn currency_grouping_and_decimals() {
        assert_eq!(format_currency(dec("0")), "₹0.00");
        assert_eq!(format_currency(dec("110")), "₹110.00");
        assert_eq!(format_currency(dec("1234.5")), "₹1,234.50");
        assert_eq!(format_currency(dec("1234567.899")), "₹1,234,567.90");
    }

    #[test]
    fn negative_currency_keeps_sign_outside_symbol() {
        assert_eq!(format_currency(dec("-42.1")), "-₹42.10");
    }

    #[test]
    fn quantity_trims_trailing_zeros() {
        assert_eq!(format_quantity(dec("70.00"), None), "70");
        assert_eq!(format_quantity(dec("70.50"), None), "70.5");
        assert_eq!(format_quantity(dec("0.25"), None), "0.25");
        assert_eq!(format_quantity(dec("1250.5"), Some("kg")), "1,250.5 kg");
    }

    #[test]
    fn quantity_without_unit_when_blank() {
        assert_eq!(format_quantity(dec("5"), Some("")), "5");
    }
}
