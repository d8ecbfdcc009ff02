//! Helper functions could be used in api/, front/, services/ ...

use crate::consts;
use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use std::sync::LazyLock;

/// Client to make http requests
pub static REQUEST_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

/// Formats an amount as an en-US currency string: `$` symbol, thousands
/// separators and exactly two decimal places. `2800` becomes `"$2,800.00"`.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() { "-" } else { "" };

    let plain = format!("{:.2}", rounded.abs());
    let (units, cents) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (pos, digit) in units.chars().enumerate() {
        if pos > 0 && (units.len() - pos) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{sign}${grouped}.{cents}")
}

/// Display amount to integer minor units (cents), midpoint rounded away
/// from zero. Negative amounts never reach the wire and collapse to zero.
pub fn to_minor_units(amount: Decimal) -> u64 {
    (amount * consts::MINOR_UNITS_PER_CURRENCY)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}

/// Inverse of [to_minor_units]
pub fn from_minor_units(minor: u64) -> Decimal {
    Decimal::from(minor) / consts::MINOR_UNITS_PER_CURRENCY
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_format_currency_product_price() {
        assert_eq!(format_currency(dec!(2800)), "$2,800.00");
        assert_eq!(format_currency(consts::PRODUCT_PRICE), "$2,800.00");
    }

    #[test]
    fn test_format_currency_small_amounts() {
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(0.5)), "$0.50");
        assert_eq!(format_currency(dec!(9.99)), "$9.99");
    }

    #[test]
    fn test_format_currency_grouping_and_rounding() {
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(999999.995)), "$1,000,000.00");
        assert_eq!(format_currency(dec!(100000)), "$100,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-12.34)), "-$12.34");
    }

    #[test]
    fn test_to_minor_units() {
        assert_eq!(to_minor_units(dec!(2800.00)), 280_000);
        assert_eq!(to_minor_units(dec!(9.99)), 999);
        assert_eq!(to_minor_units(dec!(10.555)), 1056);
        assert_eq!(to_minor_units(dec!(0)), 0);
    }

    #[test]
    fn test_from_minor_units() {
        assert_eq!(from_minor_units(280_000), dec!(2800));
        assert_eq!(from_minor_units(999), dec!(9.99));
    }
}
