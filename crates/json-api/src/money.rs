//! Money fields travel as decimal strings with two fractional digits.

use rust_decimal::Decimal;
use salvo::prelude::StatusError;

use crate::extensions::*;

/// Render an amount as e.g. `"9.00"`.
pub(crate) fn format_money(amount: Decimal) -> String {
    let mut amount = amount.round_dp(2);

    amount.rescale(2);

    amount.to_string()
}

/// Parse a client supplied amount with at most two fractional digits.
/// Sign checks are left to the services.
pub(crate) fn parse_money(value: &str, field: &str) -> Result<Decimal, StatusError> {
    let amount = value
        .trim()
        .parse::<Decimal>()
        .or_400(&format!("\"{field}\" must be a decimal amount"))?;

    if amount.normalize().scale() > 2 {
        return Err(StatusError::bad_request().brief(format!(
            "\"{field}\" must have at most two decimal places"
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn amounts_always_have_two_digits() {
        assert_eq!(format_money(dec!(9)), "9.00");
        assert_eq!(format_money(dec!(4.5)), "4.50");
        assert_eq!(format_money(dec!(3.333)), "3.33");
        assert_eq!(format_money(Decimal::ZERO), "0.00");
    }

    #[test]
    fn amounts_parse_from_strings() {
        assert_eq!(parse_money(" 12.25 ", "cost").ok(), Some(dec!(12.25)));
        assert!(parse_money("twelve", "cost").is_err(), "words are not amounts");
    }

    #[test]
    fn sub_cent_amounts_are_rejected() {
        assert!(parse_money("4.555", "cost").is_err(), "three decimals would be rounded");
        assert_eq!(parse_money("4.500", "cost").ok(), Some(dec!(4.5)), "trailing zeros are exact");
        assert_eq!(parse_money("4", "cost").ok(), Some(dec!(4)));
    }
}
