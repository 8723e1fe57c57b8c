//! Wire format of monetary amounts.
//!
//! Stored amounts lose trailing zeros on their way through SQLite, so response
//! bodies rescale every amount to two decimal places before writing it out.

use rust_decimal::Decimal;
use serde::Serializer;

use crate::validation::MAX_AMOUNT_SCALE;

/// `amount` rounded and padded to exactly two decimal places.
pub fn with_cents(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp(MAX_AMOUNT_SCALE);
    amount.rescale(MAX_AMOUNT_SCALE);
    amount
}

/// `serialize_with` target for response amounts.
pub fn serialize<S>(amount: &Decimal, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&with_cents(*amount))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_two_places() {
        assert_eq!(with_cents(Decimal::new(1, 1)).to_string(), "0.10");
        assert_eq!(with_cents(Decimal::from(100)).to_string(), "100.00");
        assert_eq!(with_cents(Decimal::new(-20, 0)).to_string(), "-20.00");
    }

    #[test]
    fn test_keeps_value() {
        assert_eq!(with_cents(Decimal::new(4250, 2)), Decimal::new(4250, 2));
        assert_eq!(with_cents(Decimal::new(1999, 2)).to_string(), "19.99");
    }
}
