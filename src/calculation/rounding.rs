//! Rounding and range helpers shared by every calculator.
//!
//! Currency is rounded to cents and counts to whole units, both with
//! midpoints rounded away from zero. Products and sums that would leave the
//! decimal range degrade to zero, like a division by zero does.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a currency amount to 2 decimal places.
///
/// # Examples
///
/// ```
/// use budget_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(651827, 4)), Decimal::new(6518, 2));
/// assert_eq!(round_currency(Decimal::new(-1005, 3)), Decimal::new(-101, 2));
/// ```
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds a value to the nearest whole number.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Multiplies two values, or returns zero when the product is out of range.
pub(crate) fn mul_or_zero(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or(Decimal::ZERO)
}

/// Sums values, or returns zero when the total is out of range.
pub(crate) fn sum_or_zero(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values
        .into_iter()
        .try_fold(Decimal::ZERO, Decimal::checked_add)
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_midpoint_goes_up() {
        assert_eq!(round_currency(dec("2.005")), dec("2.01"));
        assert_eq!(round_currency(dec("2.004")), dec("2.00"));
    }

    #[test]
    fn test_round_currency_negative_midpoint_goes_away_from_zero() {
        assert_eq!(round_currency(dec("-2.005")), dec("-2.01"));
    }

    #[test]
    fn test_round_currency_leaves_short_values_unchanged() {
        assert_eq!(round_currency(dec("80")), dec("80.00"));
        assert_eq!(round_currency(dec("456.2")), dec("456.20"));
    }

    #[test]
    fn test_round_whole() {
        assert_eq!(round_whole(dec("1203.5")), dec("1204"));
        assert_eq!(round_whole(dec("1203.49")), dec("1203"));
        assert_eq!(round_whole(dec("-0.5")), dec("-1"));
    }

    #[test]
    fn test_mul_or_zero_out_of_range_is_zero() {
        assert_eq!(mul_or_zero(dec("1.5"), dec("12")), dec("18"));
        assert_eq!(mul_or_zero(Decimal::MAX, dec("2")), Decimal::ZERO);
        assert_eq!(mul_or_zero(dec("10000000000000000"), dec("100000000000000")), Decimal::ZERO);
    }

    #[test]
    fn test_sum_or_zero_out_of_range_is_zero() {
        assert_eq!(sum_or_zero([dec("2400"), dec("200.50")]), dec("2600.50"));
        assert_eq!(sum_or_zero([Decimal::MAX, Decimal::ONE]), Decimal::ZERO);
        assert_eq!(sum_or_zero(Vec::new()), Decimal::ZERO);
    }
}
