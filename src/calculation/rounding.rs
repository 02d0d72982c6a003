//! Rounding rules used by the tax calculations.
//!
//! Income tax uses a fixed fractional threshold rather than half-up
//! rounding; every other amount uses round-half-to-even.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Fractional part above which income tax is rounded up to the next dollar.
pub const INCOME_TAX_ROUNDING_THRESHOLD: Decimal = dec!(0.159);

/// Rounds raw income tax to whole dollars.
///
/// The tax is rounded up when its fractional part exceeds 0.159 and
/// rounded down otherwise.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::round_income_tax;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_income_tax(dec!(100.15)), dec!(100));
/// assert_eq!(round_income_tax(dec!(100.159)), dec!(100));
/// assert_eq!(round_income_tax(dec!(100.17)), dec!(101));
/// ```
pub fn round_income_tax(raw_tax: Decimal) -> Decimal {
    let floor = raw_tax.floor();
    if raw_tax - floor - INCOME_TAX_ROUNDING_THRESHOLD > Decimal::ZERO {
        raw_tax.ceil()
    } else {
        floor
    }
}

/// Rounds to cents, half to even.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
}

/// Rounds to whole dollars, half to even.
pub fn round_dollars(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fraction_below_threshold_floors() {
        assert_eq!(round_income_tax(dec!(100.15)), dec!(100));
        assert_eq!(round_income_tax(dec!(100.01)), dec!(100));
    }

    #[test]
    fn test_fraction_at_threshold_floors() {
        assert_eq!(round_income_tax(dec!(100.159)), dec!(100));
    }

    #[test]
    fn test_fraction_just_above_threshold_ceils() {
        assert_eq!(round_income_tax(dec!(100.1591)), dec!(101));
        assert_eq!(round_income_tax(dec!(100.17)), dec!(101));
        assert_eq!(round_income_tax(dec!(7796.81)), dec!(7797));
    }

    #[test]
    fn test_whole_amount_is_unchanged() {
        assert_eq!(round_income_tax(dec!(3572)), dec!(3572));
        assert_eq!(round_income_tax(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_half_cent_rounds_to_even() {
        assert_eq!(round_cents(dec!(1.005)), dec!(1.00));
        assert_eq!(round_cents(dec!(1.015)), dec!(1.02));
        assert_eq!(round_cents(dec!(266.4)), dec!(266.40));
    }

    #[test]
    fn test_half_dollar_rounds_to_even() {
        assert_eq!(round_dollars(dec!(2.5)), dec!(2));
        assert_eq!(round_dollars(dec!(3.5)), dec!(4));
        assert_eq!(round_dollars(dec!(3597.96)), dec!(3598));
    }
}
