//! Medicare levy and superannuation calculations.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::schedule::{LevySchedule, LevyTier};

use super::rounding::round_cents;

/// Computes the levy on `income`, rounded to cents.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_levy;
/// use salary_engine::schedule::TaxSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule::resident_2019_20().unwrap();
///
/// assert_eq!(calculate_levy(dec!(21336), schedule.levy()), dec!(0));
/// assert_eq!(calculate_levy(dec!(24000), schedule.levy()), dec!(266.40));
/// assert_eq!(calculate_levy(dec!(30000), schedule.levy()), dec!(600.00));
/// ```
pub fn calculate_levy(income: Decimal, schedule: &LevySchedule) -> Decimal {
    let levy = match schedule.tier(income) {
        LevyTier::Exempt => Decimal::ZERO,
        LevyTier::ShadeIn => {
            (income - schedule.lower_threshold()) * schedule.shade_in_rate() / dec!(100)
        }
        LevyTier::Full => income * schedule.top_rate() / dec!(100),
    };
    round_cents(levy)
}

/// Computes the superannuation contribution on a gross salary, rounded to cents.
pub fn calculate_superannuation(gross_salary: Decimal, rate: Decimal) -> Decimal {
    round_cents(gross_salary * rate / dec!(100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::TaxSchedule;

    fn levy_schedule() -> LevySchedule {
        TaxSchedule::resident_2019_20().unwrap().levy().clone()
    }

    #[test]
    fn test_no_levy_up_to_lower_threshold() {
        let schedule = levy_schedule();
        assert_eq!(calculate_levy(dec!(0), &schedule), dec!(0));
        assert_eq!(calculate_levy(dec!(18000), &schedule), dec!(0));
        assert_eq!(calculate_levy(dec!(21336), &schedule), dec!(0));
    }

    #[test]
    fn test_shade_in_applies_to_excess_only() {
        let schedule = levy_schedule();
        // (24000 - 21336) * 10%
        assert_eq!(calculate_levy(dec!(24000), &schedule), dec!(266.40));
        assert_eq!(calculate_levy(dec!(21336.05), &schedule), dec!(0.00));
        assert_eq!(calculate_levy(dec!(26668), &schedule), dec!(533.20));
    }

    #[test]
    fn test_full_rate_applies_to_whole_income() {
        let schedule = levy_schedule();
        assert_eq!(calculate_levy(dec!(26669), &schedule), dec!(533.38));
        assert_eq!(calculate_levy(dec!(30000), &schedule), dec!(600.00));
        assert_eq!(calculate_levy(dec!(50000), &schedule), dec!(1000.00));
    }

    #[test]
    fn test_levy_rounds_to_cents() {
        let schedule = levy_schedule();
        // 33598.37 * 2% = 671.9674
        assert_eq!(calculate_levy(dec!(33598.37), &schedule), dec!(671.97));
    }

    #[test]
    fn test_superannuation_at_nine_and_a_half_percent() {
        assert_eq!(calculate_superannuation(dec!(50000), dec!(9.5)), dec!(4750.00));
        assert_eq!(calculate_superannuation(dec!(18199), dec!(9.5)), dec!(1728.90));
        assert_eq!(calculate_superannuation(dec!(0), dec!(9.5)), dec!(0));
    }

    #[test]
    fn test_superannuation_rounds_to_cents() {
        // 21336 * 9.5% = 2026.92
        assert_eq!(calculate_superannuation(dec!(21336), dec!(9.5)), dec!(2026.92));
        // 123.45 * 9.5% = 11.72775
        assert_eq!(calculate_superannuation(dec!(123.45), dec!(9.5)), dec!(11.73));
    }
}
