//! Forward salary calculation.
//!
//! This module turns a gross salary into a full [`IncomeBreakdown`] and
//! validates the amounts callers pass in.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};
use crate::models::{IncomeBreakdown, TaxBreakdown};
use crate::schedule::TaxSchedule;

use super::income_tax::calculate_income_tax;
use super::levy::{calculate_levy, calculate_superannuation};
use super::rounding::round_dollars;

/// Largest salary or income amount the engine accepts.
pub const MAX_AMOUNT: Decimal = dec!(1000000000000);

/// Checks that `amount` is a usable salary or income.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the amount is negative or
/// exceeds [`MAX_AMOUNT`].
pub fn validate_amount(field: &str, amount: Decimal) -> EngineResult<Decimal> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(EngineError::invalid_input(
            field,
            format!("must not be negative, got {}", amount),
        ));
    }
    if amount > MAX_AMOUNT {
        return Err(EngineError::invalid_input(
            field,
            format!("must not exceed {}, got {}", MAX_AMOUNT, amount),
        ));
    }
    Ok(amount.abs())
}

/// Parses a textual amount such as `"50000"`, `"50000.50"` or `"5e4"`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the text is not a finite
/// number, or if the number fails [`validate_amount`].
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::parse_amount;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_amount("annualBaseSalary", "50000").unwrap(), dec!(50000));
/// assert_eq!(parse_amount("annualBaseSalary", " 5e4 ").unwrap(), dec!(50000));
/// assert!(parse_amount("annualBaseSalary", "abc").is_err());
/// assert!(parse_amount("annualBaseSalary", "-1").is_err());
/// ```
pub fn parse_amount(field: &str, raw: &str) -> EngineResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::invalid_input(field, "a value is required"));
    }
    let amount = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| {
            EngineError::invalid_input(field, format!("not a valid number: {}", trimmed))
        })?;
    validate_amount(field, amount)
}

/// Computes the full breakdown for an annual gross salary.
///
/// Superannuation, income tax and levy are computed independently; total
/// tax is income tax plus levy rounded to whole dollars, and net income is
/// the gross salary less total tax.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the salary is negative or too large.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_breakdown;
/// use salary_engine::schedule::TaxSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule::resident_2019_20().unwrap();
/// let breakdown = compute_breakdown(&schedule, dec!(50000)).unwrap();
///
/// assert_eq!(breakdown.superannuation, dec!(4750.00));
/// assert_eq!(breakdown.taxes.income_tax, dec!(7797));
/// assert_eq!(breakdown.taxes.levy, dec!(1000.00));
/// assert_eq!(breakdown.taxes.total, dec!(8797));
/// assert_eq!(breakdown.net_income, dec!(41203));
/// ```
pub fn compute_breakdown(
    schedule: &TaxSchedule,
    gross_salary: Decimal,
) -> EngineResult<IncomeBreakdown> {
    let gross_salary = validate_amount("grossSalary", gross_salary)?;
    Ok(breakdown_for(schedule, gross_salary))
}

/// Runs the forward calculation on an already-validated gross salary.
pub(crate) fn breakdown_for(schedule: &TaxSchedule, gross_salary: Decimal) -> IncomeBreakdown {
    let superannuation = calculate_superannuation(gross_salary, schedule.superannuation_rate());
    let income_tax = calculate_income_tax(gross_salary, schedule.brackets());
    let levy = calculate_levy(gross_salary, schedule.levy());
    let total = round_dollars(income_tax + levy);

    IncomeBreakdown {
        gross_salary,
        superannuation,
        taxes: TaxBreakdown {
            income_tax,
            levy,
            total,
        },
        net_income: gross_salary - total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule() -> TaxSchedule {
        TaxSchedule::resident_2019_20().unwrap()
    }

    #[test]
    fn test_fifty_thousand_scenario() {
        let result = compute_breakdown(&schedule(), dec!(50000)).unwrap();

        assert_eq!(result.gross_salary, dec!(50000));
        assert_eq!(result.superannuation, dec!(4750.00));
        assert_eq!(result.taxes.income_tax, dec!(7797));
        assert_eq!(result.taxes.levy, dec!(1000.00));
        assert_eq!(result.taxes.total, dec!(8797));
        assert_eq!(result.net_income, dec!(41203));
    }

    #[test]
    fn test_zero_salary_is_not_an_error() {
        let result = compute_breakdown(&schedule(), dec!(0)).unwrap();

        assert_eq!(result.taxes.income_tax, dec!(0));
        assert_eq!(result.taxes.levy, dec!(0));
        assert_eq!(result.taxes.total, dec!(0));
        assert_eq!(result.net_income, dec!(0));
    }

    #[test]
    fn test_tax_free_region() {
        let result = compute_breakdown(&schedule(), dec!(18199)).unwrap();

        assert_eq!(result.superannuation, dec!(1728.90));
        assert_eq!(result.taxes.total, dec!(0));
        assert_eq!(result.net_income, dec!(18199));
    }

    #[test]
    fn test_shade_in_levy_region() {
        let result = compute_breakdown(&schedule(), dec!(24000)).unwrap();

        // (24000 - 18200) * 19% = 1102
        assert_eq!(result.taxes.income_tax, dec!(1102));
        assert_eq!(result.taxes.levy, dec!(266.40));
        // 1368.40 rounds to 1368
        assert_eq!(result.taxes.total, dec!(1368));
        assert_eq!(result.net_income, dec!(22632));
    }

    #[test]
    fn test_full_levy_region() {
        let result = compute_breakdown(&schedule(), dec!(30000)).unwrap();

        // (30000 - 18200) * 19% = 2242
        assert_eq!(result.taxes.income_tax, dec!(2242));
        assert_eq!(result.taxes.levy, dec!(600.00));
        assert_eq!(result.taxes.total, dec!(2842));
        assert_eq!(result.net_income, dec!(27158));
    }

    #[test]
    fn test_top_bracket() {
        let result = compute_breakdown(&schedule(), dec!(200000)).unwrap();

        assert_eq!(result.superannuation, dec!(19000.00));
        assert_eq!(result.taxes.income_tax, dec!(63231));
        assert_eq!(result.taxes.levy, dec!(4000.00));
        assert_eq!(result.taxes.total, dec!(67231));
        assert_eq!(result.net_income, dec!(132769));
    }

    #[test]
    fn test_total_rounds_combined_tax_and_levy() {
        // 33598: income tax 2926, levy 671.96
        let result = compute_breakdown(&schedule(), dec!(33598)).unwrap();

        assert_eq!(result.taxes.income_tax, dec!(2926));
        assert_eq!(result.taxes.levy, dec!(671.96));
        assert_eq!(result.taxes.total, dec!(3598));
        assert_eq!(result.net_income, dec!(30000));
    }

    #[test]
    fn test_net_is_gross_minus_total() {
        for gross in [dec!(1), dec!(21336), dec!(26668), dec!(87000.55), dec!(250000)] {
            let result = compute_breakdown(&schedule(), gross).unwrap();
            assert_eq!(result.net_income, result.gross_salary - result.taxes.total);
        }
    }

    #[test]
    fn test_negative_salary_is_invalid_input() {
        let result = compute_breakdown(&schedule(), dec!(-1));

        match result {
            Err(EngineError::InvalidInput { field, message }) => {
                assert_eq!(field, "grossSalary");
                assert!(message.contains("negative"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_oversized_salary_is_invalid_input() {
        let result = compute_breakdown(&schedule(), MAX_AMOUNT + dec!(1));
        assert!(matches!(result, Err(EngineError::InvalidInput { .. })));
    }

    #[test]
    fn test_negative_zero_is_accepted() {
        let result = compute_breakdown(&schedule(), -Decimal::ZERO).unwrap();
        assert!(!result.gross_salary.is_sign_negative());
    }

    #[test]
    fn test_parse_amount_accepts_decimals_and_scientific() {
        assert_eq!(parse_amount("x", "50000.50").unwrap(), dec!(50000.50));
        assert_eq!(parse_amount("x", "1.5e3").unwrap(), dec!(1500));
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        for raw in ["", "   ", "abc", "NaN", "inf", "12,000"] {
            let result = parse_amount("annualBaseSalary", raw);
            match result {
                Err(EngineError::InvalidInput { field, .. }) => {
                    assert_eq!(field, "annualBaseSalary");
                }
                _ => panic!("Expected InvalidInput for {:?}", raw),
            }
        }
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        let result = parse_amount("postTaxSalary", "-500");
        match result {
            Err(EngineError::InvalidInput { message, .. }) => {
                assert!(message.contains("negative"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }
}
