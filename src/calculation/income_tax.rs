//! Progressive income tax calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::schedule::{BracketLookup, BracketTable};

use super::rounding::round_income_tax;

/// Computes the unrounded tax on `income` using the bracket table.
///
/// Income below the first threshold owes exactly zero.
pub fn raw_income_tax(income: Decimal, table: &BracketTable) -> Decimal {
    match table.lookup(income) {
        BracketLookup::BelowFirstBracket => Decimal::ZERO,
        BracketLookup::InBracket(index) => match table.bracket(index) {
            Some(bracket) => {
                bracket.base_tax + (income - bracket.lower_threshold) * bracket.rate / dec!(100)
            }
            None => Decimal::ZERO,
        },
    }
}

/// Computes income tax on `income`, rounded to whole dollars.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::calculate_income_tax;
/// use salary_engine::schedule::TaxSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule::resident_2019_20().unwrap();
///
/// // 3571.81 + (50000 - 37000) * 32.5% = 7796.81, rounded up
/// assert_eq!(calculate_income_tax(dec!(50000), schedule.brackets()), dec!(7797));
///
/// // Tax-free threshold
/// assert_eq!(calculate_income_tax(dec!(18000), schedule.brackets()), dec!(0));
/// ```
pub fn calculate_income_tax(income: Decimal, table: &BracketTable) -> Decimal {
    round_income_tax(raw_income_tax(income, table))
}
