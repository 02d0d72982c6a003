//! Gross-up: deriving the gross salary that yields a take-home amount.
//!
//! The calculation is a two-step pipeline. A candidate gross salary is
//! derived from the target net income, then the forward calculation is run
//! on that candidate to produce the authoritative breakdown. The net income
//! in the result may differ slightly from the target because the candidate
//! is rounded to whole dollars.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::IncomeBreakdown;
use crate::schedule::{BracketLookup, TaxSchedule, locate_bracket};

use super::breakdown::{breakdown_for, validate_amount};
use super::rounding::round_dollars;

/// How the candidate gross salary is derived from a target net income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrossUpStrategy {
    /// Piecewise closed-form inversion of the tax and levy formulas.
    #[default]
    ClosedForm,
    /// Binary search over whole-dollar gross salaries using the forward calculation.
    Bisection,
}

/// The levy region a target net income falls into for the closed-form inversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InversionRegion {
    /// At or below the shade-in breakpoint.
    BelowLevy,
    /// Above the shade-in breakpoint, at or below the full levy breakpoint.
    LevyShadeIn,
    /// Above the full levy breakpoint.
    FullLevy,
}

/// Classifies a target net income into its inversion region.
pub fn inversion_region(schedule: &TaxSchedule, net_income: Decimal) -> InversionRegion {
    let table = schedule.net_inversion();
    if net_income <= table.shade_in_breakpoint() {
        InversionRegion::BelowLevy
    } else if net_income <= table.full_levy_breakpoint() {
        InversionRegion::LevyShadeIn
    } else {
        InversionRegion::FullLevy
    }
}

/// Derives a whole-dollar candidate gross salary with the closed-form inversion.
///
/// The bracket is located against the net-space thresholds, then
///
/// ```text
/// gross = (100 * net - threshold * rate + 100 * base_tax) / D
/// ```
///
/// where `threshold`, `rate` and `base_tax` come from the matching gross
/// bracket and `D` depends on the inversion region: `100 - rate` below the
/// levy, `100 + shade_in_rate - rate` in the shade-in region, and
/// `100 - rate - top_rate` above it. A net income below the first net
/// threshold is untaxed, so the candidate is the net income itself.
///
/// # Errors
///
/// Returns [`EngineError::InvalidSchedule`] if the schedule has no bracket
/// for the located index or the region denominator is not positive.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::invert_net_income;
/// use salary_engine::schedule::TaxSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule::resident_2019_20().unwrap();
///
/// assert_eq!(invert_net_income(&schedule, dec!(10000)).unwrap(), dec!(10000));
/// assert_eq!(invert_net_income(&schedule, dec!(50000)).unwrap(), dec!(63430));
/// ```
pub fn invert_net_income(schedule: &TaxSchedule, net_income: Decimal) -> EngineResult<Decimal> {
    let index = match locate_bracket(schedule.net_inversion().thresholds(), net_income) {
        BracketLookup::BelowFirstBracket => return Ok(net_income),
        BracketLookup::InBracket(index) => index,
    };
    let bracket = schedule.brackets().bracket(index).ok_or_else(|| {
        EngineError::invalid_schedule(format!("no gross bracket for net bracket {}", index))
    })?;

    let levy = schedule.levy();
    let region = inversion_region(schedule, net_income);
    let denominator = match region {
        InversionRegion::BelowLevy => dec!(100) - bracket.rate,
        InversionRegion::LevyShadeIn => dec!(100) + levy.shade_in_rate() - bracket.rate,
        InversionRegion::FullLevy => dec!(100) - bracket.rate - levy.top_rate(),
    };
    if denominator <= Decimal::ZERO {
        return Err(EngineError::invalid_schedule(format!(
            "inversion denominator for bracket {} is not positive: {}",
            index, denominator
        )));
    }

    let numerator = dec!(100) * net_income - bracket.lower_threshold * bracket.rate
        + dec!(100) * bracket.base_tax;
    let gross = round_dollars(numerator / denominator);

    debug!(
        net_income = %net_income,
        bracket = index,
        region = ?region,
        gross = %gross,
        "Inverted net income"
    );

    Ok(gross.max(Decimal::ZERO))
}

/// Derives the smallest whole-dollar gross salary whose net income reaches the target.
///
/// Searches `[floor(net), 2 * ceil(net) + 100]` by bisection, running the
/// forward calculation at each step.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::{bisect_net_income, compute_breakdown};
/// use salary_engine::schedule::TaxSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule::resident_2019_20().unwrap();
/// let gross = bisect_net_income(&schedule, dec!(22000));
///
/// assert_eq!(gross, dec!(23110));
/// assert_eq!(compute_breakdown(&schedule, gross).unwrap().net_income, dec!(22000));
/// ```
pub fn bisect_net_income(schedule: &TaxSchedule, net_income: Decimal) -> Decimal {
    let mut low = net_income.floor();
    let mut high = net_income.ceil() * dec!(2) + dec!(100);

    while low < high {
        let mid = ((low + high) / dec!(2)).floor();
        if breakdown_for(schedule, mid).net_income >= net_income {
            high = mid;
        } else {
            low = mid + Decimal::ONE;
        }
    }

    debug!(net_income = %net_income, gross = %low, "Bisected net income");
    low
}

/// Computes the full breakdown for the gross salary that yields `net_income`,
/// using the closed-form inversion.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the net income is negative or too large.
///
/// # Examples
///
/// ```
/// use salary_engine::calculation::compute_breakdown_from_net;
/// use salary_engine::schedule::TaxSchedule;
/// use rust_decimal_macros::dec;
///
/// let schedule = TaxSchedule::resident_2019_20().unwrap();
/// let breakdown = compute_breakdown_from_net(&schedule, dec!(50000)).unwrap();
///
/// assert_eq!(breakdown.gross_salary, dec!(63430));
/// assert_eq!(breakdown.net_income, dec!(49999));
/// ```
pub fn compute_breakdown_from_net(
    schedule: &TaxSchedule,
    net_income: Decimal,
) -> EngineResult<IncomeBreakdown> {
    compute_breakdown_from_net_with(schedule, net_income, GrossUpStrategy::ClosedForm)
}

/// Computes the full breakdown for the gross salary that yields `net_income`,
/// using the given strategy to derive the candidate gross salary.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] if the net income is negative or too
/// large, or [`EngineError::InvalidSchedule`] if the closed-form inversion
/// cannot be applied to the schedule.
pub fn compute_breakdown_from_net_with(
    schedule: &TaxSchedule,
    net_income: Decimal,
    strategy: GrossUpStrategy,
) -> EngineResult<IncomeBreakdown> {
    let net_income = validate_amount("netIncome", net_income)?;

    let gross = match strategy {
        GrossUpStrategy::ClosedForm => invert_net_income(schedule, net_income)?,
        GrossUpStrategy::Bisection => bisect_net_income(schedule, net_income),
    };

    Ok(breakdown_for(schedule, gross))
}
