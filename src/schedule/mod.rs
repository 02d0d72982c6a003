//! Tax schedule data for the Salary Engine.
//!
//! This module holds the immutable tables the calculation functions read:
//! the progressive income tax brackets, the tiered Medicare levy, the
//! superannuation guarantee rate, and the net-space table used by the
//! closed-form gross-up.
//!
//! The tables are compiled in. A [`TaxSchedule`] is built once at startup
//! and passed by reference into every calculation.
//!
//! # Example
//!
//! ```
//! use salary_engine::schedule::TaxSchedule;
//! use rust_decimal_macros::dec;
//!
//! let schedule = TaxSchedule::resident_2019_20().unwrap();
//! assert_eq!(schedule.superannuation_rate(), dec!(9.5));
//! assert_eq!(schedule.brackets().thresholds()[0], dec!(18200));
//! ```

mod bracket_table;
mod inversion_table;
mod levy_schedule;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{EngineError, EngineResult};

pub use bracket_table::{Bracket, BracketLookup, BracketTable, locate_bracket};
pub use inversion_table::NetInversionTable;
pub use levy_schedule::{LevySchedule, LevyTier};

/// Resident income tax thresholds for 2019–20.
pub const RESIDENT_THRESHOLDS: [Decimal; 4] =
    [dec!(18200), dec!(37000), dec!(87000), dec!(180000)];

/// Resident marginal rates for 2019–20, as percentages.
pub const RESIDENT_RATES: [Decimal; 5] = [dec!(0), dec!(19), dec!(32.5), dec!(37), dec!(45)];

/// Tax owed at each resident threshold.
///
/// Each bracket is counted from one dollar above the previous threshold,
/// e.g. `(37000 - 18201) * 19%`.
pub const RESIDENT_BASE_TAX: [Decimal; 4] =
    [dec!(0), dec!(3571.81), dec!(19821.485), dec!(54231.115)];

/// Medicare levy lower (exemption) threshold.
pub const MEDICARE_LOWER_THRESHOLD: Decimal = dec!(21336);

/// Medicare levy upper (shade-in) threshold.
pub const MEDICARE_UPPER_THRESHOLD: Decimal = dec!(26668);

/// Medicare levy shade-in rate, as a percentage.
pub const MEDICARE_SHADE_IN_RATE: Decimal = dec!(10);

/// Medicare levy full rate, as a percentage.
pub const MEDICARE_TOP_RATE: Decimal = dec!(2);

/// Superannuation guarantee rate, as a percentage of gross salary.
pub const SUPERANNUATION_RATE: Decimal = dec!(9.5);

/// Net incomes produced by a gross salary at each resident threshold.
pub const NET_THRESHOLDS: [Decimal; 4] =
    [dec!(18200), dec!(32688), dec!(65438), dec!(122168)];

/// Net income above which the levy shade-in inversion applies.
pub const NET_SHADE_IN_BREAKPOINT: Decimal = dec!(20740);

/// Net income above which the full levy inversion applies.
pub const NET_FULL_LEVY_BREAKPOINT: Decimal = dec!(24526);

/// Every table a calculation needs, bundled into one immutable value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxSchedule {
    brackets: BracketTable,
    levy: LevySchedule,
    superannuation_rate: Decimal,
    net_inversion: NetInversionTable,
}

impl TaxSchedule {
    /// Assembles a schedule from already-validated parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if the superannuation rate is
    /// negative or the net thresholds do not run parallel to the gross
    /// bracket thresholds.
    pub fn new(
        brackets: BracketTable,
        levy: LevySchedule,
        superannuation_rate: Decimal,
        net_inversion: NetInversionTable,
    ) -> EngineResult<Self> {
        if superannuation_rate.is_sign_negative() {
            return Err(EngineError::invalid_schedule(
                "superannuation rate must not be negative",
            ));
        }
        if net_inversion.thresholds().len() != brackets.thresholds().len() {
            return Err(EngineError::invalid_schedule(format!(
                "expected {} net thresholds, got {}",
                brackets.thresholds().len(),
                net_inversion.thresholds().len()
            )));
        }
        Ok(Self {
            brackets,
            levy,
            superannuation_rate,
            net_inversion,
        })
    }

    /// Builds the 2019–20 Australian resident schedule.
    pub fn resident_2019_20() -> EngineResult<Self> {
        let brackets = BracketTable::new(
            RESIDENT_THRESHOLDS.to_vec(),
            RESIDENT_RATES.to_vec(),
            RESIDENT_BASE_TAX.to_vec(),
        )?;
        let levy = LevySchedule::new(
            MEDICARE_LOWER_THRESHOLD,
            MEDICARE_UPPER_THRESHOLD,
            MEDICARE_SHADE_IN_RATE,
            MEDICARE_TOP_RATE,
        )?;
        let net_inversion = NetInversionTable::new(
            NET_THRESHOLDS.to_vec(),
            NET_SHADE_IN_BREAKPOINT,
            NET_FULL_LEVY_BREAKPOINT,
        )?;
        Self::new(brackets, levy, SUPERANNUATION_RATE, net_inversion)
    }

    /// Returns the income tax bracket table.
    pub fn brackets(&self) -> &BracketTable {
        &self.brackets
    }

    /// Returns the levy schedule.
    pub fn levy(&self) -> &LevySchedule {
        &self.levy
    }

    /// Returns the superannuation rate, as a percentage.
    pub fn superannuation_rate(&self) -> Decimal {
        self.superannuation_rate
    }

    /// Returns the net-space inversion table.
    pub fn net_inversion(&self) -> &NetInversionTable {
        &self.net_inversion
    }
}
