//! Progressive income tax bracket table.
//!
//! This module provides the [`BracketTable`] type: ordered thresholds,
//! marginal rates, and the cumulative base tax owed at each threshold,
//! together with the binary-search bracket lookup.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// The outcome of locating an amount within a threshold sequence.
///
/// # Example
///
/// ```
/// use salary_engine::schedule::{BracketLookup, locate_bracket};
/// use rust_decimal_macros::dec;
///
/// let thresholds = [dec!(18200), dec!(37000)];
/// assert_eq!(locate_bracket(&thresholds, dec!(100)), BracketLookup::BelowFirstBracket);
/// assert_eq!(locate_bracket(&thresholds, dec!(18200)), BracketLookup::InBracket(1));
/// assert_eq!(locate_bracket(&thresholds, dec!(50000)), BracketLookup::InBracket(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketLookup {
    /// The amount is below the first threshold (the tax-free bracket).
    BelowFirstBracket,
    /// The amount satisfies `t[i-1] <= amount < t[i]`.
    InBracket(usize),
}

/// Locates `amount` within a strictly increasing threshold sequence.
///
/// The returned index is the number of thresholds less than or equal to
/// `amount`, found by binary search.
pub fn locate_bracket(thresholds: &[Decimal], amount: Decimal) -> BracketLookup {
    match thresholds.partition_point(|threshold| *threshold <= amount) {
        0 => BracketLookup::BelowFirstBracket,
        index => BracketLookup::InBracket(index),
    }
}

/// The marginal rate, lower threshold and base tax that apply to one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    /// The threshold at which this bracket starts.
    pub lower_threshold: Decimal,
    /// The marginal rate for this bracket, as a percentage.
    pub rate: Decimal,
    /// Cumulative tax owed at `lower_threshold`.
    pub base_tax: Decimal,
}

/// An immutable progressive bracket table.
///
/// Holds `N` thresholds, `N + 1` marginal rates (percentages, where
/// `rates[0]` is the tax-free rate below the first threshold), and `N`
/// base tax values where `base_tax[k]` is the tax owed at `thresholds[k]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketTable {
    thresholds: Vec<Decimal>,
    rates: Vec<Decimal>,
    base_tax: Vec<Decimal>,
}

impl BracketTable {
    /// Builds a bracket table, validating its structure.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if:
    /// - the table has no thresholds
    /// - `rates` does not have exactly one more entry than `thresholds`
    /// - `base_tax` does not have the same length as `thresholds`
    /// - thresholds are negative or not strictly increasing
    /// - any rate is negative
    /// - base tax is not zero at the first threshold or decreases
    pub fn new(
        thresholds: Vec<Decimal>,
        rates: Vec<Decimal>,
        base_tax: Vec<Decimal>,
    ) -> EngineResult<Self> {
        if thresholds.is_empty() {
            return Err(EngineError::invalid_schedule(
                "bracket table needs at least one threshold",
            ));
        }
        if rates.len() != thresholds.len() + 1 {
            return Err(EngineError::invalid_schedule(format!(
                "expected {} marginal rates for {} thresholds, got {}",
                thresholds.len() + 1,
                thresholds.len(),
                rates.len()
            )));
        }
        if base_tax.len() != thresholds.len() {
            return Err(EngineError::invalid_schedule(format!(
                "expected {} base tax values, got {}",
                thresholds.len(),
                base_tax.len()
            )));
        }
        if thresholds[0].is_sign_negative() {
            return Err(EngineError::invalid_schedule(
                "thresholds must not be negative",
            ));
        }
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(EngineError::invalid_schedule(
                "thresholds must be strictly increasing",
            ));
        }
        if rates.iter().any(|rate| rate.is_sign_negative()) {
            return Err(EngineError::invalid_schedule(
                "marginal rates must not be negative",
            ));
        }
        if !base_tax[0].is_zero() {
            return Err(EngineError::invalid_schedule(
                "base tax at the first threshold must be zero",
            ));
        }
        if base_tax.windows(2).any(|pair| pair[0] > pair[1]) {
            return Err(EngineError::invalid_schedule(
                "base tax must not decrease between brackets",
            ));
        }

        Ok(Self {
            thresholds,
            rates,
            base_tax,
        })
    }

    /// Returns the bracket thresholds.
    pub fn thresholds(&self) -> &[Decimal] {
        &self.thresholds
    }

    /// Returns the marginal rates, one more than the thresholds.
    pub fn rates(&self) -> &[Decimal] {
        &self.rates
    }

    /// Returns the cumulative base tax at each threshold.
    pub fn base_tax(&self) -> &[Decimal] {
        &self.base_tax
    }

    /// Locates the bracket containing `income`.
    pub fn lookup(&self, income: Decimal) -> BracketLookup {
        locate_bracket(&self.thresholds, income)
    }

    /// Returns the bracket at `index`, as produced by [`BracketLookup::InBracket`].
    ///
    /// Returns `None` for index 0 (the tax-free region has no lower
    /// threshold) or any index past the top bracket.
    pub fn bracket(&self, index: usize) -> Option<Bracket> {
        if index == 0 || index > self.thresholds.len() {
            return None;
        }
        Some(Bracket {
            lower_threshold: self.thresholds[index - 1],
            rate: self.rates[index],
            base_tax: self.base_tax[index - 1],
        })
    }
}
