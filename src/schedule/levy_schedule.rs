//! Tiered levy schedule.
//!
//! The levy has three tiers: nothing up to the lower threshold, a shade-in
//! rate applied to income above the lower threshold up to the upper
//! threshold, and a flat top rate on the whole income above that.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Which levy tier an income falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevyTier {
    /// At or below the lower threshold; no levy.
    Exempt,
    /// Above the lower threshold, at or below the upper threshold.
    ShadeIn,
    /// Above the upper threshold; the top rate applies to the whole income.
    Full,
}

/// An immutable three-tier levy schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevySchedule {
    lower_threshold: Decimal,
    upper_threshold: Decimal,
    shade_in_rate: Decimal,
    top_rate: Decimal,
}

impl LevySchedule {
    /// Builds a levy schedule from its thresholds and percentage rates.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchedule`] if the thresholds are not
    /// strictly increasing or any value is negative.
    pub fn new(
        lower_threshold: Decimal,
        upper_threshold: Decimal,
        shade_in_rate: Decimal,
        top_rate: Decimal,
    ) -> EngineResult<Self> {
        if lower_threshold.is_sign_negative() || lower_threshold >= upper_threshold {
            return Err(EngineError::invalid_schedule(format!(
                "levy thresholds must be non-negative and strictly increasing, got {} and {}",
                lower_threshold, upper_threshold
            )));
        }
        if shade_in_rate.is_sign_negative() || top_rate.is_sign_negative() {
            return Err(EngineError::invalid_schedule(
                "levy rates must not be negative",
            ));
        }
        Ok(Self {
            lower_threshold,
            upper_threshold,
            shade_in_rate,
            top_rate,
        })
    }

    /// Returns the threshold at or below which no levy is payable.
    pub fn lower_threshold(&self) -> Decimal {
        self.lower_threshold
    }

    /// Returns the threshold above which the top rate applies.
    pub fn upper_threshold(&self) -> Decimal {
        self.upper_threshold
    }

    /// Returns the shade-in rate, as a percentage.
    pub fn shade_in_rate(&self) -> Decimal {
        self.shade_in_rate
    }

    /// Returns the top rate, as a percentage.
    pub fn top_rate(&self) -> Decimal {
        self.top_rate
    }

    /// Classifies `income` into its levy tier.
    pub fn tier(&self, income: Decimal) -> LevyTier {
        if income <= self.lower_threshold {
            LevyTier::Exempt
        } else if income <= self.upper_threshold {
            LevyTier::ShadeIn
        } else {
            LevyTier::Full
        }
    }
}
