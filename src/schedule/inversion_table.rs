//! Net-space data used to invert the tax and levy formulas.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Net-income thresholds and breakpoints for the closed-form gross-up.
///
/// `thresholds` run parallel to the gross bracket thresholds: a net income
/// at or above `thresholds[k]` is produced by a gross income in bracket
/// `k + 1`. The two breakpoints select which levy inversion applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetInversionTable {
    thresholds: Vec<Decimal>,
    shade_in_breakpoint: Decimal,
    full_levy_breakpoint: Decimal,
}

impl NetInversionTable {
    /// Builds the table, checking that thresholds and breakpoints are ordered.
    pub fn new(
        thresholds: Vec<Decimal>,
        shade_in_breakpoint: Decimal,
        full_levy_breakpoint: Decimal,
    ) -> EngineResult<Self> {
        if thresholds.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(EngineError::invalid_schedule(
                "net thresholds must be strictly increasing",
            ));
        }
        if shade_in_breakpoint >= full_levy_breakpoint {
            return Err(EngineError::invalid_schedule(
                "net levy breakpoints must be strictly increasing",
            ));
        }
        Ok(Self {
            thresholds,
            shade_in_breakpoint,
            full_levy_breakpoint,
        })
    }

    /// Returns the net-space bracket thresholds.
    pub fn thresholds(&self) -> &[Decimal] {
        &self.thresholds
    }

    /// Net income above which the levy shade-in inversion applies.
    pub fn shade_in_breakpoint(&self) -> Decimal {
        self.shade_in_breakpoint
    }

    /// Net income above which the full levy inversion applies.
    pub fn full_levy_breakpoint(&self) -> Decimal {
        self.full_levy_breakpoint
    }
}
