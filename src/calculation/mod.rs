//! Calculation logic for the Salary Engine.
//!
//! This module contains the income tax bracket calculation with its
//! fractional rounding rule, the tiered Medicare levy, superannuation,
//! the forward gross-to-net breakdown, and the net-to-gross inversion.

mod breakdown;
mod gross_up;
mod income_tax;
mod levy;
mod rounding;

pub use breakdown::{MAX_AMOUNT, compute_breakdown, parse_amount, validate_amount};
pub use gross_up::{
    GrossUpStrategy, InversionRegion, bisect_net_income, compute_breakdown_from_net,
    compute_breakdown_from_net_with, inversion_region, invert_net_income,
};
pub use income_tax::{calculate_income_tax, raw_income_tax};
pub use levy::{calculate_levy, calculate_superannuation};
pub use rounding::{INCOME_TAX_ROUNDING_THRESHOLD, round_cents, round_dollars, round_income_tax};
