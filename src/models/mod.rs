//! Core data models for the Salary Engine.

mod income_breakdown;

pub use income_breakdown::{IncomeBreakdown, TaxBreakdown};
