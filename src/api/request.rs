//! Query parameter types for the salary service API.
//!
//! Amounts are taken as raw strings so that missing or non-numeric values
//! surface as [`EngineError::InvalidInput`](crate::error::EngineError) with
//! the engine's own error body, rather than as an extractor rejection.

use serde::{Deserialize, Serialize};

use crate::calculation::GrossUpStrategy;

/// Query for `GET /calculate-after-tax-income`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AfterTaxIncomeQuery {
    /// The annual gross salary.
    #[serde(rename = "annualBaseSalary")]
    pub annual_base_salary: Option<String>,
}

/// Query for `GET /calculate-pre-tax-income-from-take-home`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreTaxIncomeQuery {
    /// The target annual take-home pay.
    #[serde(rename = "postTaxSalary")]
    pub post_tax_salary: Option<String>,
    /// How to derive the gross salary; closed form when absent.
    #[serde(default)]
    pub strategy: Option<GrossUpStrategy>,
}

/// Query for the word transform endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentenceQuery {
    /// The sentence to transform.
    #[serde(default)]
    pub sentence: String,
}
