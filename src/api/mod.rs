//! HTTP API module for the Salary Engine.
//!
//! This module provides the query-parameter GET endpoints for the salary
//! calculations and the word transforms.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::{create_app, create_router};
pub use request::{AfterTaxIncomeQuery, PreTaxIncomeQuery, SentenceQuery};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
