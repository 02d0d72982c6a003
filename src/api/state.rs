//! Application state for the salary service API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::schedule::TaxSchedule;

/// Shared application state.
///
/// Holds the tax schedule, built once at startup and shared read-only
/// across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The tax schedule used for every calculation.
    schedule: Arc<TaxSchedule>,
}

impl AppState {
    /// Creates a new application state with the given tax schedule.
    pub fn new(schedule: TaxSchedule) -> Self {
        Self {
            schedule: Arc::new(schedule),
        }
    }

    /// Returns a reference to the tax schedule.
    pub fn schedule(&self) -> &TaxSchedule {
        &self.schedule
    }
}
