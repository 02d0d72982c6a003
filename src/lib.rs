//! Salary Engine for Australian resident income tax.
//!
//! This crate computes income tax, the Medicare levy, superannuation and
//! take-home pay from an annual gross salary, derives the gross salary that
//! produces a given take-home amount, and serves both over HTTP.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod schedule;
pub mod text;
