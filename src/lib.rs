//! Receipt points service.
//!
//! Accepts purchase receipts over HTTP, validates them, scores them against a
//! fixed set of loyalty rules, and stores the result under a random identifier
//! so the awarded points can be queried later.
//!
//! - [`receipts`] - receipt domain: validation, scoring, storage, and routes
//! - [`config`] - environment-derived application configuration
//! - [`telemetry`] - tracing subscriber setup
//! - [`error`] - top-level error type and HTTP response mapping

pub mod config;
pub mod error;
pub mod receipts;
pub mod telemetry;
