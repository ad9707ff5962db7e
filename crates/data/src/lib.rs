//! Kurs Data
//!
//! Series preparation for the forecasting pipeline: business-day
//! completion, sanity-floor filtering, time-weighted interpolation,
//! and entry-contract validation.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Data-layer error types.
pub mod error;
/// Business-day completion, floor filter, interpolation.
pub mod repair;
/// Entry-contract validation helpers.
pub mod validation;

/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: repair statistics.
pub use repair::RepairStats;
/// Re-export: full series preparation.
pub use repair::prepare_series;
/// Re-export: prepared-series validation.
pub use validation::validate_series;
