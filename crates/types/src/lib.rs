//! Kurs Types
//!
//! Core data structures for the kurs forecasting pipeline.
//! This crate provides types for daily bars, trading dates, the feature
//! column contract, trend classification, and pipeline configuration.

#![deny(clippy::all)]

pub mod bar;
pub mod config;
pub mod date;
pub mod error;
pub mod feature;
pub mod trend;

// Re-export main types for convenience
pub use bar::{DailyBar, PriceSeries};
pub use config::{ModelConfig, PipelineConfig};
pub use error::ConfigError;
pub use date::{ParseDateError, TradingDate};
pub use feature::{ColumnLengthError, Feature, FeatureMatrix};
pub use trend::Trend;
