//! Forecast-layer error types.

use thiserror::Error;

/// Errors surfacing from a single pipeline invocation.
///
/// Every variant is fatal for that one request only; no failure leaves
/// partially updated cache state behind.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Invalid pipeline configuration, rejected before the run.
    #[error("Config error: {0}")]
    Config(#[from] kurs_types::ConfigError),

    /// The series provider failed to deliver data.
    #[error("Provider error: {0}")]
    Provider(String),

    /// Indicator computation failed.
    #[error("Indicator error: {0}")]
    Indicator(#[from] kurs_indicators::IndicatorError),

    /// Scaling, windowing, training, or the artifact codec failed.
    #[error("Model error: {0}")]
    Model(#[from] kurs_model::ModelError),

    /// Artifact storage I/O failed.
    #[error("Artifact store error: {0}")]
    Io(#[from] std::io::Error),
}
