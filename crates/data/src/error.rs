//! Data-layer error types.

use thiserror::Error;

/// Errors that can occur while preparing or validating the price series.
#[derive(Debug, Error)]
pub enum DataError {
    /// No rows were provided.
    #[error("Empty data")]
    EmptyData,

    /// Data violated the series contract.
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// Not enough data rows to proceed.
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Required number of rows.
        required: usize,
        /// Available number of rows.
        available: usize,
    },
}
