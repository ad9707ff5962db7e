//! Indicator error types.

use thiserror::Error;

/// Errors that can occur while assembling the feature matrix.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// An indicator produced a column of the wrong length
    #[error("column error: {0}")]
    Column(#[from] kurs_types::ColumnLengthError),
}
