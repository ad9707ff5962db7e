//! Model-layer error types.

use thiserror::Error;

/// Errors from scaling, windowing, training, or the artifact codec.
#[derive(Debug, Error)]
pub enum ModelError {
    /// No windows available to train or predict on.
    #[error("Empty dataset: need at least {required} rows, have {available}")]
    InsufficientData {
        /// Required number of rows.
        required: usize,
        /// Available number of rows.
        available: usize,
    },

    /// A feature column with `max == min`; scaling would divide by zero.
    #[error("Degenerate scaling range in column {column}")]
    DegenerateColumn {
        /// Column name
        column: &'static str,
    },

    /// A non-finite value where the pipeline guarantees finite input.
    #[error("Non-finite value in column {column}")]
    NonFinite {
        /// Column name
        column: &'static str,
    },

    /// Artifact bytes could not be encoded or decoded.
    #[error("Artifact codec error: {0}")]
    Codec(#[from] bincode::Error),
}
