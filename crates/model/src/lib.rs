//! Kurs Model
//!
//! Sequence-model stage of the forecasting pipeline: min-max scaling,
//! look-back windowing, the stacked recurrent regressor with its
//! optimizer, and the bincode artifact codec.
//!
//! # Components
//! - `Scaler`: per-column min-max normalization with Close-only inverse
//! - `WindowedDataset`: fixed-length look-back windows plus targets
//! - `SequenceRegressor`: stacked GRU layers with a trained linear readout
//! - `Adam`: adaptive readout optimizer
//! - `artifact`: bincode encode/decode of trained model parameters

pub mod artifact;
pub mod cell;
pub mod dataset;
pub mod error;
pub mod model;
pub mod optimizer;
pub mod scaler;

// Re-export main types
pub use dataset::WindowedDataset;
pub use error::ModelError;
pub use model::{EvalMetrics, SequenceRegressor};
pub use optimizer::Adam;
pub use scaler::Scaler;
