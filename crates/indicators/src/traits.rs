//! Indicator traits.
//!
//! Defines the core traits shared by all indicator implementations.

use kurs_types::DailyBar;

/// Trait for single-output indicators.
///
/// All indicators compute over the full bar series and return a `Vec<f64>`
/// of the same length. Values before the warmup period are NaN.
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all bars.
    ///
    /// Returns a `Vec<f64>` with the same length as `bars`; cells the
    /// indicator cannot define (warmup, division artifacts) are
    /// `f64::NAN`.
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64>;
}

/// Trait for multi-output indicators like MACD or Bollinger Bands.
///
/// These indicators produce multiple series (e.g., upper and lower bands)
/// that are computed together for efficiency.
pub trait MultiOutputIndicator: Send + Sync {
    /// Type of the output structure
    type Output;

    /// Computes all outputs at once.
    fn compute_all(&self, bars: &[DailyBar]) -> Self::Output;
}
