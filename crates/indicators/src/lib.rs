//! Kurs Indicators
//!
//! Technical indicator engine for the kurs forecasting pipeline.
//! Computes the fixed feature set over a daily price series.
//!
//! # Features
//! - Indicator trait with vectorized computation
//! - Multi-output indicators (MACD, Bollinger Bands)
//! - Forward/backward fill pass over indicator columns
//!
//! # Available Indicators
//! - SMA: Simple Moving Average (MA_50, MA_200)
//! - EMA: Exponential Moving Average (pandas `adjust=False` semantics)
//! - MACD: line and signal
//! - ROC: Rate of Change
//! - Momentum: lagged close difference
//! - RSI: Relative Strength Index (rolling-mean variant)
//! - Bollinger Bands: upper and lower band (sample std)
//! - CCI: Commodity Channel Index

pub mod engine;
pub mod error;
pub mod fill;
pub mod impl_;
pub mod traits;

// Re-export main types
pub use engine::apply_indicators;
pub use error::IndicatorError;
pub use traits::{Indicator, MultiOutputIndicator};

// Re-export indicator implementations
pub use impl_::{
    bollinger::{BollingerBands, BollingerResult},
    cci::CCI,
    ema::EMA,
    macd::{MACD, MacdResult},
    momentum::Momentum,
    roc::ROC,
    rsi::RSI,
    sma::SMA,
};
