//! Indicator implementations
//!
//! Contains all concrete indicator implementations.

pub mod bollinger;
pub mod cci;
pub mod ema;
pub mod macd;
pub mod momentum;
pub mod roc;
pub mod rsi;
pub mod sma;
