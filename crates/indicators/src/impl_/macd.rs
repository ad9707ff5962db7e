//! MACD (Moving Average Convergence Divergence) indicator

use crate::impl_::ema::EMA;
use crate::traits::{Indicator, MultiOutputIndicator};
use kurs_types::DailyBar;

/// MACD result containing the line and its signal.
#[derive(Debug, Clone)]
pub struct MacdResult {
    /// MACD line = EMA(fast) - EMA(slow)
    pub line: Vec<f64>,
    /// Signal line = EMA(`signal_period`) of the MACD line
    pub signal: Vec<f64>,
}

/// MACD
///
/// Line = EMA(fast) - EMA(slow) over closes, signal = EMA of the line.
/// All EMAs use the seeded `adjust=False` recursion, so both outputs are
/// defined from the first bar on.
#[derive(Debug, Clone)]
pub struct MACD {
    /// Fast EMA period
    pub fast_period: usize,
    /// Slow EMA period
    pub slow_period: usize,
    /// Signal EMA period
    pub signal_period: usize,
}

impl MACD {
    /// Creates a new MACD indicator with the given periods.
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }
}

impl Default for MACD {
    /// Standard parameterization 12/26/9.
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

impl MultiOutputIndicator for MACD {
    type Output = MacdResult;

    fn compute_all(&self, bars: &[DailyBar]) -> Self::Output {
        let fast = EMA::new(self.fast_period).compute(bars);
        let slow = EMA::new(self.slow_period).compute(bars);
        let line: Vec<f64> = fast.iter().zip(slow.iter()).map(|(f, s)| f - s).collect();
        let signal = EMA::new(self.signal_period).compute_values(&line);

        MacdResult { line, signal }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::Indicator;
    use approx::assert_abs_diff_eq;
    use kurs_types::TradingDate;

    fn make_bar(close: f64) -> DailyBar {
        DailyBar::close_only(TradingDate::new(2024, 1, 1).unwrap(), close)
    }

    #[test]
    fn test_macd_constant_input_is_zero() {
        let bars: Vec<DailyBar> = vec![100.0; 40].into_iter().map(make_bar).collect();

        let result = MACD::default().compute_all(&bars);

        for i in 0..bars.len() {
            assert_abs_diff_eq!(result.line[i], 0.0, epsilon = 1e-10);
            assert_abs_diff_eq!(result.signal[i], 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_macd_uptrend_is_positive() {
        // Im stetigen Aufwärtstrend liegt die schnelle EMA über der langsamen
        let bars: Vec<DailyBar> = (1..=40).map(|i| make_bar(f64::from(i))).collect();

        let result = MACD::default().compute_all(&bars);

        for i in 5..bars.len() {
            assert!(result.line[i] > 0.0, "line[{}] = {}", i, result.line[i]);
        }
    }

    #[test]
    fn test_macd_line_matches_ema_difference() {
        let bars: Vec<DailyBar> = (1..=30)
            .map(|i| make_bar(100.0 + f64::from(i % 7)))
            .collect();

        let macd = MACD::default();
        let result = macd.compute_all(&bars);
        let fast = EMA::new(12).compute(&bars);
        let slow = EMA::new(26).compute(&bars);

        for i in 0..bars.len() {
            assert_abs_diff_eq!(result.line[i], fast[i] - slow[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_macd_signal_is_ema_of_line() {
        let bars: Vec<DailyBar> = (1..=30)
            .map(|i| make_bar(100.0 + f64::from(i % 5)))
            .collect();

        let macd = MACD::default();
        let result = macd.compute_all(&bars);
        let expected = EMA::new(9).compute_values(&result.line);

        for i in 0..bars.len() {
            assert_abs_diff_eq!(result.signal[i], expected[i], epsilon = 1e-10);
        }
    }

    #[test]
    fn test_macd_defined_from_first_bar() {
        let bars: Vec<DailyBar> = vec![1.0, 2.0, 3.0].into_iter().map(make_bar).collect();
        let result = MACD::default().compute_all(&bars);
        assert!(result.line.iter().all(|v| v.is_finite()));
        assert!(result.signal.iter().all(|v| v.is_finite()));
    }
}
