//! Momentum indicator

use crate::traits::Indicator;
use kurs_types::DailyBar;

/// Momentum
///
/// Absolute change of the close over a fixed lag:
/// `Close_t - Close_{t-n}`, pandas `diff(n)` semantics.
#[derive(Debug, Clone)]
pub struct Momentum {
    /// Lag in periods
    pub period: usize,
}

impl Momentum {
    /// Creates a new Momentum indicator with the given lag.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for Momentum {
    /// Standard parameterization: 4-period lag.
    fn default() -> Self {
        Self::new(4)
    }
}

impl Indicator for Momentum {
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len <= self.period {
            return result;
        }

        for i in self.period..len {
            result[i] = bars[i].close - bars[i - self.period].close;
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use kurs_types::TradingDate;

    fn make_bar(close: f64) -> DailyBar {
        DailyBar::close_only(TradingDate::new(2024, 1, 1).unwrap(), close)
    }

    #[test]
    fn test_momentum_basic() {
        let bars: Vec<DailyBar> = vec![10.0, 11.0, 13.0, 12.0, 16.0, 15.0]
            .into_iter()
            .map(make_bar)
            .collect();

        let momentum = Momentum::new(4);
        let result = momentum.compute(&bars);

        for value in result.iter().take(4) {
            assert!(value.is_nan());
        }
        assert_abs_diff_eq!(result[4], 6.0, epsilon = 1e-10); // 16 - 10
        assert_abs_diff_eq!(result[5], 4.0, epsilon = 1e-10); // 15 - 11
    }

    #[test]
    fn test_momentum_constant_input_is_zero() {
        let bars: Vec<DailyBar> = vec![7.0; 8].into_iter().map(make_bar).collect();

        let result = Momentum::default().compute(&bars);

        for value in result.iter().skip(4) {
            assert_abs_diff_eq!(*value, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_momentum_insufficient_data() {
        let bars: Vec<DailyBar> = vec![1.0, 2.0, 3.0].into_iter().map(make_bar).collect();
        let result = Momentum::default().compute(&bars);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
