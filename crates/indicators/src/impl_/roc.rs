//! Rate of Change (ROC) indicator

use crate::traits::Indicator;
use kurs_types::DailyBar;

/// Rate of Change
///
/// Fractional change of the close over a fixed lag:
/// `(Close_t - Close_{t-n}) / Close_{t-n}`. Matches pandas
/// `pct_change(periods=n)` (fractional, not percent).
#[derive(Debug, Clone)]
pub struct ROC {
    /// Lag in periods
    pub period: usize,
}

impl ROC {
    /// Creates a new ROC indicator with the given lag.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for ROC {
    /// Standard parameterization: 2-period lag.
    fn default() -> Self {
        Self::new(2)
    }
}

impl Indicator for ROC {
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len <= self.period {
            return result;
        }

        for i in self.period..len {
            let base = bars[i - self.period].close;
            if base != 0.0 {
                result[i] = (bars[i].close - base) / base;
            }
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
    fn test_roc_basic() {
        let bars: Vec<DailyBar> = vec![100.0, 102.0, 104.0, 110.5]
            .into_iter()
            .map(make_bar)
            .collect();

        let roc = ROC::new(2);
        let result = roc.compute(&bars);

        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_abs_diff_eq!(result[2], 0.04, epsilon = 1e-10); // (104-100)/100
        assert_abs_diff_eq!(result[3], (110.5 - 102.0) / 102.0, epsilon = 1e-10);
    }

    #[test]
    fn test_roc_constant_input_is_zero() {
        let bars: Vec<DailyBar> = vec![100.0; 6].into_iter().map(make_bar).collect();

        let result = ROC::default().compute(&bars);

        for value in result.iter().skip(2) {
            assert_abs_diff_eq!(*value, 0.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_roc_zero_base_stays_nan() {
        let bars: Vec<DailyBar> = vec![0.0, 1.0, 2.0].into_iter().map(make_bar).collect();
        let result = ROC::new(2).compute(&bars);
        assert!(result[2].is_nan());
    }

    #[test]
    fn test_roc_insufficient_data() {
        let bars: Vec<DailyBar> = vec![1.0, 2.0].into_iter().map(make_bar).collect();
        let result = ROC::default().compute(&bars);
        assert!(result.iter().all(|v| v.is_nan()));
    }
}
