//! Exponential Moving Average (EMA) indicator

use crate::traits::Indicator;
use kurs_types::DailyBar;

/// Exponential Moving Average
///
/// Matches pandas `ewm(span=period, adjust=False).mean()` semantics.
/// Multiplier = 2 / (period + 1)
#[derive(Debug, Clone)]
pub struct EMA {
    /// Number of periods for the EMA
    pub period: usize,
}

impl EMA {
    /// Creates a new EMA indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// Calculates the EMA multiplier (smoothing factor).
    fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Computes the EMA over a raw value series.
    ///
    /// The recursion is seeded with the first finite value; non-finite
    /// inputs carry the previous EMA forward. Used directly for derived
    /// series such as the MACD signal line.
    pub fn compute_values(&self, values: &[f64]) -> Vec<f64> {
        let len = values.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len == 0 {
            return result;
        }

        let alpha = self.multiplier();
        let mut prev = f64::NAN;

        for (i, &value) in values.iter().enumerate() {
            if !value.is_finite() {
                if prev.is_finite() {
                    result[i] = prev;
                }
                continue;
            }

            if !prev.is_finite() {
                prev = value;
            } else {
                prev = alpha * value + (1.0 - alpha) * prev;
            }
            result[i] = prev;
        }

        result
    }
}

impl Indicator for EMA {
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        self.compute_values(&closes)
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
    fn test_ema_basic() {
        let bars: Vec<DailyBar> = vec![1.0, 2.0, 3.0, 4.0, 5.0]
            .into_iter()
            .map(make_bar)
            .collect();

        let ema = EMA::new(3);
        let result = ema.compute(&bars);

        assert_abs_diff_eq!(result[0], 1.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result[1], 1.5, epsilon = 1e-10);
        assert_abs_diff_eq!(result[2], 2.25, epsilon = 1e-10);
        assert_abs_diff_eq!(result[3], 3.125, epsilon = 1e-10);
        assert_abs_diff_eq!(result[4], 4.0625, epsilon = 1e-10);
    }

    #[test]
    fn test_ema_converges_to_constant() {
        // When input is constant, EMA should stay at that constant
        let bars: Vec<DailyBar> = vec![5.0; 20].into_iter().map(make_bar).collect();

        let ema = EMA::new(5);
        let result = ema.compute(&bars);

        for value in result.iter().take(20) {
            assert_abs_diff_eq!(*value, 5.0, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ema_values_skips_leading_nan() {
        let values = vec![f64::NAN, f64::NAN, 2.0, 4.0];
        let ema = EMA::new(3);
        let result = ema.compute_values(&values);

        // Vor dem ersten endlichen Wert bleibt das Ergebnis NaN
        assert!(result[0].is_nan());
        assert!(result[1].is_nan());
        assert_abs_diff_eq!(result[2], 2.0, epsilon = 1e-10);
        assert_abs_diff_eq!(result[3], 3.0, epsilon = 1e-10); // 0.5*4 + 0.5*2
    }

    #[test]
    fn test_ema_multiplier() {
        let ema = EMA::new(10);
        assert_abs_diff_eq!(ema.multiplier(), 2.0 / 11.0, epsilon = 1e-10);
    }

    #[test]
    fn test_ema_period_one_matches_close() {
        let bars: Vec<DailyBar> = vec![1.0, 2.0, 3.5, 2.5].into_iter().map(make_bar).collect();

        let ema = EMA::new(1);
        let result = ema.compute(&bars);

        for (bar, value) in bars.iter().zip(result.iter()) {
            assert_abs_diff_eq!(*value, bar.close, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_ema_period_zero_returns_nan() {
        let bars: Vec<DailyBar> = vec![1.0, 2.0, 3.0].into_iter().map(make_bar).collect();

        let ema = EMA::new(0);
        let result = ema.compute(&bars);

        assert!(result.iter().all(|v| v.is_nan()));
    }
}
