//! Relative Strength Index (RSI) indicator

use crate::traits::Indicator;
use kurs_types::DailyBar;

/// Relative Strength Index, rolling-mean variant.
///
/// Day-over-day close differences are split into gains (negative moves
/// clamped to zero) and losses (positive moves clamped to zero, negated),
/// both averaged by a simple rolling mean over the trailing period:
///
/// ```text
/// RS  = avg_gain / avg_loss
/// RSI = 100 - (100 / (1 + RS))
/// ```
///
/// Not Wilder smoothing. The zero-loss case is pinned explicitly:
/// a window with gains and no losses reads 100, a dead-flat window 50.
#[derive(Debug, Clone)]
pub struct RSI {
    /// Averaging period
    pub period: usize,
}

impl RSI {
    /// Creates a new RSI indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for RSI {
    /// Standard parameterization: 10-period averaging.
    fn default() -> Self {
        Self::new(10)
    }
}

impl Indicator for RSI {
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len <= self.period {
            return result;
        }

        // Tagesdifferenzen; Index 0 hat keinen Vorgänger
        let mut gains = vec![0.0; len];
        let mut losses = vec![0.0; len];
        for i in 1..len {
            let delta = bars[i].close - bars[i - 1].close;
            if delta > 0.0 {
                gains[i] = delta;
            } else {
                losses[i] = -delta;
            }
        }

        // Rollende Mittel über die letzten `period` Differenzen; das
        // erste volle Fenster endet bei Index `period`.
        let mut gain_sum: f64 = gains[1..=self.period].iter().sum();
        let mut loss_sum: f64 = losses[1..=self.period].iter().sum();
        result[self.period] = rsi_from_sums(gain_sum, loss_sum);

        for i in (self.period + 1)..len {
            gain_sum += gains[i] - gains[i - self.period];
            loss_sum += losses[i] - losses[i - self.period];
            result[i] = rsi_from_sums(gain_sum, loss_sum);
        }

        result
    }
}

fn rsi_from_sums(gain_sum: f64, loss_sum: f64) -> f64 {
    if loss_sum <= 0.0 {
        // Kein Verlust im Fenster: RS wäre unendlich
        if gain_sum > 0.0 { 100.0 } else { 50.0 }
    } else {
        let rs = gain_sum / loss_sum;
        100.0 - (100.0 / (1.0 + rs))
    }
}
