//! Simple Moving Average (MA_50 / MA_200)

use crate::traits::Indicator;
use kurs_types::DailyBar;

/// Gleitender Durchschnitt über die letzten `period` Schlusskurse.
/// Liefert die beiden Trendspalten MA_50 und MA_200; die ersten
/// `period - 1` Werte bleiben NaN und werden später gefüllt.
#[derive(Debug, Clone)]
pub struct SMA {
    /// Window length in trading days
    pub period: usize,
}

impl SMA {
    /// SMA over the given window length.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64> {
        let mut result = vec![f64::NAN; bars.len()];
        if self.period == 0 || bars.len() < self.period {
            return result;
        }

        // Laufende Summe statt Fenstersumme pro Schritt
        let mut sum: f64 = bars[..self.period].iter().map(|b| b.close).sum();
        let divisor = self.period as f64;
        result[self.period - 1] = sum / divisor;
        for i in self.period..bars.len() {
            sum += bars[i].close - bars[i - self.period].close;
            result[i] = sum / divisor;
        }
        result
    }
}
