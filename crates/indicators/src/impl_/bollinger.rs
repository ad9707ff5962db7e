//! Bollinger Bands indicator

use crate::traits::MultiOutputIndicator;
use kurs_types::DailyBar;

/// Bollinger Bands result containing upper and lower bands.
#[derive(Debug, Clone)]
pub struct BollingerResult {
    /// Upper band = SMA + std_factor * std
    pub upper: Vec<f64>,
    /// Lower band = SMA - std_factor * std
    pub lower: Vec<f64>,
}

/// Bollinger Bands
///
/// Bands around a simple moving average of the close:
/// - Upper Band = SMA + (std_factor * StdDev)
/// - Lower Band = SMA - (std_factor * StdDev)
///
/// Uses sample standard deviation (Bessel's correction, n-1), matching
/// the pandas rolling `std()` default.
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub std_factor: f64,
}

impl BollingerBands {
    /// Creates new Bollinger Bands with the given parameters.
    pub fn new(period: usize, std_factor: f64) -> Self {
        Self { period, std_factor }
    }
}

impl Default for BollingerBands {
    /// Standard parameterization: 20-period window, 2 standard deviations.
    fn default() -> Self {
        Self::new(20, 2.0)
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Output = BollingerResult;

    fn compute_all(&self, bars: &[DailyBar]) -> Self::Output {
        let len = bars.len();
        let mut upper = vec![f64::NAN; len];
        let mut lower = vec![f64::NAN; len];

        // Stichproben-Std braucht mindestens zwei Beobachtungen
        if len < self.period || self.period < 2 {
            return BollingerResult { upper, lower };
        }

        for i in (self.period - 1)..len {
            let start = i + 1 - self.period;
            let window: Vec<f64> = bars[start..=i].iter().map(|b| b.close).collect();

            let sma = window.iter().sum::<f64>() / self.period as f64;
            let variance = window.iter().map(|x| (x - sma).powi(2)).sum::<f64>()
                / (self.period - 1) as f64;
            let std = variance.sqrt();

            upper[i] = sma + self.std_factor * std;
            lower[i] = sma - self.std_factor * std;
        }

        BollingerResult { upper, lower }
    }
}
