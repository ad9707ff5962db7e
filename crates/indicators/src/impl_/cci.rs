//! Commodity Channel Index (CCI) indicator

use crate::traits::Indicator;
use kurs_types::DailyBar;

/// Commodity Channel Index
///
/// Computed over the typical price `TP = (High + Low + Close) / 3` when
/// every bar carries High and Low, otherwise over the close alone:
///
/// ```text
/// CCI = (TP - SMA(TP, n)) / (0.015 * MAD(TP, n))
/// ```
///
/// MAD is the mean absolute deviation against the window's own mean.
/// A zero MAD (flat window) leaves the cell NaN for the fill pass.
#[derive(Debug, Clone)]
pub struct CCI {
    /// Window length for SMA and MAD
    pub period: usize,
}

impl CCI {
    /// Creates a new CCI indicator with the given period.
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Default for CCI {
    /// Standard parameterization: 20-period window.
    fn default() -> Self {
        Self::new(20)
    }
}

impl Indicator for CCI {
    fn compute(&self, bars: &[DailyBar]) -> Vec<f64> {
        let len = bars.len();
        let mut result = vec![f64::NAN; len];

        if self.period == 0 || len < self.period {
            return result;
        }

        // Typical Price nur, wenn die ganze Reihe High/Low trägt
        let use_hlc = !bars.is_empty()
            && bars.iter().all(|b| b.high.is_some() && b.low.is_some());
        let tp: Vec<f64> = bars
            .iter()
            .map(|b| {
                if use_hlc {
                    (b.high.unwrap_or(b.close) + b.low.unwrap_or(b.close) + b.close) / 3.0
                } else {
                    b.close
                }
            })
            .collect();

        for i in (self.period - 1)..len {
            let start = i + 1 - self.period;
            let window = &tp[start..=i];

            let mean = window.iter().sum::<f64>() / self.period as f64;
            let mad =
                window.iter().map(|x| (x - mean).abs()).sum::<f64>() / self.period as f64;

            if mad > 0.0 {
                result[i] = (tp[i] - mean) / (0.015 * mad);
            }
        }

        result
    }
}
