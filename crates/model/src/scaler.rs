//! Min-max normalization over the feature matrix.

use kurs_types::{Feature, FeatureMatrix};
use ndarray::Array2;

use crate::error::ModelError;

/// Per-Spalte angepasste Min-Max-Skalierung auf `[0, 1]`.
/// Der Zustand gehört dem Pipeline-Lauf, der ihn gefittet hat; nur er
/// kann Modellausgaben später zurückrechnen.
#[derive(Debug, Clone, PartialEq)]
pub struct Scaler {
    mins: [f64; Feature::COUNT],
    maxs: [f64; Feature::COUNT],
}

impl Scaler {
    /// Fits per-column `(min, max)` over a warmup-truncated matrix.
    ///
    /// # Errors
    /// - [`ModelError::InsufficientData`] when the matrix has no rows.
    /// - [`ModelError::NonFinite`] when a column still carries NaN/Inf.
    /// - [`ModelError::DegenerateColumn`] when a column is constant
    ///   (`max == min`); the transform would divide by zero.
    pub fn fit(matrix: &FeatureMatrix) -> Result<Self, ModelError> {
        if matrix.is_empty() {
            return Err(ModelError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let mut mins = [f64::INFINITY; Feature::COUNT];
        let mut maxs = [f64::NEG_INFINITY; Feature::COUNT];

        for feature in Feature::ALL {
            let idx = feature.index();
            for &value in matrix.column(feature) {
                if !value.is_finite() {
                    return Err(ModelError::NonFinite {
                        column: feature.as_str(),
                    });
                }
                mins[idx] = mins[idx].min(value);
                maxs[idx] = maxs[idx].max(value);
            }
            if maxs[idx] == mins[idx] {
                return Err(ModelError::DegenerateColumn {
                    column: feature.as_str(),
                });
            }
        }

        Ok(Self { mins, maxs })
    }

    /// Scales every column to `[0, 1]` using the fitted ranges.
    /// Output shape: `(rows, 11)` in canonical column order.
    #[must_use]
    pub fn transform(&self, matrix: &FeatureMatrix) -> Array2<f64> {
        let mut scaled = Array2::zeros((matrix.rows(), Feature::COUNT));
        for feature in Feature::ALL {
            let idx = feature.index();
            let range = self.maxs[idx] - self.mins[idx];
            for (row, &value) in matrix.column(feature).iter().enumerate() {
                scaled[[row, idx]] = (value - self.mins[idx]) / range;
            }
        }
        scaled
    }

    /// Inverts scaling for predicted Close values.
    ///
    /// Only the Close column ever needs decoding: conceptually a
    /// zero-padded full-width row is built, Close set, inverted, and
    /// Close kept. That reduces to `v * (max - min) + min` on the one
    /// column.
    #[must_use]
    pub fn inverse_close(&self, values: &[f64]) -> Vec<f64> {
        let idx = Feature::Close.index();
        let range = self.maxs[idx] - self.mins[idx];
        values.iter().map(|v| v * range + self.mins[idx]).collect()
    }
}
