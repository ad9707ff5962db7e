/// Feature-Spalten der Indikator-Matrix in kanonischer Reihenfolge.
/// Close steht immer an erster Stelle; Training und Inferenz teilen
/// sich diesen Vertrag, Spaltenindizes werden nie frei vergeben.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Feature {
    /// Close price (the prediction target)
    Close,
    /// 50-period simple moving average
    Ma50,
    /// 200-period simple moving average
    Ma200,
    /// MACD line (EMA 12 minus EMA 26)
    MacdLine,
    /// MACD signal line (EMA 9 of the MACD line)
    MacdSignal,
    /// 2-period rate of change
    Roc,
    /// 4-period momentum
    Momentum,
    /// 10-period relative strength index
    Rsi,
    /// Upper Bollinger band (SMA 20 + 2 std)
    UpperBand,
    /// Lower Bollinger band (SMA 20 - 2 std)
    LowerBand,
    /// 20-period commodity channel index
    Cci,
}

impl Feature {
    /// Number of feature columns
    pub const COUNT: usize = 11;

    /// All features in canonical column order.
    pub const ALL: [Feature; Feature::COUNT] = [
        Feature::Close,
        Feature::Ma50,
        Feature::Ma200,
        Feature::MacdLine,
        Feature::MacdSignal,
        Feature::Roc,
        Feature::Momentum,
        Feature::Rsi,
        Feature::UpperBand,
        Feature::LowerBand,
        Feature::Cci,
    ];

    /// Column index in the canonical order.
    #[must_use]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Column name as used in diagnostics and outputs.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Close => "Close",
            Feature::Ma50 => "MA_50",
            Feature::Ma200 => "MA_200",
            Feature::MacdLine => "MACD_line",
            Feature::MacdSignal => "MACD_signal",
            Feature::Roc => "ROC",
            Feature::Momentum => "Momentum",
            Feature::Rsi => "RSI",
            Feature::UpperBand => "Upper_Band",
            Feature::LowerBand => "Lower_Band",
            Feature::Cci => "CCI",
        }
    }

    /// True for derived indicator columns (everything except Close).
    /// The fill pass only ever touches these.
    #[must_use]
    pub fn is_indicator(&self) -> bool {
        !matches!(self, Feature::Close)
    }
}

/// Error setting a matrix column of the wrong length
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("column {column} has length {actual}, expected {expected}")]
pub struct ColumnLengthError {
    /// Column name
    pub column: &'static str,
    /// Expected length (matrix row count)
    pub expected: usize,
    /// Actual length of the rejected column
    pub actual: usize,
}

/// Spaltenweise gespeicherte Feature-Matrix.
/// Zeilenzahl entspricht der Länge der Eingangsreihe; Zellen ohne Wert
/// (Warmup, Divisionsartefakte) tragen `NaN` bis zum Fill-Pass.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FeatureMatrix {
    rows: usize,
    columns: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Matrix with `rows` rows, every cell `NaN`.
    #[must_use]
    pub fn new(rows: usize) -> Self {
        Self {
            rows,
            columns: vec![vec![f64::NAN; rows]; Feature::COUNT],
        }
    }

    /// Matrix with no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(0)
    }

    /// Number of rows
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// True when the matrix has no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Replaces one column; the length must match the row count.
    pub fn set_column(
        &mut self,
        feature: Feature,
        values: Vec<f64>,
    ) -> Result<(), ColumnLengthError> {
        if values.len() != self.rows {
            return Err(ColumnLengthError {
                column: feature.as_str(),
                expected: self.rows,
                actual: values.len(),
            });
        }
        self.columns[feature.index()] = values;
        Ok(())
    }

    /// Column values in row order.
    #[must_use]
    pub fn column(&self, feature: Feature) -> &[f64] {
        &self.columns[feature.index()]
    }

    /// Mutable column access for in-place passes.
    pub fn column_mut(&mut self, feature: Feature) -> &mut Vec<f64> {
        &mut self.columns[feature.index()]
    }

    /// Single cell; `row` must be within bounds.
    #[must_use]
    pub fn get(&self, row: usize, feature: Feature) -> f64 {
        self.columns[feature.index()][row]
    }

    /// Copy of the matrix with the first `n` rows dropped (saturating).
    #[must_use]
    pub fn truncated(&self, n: usize) -> Self {
        let n = n.min(self.rows);
        let columns = self
            .columns
            .iter()
            .map(|col| col[n..].to_vec())
            .collect();
        Self {
            rows: self.rows - n,
            columns,
        }
    }
}
