//! Indicator engine: composes the fixed feature set into a matrix.

use kurs_types::{Feature, FeatureMatrix, PriceSeries};

use crate::error::IndicatorError;
use crate::fill::ffill_bfill;
use crate::impl_::bollinger::BollingerBands;
use crate::impl_::cci::CCI;
use crate::impl_::macd::MACD;
use crate::impl_::momentum::Momentum;
use crate::impl_::roc::ROC;
use crate::impl_::rsi::RSI;
use crate::impl_::sma::SMA;
use crate::traits::{Indicator, MultiOutputIndicator};

/// Computes the fixed indicator set over a prepared price series.
///
/// Produces the 11-column [`FeatureMatrix`]: the close itself plus
/// MA_50, MA_200, MACD line/signal, ROC, Momentum, RSI, the Bollinger
/// bands and CCI, each with the standard parameterization. Every
/// indicator column is forward- then backward-filled afterwards, so for
/// series long enough that each column has at least one defined cell the
/// result contains no NaN. Deterministic, no side effects; an empty
/// series yields an empty matrix.
///
/// # Errors
/// - [`IndicatorError::Column`] when an indicator produces a column of
///   the wrong length (a programming error, not a data error).
pub fn apply_indicators(series: &PriceSeries) -> Result<FeatureMatrix, IndicatorError> {
    if series.is_empty() {
        return Ok(FeatureMatrix::empty());
    }

    let bars = series.bars();
    let mut matrix = FeatureMatrix::new(bars.len());

    matrix.set_column(Feature::Close, series.closes())?;
    matrix.set_column(Feature::Ma50, SMA::new(50).compute(bars))?;
    matrix.set_column(Feature::Ma200, SMA::new(200).compute(bars))?;

    let macd = MACD::default().compute_all(bars);
    matrix.set_column(Feature::MacdLine, macd.line)?;
    matrix.set_column(Feature::MacdSignal, macd.signal)?;

    matrix.set_column(Feature::Roc, ROC::default().compute(bars))?;
    matrix.set_column(Feature::Momentum, Momentum::default().compute(bars))?;
    matrix.set_column(Feature::Rsi, RSI::default().compute(bars))?;

    let bands = BollingerBands::default().compute_all(bars);
    matrix.set_column(Feature::UpperBand, bands.upper)?;
    matrix.set_column(Feature::LowerBand, bands.lower)?;

    matrix.set_column(Feature::Cci, CCI::default().compute(bars))?;

    // Fill-Pass nur über Indikatorspalten, nie über den Close
    for feature in Feature::ALL {
        if feature.is_indicator() {
            let column = matrix.column_mut(feature);
            ffill_bfill(column);
            if column.iter().all(|v| v.is_nan()) {
                tracing::warn!(
                    "Column {} has no defined cell to fill, series too short",
                    feature.as_str()
                );
            }
        }
    }

    Ok(matrix)
}
