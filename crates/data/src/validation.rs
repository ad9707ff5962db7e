//! Entry-contract validation for prepared series.

use kurs_types::PriceSeries;

use crate::error::DataError;

/// Validates a prepared series against the pipeline entry contract:
/// strictly ascending business-day dates with full coverage, finite
/// closes at or above the floor, and consistent High/Low where present.
///
/// # Errors
/// - [`DataError::EmptyData`] when the series has no bars.
/// - [`DataError::CorruptData`] when any contract rule is violated.
pub fn validate_series(series: &PriceSeries, close_floor: f64) -> Result<(), DataError> {
    let bars = series.bars();
    if bars.is_empty() {
        return Err(DataError::EmptyData);
    }

    for (i, bar) in bars.iter().enumerate() {
        if !bar.close.is_finite() {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf close at index {i}: {bar:?}"
            )));
        }

        if bar.close < close_floor {
            return Err(DataError::CorruptData(format!(
                "Close below floor at index {i}: {} < {close_floor}",
                bar.close
            )));
        }

        if !bar.date.is_business_day() {
            return Err(DataError::CorruptData(format!(
                "Non-business-day bar at index {i}: {}",
                bar.date
            )));
        }

        if let (Some(high), Some(low)) = (bar.high, bar.low) {
            if !high.is_finite() || !low.is_finite() {
                return Err(DataError::CorruptData(format!(
                    "NaN/Inf high/low at index {i}: {bar:?}"
                )));
            }
            if low > high {
                return Err(DataError::CorruptData(format!(
                    "Low above high at index {i}: low={low}, high={high}"
                )));
            }
        }

        if i > 0 {
            let expected = bars[i - 1].date.next_business_day();
            if bar.date != expected {
                return Err(DataError::CorruptData(format!(
                    "Business-day gap at index {i}: expected {expected}, got {}",
                    bar.date
                )));
            }
        }
    }

    Ok(())
}
