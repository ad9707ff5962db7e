//! Series preparation: business-day completion, sanity-floor filtering,
//! and time-weighted interpolation of missing closes.

use kurs_types::{DailyBar, PriceSeries, TradingDate};

use crate::error::DataError;

/// Statistics describing the repairs applied during preparation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RepairStats {
    /// Business days inserted because the source skipped them.
    pub inserted_days: usize,
    /// Source bars dropped because they fell on a non-business day.
    pub dropped_off_days: usize,
    /// Closes invalidated by the sanity floor.
    pub floored_closes: usize,
    /// Repaired closes (inserted + floored) relative to the output length.
    pub repair_ratio: f64,
}

/// Ein Arbeitszelle pro Handelstag; fehlende Werte sind noch `None`.
#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    open: Option<f64>,
    high: Option<f64>,
    low: Option<f64>,
    close: Option<f64>,
}

impl Cell {
    fn from_bar(bar: &DailyBar) -> Self {
        Self {
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: Some(bar.close),
        }
    }
}

/// Prepares a raw bar sequence for the pipeline.
///
/// Reindexes to full business-day coverage between the first and last
/// observation, invalidates closes below `close_floor`, then fills every
/// hole by time-weighted linear interpolation over the calendar-day axis
/// (edges carry the nearest valid value). Open/High/Low are filled the
/// same way when the source provides the column at all.
///
/// An empty input yields an empty series, not an error.
///
/// # Errors
/// - [`DataError::CorruptData`] when input bars are non-finite, out of
///   order, or no valid close survives the floor filter.
pub fn prepare_series(
    bars: &[DailyBar],
    close_floor: f64,
) -> Result<(PriceSeries, RepairStats), DataError> {
    if bars.is_empty() {
        return Ok((PriceSeries::empty(), RepairStats::default()));
    }

    validate_raw_bars(bars)?;

    let mut stats = RepairStats::default();

    // asfreq('B'): Wochenend-Beobachtungen fallen weg
    let kept: Vec<&DailyBar> = bars.iter().filter(|b| b.date.is_business_day()).collect();
    stats.dropped_off_days = bars.len() - kept.len();
    let Some(first) = kept.first().map(|b| b.date) else {
        return Ok((PriceSeries::empty(), stats));
    };
    let last = kept[kept.len() - 1].date;

    let mut dates: Vec<TradingDate> = Vec::new();
    let mut d = first;
    while d <= last {
        dates.push(d);
        if d == last {
            break;
        }
        d = d.next_business_day();
    }

    let mut cells: Vec<Cell> = Vec::with_capacity(dates.len());
    let mut j = 0;
    for date in &dates {
        if j < kept.len() && kept[j].date == *date {
            cells.push(Cell::from_bar(kept[j]));
            j += 1;
        } else {
            stats.inserted_days += 1;
            cells.push(Cell::default());
        }
    }

    for cell in &mut cells {
        if let Some(close) = cell.close
            && close < close_floor
        {
            cell.close = None;
            stats.floored_closes += 1;
        }
    }

    if cells.iter().all(|c| c.close.is_none()) {
        return Err(DataError::CorruptData(format!(
            "No valid close in span {first}..{last} after floor filter ({close_floor})"
        )));
    }

    let day_numbers: Vec<i64> = dates.iter().map(TradingDate::to_days).collect();
    fill_field(&day_numbers, &mut cells, |c| &mut c.close);
    fill_field(&day_numbers, &mut cells, |c| &mut c.open);
    fill_field(&day_numbers, &mut cells, |c| &mut c.high);
    fill_field(&day_numbers, &mut cells, |c| &mut c.low);

    let mut out = Vec::with_capacity(cells.len());
    for (date, cell) in dates.iter().zip(cells.iter()) {
        let close = cell.close.ok_or_else(|| {
            DataError::CorruptData(format!("Unfilled close at {date} after interpolation"))
        })?;
        out.push(DailyBar {
            date: *date,
            open: cell.open,
            high: cell.high,
            low: cell.low,
            close,
        });
    }

    let repaired = stats.inserted_days + stats.floored_closes;
    stats.repair_ratio = if out.is_empty() {
        0.0
    } else {
        count_to_f64(repaired, "repaired")? / count_to_f64(out.len(), "rows")?
    };
    if stats.repair_ratio > 0.05 {
        tracing::warn!(
            "Large repair ratio: {} inserted, {} floored ({:.2}%)",
            stats.inserted_days,
            stats.floored_closes,
            stats.repair_ratio * 100.0
        );
    }

    Ok((PriceSeries::from_bars(out), stats))
}

fn validate_raw_bars(bars: &[DailyBar]) -> Result<(), DataError> {
    for (i, bar) in bars.iter().enumerate() {
        if !bar.close.is_finite() {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf close at index {i}: {bar:?}"
            )));
        }

        for (label, value) in [("open", bar.open), ("high", bar.high), ("low", bar.low)] {
            if let Some(v) = value
                && !v.is_finite()
            {
                return Err(DataError::CorruptData(format!(
                    "NaN/Inf {label} at index {i}: {bar:?}"
                )));
            }
        }

        if let (Some(high), Some(low)) = (bar.high, bar.low)
            && low > high
        {
            return Err(DataError::CorruptData(format!(
                "Low above high at index {i}: low={low}, high={high}"
            )));
        }

        if i > 0 && bar.date <= bars[i - 1].date {
            return Err(DataError::CorruptData(format!(
                "Non-monotonic date at index {i}: {} <= {}",
                bar.date,
                bars[i - 1].date
            )));
        }
    }

    Ok(())
}

/// Füllt eine Spalte; Spalten ganz ohne Werte bleiben unberührt.
fn fill_field(
    day_numbers: &[i64],
    cells: &mut [Cell],
    field: impl Fn(&mut Cell) -> &mut Option<f64>,
) {
    let mut values: Vec<Option<f64>> = cells.iter_mut().map(|c| *field(c)).collect();
    interpolate_time(day_numbers, &mut values);
    for (cell, value) in cells.iter_mut().zip(values) {
        *field(cell) = value;
    }
}

/// Time-weighted linear interpolation over the calendar-day axis.
///
/// Interior holes are filled proportionally to the calendar distance of
/// the bracketing observations; leading and trailing holes carry the
/// nearest valid value. An all-`None` column is left as-is.
#[allow(clippy::cast_precision_loss)]
fn interpolate_time(day_numbers: &[i64], values: &mut [Option<f64>]) {
    let valid: Vec<usize> = (0..values.len()).filter(|&i| values[i].is_some()).collect();
    let (Some(&first), Some(&last)) = (valid.first(), valid.last()) else {
        return;
    };

    let first_val = values[first];
    for v in values.iter_mut().take(first) {
        *v = first_val;
    }
    let last_val = values[last];
    for v in values.iter_mut().skip(last + 1) {
        *v = last_val;
    }

    for pair in valid.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b - a <= 1 {
            continue;
        }
        let (Some(va), Some(vb)) = (values[a], values[b]) else {
            continue;
        };
        let span = (day_numbers[b] - day_numbers[a]) as f64;
        for i in (a + 1)..b {
            let t = (day_numbers[i] - day_numbers[a]) as f64 / span;
            values[i] = Some(va + (vb - va) * t);
        }
    }
}

fn count_to_f64(value: usize, label: &str) -> Result<f64, DataError> {
    let value_u64 = u64::try_from(value)
        .map_err(|_| DataError::CorruptData(format!("Count overflow for {label}: {value}")))?;
    #[allow(clippy::cast_precision_loss)]
    let value_as_f64 = value_u64 as f64;
    Ok(value_as_f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> TradingDate {
        TradingDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_interpolate_time_interior() {
        // Mo=0, Di=1, Mi=2 Kalendertage
        let days = vec![0, 1, 2];
        let mut values = vec![Some(100.0), None, Some(104.0)];
        interpolate_time(&days, &mut values);
        assert_eq!(values[1], Some(102.0));
    }

    #[test]
    fn test_interpolate_time_weights_by_calendar_days() {
        // Fr, Mo, Di: der Freitag-Montag-Schritt zählt drei Kalendertage
        let days = vec![0, 3, 4];
        let mut values = vec![Some(100.0), None, Some(104.0)];
        interpolate_time(&days, &mut values);
        assert_eq!(values[1], Some(103.0));
    }

    #[test]
    fn test_interpolate_time_edges_carry_nearest() {
        let days = vec![0, 1, 2, 3];
        let mut values = vec![None, Some(2.0), Some(3.0), None];
        interpolate_time(&days, &mut values);
        assert_eq!(values, vec![Some(2.0), Some(2.0), Some(3.0), Some(3.0)]);
    }

    #[test]
    fn test_interpolate_time_all_none_untouched() {
        let days = vec![0, 1];
        let mut values: Vec<Option<f64>> = vec![None, None];
        interpolate_time(&days, &mut values);
        assert_eq!(values, vec![None, None]);
    }

    #[test]
    fn test_prepare_empty_input() {
        let (series, stats) = prepare_series(&[], 6000.0).unwrap();
        assert!(series.is_empty());
        assert_eq!(stats.inserted_days, 0);
    }

    #[test]
    fn test_prepare_rejects_non_monotonic() {
        let bars = vec![
            DailyBar::close_only(date(2024, 1, 3), 14000.0),
            DailyBar::close_only(date(2024, 1, 2), 14000.0),
        ];
        let err = prepare_series(&bars, 6000.0).unwrap_err();
        assert!(matches!(err, DataError::CorruptData(_)));
    }

    #[test]
    fn test_prepare_rejects_nan_close() {
        let bars = vec![DailyBar::close_only(date(2024, 1, 2), f64::NAN)];
        let err = prepare_series(&bars, 6000.0).unwrap_err();
        assert!(matches!(err, DataError::CorruptData(_)));
    }

    #[test]
    fn test_prepare_all_floored_is_corrupt() {
        let bars = vec![
            DailyBar::close_only(date(2024, 1, 2), 500.0),
            DailyBar::close_only(date(2024, 1, 3), 700.0),
        ];
        let err = prepare_series(&bars, 6000.0).unwrap_err();
        assert!(matches!(err, DataError::CorruptData(_)));
    }
}
