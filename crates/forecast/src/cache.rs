//! Time-bounded memoization of the forecast output.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use crate::error::ForecastError;

#[derive(Debug, Clone)]
struct CacheEntry {
    values: Vec<f64>,
    computed_at_ns: u64,
}

/// Prozessweiter Forecast-Cache mit fester Lebensdauer (Default eine
/// Stunde). Der Mutex serialisiert das Nachfüllen, damit parallele
/// Anfragen im Miss-Fenster nicht mehrfach trainieren.
///
/// Die Frischeprüfung ist rein zeitbasiert: ein Treffer kurz vor der
/// TTL-Grenze liefert bewusst noch die alten Werte.
#[derive(Debug)]
pub struct PredictionCache {
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl PredictionCache {
    /// Cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Returns the trailing `forecast_days` values of the cached series,
    /// recomputing the full series first when absent or stale.
    ///
    /// `computed_at` is only updated after `compute` succeeds; an empty
    /// compute result (no upstream data) is returned but not cached, so
    /// the next call retries.
    ///
    /// # Errors
    /// Propagates the error of `compute`; the previous entry stays
    /// untouched in that case.
    pub fn get_or_update<F>(
        &self,
        forecast_days: usize,
        now_ns: u64,
        compute: F,
    ) -> Result<Vec<f64>, ForecastError>
    where
        F: FnOnce() -> Result<Vec<f64>, ForecastError>,
    {
        let mut guard = self.entry.lock().unwrap_or_else(PoisonError::into_inner);

        let ttl_ns = u64::try_from(self.ttl.as_nanos()).unwrap_or(u64::MAX);
        let fresh = guard
            .as_ref()
            .is_some_and(|e| now_ns.saturating_sub(e.computed_at_ns) <= ttl_ns);

        if !fresh {
            let values = compute()?;
            if values.is_empty() {
                tracing::warn!("Forecast computation returned no values, not caching");
                return Ok(values);
            }
            *guard = Some(CacheEntry {
                values,
                computed_at_ns: now_ns,
            });
        }

        let Some(entry) = guard.as_ref() else {
            return Ok(Vec::new());
        };
        if forecast_days > entry.values.len() {
            tracing::warn!(
                "Requested {forecast_days} forecast days, only {} cached",
                entry.values.len()
            );
        }
        let start = entry.values.len().saturating_sub(forecast_days);
        Ok(entry.values[start..].to_vec())
    }
}
