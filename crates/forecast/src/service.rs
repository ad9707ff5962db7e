//! Service facade over the whole pipeline.

use std::time::Duration;

use kurs_model::{ModelError, Scaler, WindowedDataset};
use kurs_types::{FeatureMatrix, PipelineConfig};

use crate::cache::PredictionCache;
use crate::clock::{Clock, date_of_ns};
use crate::error::ForecastError;
use crate::model_cache::ModelCache;
use crate::provider::SeriesProvider;
use crate::rollout::run_rollout;
use crate::store::ArtifactStore;

/// Fassade für die Serving-Schicht: besitzt Provider, Uhr, Konfiguration
/// und beide Caches und bietet genau die zwei Kernoperationen an,
/// Indikatormatrix und Forecast.
///
/// Alle Aufrufe sind synchron und laufen auf dem rufenden Thread zu
/// Ende; Seiteneffekte gibt es nur über Modell- und Prediction-Cache.
#[derive(Debug)]
pub struct ForecastService<P, C> {
    provider: P,
    clock: C,
    config: PipelineConfig,
    model_cache: ModelCache,
    prediction_cache: PredictionCache,
}

impl<P: SeriesProvider, C: Clock> ForecastService<P, C> {
    /// Builds the service, validating the configuration up front.
    ///
    /// # Errors
    /// - [`ForecastError::Config`] for zero or out-of-range settings.
    pub fn new(provider: P, clock: C, config: PipelineConfig) -> Result<Self, ForecastError> {
        config.validate()?;

        let store = ArtifactStore::new(config.model_dir.clone());
        let prediction_cache = PredictionCache::new(Duration::from_secs(config.cache_ttl_secs));

        Ok(Self {
            provider,
            clock,
            model_cache: ModelCache::new(store),
            prediction_cache,
            config,
        })
    }

    /// Indicator matrix over the provider's current series.
    ///
    /// An empty upstream series yields an empty matrix, not an error.
    ///
    /// # Errors
    /// - [`ForecastError::Provider`] when the upstream fetch fails.
    pub fn apply_indicators(&self) -> Result<FeatureMatrix, ForecastError> {
        let series = self.provider.series()?;
        Ok(kurs_indicators::apply_indicators(&series)?)
    }

    /// The cached multi-step forecast, trailing `forecast_days` values.
    ///
    /// On a cache miss the full pipeline runs end to end: indicators,
    /// warmup truncation, scaling, windowing, the per-day train-or-load
    /// decision, and the autoregressive rollout over
    /// `future_periods` steps. An empty upstream series yields an empty
    /// forecast.
    ///
    /// # Errors
    /// Input-quality and model-lifecycle failures of the underlying
    /// run; the previous cache entry survives any failure.
    pub fn get_or_update_forecast(&self, forecast_days: usize) -> Result<Vec<f64>, ForecastError> {
        let now_ns = self.clock.now_ns();
        self.prediction_cache
            .get_or_update(forecast_days, now_ns, || self.compute_forecast(now_ns))
    }

    /// One full pipeline run, uncached.
    fn compute_forecast(&self, now_ns: u64) -> Result<Vec<f64>, ForecastError> {
        let series = self.provider.series()?;
        if series.is_empty() {
            tracing::warn!("Upstream series is empty, returning empty forecast");
            return Ok(Vec::new());
        }

        let matrix = kurs_indicators::apply_indicators(&series)?;
        let truncated = matrix.truncated(self.config.warmup_rows);

        let required = self.config.look_back + 1;
        if truncated.rows() < required {
            return Err(ModelError::InsufficientData {
                required,
                available: truncated.rows(),
            }
            .into());
        }

        let scaler = Scaler::fit(&truncated)?;
        let scaled = scaler.transform(&truncated);
        let dataset = WindowedDataset::new(&scaled, self.config.look_back);

        let today = date_of_ns(now_ns);
        let (model, source) = self.model_cache.get_or_train(
            today,
            &dataset,
            &self.config.model,
            self.config.rng_seed,
        )?;
        tracing::info!("Running {}-step rollout ({source:?} model)", self.config.future_periods);

        let seed_window = dataset.last_window().ok_or(ModelError::InsufficientData {
            required,
            available: truncated.rows(),
        })?;
        let scaled_predictions = run_rollout(&model, &seed_window, self.config.future_periods);

        Ok(scaler.inverse_close(&scaled_predictions))
    }
}
