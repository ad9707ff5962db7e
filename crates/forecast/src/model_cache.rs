//! Per-day load-or-train decision over the artifact store.

use kurs_model::{SequenceRegressor, WindowedDataset};
use kurs_types::{Feature, ModelConfig, TradingDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::ForecastError;
use crate::store::ArtifactStore;

/// Where the model of an invocation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelSource {
    /// Today's artifact existed and was loaded
    Loaded,
    /// No artifact for today; a fresh model was trained and persisted
    Trained,
}

/// Zustandsmaschine pro Kalendertag: **Missing** oder **Present**.
/// Present lädt ohne Training; Missing trainiert, verdrängt das
/// Vortagsartefakt und persistiert erst nach erfolgreichem Training.
/// Ein Fehlschlag hinterlässt kein Teilartefakt.
#[derive(Debug)]
pub struct ModelCache {
    store: ArtifactStore,
}

impl ModelCache {
    /// Cache over the given artifact store.
    #[must_use]
    pub fn new(store: ArtifactStore) -> Self {
        Self { store }
    }

    /// Loads today's model or trains and persists a fresh one.
    ///
    /// # Errors
    /// - [`ForecastError::Model`] when the dataset holds no window or
    ///   the artifact bytes are corrupt.
    /// - [`ForecastError::Io`] when the store cannot be read or written.
    pub fn get_or_train(
        &self,
        today: TradingDate,
        dataset: &WindowedDataset,
        config: &ModelConfig,
        rng_seed: Option<u64>,
    ) -> Result<(SequenceRegressor, ModelSource), ForecastError> {
        if let Some(model) = self.store.load(today)? {
            tracing::info!("Artifact for {today} present, loading");
            return Ok((model, ModelSource::Loaded));
        }

        tracing::info!("Artifact for {today} missing, training");
        let mut rng = match rng_seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let mut model = SequenceRegressor::new(Feature::COUNT, config, &mut rng);
        model.train(dataset, config, &mut rng)?;

        self.store.put(today, &model)?;
        Ok((model, ModelSource::Trained))
    }
}
