//! Single-slot, date-keyed artifact store.

use std::fs;
use std::path::{Path, PathBuf};

use kurs_model::{SequenceRegressor, artifact};
use kurs_types::TradingDate;

use crate::error::ForecastError;

const ARTIFACT_PREFIX: &str = "model_";
const ARTIFACT_SUFFIX: &str = ".bin";

/// Ablage für genau ein Modellartefakt, adressiert über das
/// Trainingsdatum (`model_YYYYMMDD.bin`).
///
/// `put` löscht zuerst jedes Artefakt mit abweichendem Datum und
/// schreibt dann über Temp-Datei plus Rename, damit nie altes und neues
/// Artefakt zugleich als "aktuell" erscheinen.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    /// Store over the given directory; created lazily on first `put`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Loads the artifact for `date`, `None` when it does not exist.
    ///
    /// # Errors
    /// - [`ForecastError::Io`] when the file exists but cannot be read.
    /// - [`ForecastError::Model`] for corrupt artifact bytes; no stale
    ///   fallback.
    pub fn load(&self, date: TradingDate) -> Result<Option<SequenceRegressor>, ForecastError> {
        let path = self.artifact_path(date);
        if !path.exists() {
            return Ok(None);
        }
        let bytes = fs::read(&path)?;
        Ok(Some(artifact::from_bytes(&bytes)?))
    }

    /// Persists the artifact for `date`, evicting every other date.
    ///
    /// # Errors
    /// - [`ForecastError::Io`] on any filesystem failure; in that case
    ///   no new artifact is visible under the final name.
    pub fn put(&self, date: TradingDate, model: &SequenceRegressor) -> Result<(), ForecastError> {
        fs::create_dir_all(&self.dir)?;

        let keep = artifact_name(date);
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if name.starts_with(ARTIFACT_PREFIX)
                && name.ends_with(ARTIFACT_SUFFIX)
                && name != keep
            {
                tracing::info!("Evicting superseded artifact {name}");
                fs::remove_file(entry.path())?;
            }
        }

        let bytes = artifact::to_bytes(model)?;
        let tmp = self.dir.join(format!("{keep}.tmp"));
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, self.artifact_path(date))?;
        tracing::info!("Persisted artifact {keep}");
        Ok(())
    }

    /// Directory the artifacts live in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn artifact_path(&self, date: TradingDate) -> PathBuf {
        self.dir.join(artifact_name(date))
    }
}

fn artifact_name(date: TradingDate) -> String {
    format!("{ARTIFACT_PREFIX}{}{ARTIFACT_SUFFIX}", date.compact())
}
