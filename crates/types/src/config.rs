use std::path::PathBuf;

use crate::error::ConfigError;

/// Pipeline-Konfiguration für Aufbereitung, Indikatoren und Forecast.
/// Alle Felder haben Defaults; ein leeres JSON-Objekt ist gültig.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PipelineConfig {
    /// Window length fed to the sequence model
    #[serde(default = "default_look_back")]
    pub look_back: usize,
    /// Number of autoregressive forecast steps
    #[serde(default = "default_future_periods")]
    pub future_periods: usize,
    /// Leading rows dropped before scaling (maximum indicator period)
    #[serde(default = "default_warmup_rows")]
    pub warmup_rows: usize,
    /// Forecast cache lifetime in seconds
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
    /// Closes below this value are treated as invalid upstream data
    #[serde(default = "default_close_floor")]
    pub close_floor: f64,
    /// Directory holding the day-keyed model artifact
    #[serde(default = "default_model_dir")]
    pub model_dir: PathBuf,
    /// RNG seed for reproducibility; `null` requests entropy seeding
    #[serde(default = "default_rng_seed")]
    pub rng_seed: Option<u64>,
    /// Model hyperparameters
    #[serde(default)]
    pub model: ModelConfig,
}

/// Hyperparameter des Sequenzmodells (tunable defaults)
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ModelConfig {
    /// Hidden widths of the stacked recurrent layers, in order
    #[serde(default = "default_recurrent_widths")]
    pub recurrent_widths: Vec<usize>,
    /// Dropout rate applied after each recurrent layer during training
    #[serde(default = "default_dropout")]
    pub dropout: f64,
    /// Training epochs
    #[serde(default = "default_epochs")]
    pub epochs: usize,
    /// Training batch size
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// Adam learning rate
    #[serde(default = "default_learning_rate")]
    pub learning_rate: f64,
}

const DEFAULT_RNG_SEED: u64 = 42;

fn default_look_back() -> usize {
    5
}
fn default_future_periods() -> usize {
    14
}
fn default_warmup_rows() -> usize {
    200
}
fn default_cache_ttl_secs() -> u64 {
    3600
}
fn default_close_floor() -> f64 {
    6000.0
}
fn default_model_dir() -> PathBuf {
    PathBuf::from("saved_models")
}
fn default_rng_seed() -> Option<u64> {
    Some(DEFAULT_RNG_SEED)
}
fn default_recurrent_widths() -> Vec<usize> {
    vec![100, 50]
}
fn default_dropout() -> f64 {
    0.2
}
fn default_epochs() -> usize {
    30
}
fn default_batch_size() -> usize {
    32
}
fn default_learning_rate() -> f64 {
    0.01
}

impl PipelineConfig {
    /// Validates the configuration before a pipeline run.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroField`] for zero counts or window lengths.
    /// - [`ConfigError::OutOfRange`] for non-finite or out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.look_back == 0 {
            return Err(ConfigError::ZeroField("look_back"));
        }
        if self.future_periods == 0 {
            return Err(ConfigError::ZeroField("future_periods"));
        }
        if self.cache_ttl_secs == 0 {
            return Err(ConfigError::ZeroField("cache_ttl_secs"));
        }
        if !self.close_floor.is_finite() || self.close_floor < 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "close_floor",
                value: self.close_floor.to_string(),
                hint: "must be finite and non-negative",
            });
        }
        self.model.validate()
    }
}

impl ModelConfig {
    /// Validates the model hyperparameters.
    ///
    /// # Errors
    /// - [`ConfigError::ZeroField`] for empty layer lists or zero counts.
    /// - [`ConfigError::OutOfRange`] for invalid dropout or learning rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recurrent_widths.is_empty() || self.recurrent_widths.contains(&0) {
            return Err(ConfigError::ZeroField("recurrent_widths"));
        }
        if self.epochs == 0 {
            return Err(ConfigError::ZeroField("epochs"));
        }
        if self.batch_size == 0 {
            return Err(ConfigError::ZeroField("batch_size"));
        }
        if !self.dropout.is_finite() || !(0.0..1.0).contains(&self.dropout) {
            return Err(ConfigError::OutOfRange {
                field: "dropout",
                value: self.dropout.to_string(),
                hint: "must be in [0, 1)",
            });
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ConfigError::OutOfRange {
                field: "learning_rate",
                value: self.learning_rate.to_string(),
                hint: "must be finite and positive",
            });
        }
        Ok(())
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            look_back: default_look_back(),
            future_periods: default_future_periods(),
            warmup_rows: default_warmup_rows(),
            cache_ttl_secs: default_cache_ttl_secs(),
            close_floor: default_close_floor(),
            model_dir: default_model_dir(),
            rng_seed: default_rng_seed(),
            model: ModelConfig::default(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            recurrent_widths: default_recurrent_widths(),
            dropout: default_dropout(),
            epochs: default_epochs(),
            batch_size: default_batch_size(),
            learning_rate: default_learning_rate(),
        }
    }
}
