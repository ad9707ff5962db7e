//! Kurs Forecast
//!
//! Orchestration layer of the forecasting pipeline: the day-keyed model
//! cache over a single-slot artifact store, the autoregressive rollout,
//! the time-bounded prediction cache, and the service facade the
//! serving layer talks to.
//!
//! # Components
//! - `Clock`: injected time source (`SystemClock` in production)
//! - `ArtifactStore`: one `model_YYYYMMDD.bin` artifact on disk
//! - `ModelCache`: per-day load-or-train decision
//! - `rollout`: pure window-advance step and bounded rollout loop
//! - `PredictionCache`: TTL-bounded forecast memoization
//! - `ForecastService`: facade owning provider, clock, caches, config

pub mod cache;
pub mod clock;
pub mod error;
pub mod model_cache;
pub mod provider;
pub mod rollout;
pub mod service;
pub mod store;

// Re-export main types
pub use cache::PredictionCache;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::ForecastError;
pub use model_cache::{ModelCache, ModelSource};
pub use provider::SeriesProvider;
pub use service::ForecastService;
pub use store::ArtifactStore;

// Die Indikatorstufe wird unverändert durchgereicht; Hosts sollen für
// `apply_indicators` nicht extra die Indikator-Crate ziehen müssen.
pub use kurs_indicators::apply_indicators;
