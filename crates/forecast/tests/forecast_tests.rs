//! Integration tests for the forecast service.
//!
//! Covers the end-to-end pipeline on a synthetic series, the TTL
//! semantics of the prediction cache (compute-once via a counting
//! provider), the per-day model cache behavior through the service,
//! and the typed-empty outcome for missing upstream data.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use kurs_forecast::{ForecastError, ForecastService, ManualClock, SeriesProvider};
use kurs_types::{DailyBar, ModelConfig, PipelineConfig, PriceSeries, TradingDate};

/// Provider über einer festen Reihe, zählt die Abrufe.
#[derive(Debug)]
struct CountingProvider {
    series: PriceSeries,
    calls: AtomicUsize,
}

impl CountingProvider {
    fn new(series: PriceSeries) -> Self {
        Self {
            series,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SeriesProvider for CountingProvider {
    fn series(&self) -> Result<PriceSeries, ForecastError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.series.clone())
    }
}

/// Handelstägliche Reihe mit linear steigendem Close.
fn linear_series(rows: usize, start: f64, end: f64) -> PriceSeries {
    let mut date = TradingDate::new(2023, 1, 2).unwrap();
    let step = (end - start) / (rows.max(2) - 1) as f64;
    let bars = (0..rows)
        .map(|i| {
            let bar = DailyBar::close_only(date, start + step * i as f64);
            date = date.next_business_day();
            bar
        })
        .collect();
    PriceSeries::from_bars(bars)
}

fn test_config(model_dir: &std::path::Path) -> PipelineConfig {
    PipelineConfig {
        model_dir: model_dir.to_path_buf(),
        model: ModelConfig {
            recurrent_widths: vec![8, 4],
            epochs: 5,
            ..ModelConfig::default()
        },
        ..PipelineConfig::default()
    }
}

fn monday_clock() -> ManualClock {
    ManualClock::at_date(TradingDate::new(2024, 5, 6).unwrap())
}

const HOUR: Duration = Duration::from_secs(3600);

#[test]
fn test_end_to_end_linear_series() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(linear_series(250, 14000.0, 14500.0));
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    let forecast = service.get_or_update_forecast(14).unwrap();

    assert_eq!(forecast.len(), 14);
    // Großzügiges Plausibilitätsband um das jüngste Kursniveau; das
    // Training ist stochastisch, aber geseedet
    for value in &forecast {
        assert!(value.is_finite());
        assert!(
            (13000.0..16000.0).contains(value),
            "forecast outside sanity band: {value}"
        );
    }
    // Genau ein Tagesartefakt liegt im Store
    let artifacts: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .collect();
    assert_eq!(artifacts.len(), 1);
    assert_eq!(
        artifacts[0].file_name().to_string_lossy(),
        "model_20240506.bin"
    );
}

#[test]
fn test_cache_hit_serves_suffix_of_same_series() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(linear_series(250, 14000.0, 14500.0));
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    let full = service.get_or_update_forecast(14).unwrap();
    clock.advance(Duration::from_secs(60));
    let tail = service.get_or_update_forecast(7).unwrap();

    // Suffix derselben gespeicherten Reihe, keine Neuberechnung
    assert_eq!(tail, full[7..].to_vec());
    assert_eq!(provider.calls(), 1);
}

#[test]
fn test_cache_expires_after_ttl() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(linear_series(250, 14000.0, 14500.0));
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    service.get_or_update_forecast(14).unwrap();
    clock.advance(HOUR + Duration::from_secs(1));
    service.get_or_update_forecast(14).unwrap();

    assert_eq!(provider.calls(), 2);
    // Gleicher Tag: der zweite Lauf lädt das Artefakt statt neu zu
    // trainieren, es bleibt bei einer Datei
    let artifacts = std::fs::read_dir(dir.path()).unwrap().count();
    assert_eq!(artifacts, 1);
}

#[test]
fn test_next_day_supersedes_artifact() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(linear_series(250, 14000.0, 14500.0));
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    service.get_or_update_forecast(14).unwrap();
    assert!(dir.path().join("model_20240506.bin").exists());

    clock.advance(Duration::from_secs(25 * 3600));
    service.get_or_update_forecast(14).unwrap();

    assert!(!dir.path().join("model_20240506.bin").exists());
    assert!(dir.path().join("model_20240507.bin").exists());
}

#[test]
fn test_empty_series_yields_empty_forecast() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(PriceSeries::empty());
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    assert!(service.get_or_update_forecast(14).unwrap().is_empty());
    // Leere Ergebnisse werden nicht gecacht; der nächste Aufruf fragt
    // den Provider erneut
    assert!(service.get_or_update_forecast(14).unwrap().is_empty());
    assert_eq!(provider.calls(), 2);

    assert!(service.apply_indicators().unwrap().is_empty());
}

#[test]
fn test_too_short_series_is_input_quality_error() {
    let dir = tempfile::tempdir().unwrap();
    // 120 Zeilen: nach dem Warmup-Schnitt bleibt nichts übrig
    let provider = CountingProvider::new(linear_series(120, 14000.0, 14100.0));
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    let err = service.get_or_update_forecast(14).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::Model(kurs_model::ModelError::InsufficientData { .. })
    ));
}

#[test]
fn test_constant_series_is_degenerate_range_error() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(linear_series(250, 14000.0, 14000.0));
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    let err = service.get_or_update_forecast(14).unwrap_err();
    assert!(matches!(
        err,
        ForecastError::Model(kurs_model::ModelError::DegenerateColumn { .. })
    ));
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let dir = tempfile::tempdir().unwrap();
    let provider = CountingProvider::new(PriceSeries::empty());
    let mut config = test_config(dir.path());
    config.look_back = 0;

    let err = ForecastService::new(&provider, monday_clock(), config).unwrap_err();
    assert!(matches!(err, ForecastError::Config(_)));
}

#[test]
fn test_apply_indicators_matches_engine_output() {
    let dir = tempfile::tempdir().unwrap();
    let series = linear_series(250, 14000.0, 14500.0);
    let provider = CountingProvider::new(series.clone());
    let clock = monday_clock();
    let service = ForecastService::new(&provider, &clock, test_config(dir.path())).unwrap();

    let via_service = service.apply_indicators().unwrap();
    let direct = kurs_forecast::apply_indicators(&series).unwrap();
    assert_eq!(via_service, direct);
}
