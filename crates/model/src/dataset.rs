//! Look-back windowing over the scaled feature matrix.

use kurs_types::Feature;
use ndarray::{Array1, Array2, Array3, s};

/// Fenster und Ziele für das überwachte Training.
///
/// Aus einer skalierten Matrix mit `N` Zeilen entstehen `N - look_back`
/// Fenster der Form `(look_back, 11)`; Ziel `i` ist der skalierte Close
/// in Zeile `i + look_back`. Bei `N <= look_back` bleibt der Datensatz
/// leer; ob das ein Fehler ist, entscheidet erst der Trainer.
#[derive(Debug, Clone)]
pub struct WindowedDataset {
    /// Input windows, shape `(samples, look_back, features)`
    pub windows: Array3<f64>,
    /// Scaled Close targets, one per window
    pub targets: Array1<f64>,
}

impl WindowedDataset {
    /// Slices a scaled feature matrix into windows and targets.
    #[must_use]
    pub fn new(scaled: &Array2<f64>, look_back: usize) -> Self {
        let rows = scaled.nrows();
        let features = scaled.ncols();
        let close = Feature::Close.index();

        if look_back == 0 || rows <= look_back {
            return Self {
                windows: Array3::zeros((0, look_back, features)),
                targets: Array1::zeros(0),
            };
        }

        let samples = rows - look_back;
        let mut windows = Array3::zeros((samples, look_back, features));
        let mut targets = Array1::zeros(samples);

        for i in 0..samples {
            windows
                .slice_mut(s![i, .., ..])
                .assign(&scaled.slice(s![i..i + look_back, ..]));
            targets[i] = scaled[[i + look_back, close]];
        }

        Self { windows, targets }
    }

    /// Number of windows
    #[must_use]
    pub fn len(&self) -> usize {
        self.windows.shape()[0]
    }

    /// True when no window could be formed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The newest window, used to seed the autoregressive rollout.
    #[must_use]
    pub fn last_window(&self) -> Option<Array2<f64>> {
        if self.is_empty() {
            return None;
        }
        Some(self.windows.slice(s![self.len() - 1, .., ..]).to_owned())
    }
}
