//! Stacked recurrent sequence regressor.

use kurs_types::ModelConfig;
use ndarray::{Array1, Array2, Array3, Axis, s};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cell::GruCell;
use crate::dataset::WindowedDataset;
use crate::error::ModelError;
use crate::optimizer::Adam;

/// Überwachter Sequenz-Regressor: gestapelte GRU-Schichten (Default
/// 100/50), je eine Dropout-Stufe dahinter, dann ein linearer Readout
/// auf einen Skalar.
///
/// Trainiert wird der Readout mit exakten MSE-Gradienten über Adam; die
/// rekurrenten Gewichte bleiben auf ihrer geseedeten Zufallsinitialisierung
/// (Echo-State-Schema). Dropout ist invertiert und wirkt nur während des
/// Trainings; die Vorhersage ist deterministisch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRegressor {
    cells: Vec<GruCell>,
    readout_weights: Array1<f64>,
    readout_bias: f64,
    dropout: f64,
    /// Mean training loss per epoch, filled by [`train`](Self::train)
    #[serde(skip)]
    pub loss_history: Vec<f64>,
}

/// Evaluation metrics over a prediction batch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalMetrics {
    /// Mean squared error
    pub mse: f64,
    /// Root mean squared error
    pub rmse: f64,
    /// Mean absolute error
    pub mae: f64,
}

impl SequenceRegressor {
    /// Builds the network from the configured layer widths.
    pub fn new(input_size: usize, config: &ModelConfig, rng: &mut impl Rng) -> Self {
        let mut cells = Vec::with_capacity(config.recurrent_widths.len());
        let mut width_in = input_size;
        for &width in &config.recurrent_widths {
            cells.push(GruCell::new(width_in, width, rng));
            width_in = width;
        }

        let limit = (1.0 / width_in as f64).sqrt();
        let readout_weights = Array1::from_shape_fn(width_in, |_| rng.gen_range(-limit..limit));

        Self {
            cells,
            readout_weights,
            readout_bias: 0.0,
            dropout: config.dropout,
            loss_history: Vec::new(),
        }
    }

    /// Final hidden state of the last layer for every window in the batch.
    ///
    /// `masks` carries one inverted-dropout mask per layer (training
    /// only); `None` runs the deterministic inference path.
    fn forward_hidden(&self, windows: &Array3<f64>, masks: Option<&[Array1<f64>]>) -> Array2<f64> {
        let batch = windows.shape()[0];
        let seq_len = windows.shape()[1];
        let last_width = self.cells.last().map_or(0, |c| c.hidden_size);

        let mut hidden = Array2::zeros((batch, last_width));

        for b in 0..batch {
            let mut states: Vec<Array1<f64>> =
                self.cells.iter().map(GruCell::init_hidden).collect();

            for t in 0..seq_len {
                let mut layer_input: Array1<f64> = windows.slice(s![b, t, ..]).to_owned();

                for (layer, cell) in self.cells.iter().enumerate() {
                    let h_next = cell.forward(&layer_input, &states[layer]);
                    layer_input = match masks {
                        Some(masks) => &h_next * &masks[layer],
                        None => h_next.clone(),
                    };
                    states[layer] = h_next;
                }
            }

            let final_hidden = match masks {
                Some(masks) => &states[self.cells.len() - 1] * &masks[self.cells.len() - 1],
                None => states[self.cells.len() - 1].clone(),
            };
            hidden.row_mut(b).assign(&final_hidden);
        }

        hidden
    }

    /// Predicts one scaled Close per `(look_back, 11)` window.
    #[must_use]
    pub fn predict(&self, windows: &Array3<f64>) -> Array1<f64> {
        let hidden = self.forward_hidden(windows, None);
        hidden.dot(&self.readout_weights) + self.readout_bias
    }

    /// Trains the readout on the windowed dataset.
    ///
    /// Shuffled mini-batches, MSE loss, Adam updates; the mean loss of
    /// each epoch is appended to [`loss_history`](Self::loss_history).
    ///
    /// # Errors
    /// - [`ModelError::InsufficientData`] when the dataset holds no window.
    pub fn train(
        &mut self,
        dataset: &WindowedDataset,
        config: &ModelConfig,
        rng: &mut impl Rng,
    ) -> Result<(), ModelError> {
        let n_samples = dataset.len();
        if n_samples == 0 {
            return Err(ModelError::InsufficientData {
                required: dataset.windows.shape()[1] + 1,
                available: 0,
            });
        }

        let batch_size = config.batch_size.min(n_samples);
        let mut adam = Adam::new(config.learning_rate);
        let mut indices: Vec<usize> = (0..n_samples).collect();

        self.loss_history.clear();

        for epoch in 0..config.epochs {
            indices.shuffle(rng);

            let mut squared_sum = 0.0;
            let mut seen = 0usize;

            for batch_indices in indices.chunks(batch_size) {
                let x = dataset.windows.select(Axis(0), batch_indices);
                let y = dataset.targets.select(Axis(0), batch_indices);
                let m = batch_indices.len() as f64;

                let masks = self.sample_masks(rng);
                let hidden = self.forward_hidden(&x, masks.as_deref());
                let preds = hidden.dot(&self.readout_weights) + self.readout_bias;
                let err = &preds - &y;

                squared_sum += err.iter().map(|e| e * e).sum::<f64>();
                seen += batch_indices.len();

                // d/dw mean((w·h + b - y)^2) = (2/m) hᵀ·err
                let grad_w = hidden.t().dot(&err) * (2.0 / m);
                let grad_b = err.sum() * 2.0 / m;
                adam.step(&mut self.readout_weights, &mut self.readout_bias, &grad_w, grad_b);
            }

            let epoch_loss = squared_sum / seen as f64;
            self.loss_history.push(epoch_loss);
            tracing::debug!("Epoch {}/{}: loss {epoch_loss:.6}", epoch + 1, config.epochs);
        }

        Ok(())
    }

    /// MSE/RMSE/MAE of the model over a labelled window batch.
    #[must_use]
    pub fn evaluate(&self, windows: &Array3<f64>, targets: &Array1<f64>) -> EvalMetrics {
        let preds = self.predict(windows);
        let err = &preds - targets;
        let n = err.len().max(1) as f64;

        let mse = err.iter().map(|e| e * e).sum::<f64>() / n;
        let mae = err.iter().map(|e| e.abs()).sum::<f64>() / n;

        EvalMetrics {
            mse,
            rmse: mse.sqrt(),
            mae,
        }
    }

    /// One inverted-dropout mask per layer, or `None` when dropout is off.
    fn sample_masks(&self, rng: &mut impl Rng) -> Option<Vec<Array1<f64>>> {
        if self.dropout <= 0.0 {
            return None;
        }
        let keep = 1.0 - self.dropout;
        Some(
            self.cells
                .iter()
                .map(|cell| {
                    Array1::from_shape_fn(cell.hidden_size, |_| {
                        if rng.gen_bool(keep) { 1.0 / keep } else { 0.0 }
                    })
                })
                .collect(),
        )
    }
}
