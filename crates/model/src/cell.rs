//! Gated recurrent cell.

use ndarray::{Array1, Array2};
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Eine GRU-Zelle: Update- und Reset-Gate plus Kandidatenzustand.
///
/// Die Gewichte werden gleichverteilt aus `±(1/hidden)^½` gezogen und
/// bleiben nach der Initialisierung fest; trainiert wird nur der
/// Readout des Modells (Echo-State-Schema).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GruCell {
    /// Input width
    pub input_size: usize,
    /// Hidden-state width
    pub hidden_size: usize,

    // Update gate
    w_iz: Array2<f64>,
    w_hz: Array2<f64>,
    b_z: Array1<f64>,

    // Reset gate
    w_ir: Array2<f64>,
    w_hr: Array2<f64>,
    b_r: Array1<f64>,

    // Candidate hidden state
    w_in: Array2<f64>,
    w_hn: Array2<f64>,
    b_n: Array1<f64>,
}

impl GruCell {
    /// Creates a cell with seeded uniform weight init and zero biases.
    pub fn new(input_size: usize, hidden_size: usize, rng: &mut impl Rng) -> Self {
        let limit = (1.0 / hidden_size as f64).sqrt();
        let dist = Uniform::new(-limit, limit);

        Self {
            input_size,
            hidden_size,
            w_iz: Array2::random_using((hidden_size, input_size), dist, rng),
            w_hz: Array2::random_using((hidden_size, hidden_size), dist, rng),
            b_z: Array1::zeros(hidden_size),
            w_ir: Array2::random_using((hidden_size, input_size), dist, rng),
            w_hr: Array2::random_using((hidden_size, hidden_size), dist, rng),
            b_r: Array1::zeros(hidden_size),
            w_in: Array2::random_using((hidden_size, input_size), dist, rng),
            w_hn: Array2::random_using((hidden_size, hidden_size), dist, rng),
            b_n: Array1::zeros(hidden_size),
        }
    }

    /// One timestep:
    ///
    /// ```text
    /// z = σ(W_iz·x + W_hz·h + b_z)
    /// r = σ(W_ir·x + W_hr·h + b_r)
    /// n = tanh(W_in·x + W_hn·(r ⊙ h) + b_n)
    /// h' = (1 - z) ⊙ n + z ⊙ h
    /// ```
    #[must_use]
    pub fn forward(&self, x: &Array1<f64>, h_prev: &Array1<f64>) -> Array1<f64> {
        let z = sigmoid(&(self.w_iz.dot(x) + self.w_hz.dot(h_prev) + &self.b_z));
        let r = sigmoid(&(self.w_ir.dot(x) + self.w_hr.dot(h_prev) + &self.b_r));
        let n = (self.w_in.dot(x) + self.w_hn.dot(&(&r * h_prev)) + &self.b_n)
            .mapv(f64::tanh);

        let one_minus_z = z.mapv(|v| 1.0 - v);
        &one_minus_z * &n + &z * h_prev
    }

    /// Zero-initialized hidden state.
    #[must_use]
    pub fn init_hidden(&self) -> Array1<f64> {
        Array1::zeros(self.hidden_size)
    }
}

fn sigmoid(x: &Array1<f64>) -> Array1<f64> {
    x.mapv(|v| 1.0 / (1.0 + (-v).exp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_forward_output_shape() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let cell = GruCell::new(11, 16, &mut rng);

        let x = Array1::zeros(11);
        let h = cell.init_hidden();
        let h_next = cell.forward(&x, &h);

        assert_eq!(h_next.len(), 16);
    }

    #[test]
    fn test_hidden_state_is_bounded() {
        // z und h' sind Konvexkombinationen über tanh-Werten
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let cell = GruCell::new(4, 8, &mut rng);

        let mut h = cell.init_hidden();
        for i in 0..50 {
            let x = Array1::from_elem(4, f64::from(i % 10) - 5.0);
            h = cell.forward(&x, &h);
            assert!(h.iter().all(|v| v.abs() <= 1.0), "unbounded at step {i}");
        }
    }

    #[test]
    fn test_seeded_init_is_reproducible() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);

        let cell_a = GruCell::new(11, 8, &mut rng_a);
        let cell_b = GruCell::new(11, 8, &mut rng_b);

        let x = Array1::from_elem(11, 0.3);
        let h = cell_a.init_hidden();
        assert_eq!(cell_a.forward(&x, &h), cell_b.forward(&x, &h));
    }

    #[test]
    fn test_zero_input_zero_state_stays_finite() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let cell = GruCell::new(11, 32, &mut rng);

        let h = cell.forward(&Array1::zeros(11), &cell.init_hidden());
        assert!(h.iter().all(|v| v.is_finite()));
    }
}
