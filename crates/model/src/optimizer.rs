//! Adam optimizer for the linear readout.

use ndarray::Array1;

/// Adam (Adaptive Moment Estimation) über den Readout-Parametern.
///
/// Führt erste und zweite Momentschätzungen mit Bias-Korrektur; ein
/// gemeinsamer Schrittzähler für Gewichte und Bias.
#[derive(Debug, Clone)]
pub struct Adam {
    /// Step size
    pub learning_rate: f64,
    /// First-moment decay
    pub beta1: f64,
    /// Second-moment decay
    pub beta2: f64,
    /// Numerical stabilizer
    pub epsilon: f64,

    t: i32,
    m_w: Option<Array1<f64>>,
    v_w: Option<Array1<f64>>,
    m_b: f64,
    v_b: f64,
}

impl Adam {
    /// Creates an optimizer with the standard betas (0.9 / 0.999).
    #[must_use]
    pub fn new(learning_rate: f64) -> Self {
        Self {
            learning_rate,
            beta1: 0.9,
            beta2: 0.999,
            epsilon: 1e-8,
            t: 0,
            m_w: None,
            v_w: None,
            m_b: 0.0,
            v_b: 0.0,
        }
    }

    /// One update of weights and bias from their gradients.
    pub fn step(
        &mut self,
        weights: &mut Array1<f64>,
        bias: &mut f64,
        grad_w: &Array1<f64>,
        grad_b: f64,
    ) {
        self.t += 1;

        let m = self
            .m_w
            .get_or_insert_with(|| Array1::zeros(weights.len()));
        let v = self
            .v_w
            .get_or_insert_with(|| Array1::zeros(weights.len()));

        *m = &*m * self.beta1 + grad_w * (1.0 - self.beta1);
        *v = &*v * self.beta2 + &(grad_w * grad_w) * (1.0 - self.beta2);

        let m_hat = &*m / (1.0 - self.beta1.powi(self.t));
        let v_hat = &*v / (1.0 - self.beta2.powi(self.t));

        *weights =
            &*weights - &(&m_hat * self.learning_rate / &(v_hat.mapv(f64::sqrt) + self.epsilon));

        self.m_b = self.m_b * self.beta1 + grad_b * (1.0 - self.beta1);
        self.v_b = self.v_b * self.beta2 + grad_b * grad_b * (1.0 - self.beta2);

        let m_b_hat = self.m_b / (1.0 - self.beta1.powi(self.t));
        let v_b_hat = self.v_b / (1.0 - self.beta2.powi(self.t));

        *bias -= self.learning_rate * m_b_hat / (v_b_hat.sqrt() + self.epsilon);
    }
}
