//! Autoregressive multi-step rollout.

use kurs_model::SequenceRegressor;
use kurs_types::Feature;
use ndarray::{Array2, Axis};

/// Erzeugt das Folgefenster aus einem Fenster und einer Vorhersage.
///
/// Das Fenster rückt um einen Zeitschritt nach links; die neue letzte
/// Zeile ist die dabei herausgefallene älteste Zeile, in der nur der
/// Close-Slot durch die Vorhersage ersetzt wird. Die übrigen zehn
/// Feature-Slots werden während des Rollouts bewusst nicht neu
/// berechnet (bekannte Näherung, Teil des Verhaltensvertrags).
/// Reine Funktion: das Eingangsfenster bleibt unverändert.
#[must_use]
pub fn advance_window(window: &Array2<f64>, prediction: f64) -> Array2<f64> {
    let look_back = window.nrows();
    let mut next = Array2::zeros(window.raw_dim());

    for t in 1..look_back {
        next.row_mut(t - 1).assign(&window.row(t));
    }
    next.row_mut(look_back - 1).assign(&window.row(0));
    next[[look_back - 1, Feature::Close.index()]] = prediction;

    next
}

/// Rolls the model forward `steps` times from the seed window.
///
/// Each step predicts one scaled Close and feeds it back via
/// [`advance_window`]. Returns the scaled predictions oldest-to-newest;
/// the caller inverts scaling over the whole sequence at once.
#[must_use]
pub fn run_rollout(
    model: &SequenceRegressor,
    seed_window: &Array2<f64>,
    steps: usize,
) -> Vec<f64> {
    let mut current = seed_window.to_owned();
    let mut predictions = Vec::with_capacity(steps);

    for _ in 0..steps {
        let batch = current.clone().insert_axis(Axis(0));
        let prediction = model.predict(&batch)[0];
        predictions.push(prediction);
        current = advance_window(&current, prediction);
    }

    predictions
}
