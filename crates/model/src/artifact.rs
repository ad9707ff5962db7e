//! Bincode codec for trained model parameters.

use crate::error::ModelError;
use crate::model::SequenceRegressor;

/// Encodes a trained model for persistence.
///
/// # Errors
/// - [`ModelError::Codec`] when serialization fails.
pub fn to_bytes(model: &SequenceRegressor) -> Result<Vec<u8>, ModelError> {
    Ok(bincode::serialize(model)?)
}

/// Decodes model parameters from artifact bytes.
///
/// The loss history is transient and comes back empty.
///
/// # Errors
/// - [`ModelError::Codec`] for truncated or corrupt artifact bytes.
pub fn from_bytes(bytes: &[u8]) -> Result<SequenceRegressor, ModelError> {
    Ok(bincode::deserialize(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurs_types::{Feature, ModelConfig};
    use ndarray::Array3;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn small_model() -> SequenceRegressor {
        let config = ModelConfig {
            recurrent_widths: vec![6, 3],
            dropout: 0.2,
            epochs: 1,
            batch_size: 8,
            learning_rate: 0.01,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        SequenceRegressor::new(Feature::COUNT, &config, &mut rng)
    }

    #[test]
    fn test_roundtrip_preserves_predictions() {
        let model = small_model();
        let windows = Array3::from_elem((3, 5, Feature::COUNT), 0.4);

        let restored = from_bytes(&to_bytes(&model).unwrap()).unwrap();

        assert_eq!(model.predict(&windows), restored.predict(&windows));
        assert!(restored.loss_history.is_empty());
    }

    #[test]
    fn test_corrupt_bytes_is_codec_error() {
        let err = from_bytes(&[0x00, 0x01, 0x02]).unwrap_err();
        assert!(matches!(err, ModelError::Codec(_)));
    }
}
