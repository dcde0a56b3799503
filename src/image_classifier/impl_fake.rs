use crate::error::ClassifyError;
use crate::image_classifier::interface::{check_input_shape, ImageClassifier, ProbabilityVector};
use crate::image_preprocessor::PreprocessedTensor;
use rand::distr::{Distribution, Uniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Returns the same scores for every image.
pub struct ImageClassifierFake {
    scores: ProbabilityVector,
    input_size: (u32, u32),
}

impl ImageClassifierFake {
    pub fn new(scores: ProbabilityVector, input_size: (u32, u32)) -> Self {
        Self {
            scores,
            input_size,
        }
    }

    /// Seeded scores that sum to 1, for running the shell without a model.
    pub fn random(
        dimension: usize,
        input_size: (u32, u32),
        seed: u64,
    ) -> Result<Self, ClassifyError> {
        let mut rng = StdRng::seed_from_u64(seed);

        let dist = Uniform::new(0.0f32, 1.0).map_err(|e| ClassifyError::ModelLoad {
            path: PathBuf::from("<fake>"),
            reason: e.to_string(),
        })?;

        let raw: Vec<f32> = (0..dimension).map(|_| dist.sample(&mut rng)).collect();
        let total: f32 = raw.iter().sum();
        let scores = if total > 0.0 {
            raw.iter().map(|s| s / total).collect()
        } else {
            raw
        };

        Ok(Self::new(scores, input_size))
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn input_size(&self) -> (u32, u32) {
        self.input_size
    }

    fn output_dimension(&self) -> usize {
        self.scores.len()
    }

    fn infer(&self, tensor: &PreprocessedTensor) -> Result<ProbabilityVector, ClassifyError> {
        check_input_shape(self, tensor)?;
        Ok(self.scores.clone())
    }
}
