use crate::error::ClassifyError;
use crate::image_preprocessor::PreprocessedTensor;

/// Raw per-class scores in model output order. Not assumed to sum to 1.
pub type ProbabilityVector = Vec<f32>;

/// A pre-trained classifier loaded once and invoked many times.
///
/// Implementations are not required to be re-entrant; callers that want
/// concurrency keep one classifier per worker.
pub trait ImageClassifier {
    /// (width, height) of the images the model expects.
    fn input_size(&self) -> (u32, u32);

    /// Number of scores produced per image.
    fn output_dimension(&self) -> usize;

    fn infer(&self, tensor: &PreprocessedTensor) -> Result<ProbabilityVector, ClassifyError>;

    fn input_shape(&self) -> [usize; 4] {
        let (width, height) = self.input_size();
        [1, height as usize, width as usize, 3]
    }
}

pub fn check_input_shape(
    classifier: &dyn ImageClassifier,
    tensor: &PreprocessedTensor,
) -> Result<(), ClassifyError> {
    let expected = classifier.input_shape();
    let actual = tensor.shape();

    if expected != actual {
        return Err(ClassifyError::InferenceShape {
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }

    Ok(())
}
