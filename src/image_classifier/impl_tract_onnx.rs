use crate::error::ClassifyError;
use crate::image_classifier::interface::{check_input_shape, ImageClassifier, ProbabilityVector};
use crate::image_classifier::model_config::ModelConfig;
use crate::image_preprocessor::PreprocessedTensor;
use crate::library::logger::interface::Logger;
use std::sync::Arc;
use tract_onnx::prelude::*;

type Plan = SimplePlan<TypedFact, Box<dyn TypedOp>, TypedModel>;

pub struct ImageClassifierTractOnnx {
    model: Plan,
    config: ModelConfig,
    output_dimension: usize,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierTractOnnx {
    pub fn load(
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let logger = logger.with_namespace("tract_onnx");

        if !config.onnx_model_path.is_file() {
            return Err(load_error(&config, "file does not exist"));
        }

        logger.info(&format!(
            "Loading model {}",
            config.onnx_model_path.display()
        ));

        let (width, height) = config.input_shape;
        let model = tract_onnx::onnx()
            .model_for_path(&config.onnx_model_path)
            .and_then(|model| {
                model.with_input_fact(0, f32::fact([1, height as usize, width as usize, 3]).into())
            })
            .and_then(|model| model.into_optimized())
            .map_err(|e| load_error(&config, e))?;

        Self::from_typed_model(model, config, logger)
    }

    fn from_typed_model(
        model: TypedModel,
        config: ModelConfig,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let output_dimension = concrete_output_dimension(&model)
            .ok_or_else(|| load_error(&config, "output shape is not concrete"))?;

        let model = model
            .into_runnable()
            .map_err(|e| load_error(&config, e))?;

        logger.info(&format!("Model ready, {} outputs", output_dimension));

        Ok(Self {
            model,
            config,
            output_dimension,
            logger,
        })
    }
}

fn load_error(config: &ModelConfig, reason: impl ToString) -> ClassifyError {
    ClassifyError::ModelLoad {
        path: config.onnx_model_path.clone(),
        reason: reason.to_string(),
    }
}

/// `[1, N]` and `[N]` both mean N classes.
fn concrete_output_dimension(model: &TypedModel) -> Option<usize> {
    let fact = model.output_fact(0).ok()?;
    let dims = fact.shape.as_concrete()?;

    match dims {
        [] => None,
        [n] => Some(*n),
        [_, rest @ ..] => Some(rest.iter().product()),
    }
}

impl ImageClassifier for ImageClassifierTractOnnx {
    fn input_size(&self) -> (u32, u32) {
        self.config.input_shape
    }

    fn output_dimension(&self) -> usize {
        self.output_dimension
    }

    fn infer(&self, tensor: &PreprocessedTensor) -> Result<ProbabilityVector, ClassifyError> {
        check_input_shape(self, tensor)?;

        let input = tensor.as_array().clone().into_tensor();

        let outputs = self
            .model
            .run(tvec!(input.into_tvalue()))
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let output = outputs
            .first()
            .ok_or_else(|| ClassifyError::Inference("model produced no outputs".to_string()))?
            .to_array_view::<f32>()
            .map_err(|e| ClassifyError::Inference(e.to_string()))?;

        let scores: ProbabilityVector = output.iter().copied().collect();

        check_score_count(scores, self.output_dimension).inspect_err(|e| {
            self.logger.error(&e.to_string());
        })
    }
}

fn check_score_count(
    scores: ProbabilityVector,
    expected: usize,
) -> Result<ProbabilityVector, ClassifyError> {
    if scores.len() != expected {
        return Err(ClassifyError::Inference(format!(
            "expected {} scores, model returned {}",
            expected,
            scores.len()
        )));
    }
    Ok(scores)
}
