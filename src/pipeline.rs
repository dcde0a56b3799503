pub mod session;

use crate::config::Config;
use crate::decision_engine::{decide, PredictionReport};
use crate::error::ClassifyError;
use crate::image_classifier::impl_fake::ImageClassifierFake;
use crate::image_classifier::impl_tract_onnx::ImageClassifierTractOnnx;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_classifier::model_config::ModelConfig;
use crate::image_preprocessor::ImagePreprocessor;
use crate::label_catalog::LabelCatalog;
use crate::library::logger::interface::Logger;
use std::path::Path;
use std::sync::Arc;

const FAKE_CLASSIFIER_SEED: u64 = 42;

/// Label catalog and classifier bound together, checked once on assembly.
pub struct Pipeline {
    catalog: LabelCatalog,
    classifier: Box<dyn ImageClassifier>,
    preprocessor: ImagePreprocessor,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl Pipeline {
    pub fn new(
        catalog: LabelCatalog,
        classifier: Box<dyn ImageClassifier>,
        preprocessor: ImagePreprocessor,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        if catalog.len() != classifier.output_dimension() {
            return Err(ClassifyError::CatalogMismatch {
                labels: catalog.len(),
                outputs: classifier.output_dimension(),
            });
        }

        Ok(Self {
            catalog,
            classifier,
            preprocessor,
            logger: logger.with_namespace("pipeline"),
        })
    }

    pub fn from_config(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let catalog = LabelCatalog::load(&config.labels_path)?;
        logger.info(&format!(
            "Classes: {}",
            catalog.iter().collect::<Vec<_>>().join(", ")
        ));

        let classifier: Box<dyn ImageClassifier> = if config.use_fake_classifier {
            logger.info("Using fake classifier");
            Box::new(ImageClassifierFake::random(
                catalog.len(),
                config.input_size,
                FAKE_CLASSIFIER_SEED,
            )?)
        } else {
            Box::new(ImageClassifierTractOnnx::load(
                ModelConfig {
                    onnx_model_path: config.model_path.clone(),
                    input_shape: config.input_size,
                },
                logger.clone(),
            )?)
        };

        let preprocessor = ImagePreprocessor::new(classifier.input_size());

        Self::new(catalog, classifier, preprocessor, logger)
    }

    pub fn classify(&self, image_path: &Path) -> Result<PredictionReport, ClassifyError> {
        let bytes = std::fs::read(image_path).map_err(|_| ClassifyError::SourceNotFound {
            path: image_path.to_path_buf(),
        })?;

        let report = self.classify_bytes(&bytes)?;

        self.logger.info(&format!(
            "{} -> {} ({:.4})",
            image_path.display(),
            report.top_label,
            report.top_confidence
        ));

        Ok(report)
    }

    pub fn classify_bytes(&self, image_bytes: &[u8]) -> Result<PredictionReport, ClassifyError> {
        let tensor = self.preprocessor.transform(image_bytes)?;
        let probabilities = self.classifier.infer(&tensor)?;
        decide(&probabilities, &self.catalog)
    }
}
