use crate::config::Config;
use crate::decision_engine::PredictionReport;
use crate::error::ClassifyError;
use crate::library::logger::interface::Logger;
use crate::pipeline::Pipeline;
use std::cell::OnceCell;
use std::path::Path;
use std::sync::Arc;

type PipelineBuilder = Box<dyn Fn() -> Result<Pipeline, ClassifyError>>;

/// Builds the pipeline on first use and keeps it for the session's lifetime.
/// A failed build is not cached; the next request tries again.
pub struct ClassifierSession {
    build: PipelineBuilder,
    pipeline: OnceCell<Pipeline>,
}

impl ClassifierSession {
    pub fn new(build: PipelineBuilder) -> Self {
        Self {
            build,
            pipeline: OnceCell::new(),
        }
    }

    pub fn from_config(config: Config, logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self::new(Box::new(move || {
            Pipeline::from_config(&config, logger.clone())
        }))
    }

    pub fn pipeline(&self) -> Result<&Pipeline, ClassifyError> {
        if let Some(pipeline) = self.pipeline.get() {
            return Ok(pipeline);
        }

        let built = (self.build)()?;
        Ok(self.pipeline.get_or_init(|| built))
    }

    pub fn classify(&self, image_path: &Path) -> Result<PredictionReport, ClassifyError> {
        self.pipeline()?.classify(image_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_classifier::impl_fake::ImageClassifierFake;
    use crate::image_preprocessor::ImagePreprocessor;
    use crate::label_catalog::{parse, LabelCatalog};
    use crate::library::logger::impl_fake::LoggerFake;
    use crate::test_fixture::{encode_png, solid_rgb, write_file, LABELS};
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting_session(builds: Rc<Cell<usize>>, fail_first: bool) -> ClassifierSession {
        ClassifierSession::new(Box::new(move || {
            builds.set(builds.get() + 1);
            if fail_first && builds.get() == 1 {
                return Err(ClassifyError::ModelLoad {
                    path: "model.onnx".into(),
                    reason: "not yet".to_string(),
                });
            }
            Pipeline::new(
                LabelCatalog::from_labels(parse(LABELS)),
                Box::new(ImageClassifierFake::new(vec![0.1, 0.2, 0.6, 0.1], (8, 8))),
                ImagePreprocessor::new((8, 8)),
                Arc::new(LoggerFake::new()),
            )
        }))
    }

    #[test]
    fn test_pipeline_is_built_lazily_once() {
        let builds = Rc::new(Cell::new(0));
        let session = counting_session(builds.clone(), false);
        assert_eq!(builds.get(), 0);

        let dir = tempfile::tempdir().unwrap();
        let image = write_file(
            dir.path(),
            "coat.png",
            &encode_png(&solid_rgb(10, 10, [1, 1, 1])),
        );

        let first = session.classify(&image).unwrap();
        let second = session.classify(&image).unwrap();

        assert_eq!(builds.get(), 1);
        assert_eq!(first, second);
        assert_eq!(first.top_label, "jacken");
    }

    #[test]
    fn test_failed_build_is_retried() {
        let builds = Rc::new(Cell::new(0));
        let session = counting_session(builds.clone(), true);

        assert!(matches!(
            session.pipeline(),
            Err(ClassifyError::ModelLoad { .. })
        ));
        assert!(session.pipeline().is_ok());
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn test_errors_do_not_poison_session() {
        let builds = Rc::new(Cell::new(0));
        let session = counting_session(builds.clone(), false);
        let dir = tempfile::tempdir().unwrap();

        let missing = session.classify(&dir.path().join("missing.png"));
        let image = write_file(
            dir.path(),
            "ok.png",
            &encode_png(&solid_rgb(10, 10, [1, 1, 1])),
        );
        let ok = session.classify(&image);

        assert!(matches!(missing, Err(ClassifyError::SourceNotFound { .. })));
        assert!(ok.is_ok());
    }
}
