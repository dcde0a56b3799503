use std::path::PathBuf;
use thiserror::Error;

// Errors of a single classification request. None of them is transient.
#[derive(Error, Debug)]
pub enum ClassifyError {
    #[error("File not found: {}", .path.display())]
    SourceNotFound { path: PathBuf },
    #[error("Label file {} contains no labels", .path.display())]
    EmptyCatalog { path: PathBuf },
    #[error("Failed to decode image: {0}")]
    Decode(String),
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
    #[error("Failed to load model {}: {reason}", .path.display())]
    ModelLoad { path: PathBuf, reason: String },
    #[error("Model expects input shape {expected:?} but got {actual:?}")]
    InferenceShape {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },
    #[error("Inference failed: {0}")]
    Inference(String),
    #[error("Label catalog has {labels} entries but the model produces {outputs} scores")]
    CatalogMismatch { labels: usize, outputs: usize },
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("File not found: {}", .0.display())]
    SourceNotFound(PathBuf),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error("Window error: {0}")]
    Gui(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
