use chrono::Offset;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub labels_path: PathBuf,
    /// (width, height) the classifier was trained on.
    pub input_size: (u32, u32),
    pub dataset_dir: PathBuf,
    pub categories: Vec<String>,
    pub logger_timezone: chrono::FixedOffset,
    pub use_fake_classifier: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("model.onnx"),
            labels_path: PathBuf::from("labels.txt"),
            input_size: (224, 224),
            dataset_dir: PathBuf::from("data/train"),
            categories: ["hose", "pullover", "jacken", "sonstiges"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            logger_timezone: central_european_time(),
            use_fake_classifier: false,
        }
    }
}

fn central_european_time() -> chrono::FixedOffset {
    chrono::FixedOffset::east_opt(3600).unwrap_or(chrono::Utc.fix())
}
