use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Classify clothing photos with a pre-trained image model.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
    /// ONNX model file.
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,
    /// Label file, one class per line in model output order.
    #[arg(long, global = true)]
    pub labels: Option<PathBuf>,
    /// Model input width in pixels.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: Option<u32>,
    /// Model input height in pixels.
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub height: Option<u32>,
    /// Root folder of the per-category training images.
    #[arg(long, global = true)]
    pub dataset_dir: Option<PathBuf>,
    /// Category for `sort`; repeat for several. Defaults to the built-in list.
    #[arg(long = "category", global = true)]
    pub categories: Vec<String>,
    /// Use a seeded fake classifier instead of loading a model.
    #[arg(long, global = true, default_value_t = false)]
    pub fake: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Classify one image and print the report.
    Classify { image: PathBuf },
    /// Read image paths from stdin and classify each.
    Shell,
    /// Open a window to classify images by path or drag and drop.
    Gui,
    /// Move photos into per-category training folders.
    Sort,
}

impl Args {
    pub fn config(&self) -> Config {
        let defaults = Config::default();
        let (default_width, default_height) = defaults.input_size;

        Config {
            model_path: self.model.clone().unwrap_or(defaults.model_path),
            labels_path: self.labels.clone().unwrap_or(defaults.labels_path),
            input_size: (
                self.width.unwrap_or(default_width),
                self.height.unwrap_or(default_height),
            ),
            dataset_dir: self.dataset_dir.clone().unwrap_or(defaults.dataset_dir),
            categories: if self.categories.is_empty() {
                defaults.categories
            } else {
                self.categories.clone()
            },
            use_fake_classifier: self.fake,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_classify_with_overrides() {
        let args = Args::try_parse_from([
            "clothing-classifier",
            "classify",
            "shirt.jpg",
            "--model",
            "models/clothing.onnx",
            "--width",
            "192",
        ])
        .unwrap();

        let config = args.config();

        assert_eq!(
            args.command,
            Command::Classify {
                image: PathBuf::from("shirt.jpg")
            }
        );
        assert_eq!(config.model_path, PathBuf::from("models/clothing.onnx"));
        assert_eq!(config.labels_path, PathBuf::from("labels.txt"));
        assert_eq!(config.input_size, (192, 224));
        assert!(!config.use_fake_classifier);
    }

    #[test]
    fn test_sort_with_categories() {
        let args = Args::try_parse_from([
            "clothing-classifier",
            "sort",
            "--category",
            "socken",
            "--category",
            "schuhe",
        ])
        .unwrap();

        assert_eq!(args.config().categories, vec!["socken", "schuhe"]);
    }

    #[test]
    fn test_zero_input_size_is_rejected() {
        for flag in ["--width", "--height"] {
            let result = Args::try_parse_from(["clothing-classifier", "shell", flag, "0"]);
            assert!(result.is_err(), "{} 0 was accepted", flag);
        }

        let args = Args::try_parse_from(["clothing-classifier", "shell", "--height", "1"]).unwrap();
        assert_eq!(args.config().input_size, (224, 1));
    }

    #[test]
    fn test_classify_requires_image() {
        assert!(Args::try_parse_from(["clothing-classifier", "classify"]).is_err());
    }
}
