use crate::error::DatasetError;
use crate::library::logger::interface::Logger;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Moves raw photos into `<root>/<category>/` folders for retraining.
pub struct DatasetSorter {
    root: PathBuf,
    categories: Vec<String>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DatasetSorter {
    pub fn new(
        root: PathBuf,
        categories: Vec<String>,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Self {
        Self {
            root,
            categories,
            logger: logger.with_namespace("dataset"),
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn setup_directories(&self) -> Result<(), DatasetError> {
        for category in &self.categories {
            std::fs::create_dir_all(self.root.join(category))?;
        }
        Ok(())
    }

    pub fn move_file(&self, src: &Path, category: &str) -> Result<PathBuf, DatasetError> {
        if !self.categories.iter().any(|c| c == category) {
            return Err(DatasetError::UnknownCategory(category.to_string()));
        }
        if !src.is_file() {
            return Err(DatasetError::SourceNotFound(src.to_path_buf()));
        }

        let target_dir = self.root.join(category);
        std::fs::create_dir_all(&target_dir)?;
        let target = free_target_path(&target_dir, src);

        if std::fs::rename(src, &target).is_err() {
            // rename cannot cross file systems
            std::fs::copy(src, &target)?;
            std::fs::remove_file(src)?;
        }

        self.logger
            .info(&format!("{} -> {}", src.display(), target.display()));

        Ok(target)
    }
}

/// `name.jpg`, then `name_1.jpg`, `name_2.jpg`, ... until one is free.
fn free_target_path(target_dir: &Path, src: &Path) -> PathBuf {
    let file_name = src.file_name().unwrap_or(src.as_os_str());
    let candidate = target_dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let stem = src
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = src
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    (1..)
        .map(|i| target_dir.join(format!("{}_{}{}", stem, i, extension)))
        .find(|path| !path.exists())
        .unwrap_or(candidate)
}
