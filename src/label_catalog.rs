use crate::error::ClassifyError;
use std::path::Path;

/// Ordered class names. `labels[i]` names position `i` of every score
/// vector the classifier returns.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCatalog {
    labels: Vec<String>,
}

impl LabelCatalog {
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let content = std::fs::read_to_string(path).map_err(|_| ClassifyError::SourceNotFound {
            path: path.to_path_buf(),
        })?;

        let labels = parse(&content);
        if labels.is_empty() {
            return Err(ClassifyError::EmptyCatalog {
                path: path.to_path_buf(),
            });
        }

        Ok(Self { labels })
    }

    pub fn from_labels(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// One label per line. Blank lines and `#` comments are skipped; a line
/// like `0 hose` keeps only what follows the first space. File order, not
/// the leading numeral, decides the index.
pub fn parse(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(' ') {
            Some((_, name)) => name.trim().to_string(),
            None => line.to_string(),
        })
        .collect()
}
