pub mod classify_repl;
pub mod sort_repl;

use crate::decision_engine::PredictionReport;
use crate::error::ClassifyError;
use crate::pipeline::session::ClassifierSession;
use crate::report_display::interface::ReportDisplay;
use std::path::Path;

/// One request from any front end: classify, then show the report or the error.
pub fn classify_and_show(
    session: &ClassifierSession,
    image_path: &Path,
    display: &mut dyn ReportDisplay,
) -> std::io::Result<Result<PredictionReport, ClassifyError>> {
    let result = session.classify(image_path);

    match &result {
        Ok(report) => display.show_report(image_path, report)?,
        Err(error) => display.show_error(image_path, error)?,
    }

    Ok(result)
}

/// Strips whitespace and the quotes terminals add when a file is dropped in.
pub fn clean_path_input(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| trimmed.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_path_input() {
        assert_eq!(clean_path_input("  /tmp/a.jpg \n"), "/tmp/a.jpg");
        assert_eq!(clean_path_input("\"/tmp/my shirt.jpg\""), "/tmp/my shirt.jpg");
        assert_eq!(clean_path_input("'/tmp/b.png'"), "/tmp/b.png");
        assert_eq!(clean_path_input("\"half"), "\"half");
    }
}
