use crate::decision_engine::PredictionReport;
use crate::error::ClassifyError;
use std::path::Path;

/// Where a front end puts the outcome of one classification request.
pub trait ReportDisplay {
    fn show_report(&mut self, source: &Path, report: &PredictionReport) -> std::io::Result<()>;

    fn show_error(&mut self, source: &Path, error: &ClassifyError) -> std::io::Result<()>;
}
