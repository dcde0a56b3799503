use crate::decision_engine::PredictionReport;
use crate::error::ClassifyError;
use crate::report_display::interface::ReportDisplay;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum Shown {
    Report(PathBuf, PredictionReport),
    Error(PathBuf, String),
}

#[derive(Default)]
pub struct ReportDisplayFake {
    pub shown: Vec<Shown>,
}

impl ReportDisplayFake {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReportDisplay for ReportDisplayFake {
    fn show_report(&mut self, source: &Path, report: &PredictionReport) -> std::io::Result<()> {
        self.shown
            .push(Shown::Report(source.to_path_buf(), report.clone()));
        Ok(())
    }

    fn show_error(&mut self, source: &Path, error: &ClassifyError) -> std::io::Result<()> {
        self.shown
            .push(Shown::Error(source.to_path_buf(), error.to_string()));
        Ok(())
    }
}
