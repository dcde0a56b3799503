use crate::decision_engine::PredictionReport;
use crate::error::ClassifyError;
use crate::report_display::interface::ReportDisplay;
use std::io::{Stderr, Stdout, Write};
use std::path::Path;

const RULE_WIDTH: usize = 50;

pub struct ReportDisplayConsole<O: Write, E: Write> {
    out: O,
    err: E,
}

impl ReportDisplayConsole<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write, E: Write> ReportDisplayConsole<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> (O, E) {
        (self.out, self.err)
    }
}

pub fn render_report(report: &PredictionReport) -> String {
    let rule = "-".repeat(RULE_WIDTH);
    let width = report
        .per_class
        .iter()
        .map(|c| c.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![
        rule.clone(),
        format!("Class:       {}", report.top_label),
        format!(
            "Confidence:  {:.4}  ({:.1} %)",
            report.top_confidence,
            report.top_confidence * 100.0
        ),
        rule.clone(),
    ];

    for class in report.ranked() {
        lines.push(format!(
            "  {:<width$}  {:>6.1} %",
            class.label,
            class.probability * 100.0,
            width = width
        ));
    }

    lines.push(rule);
    lines.join("\n")
}

impl<O: Write, E: Write> ReportDisplay for ReportDisplayConsole<O, E> {
    fn show_report(&mut self, source: &Path, report: &PredictionReport) -> std::io::Result<()> {
        writeln!(self.out, "{}", source.display())?;
        writeln!(self.out, "{}", render_report(report))?;
        self.out.flush()
    }

    fn show_error(&mut self, source: &Path, error: &ClassifyError) -> std::io::Result<()> {
        writeln!(self.err, "{}: {}", source.display(), error)?;
        self.err.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision_engine::decide;
    use crate::label_catalog::{parse, LabelCatalog};
    use crate::test_fixture::LABELS;

    #[test]
    fn test_report_has_top_label_percentage_and_all_classes() {
        let catalog = LabelCatalog::from_labels(parse(LABELS));
        let report = decide(&[0.1, 0.7, 0.15, 0.05], &catalog).unwrap();
        let mut display = ReportDisplayConsole::new(Vec::new(), Vec::new());

        display
            .show_report(Path::new("shirt.jpg"), &report)
            .unwrap();
        let (out, err) = display.into_inner();
        let text = String::from_utf8(out).unwrap();

        assert!(err.is_empty());
        assert!(text.starts_with("shirt.jpg\n"));
        assert!(text.contains("Class:       pullover"));
        assert!(text.contains("(70.0 %)"));
        for label in ["hose", "pullover", "jacken", "sonstiges"] {
            assert!(text.contains(label));
        }
        let pullover = text.find("\n  pullover").unwrap();
        let hose = text.find("\n  hose").unwrap();
        assert!(pullover < hose);
    }

    #[test]
    fn test_error_goes_to_err_stream() {
        let mut display = ReportDisplayConsole::new(Vec::new(), Vec::new());

        display
            .show_error(
                Path::new("x.jpg"),
                &ClassifyError::CatalogMismatch {
                    labels: 4,
                    outputs: 3,
                },
            )
            .unwrap();
        let (out, err) = display.into_inner();

        assert!(out.is_empty());
        assert!(String::from_utf8(err).unwrap().starts_with("x.jpg: Label catalog has 4"));
    }
}
