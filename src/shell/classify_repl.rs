use crate::pipeline::session::ClassifierSession;
use crate::report_display::interface::ReportDisplay;
use crate::shell::{classify_and_show, clean_path_input};
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ReplSummary {
    pub classified: usize,
    pub failed: usize,
}

/// Reads image paths until an empty line or EOF. A failed request is
/// reported and the loop keeps going.
pub fn run<R: BufRead, W: Write>(
    session: &ClassifierSession,
    input: R,
    mut prompt: W,
    display: &mut dyn ReportDisplay,
) -> std::io::Result<ReplSummary> {
    let mut summary = ReplSummary::default();
    let mut lines = input.lines();

    loop {
        write!(prompt, "\nImage path (Enter to quit): ")?;
        prompt.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let path = clean_path_input(&line);
        if path.is_empty() {
            break;
        }

        match classify_and_show(session, Path::new(path), display)? {
            Ok(_) => summary.classified += 1,
            Err(_) => summary.failed += 1,
        }
    }

    Ok(summary)
}
