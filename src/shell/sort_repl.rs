use crate::dataset_sorter::DatasetSorter;
use crate::error::DatasetError;
use crate::shell::clean_path_input;
use std::io::{BufRead, Write};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
enum Choice {
    Category(String),
    Skip,
    Invalid,
}

fn parse_choice(input: &str, categories: &[String]) -> Choice {
    let input = input.trim().to_lowercase();
    if matches!(input.as_str(), "x" | "q" | "exit") {
        return Choice::Skip;
    }

    match input.parse::<usize>() {
        Ok(n) if (1..=categories.len()).contains(&n) => Choice::Category(categories[n - 1].clone()),
        _ => Choice::Invalid,
    }
}

/// Asks for an image path, then a category number. Empty path or EOF ends it.
/// Returns how many files were moved.
pub fn run<R: BufRead, W: Write>(
    sorter: &DatasetSorter,
    input: R,
    mut out: W,
) -> Result<usize, DatasetError> {
    sorter.setup_directories()?;

    writeln!(out, "Categories:")?;
    for (i, category) in sorter.categories().iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, category)?;
    }
    writeln!(out, "  x) skip")?;
    writeln!(out, "{}", "-".repeat(50))?;

    let mut moved = 0;
    let mut lines = input.lines();

    loop {
        write!(out, "\nImage path (Enter to quit): ")?;
        out.flush()?;
        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        let path = clean_path_input(&line);
        if path.is_empty() {
            break;
        }

        let src = Path::new(path);
        if !src.is_file() {
            writeln!(out, "File not found.")?;
            continue;
        }

        write!(out, "Category (1-{} or x): ", sorter.categories().len())?;
        out.flush()?;
        let choice = match lines.next() {
            Some(line) => parse_choice(&line?, sorter.categories()),
            None => break,
        };

        match choice {
            Choice::Category(category) => {
                let target = sorter.move_file(src, &category)?;
                writeln!(out, "-> {} -> {}", src.display(), target.display())?;
                moved += 1;
            }
            Choice::Skip => writeln!(out, "Skipped.")?,
            Choice::Invalid => writeln!(out, "Invalid choice, skipped.")?,
        }
    }

    writeln!(out, "\nDone. {} file(s) sorted.", moved)?;
    Ok(moved)
}
