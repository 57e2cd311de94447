use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use checklist_marker::{normalize_todo_line, TaskStatus};

/// Reads the given markdown file and returns every checklist line matching
/// `status`, top to bottom. Each returned item is the trimmed line plus
/// exactly one trailing newline.
///
/// # Arguments
///
/// * `path` - Path to the markdown file.
/// * `status` - Which completion marker to collect.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or read. A file with no
/// matching checklist lines is not an error; it yields an empty vector.
pub fn extract_todos<P: AsRef<Path>>(path: P, status: TaskStatus) -> Result<Vec<String>> {
    let path_ref = path.as_ref();
    let file = File::open(path_ref)
        .with_context(|| format!("Error opening file {}", path_ref.display()))?;
    let reader = BufReader::new(file);
    let marker = status.marker();

    let mut todos = Vec::new();
    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Error reading file {}", path_ref.display()))?;
        if line.trim().starts_with(marker) {
            todos.push(normalize_todo_line(&line));
        }
    }
    Ok(todos)
}
