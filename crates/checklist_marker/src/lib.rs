// crates/checklist_marker/src/lib.rs

//! Shared checklist constants and line helpers used throughout the
//! todo-synchronization tool-chain.

use std::path::Path;

/// Marker prefix of an uncompleted checklist line.
pub const INCOMPLETE_MARKER: &str = "- [ ]";

/// Marker prefix of a completed checklist line.
pub const COMPLETE_MARKER: &str = "- [x]";

/// File name of the aggregate file, created inside the target directory.
pub const AGGREGATE_FILE_NAME: &str = "output.md";

/// Completion status of a checklist line, used to select which marker the
/// extraction routines search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Complete,
    Incomplete,
}

impl TaskStatus {
    /// The exact marker prefix for this status.
    pub fn marker(self) -> &'static str {
        match self {
            TaskStatus::Complete => COMPLETE_MARKER,
            TaskStatus::Incomplete => INCOMPLETE_MARKER,
        }
    }
}

/// Normalizes a checklist line: surrounding whitespace trimmed, exactly one
/// trailing newline.
pub fn normalize_todo_line(line: &str) -> String {
    format!("{}\n", line.trim())
}

/// Rewrites the first complete marker back to the incomplete form, the
/// shape a source file still carries before it has been told the todo is
/// done.
pub fn pre_completion_form(line: &str) -> String {
    line.replacen(COMPLETE_MARKER, INCOMPLETE_MARKER, 1)
}

/// Whether a path refers to the aggregate file. A filename suffix match,
/// mirroring how the aggregate path itself is built by concatenation.
pub fn is_aggregate_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(AGGREGATE_FILE_NAME)
}

/// Builds the aggregate file path by prefixing the directory flag onto the
/// fixed file name. A trailing separator is the caller's responsibility.
pub fn aggregate_path(directory: &str) -> String {
    format!("{}{}", directory, AGGREGATE_FILE_NAME)
}
