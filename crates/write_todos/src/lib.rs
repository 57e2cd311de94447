use std::fs::OpenOptions;
use std::io::{self, Write};

use thiserror::Error;

/// Failure modes of appending to the aggregate file. Opening is kept apart
/// from writing because callers abort the run on the former and degrade on
/// the latter.
#[derive(Debug, Error)]
pub enum AppendError {
    #[error("could not open {path} for appending: {source}")]
    Open { path: String, source: io::Error },
    #[error("could not write todo to {path}: {source}")]
    Write { path: String, source: io::Error },
}

/// Appends already-normalized todo lines to the file at `path`, creating it
/// if absent. Existing content is never rewritten; clearing the aggregate
/// between runs is a separate, explicit step.
///
/// Stops at the first failed write, so the remaining lines of the batch are
/// not attempted.
pub fn append_todos(path: &str, todos: &[String]) -> Result<(), AppendError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| AppendError::Open {
            path: path.to_string(),
            source,
        })?;

    for todo in todos {
        file.write_all(todo.as_bytes())
            .map_err(|source| AppendError::Write {
                path: path.to_string(),
                source,
            })?;
    }
    Ok(())
}
