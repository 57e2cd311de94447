// crates/sync_todos/src/lib.rs

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use checklist_marker::{aggregate_path, is_aggregate_path, pre_completion_form, TaskStatus};
use extract_todos::extract_todos;
use find_markdown_files::find_markdown_files;
use find_todo_origin::find_todo_origin;
use write_todos::{append_todos, AppendError};

/// Runtime configuration for one synchronization run, threaded explicitly
/// into each phase.
pub struct SyncConfig {
    /// Directory of markdown files. The value is prefixed directly onto
    /// file names, so a trailing separator is the caller's responsibility.
    pub directory: String,
    /// Enable verbose logging.
    pub verbose: bool,
}

/// Runs one full synchronization: completions recorded in the aggregate
/// file are propagated back to the source files they came from, then the
/// aggregate file is rebuilt from scratch out of the uncompleted todos of
/// every source file. No state survives between runs.
pub fn sync_todos(config: &SyncConfig) -> Result<()> {
    propagate_completions(config)?;
    rebuild_aggregate(config)?;
    Ok(())
}

/// Phase A: reads the completed todos out of the aggregate file and flips
/// the matching line in the source file each one originated from.
///
/// A todo whose origin cannot be located is skipped with a diagnostic; it
/// will reappear unchanged on the next run unless fixed by hand.
pub fn propagate_completions(config: &SyncConfig) -> Result<()> {
    let aggregate = aggregate_path(&config.directory);
    println!("Opening file: {}", aggregate);

    // A missing or unreadable aggregate simply means there is nothing to
    // propagate, e.g. on the very first run.
    let completed = match extract_todos(&aggregate, TaskStatus::Complete) {
        Ok(todos) => todos,
        Err(err) => {
            eprintln!("{:#}", err);
            return Ok(());
        }
    };

    for todo in &completed {
        let todo = todo.trim();
        println!("Searching original file for: {}", todo);
        match find_todo_origin(todo, &config.directory)? {
            Some(path) => {
                println!("Task found in file {}", path.display());
                if let Err(err) = mark_done_in_source(&path, todo) {
                    eprintln!("{:#}", err);
                }
            }
            None => {
                eprintln!(
                    "Could not find \"{}\" in any source file",
                    pre_completion_form(todo)
                );
            }
        }
    }
    Ok(())
}

/// Replaces the first line of `path` that exactly equals the todo's
/// pre-completion form with the completed form, rewriting the whole file.
/// When the line is no longer present the file is left untouched.
fn mark_done_in_source(path: &Path, completed: &str) -> Result<()> {
    println!("Replacing todo in file: {}", path.display());
    let target = pre_completion_form(completed);

    let content = fs::read_to_string(path)
        .with_context(|| format!("Error reading file {}", path.display()))?;
    let mut lines: Vec<&str> = content.split('\n').collect();

    match lines.iter().position(|line| *line == target) {
        Some(index) => lines[index] = completed,
        None => {
            // The line vanished between locating and rewriting.
            eprintln!(
                "Could not find \"{}\" in file \"{}\"",
                target,
                path.display()
            );
            return Ok(());
        }
    }

    fs::write(path, lines.join("\n"))
        .with_context(|| format!("Error writing file {}", path.display()))?;
    println!(
        "Replaced \"{}\" with \"{}\" in file \"{}\"",
        target,
        completed,
        path.display()
    );
    Ok(())
}

/// Phase B: deletes the aggregate file and regenerates it from the
/// uncompleted todos of every markdown file under the configured directory,
/// in traversal order.
///
/// A single source file that cannot be read contributes nothing and the run
/// carries on; only a failed walk of the directory or an aggregate that
/// cannot be opened at all aborts the run.
pub fn rebuild_aggregate(config: &SyncConfig) -> Result<()> {
    let aggregate = aggregate_path(&config.directory);

    // Clear the previous aggregate, otherwise new todos would pile up
    // behind the old ones. Already gone counts as cleared.
    if let Err(err) = fs::remove_file(&aggregate) {
        if err.kind() != io::ErrorKind::NotFound {
            return Err(err).with_context(|| format!("Error removing {}", aggregate));
        }
    }

    let files = find_markdown_files(&config.directory)
        .with_context(|| format!("Error walking {}", config.directory))?;

    for path in files {
        if is_aggregate_path(&path) {
            continue;
        }
        println!("Opening file: {}", path.display());
        let todos = match extract_todos(&path, TaskStatus::Incomplete) {
            Ok(todos) => todos,
            Err(err) => {
                eprintln!("{:#}", err);
                continue;
            }
        };
        if config.verbose {
            log::debug!(
                "[VERBOSE] {} uncompleted todo(s) in {}",
                todos.len(),
                path.display()
            );
        }
        println!("Writing to file: {}", aggregate);
        match append_todos(&aggregate, &todos) {
            Ok(()) => {}
            Err(err @ AppendError::Open { .. }) => {
                return Err(err).context("Error creating aggregate file");
            }
            Err(err) => eprintln!("{}", err),
        }
    }
    Ok(())
}
