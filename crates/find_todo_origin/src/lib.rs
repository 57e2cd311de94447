// crates/find_todo_origin/src/lib.rs

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use checklist_marker::{is_aggregate_path, pre_completion_form};
use find_markdown_files::find_markdown_files;

/// Searches the markdown files under `directory` for the file that still
/// carries `completed` in its uncompleted form, returning the first match in
/// traversal order. The aggregate file is never a candidate.
///
/// Matching is exact line equality against the file's lines as stored, so a
/// source line that has drifted in whitespace will not be found. `Ok(None)`
/// means no source file carries the todo; only a failed walk of `directory`
/// is an error.
pub fn find_todo_origin(completed: &str, directory: &str) -> Result<Option<PathBuf>> {
    let files = find_markdown_files(directory)
        .with_context(|| format!("Error walking {}", directory))?;

    // Source files have not been told the todo is done, so search for the
    // incomplete form.
    let target = pre_completion_form(completed.trim());

    for path in files {
        if is_aggregate_path(&path) {
            continue;
        }
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) => {
                eprintln!("Error opening file {}: {}", path.display(), err);
                continue;
            }
        };
        let reader = BufReader::new(file);
        for line in reader.lines() {
            match line {
                Ok(line) if line == target => {
                    log::debug!("todo found in {}", path.display());
                    return Ok(Some(path));
                }
                Ok(_) => {}
                Err(err) => {
                    eprintln!("Error reading file {}: {}", path.display(), err);
                    break;
                }
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_finds_the_owning_file() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.md"), "# Notes\nno tasks here\n").unwrap();
        fs::write(dir.path().join("b.md"), "- [ ] Buy milk\n").unwrap();

        let origin = find_todo_origin("- [x] Buy milk", dir.path().to_str().unwrap())
            .unwrap()
            .expect("todo should be located");
        assert_eq!(origin, dir.path().join("b.md"));
    }

    #[test]
    fn test_first_file_in_traversal_order_wins() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.md"), "- [ ] duplicated\n").unwrap();
        fs::write(dir.path().join("z.md"), "- [ ] duplicated\n").unwrap();

        let origin = find_todo_origin("- [x] duplicated", dir.path().to_str().unwrap())
            .unwrap()
            .expect("todo should be located");
        assert_eq!(origin, dir.path().join("a.md"));
    }

    #[test]
    fn test_aggregate_file_is_never_a_candidate() {
        let dir = tempdir().expect("Failed to create temp dir");
        // Only the aggregate file carries the incomplete form.
        fs::write(dir.path().join("output.md"), "- [ ] Buy milk\n").unwrap();

        let origin =
            find_todo_origin("- [x] Buy milk", dir.path().to_str().unwrap()).unwrap();
        assert!(origin.is_none());
    }

    #[test]
    fn test_no_match_is_not_an_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.md"), "- [ ] something else\n").unwrap();

        let origin =
            find_todo_origin("- [x] Buy milk", dir.path().to_str().unwrap()).unwrap();
        assert!(origin.is_none());
    }

    #[test]
    fn test_match_is_whitespace_sensitive_on_the_source_side() {
        let dir = tempdir().expect("Failed to create temp dir");
        // Indented and trailing-space variants are not exact matches.
        fs::write(dir.path().join("a.md"), "  - [ ] Buy milk\n").unwrap();
        fs::write(dir.path().join("b.md"), "- [ ] Buy milk \n").unwrap();

        let origin =
            find_todo_origin("- [x] Buy milk", dir.path().to_str().unwrap()).unwrap();
        assert!(origin.is_none());
    }

    #[test]
    fn test_completed_line_may_carry_surrounding_whitespace() {
        let dir = tempdir().expect("Failed to create temp dir");
        fs::write(dir.path().join("a.md"), "- [ ] Buy milk\n").unwrap();

        // The aggregate-side line is normalized before matching.
        let origin = find_todo_origin("  - [x] Buy milk\n", dir.path().to_str().unwrap())
            .unwrap()
            .expect("todo should be located");
        assert_eq!(origin, dir.path().join("a.md"));
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let result = find_todo_origin("- [x] Buy milk", "/no/such/dir/");
        assert!(result.is_err());
    }
}
