// crates/find_markdown_files/src/lib.rs

use std::fs;
use std::io;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Recursively collects every markdown file under `directory`.
///
/// The walk is sorted by file name so that repeated runs see the files in
/// the same order. Entries that cannot be read during the walk are skipped;
/// a missing or unreadable root is an error, since no file list can be
/// produced at all.
///
/// The aggregate file, if present, is included like any other markdown
/// file; excluding it is the job of whoever enumerates source files.
pub fn find_markdown_files(directory: &str) -> io::Result<Vec<PathBuf>> {
    let metadata = fs::metadata(directory).map_err(|err| {
        io::Error::new(err.kind(), format!("cannot walk {}: {}", directory, err))
    })?;
    if !metadata.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("cannot walk {}: not a directory", directory),
        ));
    }

    let files: Vec<PathBuf> = WalkDir::new(directory)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|s| s.to_str())
                .map(|ext| ext == "md")
                .unwrap_or(false)
        })
        .collect();

    Ok(files)
}
