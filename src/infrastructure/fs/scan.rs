//! Source discovery
//!
//! Walks a source tree for command files. Hidden files and `.gitignore`
//! rules are not applied: every `.json`/`.yaml`/`.yml` file counts.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::domain::value_objects::Format;
use crate::error::{AdapterError, AdapterResult};

/// Recursively list source command files under `root`, sorted
pub fn scan_command_files(root: &Path) -> AdapterResult<Vec<PathBuf>> {
    Ok(scan_files(root)?
        .into_iter()
        .filter(|f| Format::from_path(f).is_some_and(|format| format.is_source()))
        .collect())
}

/// Recursively list every regular file under `root`, sorted
pub fn scan_files(root: &Path) -> AdapterResult<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(AdapterError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkBuilder::new(root).standard_filters(false).build() {
        let entry = entry.map_err(|e| {
            AdapterError::io(
                root,
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            )
        })?;
        if entry.file_type().is_some_and(|t| t.is_file()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Path of `file` relative to `root`, or its file name when it is outside `root`
pub fn relative_to(root: &Path, file: &Path) -> PathBuf {
    match file.strip_prefix(root) {
        Ok(rel) => rel.to_path_buf(),
        Err(_) => file
            .file_name()
            .map(PathBuf::from)
            .unwrap_or_else(|| file.to_path_buf()),
    }
}
