//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::Path;

use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::ports::FileSystem;
use crate::error::{AdapterError, AdapterResult};

/// Local file system implementation
///
/// Writes go through a temp file in the destination directory followed by a
/// rename, so readers never observe a half-written artifact.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> AdapterResult<String> {
        std::fs::read_to_string(path).map_err(|e| AdapterError::io(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> AdapterResult<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        self.create_dir_all(parent)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(|e| AdapterError::io(parent, e))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| AdapterError::io(tmp.path(), e))?;
        tmp.persist(path)
            .map_err(|e| AdapterError::io(path, e.error))?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove(&self, path: &Path) -> AdapterResult<()> {
        std::fs::remove_file(path).map_err(|e| AdapterError::io(path, e))
    }

    fn copy(&self, from: &Path, to: &Path) -> AdapterResult<()> {
        if let Some(parent) = to.parent() {
            if !parent.as_os_str().is_empty() {
                self.create_dir_all(parent)?;
            }
        }
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| AdapterError::io(from, e))
    }

    fn create_dir_all(&self, path: &Path) -> AdapterResult<()> {
        std::fs::create_dir_all(path).map_err(|e| AdapterError::io(path, e))
    }

    fn hash(&self, path: &Path) -> AdapterResult<String> {
        let bytes = std::fs::read(path).map_err(|e| AdapterError::io(path, e))?;
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("sha256:{:x}", hasher.finalize()))
    }
}
