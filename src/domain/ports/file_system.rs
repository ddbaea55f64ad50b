//! FileSystem port - abstraction over file I/O operations
//!
//! Lets use cases write, copy and delete files without depending on a
//! concrete implementation.

use std::path::Path;

use crate::error::AdapterResult;

/// Abstract file system interface
pub trait FileSystem: Send + Sync {
    /// Read file content as string
    fn read(&self, path: &Path) -> AdapterResult<String>;

    /// Write content, creating parent directories and replacing any existing file
    fn write(&self, path: &Path, content: &str) -> AdapterResult<()>;

    /// Check if file exists
    fn exists(&self, path: &Path) -> bool;

    /// Remove a file
    fn remove(&self, path: &Path) -> AdapterResult<()>;

    /// Copy `from` over `to`
    fn copy(&self, from: &Path, to: &Path) -> AdapterResult<()>;

    /// Create directory and parents
    fn create_dir_all(&self, path: &Path) -> AdapterResult<()>;

    /// Compute content hash (`sha256:<hex>`)
    fn hash(&self, path: &Path) -> AdapterResult<String>;
}
