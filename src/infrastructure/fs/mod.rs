//! File System Implementations
//!
//! Concrete implementation of the FileSystem port, plus source discovery.

mod local;
mod scan;

pub use local::LocalFs;
pub use scan::{relative_to, scan_command_files, scan_files};
