//! PlatformConverter port - one converter/importer pair per platform
//!
//! `import(convert(ir))` must reproduce `ir` (name taken from the filename).

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::{Artifact, CommandIr};
use crate::domain::value_objects::Platform;
use crate::error::AdapterResult;

/// Converts IR to a platform artifact and back
pub trait PlatformConverter: Send + Sync {
    /// Platform handled by this converter
    fn platform(&self) -> Platform;

    /// Extension of the artifacts it writes (no dot)
    fn extension(&self) -> &'static str;

    /// Encode an IR as an artifact
    fn convert(&self, ir: &CommandIr) -> AdapterResult<Artifact>;

    /// Decode an artifact back into IR
    ///
    /// The IR name always comes from `path`'s file stem.
    fn import(&self, path: &Path, content: &str) -> AdapterResult<CommandIr>;

    /// The structured part of an artifact that platform schemas validate
    fn document(&self, path: &Path, content: &str) -> AdapterResult<Value>;
}

/// IR name encoded in an artifact's filename
pub fn name_from_path(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}
