//! Artifact writer
//!
//! Places artifacts at `<out>/<platform>/<commands|prompts>/<source dir>/<file>`,
//! overwriting whatever is already there.

use std::path::{Component, Path, PathBuf};

use crate::domain::entities::Artifact;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Platform;
use crate::error::{AdapterError, AdapterResult};

/// Destination of an artifact produced from the source at `rel`
///
/// `rel` is the source path relative to the scanned root; only its directory
/// part is kept. A `filename` that is absolute or climbs with `..` is
/// rejected with `IR_INVALID`.
pub fn output_path(
    out_root: &Path,
    platform: Platform,
    rel: &Path,
    filename: &str,
) -> AdapterResult<PathBuf> {
    check_filename(filename)?;
    let mut path = out_root
        .join(platform.directory_name())
        .join(platform.artifact_dir());
    if let Some(parent) = rel.parent() {
        path.push(parent);
    }
    Ok(path.join(filename))
}

/// Every component must be a plain name
fn check_filename(filename: &str) -> AdapterResult<()> {
    let plain = Path::new(filename)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
    if plain && !filename.contains('\\') {
        Ok(())
    } else {
        Err(AdapterError::UnsafeName {
            name: filename.to_string(),
        })
    }
}

/// Write one artifact, returning the path written
pub fn write_artifact<FS: FileSystem + ?Sized>(
    fs: &FS,
    out_root: &Path,
    platform: Platform,
    rel: &Path,
    artifact: &Artifact,
) -> AdapterResult<PathBuf> {
    let path = output_path(out_root, platform, rel, &artifact.filename)?;
    fs.write(&path, &artifact.content)?;
    Ok(path)
}
