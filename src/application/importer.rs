//! Source importing
//!
//! Turns one file of any supported platform into a [`CommandIr`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::CommandIr;
use crate::domain::ports::FileSystem;
use crate::domain::services::build_ir;
use crate::domain::value_objects::{ClaudeFormat, Format, Platform, SourcePlatform};
use crate::error::{AdapterError, AdapterResult};
use crate::infrastructure::adapters::get_converter;
use crate::infrastructure::codec;
use crate::infrastructure::fs::{scan_command_files, scan_files};

/// Whether `path` is a source file when reading as `from`
///
/// `auto` and `claude` take JSON/YAML; `gemini` takes `.toml`, `codex` `.md`.
pub fn is_source_file(from: SourcePlatform, path: &Path) -> bool {
    let Some(format) = Format::from_path(path) else {
        return false;
    };
    match from {
        SourcePlatform::Auto | SourcePlatform::Claude => format.is_source(),
        SourcePlatform::Gemini => format == Format::Toml,
        SourcePlatform::Codex => format == Format::Markdown,
    }
}

/// Recursively list the source files under `root` for `from`, sorted
pub fn scan_sources(root: &Path, from: SourcePlatform) -> AdapterResult<Vec<PathBuf>> {
    match from {
        SourcePlatform::Auto | SourcePlatform::Claude => scan_command_files(root),
        _ => Ok(scan_files(root)?
            .into_iter()
            .filter(|f| is_source_file(from, f))
            .collect()),
    }
}

/// Import `path` as the given source platform
///
/// Gemini and Codex files go through their importers. Claude-side files are
/// decoded as JSON or YAML and normalized with the IR builder, so they may use
/// any of the builder's field aliases.
pub fn import_to_ir<FS: FileSystem + ?Sized>(
    fs: &FS,
    path: &Path,
    from: SourcePlatform,
) -> AdapterResult<CommandIr> {
    let platform = from.resolve(path);
    debug!(file = %path.display(), %platform, "importing");

    let content = fs.read(path)?;
    match platform {
        Platform::Gemini | Platform::Codex => {
            get_converter(platform, ClaudeFormat::default()).import(path, &content)
        }
        Platform::Claude => {
            let format = codec::format_for(path)?;
            if !format.is_source() {
                return Err(AdapterError::UnsupportedFormat {
                    file: path.to_path_buf(),
                    extension: path
                        .extension()
                        .map(|e| e.to_string_lossy().to_string())
                        .unwrap_or_default(),
                });
            }
            let raw = codec::decode(format, &content, path)?;
            Ok(build_ir(&raw))
        }
    }
}
