//! Validate Use Case
//!
//! Checks converted output against the platform schemas. Only the top level
//! of each platform directory is walked.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::domain::ports::{FileSystem, PlatformConverter};
use crate::domain::value_objects::{ClaudeFormat, Format, Platform};
use crate::infrastructure::adapters::get_converter;
use crate::infrastructure::schema::SchemaSet;

/// What to validate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ValidateTarget {
    Gemini,
    Codex,
    Claude,
    /// Claude-side artifacts against the IR schema
    Ir,
    #[default]
    All,
}

impl ValidateTarget {
    fn platforms(&self) -> Vec<Platform> {
        match self {
            ValidateTarget::Gemini => vec![Platform::Gemini],
            ValidateTarget::Codex => vec![Platform::Codex],
            ValidateTarget::Claude | ValidateTarget::Ir => vec![Platform::Claude],
            ValidateTarget::All => Platform::ALL.to_vec(),
        }
    }
}

/// A file that failed its schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidFile {
    pub path: PathBuf,
    pub errors: Vec<String>,
}

/// A platform directory that could not be listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnreadableDir {
    pub path: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidateReport {
    pub checked: usize,
    pub invalid: Vec<InvalidFile>,
    pub unreadable: Vec<UnreadableDir>,
}

impl ValidateReport {
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty() && self.unreadable.is_empty()
    }
}

/// Validate use case
pub struct ValidateUseCase<FS: FileSystem> {
    fs: FS,
    schemas: SchemaSet,
}

impl<FS: FileSystem> ValidateUseCase<FS> {
    pub fn new(fs: FS, schemas: SchemaSet) -> Self {
        Self { fs, schemas }
    }

    /// Validate artifacts under the output root `path`
    pub fn execute(&self, target: ValidateTarget, path: &Path) -> ValidateReport {
        let mut report = ValidateReport::default();
        for platform in target.platforms() {
            let dir = path.join(platform.directory_name()).join(platform.artifact_dir());
            match list_artifacts(&dir, platform) {
                Ok(files) => {
                    for file in files {
                        report.checked += 1;
                        if let Err(errors) = self.validate_file(platform, &file) {
                            report.invalid.push(InvalidFile { path: file, errors });
                        }
                    }
                }
                Err(e) => report.unreadable.push(UnreadableDir {
                    path: dir,
                    message: e.to_string(),
                }),
            }
        }
        report
    }

    fn validate_file(&self, platform: Platform, file: &Path) -> Result<(), Vec<String>> {
        debug!(%platform, file = %file.display(), "validating");
        let content = self.fs.read(file).map_err(|e| vec![e.to_string()])?;
        let converter = get_converter(platform, ClaudeFormat::default());

        let document = match converter.document(file, &content) {
            Ok(doc) => doc,
            // unparsable TOML is checked as an empty table so it fails on
            // its required keys instead of aborting the walk
            Err(_) if platform == Platform::Gemini => Value::Object(Default::default()),
            Err(e) => return Err(vec![e.to_string()]),
        };
        self.schemas.for_platform(platform).validate(&document)
    }
}

/// Top-level artifact files of one platform directory, sorted
fn list_artifacts(dir: &Path, platform: Platform) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let matches = match (platform, Format::from_path(&path)) {
            (Platform::Gemini, Some(Format::Toml)) => true,
            (Platform::Codex, Some(Format::Markdown)) => true,
            (Platform::Claude, Some(format)) => format.is_source(),
            _ => false,
        };
        if matches {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::fs::LocalFs;
    use tempfile::tempdir;

    fn write(path: PathBuf, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    fn use_case() -> ValidateUseCase<LocalFs> {
        ValidateUseCase::new(LocalFs::new(), SchemaSet::embedded().unwrap())
    }

    #[test]
    fn valid_tree_passes() {
        let dir = tempdir().unwrap();
        let out = dir.path();
        write(out.join("gemini/commands/a.toml"), "description = \"\"\nprompt = \"p\"\n");
        write(out.join("codex/prompts/a.md"), "---\ndescription: d\n---\nBody\n");
        write(out.join("claude/commands/a.json"), r#"{"name": "a", "prompt": "p"}"#);
        write(out.join("claude/commands/notes.txt"), "ignored");

        let report = use_case().execute(ValidateTarget::All, out);

        assert!(report.is_ok(), "{report:?}");
        assert_eq!(report.checked, 3);
    }

    #[test]
    fn reports_each_invalid_file() {
        let dir = tempdir().unwrap();
        let out = dir.path();
        write(out.join("gemini/commands/broken.toml"), "prompt = ");
        write(out.join("gemini/commands/nodesc.toml"), "prompt = \"p\"\n");
        write(out.join("gemini/commands/ok.toml"), "description = \"\"\nprompt = \"p\"\n");

        let report = use_case().execute(ValidateTarget::Gemini, out);

        let invalid: Vec<&Path> = report.invalid.iter().map(|f| f.path.as_path()).collect();
        assert_eq!(
            invalid,
            vec![
                out.join("gemini/commands/broken.toml").as_path(),
                out.join("gemini/commands/nodesc.toml").as_path()
            ]
        );
        // broken TOML fails both required keys
        assert_eq!(report.invalid[0].errors.len(), 2);
    }

    #[test]
    fn ir_target_checks_claude_artifacts() {
        let dir = tempdir().unwrap();
        write(dir.path().join("claude/commands/a.json"), r#"{"name": ""}"#);

        let report = use_case().execute(ValidateTarget::Ir, dir.path());

        assert_eq!(report.invalid.len(), 1);
        assert!(!report.is_ok());
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempdir().unwrap();
        let report = use_case().execute(ValidateTarget::Codex, dir.path());
        assert_eq!(report.unreadable.len(), 1);
        assert!(!report.is_ok());
    }

    #[test]
    fn nested_files_are_not_walked() {
        let dir = tempdir().unwrap();
        write(dir.path().join("codex/prompts/sub/x.md"), "no frontmatter");

        let report = use_case().execute(ValidateTarget::Codex, dir.path());
        assert_eq!(report.checked, 0);
        assert!(report.is_ok());
    }
}
