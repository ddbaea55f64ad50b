//! Roundtrip Use Case
//!
//! For each source file: import it (IR A), convert and write it for the
//! target platform, import the written artifact back (IR B), and report the
//! field-level difference between A and B.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::ports::FileSystem;
use crate::domain::services::{diff_fields, unified_text_diff, FieldDiff};
use crate::domain::value_objects::{ClaudeFormat, Platform, SourcePlatform};
use crate::error::AdapterResult;
use crate::infrastructure::adapters::get_converter;
use crate::infrastructure::fs::relative_to;

use super::importer::{import_to_ir, scan_sources};
use super::writer::write_artifact;

/// Options for the roundtrip command
#[derive(Debug, Clone)]
pub struct RoundtripOptions {
    pub from: SourcePlatform,
    pub to: Platform,
    pub src: PathBuf,
    pub out: PathBuf,
    pub claude_format: ClaudeFormat,
}

/// Report for one source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundtripReport {
    pub source: PathBuf,
    pub target: PathBuf,
    pub diff: FieldDiff,
    /// Line diff of the prompt, when it changed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_diff: Option<String>,
}

impl RoundtripReport {
    pub fn is_lossless(&self) -> bool {
        self.diff.is_empty()
    }
}

/// Roundtrip use case
pub struct RoundtripUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> RoundtripUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Process every source file under `options.src`, one at a time
    pub fn execute(&self, options: &RoundtripOptions) -> AdapterResult<Vec<RoundtripReport>> {
        let converter = get_converter(options.to, options.claude_format);
        let files = scan_sources(&options.src, options.from)?;

        let mut reports = Vec::with_capacity(files.len());
        for file in files {
            let before = import_to_ir(&self.fs, &file, options.from)?;
            let artifact = converter.convert(&before)?;
            let rel = relative_to(&options.src, &file);
            let target = write_artifact(&self.fs, &options.out, options.to, &rel, &artifact)?;

            let written = self.fs.read(&target)?;
            let after = converter.import(&target, &written)?;
            let diff = diff_fields(&before.to_value(), &after.to_value());
            debug!(source = %file.display(), target = %target.display(), lossless = diff.is_empty(), "round trip");

            let prompt_diff = (before.prompt != after.prompt)
                .then(|| unified_text_diff(&before.prompt, &after.prompt));

            reports.push(RoundtripReport {
                source: file,
                target,
                diff,
                prompt_diff,
            });
        }

        info!(
            files = reports.len(),
            lossy = reports.iter().filter(|r| !r.is_lossless()).count(),
            "roundtrip complete"
        );
        Ok(reports)
    }
}
