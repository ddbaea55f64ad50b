//! Convert options

use std::path::PathBuf;

use crate::domain::value_objects::{ClaudeFormat, PlatformSelection, SourcePlatform};

/// Worker count used when none (or zero) is given
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Options for the convert command
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// How source files are read
    pub from: SourcePlatform,
    /// Platforms to write
    pub to: PlatformSelection,
    /// Source root
    pub src: PathBuf,
    /// Output root
    pub out: PathBuf,
    /// Maximum number of files processed at once
    pub concurrency: usize,
    /// Validate every artifact against its platform schema before writing
    pub strict: bool,
    /// Stop claiming new files after the first failure
    pub fail_fast: bool,
    /// Encoding of Claude artifacts
    pub claude_format: ClaudeFormat,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            from: SourcePlatform::Auto,
            to: PlatformSelection::All,
            src: PathBuf::from(".claude/commands"),
            out: PathBuf::from("out"),
            concurrency: DEFAULT_CONCURRENCY,
            strict: false,
            fail_fast: false,
            claude_format: ClaudeFormat::Json,
        }
    }
}

impl ConvertOptions {
    pub fn new(src: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            out: out.into(),
            ..Self::default()
        }
    }

    pub fn with_from(mut self, from: SourcePlatform) -> Self {
        self.from = from;
        self
    }

    pub fn with_to(mut self, to: PlatformSelection) -> Self {
        self.to = to;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn with_claude_format(mut self, format: ClaudeFormat) -> Self {
        self.claude_format = format;
        self
    }

    /// Worker count actually used; 0 means the default
    pub fn effective_concurrency(&self) -> usize {
        if self.concurrency == 0 {
            DEFAULT_CONCURRENCY
        } else {
            self.concurrency
        }
    }
}
