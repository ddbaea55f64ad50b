//! Text format value objects
//!
//! Format selection is resolved once, from an extension or an explicit flag,
//! and matched exhaustively everywhere else.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// On-disk encoding of a command file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Json,
    Yaml,
    Toml,
    /// Markdown with a YAML frontmatter block
    Markdown,
}

impl Format {
    /// Resolve from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            "toml" => Some(Format::Toml),
            "md" => Some(Format::Markdown),
            _ => None,
        }
    }

    /// Resolve from a path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    /// Whether files of this format are command sources (JSON/YAML)
    pub fn is_source(&self) -> bool {
        matches!(self, Format::Json | Format::Yaml)
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Format::Json => "JSON",
            Format::Yaml => "YAML",
            Format::Toml => "TOML",
            Format::Markdown => "Markdown",
        };
        f.write_str(name)
    }
}

/// Encoding used for Claude artifacts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ClaudeFormat {
    #[default]
    Json,
    Yaml,
}

impl ClaudeFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ClaudeFormat::Json => "json",
            ClaudeFormat::Yaml => "yaml",
        }
    }
}

impl From<ClaudeFormat> for Format {
    fn from(format: ClaudeFormat) -> Self {
        match format {
            ClaudeFormat::Json => Format::Json,
            ClaudeFormat::Yaml => Format::Yaml,
        }
    }
}
