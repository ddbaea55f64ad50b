//! Platform value objects - which AI assistant ecosystem an artifact targets

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A concrete target platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Claude Code commands (JSON or YAML)
    Claude,
    /// Gemini CLI commands (TOML)
    Gemini,
    /// Codex CLI prompts (Markdown with YAML frontmatter)
    Codex,
}

impl Platform {
    /// All platforms, in the order a batch writes them
    pub const ALL: [Platform; 3] = [Platform::Gemini, Platform::Codex, Platform::Claude];

    /// Directory name under the output root
    pub fn directory_name(&self) -> &'static str {
        match self {
            Platform::Claude => "claude",
            Platform::Gemini => "gemini",
            Platform::Codex => "codex",
        }
    }

    /// Subdirectory holding the artifacts inside the platform directory
    pub fn artifact_dir(&self) -> &'static str {
        match self {
            Platform::Claude | Platform::Gemini => "commands",
            Platform::Codex => "prompts",
        }
    }

    /// Destination directory inside a target project
    pub fn install_dir(&self) -> &'static str {
        match self {
            Platform::Claude => ".claude/commands",
            Platform::Gemini => ".gemini/commands",
            Platform::Codex => ".codex/prompts",
        }
    }

    /// Get a human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Claude => "Claude",
            Platform::Gemini => "Gemini",
            Platform::Codex => "Codex",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.directory_name())
    }
}

/// A platform filter given on the command line (`all` expands to every platform)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PlatformSelection {
    Claude,
    Gemini,
    Codex,
    #[default]
    All,
}

impl PlatformSelection {
    /// Expand to concrete platforms
    pub fn platforms(&self) -> Vec<Platform> {
        match self {
            PlatformSelection::Claude => vec![Platform::Claude],
            PlatformSelection::Gemini => vec![Platform::Gemini],
            PlatformSelection::Codex => vec![Platform::Codex],
            PlatformSelection::All => Platform::ALL.to_vec(),
        }
    }

    pub fn includes(&self, platform: Platform) -> bool {
        self.platforms().contains(&platform)
    }
}

impl From<Platform> for PlatformSelection {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Claude => PlatformSelection::Claude,
            Platform::Gemini => PlatformSelection::Gemini,
            Platform::Codex => PlatformSelection::Codex,
        }
    }
}

impl std::fmt::Display for PlatformSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlatformSelection::All => f.write_str("all"),
            PlatformSelection::Claude => f.write_str("claude"),
            PlatformSelection::Gemini => f.write_str("gemini"),
            PlatformSelection::Codex => f.write_str("codex"),
        }
    }
}

/// Where source files come from (`auto` detects by extension)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum SourcePlatform {
    #[default]
    Auto,
    Claude,
    Gemini,
    Codex,
}

impl SourcePlatform {
    /// Resolve to a concrete platform for one file
    ///
    /// `auto` picks Gemini for `.toml`, Codex for `.md`, Claude otherwise.
    pub fn resolve(&self, path: &Path) -> Platform {
        match self {
            SourcePlatform::Claude => Platform::Claude,
            SourcePlatform::Gemini => Platform::Gemini,
            SourcePlatform::Codex => Platform::Codex,
            SourcePlatform::Auto => {
                let ext = path
                    .extension()
                    .and_then(|e| e.to_str())
                    .map(|e| e.to_ascii_lowercase());
                match ext.as_deref() {
                    Some("toml") => Platform::Gemini,
                    Some("md") => Platform::Codex,
                    _ => Platform::Claude,
                }
            }
        }
    }
}

impl From<Platform> for SourcePlatform {
    fn from(platform: Platform) -> Self {
        match platform {
            Platform::Claude => SourcePlatform::Claude,
            Platform::Gemini => SourcePlatform::Gemini,
            Platform::Codex => SourcePlatform::Codex,
        }
    }
}
