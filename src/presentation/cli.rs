//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Path and tuning flags are optional here: when absent, the command layer
//! falls back to the loaded [`Config`](crate::config::Config).

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::application::ValidateTarget;
use crate::domain::value_objects::{
    ClaudeFormat, ConflictStrategy, Platform, PlatformSelection, SourcePlatform,
};
use crate::logging::{LogFormat, LogLevel};

/// cmd-adapter - convert AI assistant commands between Claude, Gemini and Codex
#[derive(Parser, Debug)]
#[command(name = "cmd-adapter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Minimum log level (overrides config and RUST_LOG)
    #[arg(long, global = true, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Log line format
    #[arg(long, global = true, value_enum)]
    pub log_format: Option<LogFormat>,

    /// Config file (default: ./cmd-adapter.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding transaction records
    #[arg(long, global = true)]
    pub transactions_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List source command files
    List {
        /// Source directory
        #[arg(long)]
        src: Option<PathBuf>,

        /// Which files count as sources
        #[arg(long, value_enum, default_value_t = SourcePlatform::Auto)]
        from: SourcePlatform,
    },

    /// Convert every source file to the selected platforms
    Convert(ConvertArgs),

    /// Validate converted output against the schemas
    Validate {
        /// What to validate
        #[arg(long, value_enum, default_value_t = ValidateTarget::All)]
        target: ValidateTarget,

        /// Output directory to check
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Show the files created by a transaction
    Diff {
        /// Transaction id
        #[arg(long)]
        txn: Option<String>,
    },

    /// Undo a transaction
    Rollback {
        /// Transaction id
        #[arg(long)]
        txn: Option<String>,
    },

    /// Copy converted output into a project
    Install(InstallArgs),

    /// Convert, re-import and report what changed
    Roundtrip(RoundtripArgs),
}

/// Anything that is not a positive count maps to 0, which the pipeline
/// resolves to the default worker count
fn lenient_concurrency(value: &str) -> Result<usize, std::convert::Infallible> {
    Ok(value.trim().parse().unwrap_or(0))
}

/// Arguments of `convert`
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Source platform (auto detects by extension)
    #[arg(long, value_enum, default_value_t = SourcePlatform::Auto)]
    pub from: SourcePlatform,

    /// Target platforms
    #[arg(long, value_enum, default_value_t = PlatformSelection::All)]
    pub to: PlatformSelection,

    /// Source directory
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Files processed at once (0, negative or non-numeric means the default)
    #[arg(long, allow_hyphen_values = true, value_parser = lenient_concurrency)]
    pub concurrency: Option<usize>,

    /// Encoding of Claude artifacts
    #[arg(long, value_enum)]
    pub claude_format: Option<ClaudeFormat>,

    /// Validate artifacts against their platform schema before writing
    #[arg(long)]
    pub strict: bool,

    /// Stop claiming new files after the first failure
    #[arg(long)]
    pub fail_fast: bool,
}

/// Arguments of `install`
#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Platforms to install
    #[arg(long, value_enum, default_value_t = PlatformSelection::All)]
    pub platform: PlatformSelection,

    /// Converted output root
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Project root
    #[arg(long, default_value = ".")]
    pub to: PathBuf,

    /// What to do with files that already exist
    #[arg(long, value_enum, default_value_t = ConflictStrategy::Backup)]
    pub strategy: ConflictStrategy,

    /// Print the plan without touching anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments of `roundtrip`
#[derive(Args, Debug)]
pub struct RoundtripArgs {
    /// Source platform
    #[arg(long, value_enum, default_value_t = SourcePlatform::Auto)]
    pub from: SourcePlatform,

    /// Platform to round-trip through
    #[arg(long, value_enum, default_value_t = Platform::Codex)]
    pub to: Platform,

    /// Source directory
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Output directory
    #[arg(long)]
    pub out: Option<PathBuf>,
}
