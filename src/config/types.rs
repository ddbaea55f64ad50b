//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::convert::DEFAULT_CONCURRENCY;
use crate::domain::value_objects::ClaudeFormat;
use crate::error::AdapterResult;
use crate::logging::{LogFormat, LogLevel};

use super::loader::{self, ConfigWarning};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "cmd-adapter.toml";

/// Main configuration structure
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Source root for `convert`, `list` and `roundtrip`
    pub src: PathBuf,
    /// Output root
    pub out: PathBuf,
    /// Worker count; 0 means the default
    pub concurrency: usize,
    /// Unset means `RUST_LOG`, then `info`
    pub log_level: Option<LogLevel>,
    pub log_format: LogFormat,
    /// Validate artifacts against their platform schema before writing
    pub strict: bool,
    pub fail_fast: bool,
    pub transactions_dir: PathBuf,
    pub schemas_dir: PathBuf,
    pub claude_format: ClaudeFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            src: PathBuf::from(".claude/commands"),
            out: PathBuf::from("out"),
            concurrency: DEFAULT_CONCURRENCY,
            log_level: None,
            log_format: LogFormat::Json,
            strict: false,
            fail_fast: false,
            transactions_dir: PathBuf::from("transactions"),
            schemas_dir: PathBuf::from("schemas"),
            claude_format: ClaudeFormat::Json,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AdapterResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AdapterResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `cmd-adapter.toml` from `dir` if present, then apply the environment
    pub fn load_or_default(dir: &Path) -> AdapterResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(dir)
    }

    /// Apply environment variable overrides (CMD_ADAPTER_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
