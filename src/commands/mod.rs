//! Command handlers
//!
//! Each handler resolves its inputs against the loaded config, runs one use
//! case, and prints its result to stdout as JSON. Errors are returned to
//! `main`, which logs them once and sets the exit status.

pub mod convert;
pub mod diff;
pub mod install;
pub mod list;
pub mod rollback;
pub mod roundtrip;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, warn};

use cmd_adapter::config::{self, Config, ConfigWarning};
use cmd_adapter::presentation::Cli;
use cmd_adapter::AdapterError;

/// Config for this run: `--config` or `./cmd-adapter.toml`, env, then global flags
pub fn load_config(cli: &Cli) -> Result<(Config, Vec<ConfigWarning>)> {
    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("load config {}", path.display()))?;
            (config::with_env_overrides(config), warnings)
        }
        None => config::load_or_default(Path::new("."))
            .context("load cmd-adapter.toml")?,
    };

    if let Some(dir) = &cli.transactions_dir {
        config.transactions_dir = dir.clone();
    }
    Ok((config, warnings))
}

pub fn log_config_warnings(warnings: &[ConfigWarning]) {
    for w in warnings {
        warn!(
            key = %w.key,
            file = %w.file.display(),
            line = ?w.line,
            suggestion = ?w.suggestion,
            "unknown config key"
        );
    }
}

/// Log a failed command as one structured event
pub fn report_error(command: &str, err: &anyhow::Error) {
    let adapter = err.chain().find_map(|c| c.downcast_ref::<AdapterError>());
    let code = adapter.map_or("INTERNAL", |e| e.code().as_str());
    let context = adapter.map(AdapterError::context).unwrap_or_default();
    let chain: Vec<String> = err.chain().map(ToString::to_string).collect();

    error!(
        command,
        code,
        message = %err,
        context = %context,
        chain = ?chain,
        "{command} failed"
    );
}

/// `--txn` is optional to clap so its absence is reported as `ARG`
pub fn require_txn(txn: Option<String>) -> Result<String, AdapterError> {
    txn.filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AdapterError::MissingArgument {
            name: "txn".to_string(),
        })
}

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_json_line<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string(value)?);
    Ok(())
}
