//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::application::convert::DEFAULT_CONCURRENCY;
use crate::domain::value_objects::Format;
use crate::error::{AdapterError, AdapterResult};
use crate::logging::LogLevel;

use super::types::{Config, CONFIG_FILE_NAME};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AdapterResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| AdapterError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AdapterError::Decode {
        file: path.to_path_buf(),
        format: Format::Toml,
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `cmd-adapter.toml` from `dir`, or defaults, with env overrides applied
///
/// A config file that exists but does not parse is an error.
pub fn load_or_default(dir: &Path) -> AdapterResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };
    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (CMD_ADAPTER_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply CMD_ADAPTER_* overrides read through `lookup`
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    if let Some(src) = lookup("CMD_ADAPTER_SRC") {
        config.src = PathBuf::from(src);
    }

    if let Some(out) = lookup("CMD_ADAPTER_OUT") {
        config.out = PathBuf::from(out);
    }

    // unparsable falls back to the default worker count
    if let Some(concurrency) = lookup("CMD_ADAPTER_CONCURRENCY") {
        config.concurrency = concurrency.trim().parse().unwrap_or(DEFAULT_CONCURRENCY);
    }

    if let Some(level) = lookup("CMD_ADAPTER_LOG_LEVEL") {
        if let Some(level) = LogLevel::parse(&level) {
            config.log_level = Some(level);
        }
    }

    if let Some(val) = lookup("CMD_ADAPTER_FAIL_FAST") {
        config.fail_fast = val.to_lowercase() != "false" && val != "0";
    }

    if let Some(dir) = lookup("CMD_ADAPTER_TRANSACTIONS_DIR") {
        config.transactions_dir = PathBuf::from(dir);
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "src",
        "out",
        "concurrency",
        "log_level",
        "log_format",
        "strict",
        "fail_fast",
        "transactions_dir",
        "schemas_dir",
        "claude_format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
