//! Configuration module
//!
//! Precedence, highest first:
//! 1. CLI flags
//! 2. Environment variables (CMD_ADAPTER_*)
//! 3. `cmd-adapter.toml` in the working directory
//! 4. Built-in defaults

mod loader;
mod types;

pub use loader::{load_or_default, with_env_overrides, with_overrides_from, ConfigWarning};
pub use types::{Config, CONFIG_FILE_NAME};
