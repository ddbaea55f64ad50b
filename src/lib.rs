//! cmd-adapter - convert AI assistant command definitions between platforms
//!
//! Claude-style command files (JSON/YAML) are normalized into a single
//! intermediate representation ([`CommandIr`]) and written out as Gemini CLI
//! TOML, Codex Markdown prompts or Claude JSON/YAML. Every batch is recorded
//! as a transaction so it can be inspected and rolled back.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod presentation;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{Argument, Artifact, CommandIr, Transaction};
pub use domain::value_objects::{ClaudeFormat, Platform, PlatformSelection, SourcePlatform};
pub use error::{AdapterError, AdapterResult, ErrorCode};
pub use infrastructure::{get_converter, SchemaSet};
