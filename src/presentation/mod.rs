//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases from a loaded config (dependency injection)

pub mod cli;
pub mod factory;

pub use cli::{Cli, Commands, ConvertArgs, InstallArgs, RoundtripArgs};
