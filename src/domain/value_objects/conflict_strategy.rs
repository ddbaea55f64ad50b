//! Conflict strategy applied when an install destination already exists

use serde::{Deserialize, Serialize};

/// What to do with a destination file that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConflictStrategy {
    /// Replace the destination unconditionally
    Overwrite,
    /// Leave the destination untouched
    Skip,
    /// Copy the destination to `<file>.bak`, then replace it
    #[default]
    Backup,
}

impl std::fmt::Display for ConflictStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConflictStrategy::Overwrite => f.write_str("overwrite"),
            ConflictStrategy::Skip => f.write_str("skip"),
            ConflictStrategy::Backup => f.write_str("backup"),
        }
    }
}
