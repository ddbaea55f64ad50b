//! Install options

use std::path::PathBuf;

use crate::domain::value_objects::{ConflictStrategy, PlatformSelection};

/// Options for the install command
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Root of the converted output (`out`)
    pub from: PathBuf,
    /// Project root receiving the platform directories
    pub to: PathBuf,
    pub platform: PlatformSelection,
    pub strategy: ConflictStrategy,
    /// Report the plan without touching anything
    pub dry_run: bool,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            from: PathBuf::from("out"),
            to: PathBuf::from("."),
            platform: PlatformSelection::All,
            strategy: ConflictStrategy::Backup,
            dry_run: false,
        }
    }
}

impl InstallOptions {
    pub fn new(from: impl Into<PathBuf>, to: impl Into<PathBuf>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Self::default()
        }
    }

    pub fn with_platform(mut self, platform: PlatformSelection) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_strategy(mut self, strategy: ConflictStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
