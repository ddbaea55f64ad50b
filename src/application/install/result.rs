//! Install result types

use std::path::PathBuf;

use serde::Serialize;
use serde_json::json;

use crate::domain::entities::{InstallStats, Transaction};
use crate::domain::value_objects::{ConflictStrategy, PlatformSelection};

/// What a dry run reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallPlan {
    pub platform: PlatformSelection,
    pub from: PathBuf,
    pub to: PathBuf,
    pub strategy: ConflictStrategy,
}

impl InstallPlan {
    pub fn to_json(&self) -> serde_json::Value {
        json!({ "plan": self })
    }
}

/// Result of a completed install
#[derive(Debug)]
pub struct InstallResult {
    pub transaction: Transaction,
    pub record_path: PathBuf,
    pub stats: InstallStats,
}

impl InstallResult {
    /// `{txnId, stats}` summary printed after an install
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "txnId": self.transaction.id,
            "stats": self.stats,
        })
    }
}
