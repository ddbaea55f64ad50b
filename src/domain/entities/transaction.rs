//! Transaction entity - the durable record of one batch of writes
//!
//! A transaction is created once per convert or install, after that batch's
//! writes have finished, and is read back by rollback.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{ConflictStrategy, PlatformSelection};

/// Outcome of the batch that produced the record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Completed,
    /// The batch failed; the record lists whatever was written before it stopped
    Failed,
}

/// A backup made before a destination was overwritten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupEntry {
    /// The file that was overwritten
    pub original: PathBuf,
    /// Where its previous content was copied
    #[serde(alias = "backupPath")]
    pub bak: PathBuf,
}

/// Parameters of an install batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallInfo {
    pub from: PathBuf,
    pub to: PathBuf,
    pub platform: PlatformSelection,
    pub strategy: ConflictStrategy,
}

/// Per-file counters of an install batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallStats {
    pub copied: usize,
    pub skipped: usize,
    pub overwritten: usize,
    pub backed_up: usize,
}

/// Durable record of files created (and backed up) by one batch
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    #[serde(default)]
    pub id: String,

    #[serde(default)]
    pub status: TransactionStatus,

    /// Files created by the batch, in dispatch order
    #[serde(default)]
    pub created_files: Vec<PathBuf>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backups: Vec<BackupEntry>,

    /// Content hash of each created file at write time, keyed by path
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub checksums: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install: Option<InstallInfo>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<InstallStats>,

    /// Failures that ended the batch (only when `status` is `failed`)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Start a record stamped with the current time
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            time: Some(Utc::now()),
            ..Self::default()
        }
    }

    /// Generate a fresh opaque transaction id
    pub fn generate_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    /// Record a created file and the hash of what was written
    pub fn add_created(&mut self, path: PathBuf, hash: Option<String>) {
        if let Some(hash) = hash {
            self.checksums.insert(path.display().to_string(), hash);
        }
        self.created_files.push(path);
    }

    pub fn add_backup(&mut self, original: PathBuf, bak: PathBuf) {
        self.backups.push(BackupEntry { original, bak });
    }

    pub fn mark_failed(&mut self, errors: Vec<String>) {
        self.status = TransactionStatus::Failed;
        self.errors = errors;
    }

    pub fn is_failed(&self) -> bool {
        self.status == TransactionStatus::Failed
    }
}
