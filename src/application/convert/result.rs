//! Convert result types

use std::path::PathBuf;

use serde_json::json;

use crate::domain::entities::Transaction;
use crate::error::AdapterError;

/// A source file whose pipeline failed
#[derive(Debug)]
pub struct FileFailure {
    /// Position of the file in dispatch order
    pub index: usize,
    pub file: PathBuf,
    pub error: AdapterError,
}

/// Result of a convert batch
#[derive(Debug)]
pub struct ConvertResult {
    /// The recorded transaction (status `failed` when any file failed)
    pub transaction: Transaction,
    /// Where the transaction was written
    pub record_path: PathBuf,
    /// Number of source files dispatched
    pub files: usize,
    /// Failures in dispatch order
    pub failures: Vec<FileFailure>,
}

impl ConvertResult {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failure the batch reports: the first in dispatch order
    pub fn first_failure(&self) -> Option<&FileFailure> {
        self.failures.first()
    }

    pub fn created(&self) -> usize {
        self.transaction.created_files.len()
    }

    /// One-line JSON summary printed after a successful batch
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "txnId": self.transaction.id,
            "created": self.created(),
            "failed": self.failures.len(),
        })
    }
}
