//! JSON Transaction Repository
//!
//! Implements the TransactionStore port as one directory per transaction:
//! `<base>/<id>/transaction.json`. Ids are single plain path segments, so a
//! record never resolves outside `<base>`.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::domain::entities::Transaction;
use crate::domain::ports::{FileSystem, TransactionStore};
use crate::domain::value_objects::Format;
use crate::error::{AdapterError, AdapterResult};
use crate::infrastructure::fs::LocalFs;

/// File name of the record inside a transaction directory
pub const RECORD_FILE_NAME: &str = "transaction.json";

/// JSON-file transaction store rooted at a base directory
pub struct JsonTransactionStore {
    base: PathBuf,
    fs: LocalFs,
}

impl JsonTransactionStore {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            fs: LocalFs::new(),
        }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Location of the record for `id`
    pub fn record_path(&self, id: &str) -> AdapterResult<PathBuf> {
        Ok(self.record_dir(id)?.join(RECORD_FILE_NAME))
    }

    fn record_dir(&self, id: &str) -> AdapterResult<PathBuf> {
        let mut components = Path::new(id).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) if !id.contains(['/', '\\']) => {
                Ok(self.base.join(id))
            }
            _ => Err(AdapterError::InvalidTransactionId { id: id.to_string() }),
        }
    }
}

impl TransactionStore for JsonTransactionStore {
    fn record(&self, transaction: &Transaction) -> AdapterResult<PathBuf> {
        let path = self.record_path(&transaction.id)?;
        let json = serde_json::to_string_pretty(transaction).map_err(|e| AdapterError::Encode {
            platform: "transaction".to_string(),
            name: transaction.id.clone(),
            message: e.to_string(),
        })?;
        self.fs.write(&path, &json)?;
        Ok(path)
    }

    fn load(&self, id: &str) -> AdapterResult<Transaction> {
        let path = self.record_path(id)?;
        if !self.fs.exists(&path) {
            return Err(AdapterError::TransactionNotFound {
                id: id.to_string(),
                path,
            });
        }

        let content = self.fs.read(&path)?;
        serde_json::from_str(&content).map_err(|e| AdapterError::Decode {
            file: path,
            format: Format::Json,
            message: e.to_string(),
        })
    }

    /// Deletes the record, then its directory only if nothing else is in it
    fn remove(&self, id: &str) -> AdapterResult<()> {
        let dir = self.record_dir(id)?;
        let path = dir.join(RECORD_FILE_NAME);
        if self.fs.exists(&path) {
            self.fs.remove(&path)?;
        }

        let mut entries = std::fs::read_dir(&dir).map_err(|e| AdapterError::io(&dir, e))?;
        if entries.next().is_some() {
            debug!(dir = %dir.display(), "transaction directory not empty; kept");
            return Ok(());
        }
        std::fs::remove_dir(&dir).map_err(|e| AdapterError::io(dir, e))
    }
}
