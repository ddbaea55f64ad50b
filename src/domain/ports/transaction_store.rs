//! TransactionStore port - persistence of transaction records

use std::path::PathBuf;

use crate::domain::entities::Transaction;
use crate::error::AdapterResult;

/// Durable storage for [`Transaction`] records, keyed by id
pub trait TransactionStore: Send + Sync {
    /// Persist a record; returns where it was written
    fn record(&self, transaction: &Transaction) -> AdapterResult<PathBuf>;

    /// Load a record by id
    fn load(&self, id: &str) -> AdapterResult<Transaction>;

    /// Delete a record once it has been consumed
    fn remove(&self, id: &str) -> AdapterResult<()>;
}
