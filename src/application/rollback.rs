//! Rollback Use Case
//!
//! Reverses a recorded transaction: deletes every created file, then copies
//! every backup over its original. Each step is best effort; one failure
//! does not stop the rest. The record is deleted afterwards, so a
//! transaction can be rolled back once.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::ports::{FileSystem, TransactionStore};
use crate::error::AdapterResult;

/// Counts reported by a rollback
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RollbackResult {
    /// Created files actually deleted
    pub removed: usize,
    /// Backups copied back over their originals
    pub restored: usize,
}

/// Rollback use case
pub struct RollbackUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    fs: FS,
    store: TS,
}

impl<FS, TS> RollbackUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    pub fn new(fs: FS, store: TS) -> Self {
        Self { fs, store }
    }

    /// Roll back transaction `id`
    ///
    /// Fails only when the record cannot be loaded.
    pub fn execute(&self, id: &str) -> AdapterResult<RollbackResult> {
        let transaction = self.store.load(id)?;
        let mut result = RollbackResult::default();

        for path in &transaction.created_files {
            if !self.fs.exists(path) {
                debug!(path = %path.display(), "already gone");
                continue;
            }
            match self.fs.remove(path) {
                Ok(()) => result.removed += 1,
                Err(error) => warn!(path = %path.display(), %error, "could not remove"),
            }
        }

        for backup in &transaction.backups {
            match self.fs.copy(&backup.bak, &backup.original) {
                Ok(()) => result.restored += 1,
                Err(error) => warn!(
                    original = %backup.original.display(),
                    bak = %backup.bak.display(),
                    %error,
                    "could not restore backup"
                ),
            }
        }

        if let Err(error) = self.store.remove(id) {
            warn!(txn_id = id, %error, "could not delete transaction record");
        }

        info!(
            txn_id = id,
            removed = result.removed,
            restored = result.restored,
            "rollback complete"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Transaction;
    use crate::infrastructure::fs::LocalFs;
    use crate::infrastructure::repositories::JsonTransactionStore;
    use tempfile::tempdir;

    #[test]
    fn removes_created_files_and_consumes_record() {
        let dir = tempdir().unwrap();
        let store = JsonTransactionStore::new(dir.path().join("txns"));
        let p1 = dir.path().join("out/gemini/commands/a.toml");
        let p2 = dir.path().join("out/codex/prompts/a.md");
        for p in [&p1, &p2] {
            std::fs::create_dir_all(p.parent().unwrap()).unwrap();
            std::fs::write(p, "x").unwrap();
        }
        let mut txn = Transaction::new("t1");
        txn.add_created(p1.clone(), None);
        txn.add_created(p2.clone(), None);
        store.record(&txn).unwrap();

        let use_case = RollbackUseCase::new(LocalFs::new(), store);
        let result = use_case.execute("t1").unwrap();

        assert_eq!(result, RollbackResult { removed: 2, restored: 0 });
        assert!(!p1.exists());
        assert!(!p2.exists());

        let again = use_case.execute("t1").unwrap_err();
        assert_eq!(again.code().as_str(), "TXN_NOT_FOUND");
    }

    #[test]
    fn missing_files_are_not_counted() {
        let dir = tempdir().unwrap();
        let store = JsonTransactionStore::new(dir.path());
        let mut txn = Transaction::new("t2");
        txn.add_created(dir.path().join("never-written.toml"), None);
        store.record(&txn).unwrap();

        let result = RollbackUseCase::new(LocalFs::new(), store).execute("t2").unwrap();
        assert_eq!(result.removed, 0);
    }

    #[test]
    fn restores_backups_and_keeps_bak_files() {
        let dir = tempdir().unwrap();
        let original = dir.path().join("review.md");
        let bak = dir.path().join("review.md.bak");
        std::fs::write(&original, "new").unwrap();
        std::fs::write(&bak, "old").unwrap();

        let store = JsonTransactionStore::new(dir.path().join("txns"));
        let mut txn = Transaction::new("t3");
        txn.add_backup(original.clone(), bak.clone());
        // a backup whose .bak vanished is skipped, not fatal
        txn.add_backup(dir.path().join("other.md"), dir.path().join("other.md.bak"));
        store.record(&txn).unwrap();

        let result = RollbackUseCase::new(LocalFs::new(), store).execute("t3").unwrap();

        assert_eq!(result.restored, 1);
        assert_eq!(std::fs::read_to_string(&original).unwrap(), "old");
        assert!(bak.exists());
    }

    #[test]
    fn unknown_transaction_is_error() {
        let dir = tempdir().unwrap();
        let err = RollbackUseCase::new(LocalFs::new(), JsonTransactionStore::new(dir.path()))
            .execute("missing")
            .unwrap_err();
        assert_eq!(err.code().as_str(), "TXN_NOT_FOUND");
    }

    #[test]
    fn id_outside_store_is_rejected_and_nothing_deleted() {
        let dir = tempdir().unwrap();
        let victim = dir.path().join("victim");
        std::fs::create_dir_all(&victim).unwrap();
        let txn = serde_json::to_string(&Transaction::new("victim")).unwrap();
        std::fs::write(victim.join("transaction.json"), txn).unwrap();
        std::fs::write(victim.join("precious.txt"), "keep").unwrap();

        let store = JsonTransactionStore::new(dir.path().join("txns"));
        let err = RollbackUseCase::new(LocalFs::new(), store)
            .execute("../victim")
            .unwrap_err();

        assert_eq!(err.code().as_str(), "ARG");
        assert!(victim.join("precious.txt").exists());
        assert!(victim.join("transaction.json").exists());
    }
}
