//! Transaction inspection (`diff --txn`)
//!
//! Lists a transaction's created files with their current state, compared
//! against the hash recorded when each file was written.

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::ports::{FileSystem, TransactionStore};
use crate::error::AdapterResult;

/// State of one created file now
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileState {
    /// Exists, and matches the recorded hash when one was recorded
    Present,
    /// Exists with content different from what was written
    Modified,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    pub path: PathBuf,
    pub state: FileState,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionView {
    pub files: Vec<FileEntry>,
}

/// Describe the files created by transaction `id`
pub fn inspect_transaction<FS, TS>(fs: &FS, store: &TS, id: &str) -> AdapterResult<TransactionView>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    let transaction = store.load(id)?;

    let files = transaction
        .created_files
        .iter()
        .map(|path| {
            let state = if !fs.exists(path) {
                FileState::Missing
            } else {
                match transaction.checksums.get(&path.display().to_string()) {
                    Some(expected) => match fs.hash(path) {
                        Ok(actual) if &actual == expected => FileState::Present,
                        _ => FileState::Modified,
                    },
                    None => FileState::Present,
                }
            };
            FileEntry {
                path: path.clone(),
                state,
            }
        })
        .collect();

    Ok(TransactionView { files })
}
