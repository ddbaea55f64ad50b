//! Install Use Case
//!
//! Per destination file:
//! - missing: copy, count `copied`, record as created
//! - `skip`: leave it, count `skipped`
//! - `backup`: copy it to `<file>.bak`, count `backedUp`, then copy over it
//!   and count `overwritten`
//! - `overwrite`: copy over it, count `overwritten`

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::domain::entities::{InstallInfo, InstallStats, Transaction};
use crate::domain::ports::{FileSystem, TransactionStore};
use crate::domain::value_objects::{ConflictStrategy, Platform};
use crate::error::AdapterResult;
use crate::infrastructure::fs::{relative_to, scan_files};

use super::options::InstallOptions;
use super::result::{InstallPlan, InstallResult};

/// Sibling backup path: `review.md` → `review.md.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".bak");
    PathBuf::from(name)
}

/// Install use case
pub struct InstallUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    fs: FS,
    store: TS,
}

impl<FS, TS> InstallUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    pub fn new(fs: FS, store: TS) -> Self {
        Self { fs, store }
    }

    /// The plan a dry run reports
    pub fn plan(&self, options: &InstallOptions) -> InstallPlan {
        InstallPlan {
            platform: options.platform,
            from: options.from.clone(),
            to: options.to.clone(),
            strategy: options.strategy,
        }
    }

    /// Install every selected platform and record the transaction
    ///
    /// On failure the partial transaction is recorded (status `failed`)
    /// before the error is returned.
    pub fn execute(&self, options: &InstallOptions) -> AdapterResult<InstallResult> {
        let mut transaction = Transaction::new(Transaction::generate_id());
        transaction.install = Some(InstallInfo {
            from: options.from.clone(),
            to: options.to.clone(),
            platform: options.platform,
            strategy: options.strategy,
        });
        let mut stats = InstallStats::default();

        let outcome = options
            .platform
            .platforms()
            .into_iter()
            .try_for_each(|platform| {
                self.install_platform(platform, options, &mut transaction, &mut stats)
            });
        transaction.stats = Some(stats);

        if let Err(error) = outcome {
            transaction.mark_failed(vec![error.to_string()]);
            match self.store.record(&transaction) {
                Ok(path) => warn!(txn_id = %transaction.id, record = %path.display(), "install failed; partial transaction recorded"),
                Err(record_error) => warn!(txn_id = %transaction.id, %record_error, "install failed; transaction not recorded"),
            }
            return Err(error);
        }

        let record_path = self.store.record(&transaction)?;
        info!(
            txn_id = %transaction.id,
            copied = stats.copied,
            skipped = stats.skipped,
            overwritten = stats.overwritten,
            backed_up = stats.backed_up,
            "install complete"
        );

        Ok(InstallResult {
            transaction,
            record_path,
            stats,
        })
    }

    fn install_platform(
        &self,
        platform: Platform,
        options: &InstallOptions,
        transaction: &mut Transaction,
        stats: &mut InstallStats,
    ) -> AdapterResult<()> {
        let source_dir = options
            .from
            .join(platform.directory_name())
            .join(platform.artifact_dir());
        if !source_dir.is_dir() {
            debug!(%platform, dir = %source_dir.display(), "nothing to install");
            return Ok(());
        }

        let dest_dir = options.to.join(platform.install_dir());
        for source in scan_files(&source_dir)? {
            let dest = dest_dir.join(relative_to(&source_dir, &source));

            if !self.fs.exists(&dest) {
                self.fs.copy(&source, &dest)?;
                transaction.add_created(dest.clone(), Some(self.fs.hash(&dest)?));
                stats.copied += 1;
                debug!(%platform, dest = %dest.display(), "copied");
                continue;
            }

            match options.strategy {
                ConflictStrategy::Skip => {
                    stats.skipped += 1;
                    debug!(%platform, dest = %dest.display(), "skipped existing");
                }
                ConflictStrategy::Backup => {
                    let bak = backup_path(&dest);
                    self.fs.copy(&dest, &bak)?;
                    transaction.add_backup(dest.clone(), bak);
                    stats.backed_up += 1;
                    self.fs.copy(&source, &dest)?;
                    stats.overwritten += 1;
                    debug!(%platform, dest = %dest.display(), "backed up and overwrote");
                }
                ConflictStrategy::Overwrite => {
                    self.fs.copy(&source, &dest)?;
                    stats.overwritten += 1;
                    debug!(%platform, dest = %dest.display(), "overwrote");
                }
            }
        }
        Ok(())
    }
}
