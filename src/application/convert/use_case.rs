//! Convert Use Case
//!
//! Workers are scoped OS threads sharing one atomic cursor over the file
//! list: each `fetch_add` claims exactly one file, so no file is processed
//! twice and dispatch follows list order. Completion order is not fixed;
//! the recorded `createdFiles` are sorted back into dispatch order.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info, warn};

use crate::domain::entities::Transaction;
use crate::domain::ports::{FileSystem, PlatformConverter, TransactionStore};
use crate::error::{AdapterError, AdapterResult};
use crate::infrastructure::adapters::get_converter;
use crate::infrastructure::fs::relative_to;
use crate::infrastructure::schema::SchemaSet;

use super::options::ConvertOptions;
use super::result::{ConvertResult, FileFailure};
use crate::application::importer::{import_to_ir, scan_sources};
use crate::application::writer::{output_path, write_artifact};

/// One artifact written by a worker
struct Written {
    file_index: usize,
    platform_index: usize,
    path: PathBuf,
    hash: String,
}

/// Convert use case - runs the batch pipeline
pub struct ConvertUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    fs: FS,
    store: TS,
    schemas: SchemaSet,
}

impl<FS, TS> ConvertUseCase<FS, TS>
where
    FS: FileSystem,
    TS: TransactionStore,
{
    pub fn new(fs: FS, store: TS, schemas: SchemaSet) -> Self {
        Self { fs, store, schemas }
    }

    /// Scan `options.src` and convert every source file found
    pub fn execute(&self, options: &ConvertOptions) -> AdapterResult<ConvertResult> {
        let files = scan_sources(&options.src, options.from)?;
        info!(src = %options.src.display(), files = files.len(), "scanned sources");
        self.execute_files(&files, options)
    }

    /// Convert an explicit file list
    ///
    /// Per-file failures do not abort the call; they are returned in the
    /// result and recorded in the transaction. `Err` means the transaction
    /// itself could not be recorded.
    pub fn execute_files(
        &self,
        files: &[PathBuf],
        options: &ConvertOptions,
    ) -> AdapterResult<ConvertResult> {
        let converters: Vec<Box<dyn PlatformConverter>> = options
            .to
            .platforms()
            .into_iter()
            .map(|p| get_converter(p, options.claude_format))
            .collect();

        let workers = options.effective_concurrency().min(files.len()).max(1);
        let cursor = AtomicUsize::new(0);
        let stop = AtomicBool::new(false);
        let written: Mutex<Vec<Written>> = Mutex::new(Vec::new());
        let failures: Mutex<Vec<FileFailure>> = Mutex::new(Vec::new());

        debug!(workers, files = files.len(), "starting batch");

        std::thread::scope(|scope| {
            for worker in 0..workers {
                let (cursor, stop, written, failures, converters) =
                    (&cursor, &stop, &written, &failures, &converters);
                scope.spawn(move || loop {
                    if options.fail_fast && stop.load(Ordering::SeqCst) {
                        break;
                    }
                    let index = cursor.fetch_add(1, Ordering::SeqCst);
                    let Some(file) = files.get(index) else {
                        break;
                    };
                    debug!(worker, index, file = %file.display(), "claimed");

                    if let Err(error) = self.process_file(index, file, options, converters, written) {
                        warn!(file = %file.display(), code = %error.code(), %error, "file failed");
                        stop.store(true, Ordering::SeqCst);
                        failures
                            .lock()
                            .unwrap_or_else(PoisonError::into_inner)
                            .push(FileFailure {
                                index,
                                file: file.clone(),
                                error,
                            });
                    }
                });
            }
        });

        let mut written = written.into_inner().unwrap_or_else(PoisonError::into_inner);
        written.sort_by_key(|w| (w.file_index, w.platform_index));
        let mut failures = failures.into_inner().unwrap_or_else(PoisonError::into_inner);
        failures.sort_by_key(|f| f.index);

        let mut transaction = Transaction::new(Transaction::generate_id());
        for w in written {
            transaction.add_created(w.path, Some(w.hash));
        }
        if !failures.is_empty() {
            transaction.mark_failed(
                failures
                    .iter()
                    .map(|f| format!("{}: {}", f.file.display(), f.error))
                    .collect(),
            );
        }

        let record_path = self.store.record(&transaction)?;
        info!(
            txn_id = %transaction.id,
            created = transaction.created_files.len(),
            failed = failures.len(),
            "batch complete"
        );

        Ok(ConvertResult {
            transaction,
            record_path,
            files: files.len(),
            failures,
        })
    }

    /// import → validate → convert → write for one file
    fn process_file(
        &self,
        index: usize,
        file: &Path,
        options: &ConvertOptions,
        converters: &[Box<dyn PlatformConverter>],
        written: &Mutex<Vec<Written>>,
    ) -> AdapterResult<()> {
        let ir = import_to_ir(&self.fs, file, options.from)?;

        debug!(file = %file.display(), name = %ir.name, "validating IR");
        self.schemas
            .ir
            .validate(&ir.to_value())
            .map_err(|errors| AdapterError::IrInvalid {
                file: file.to_path_buf(),
                errors,
            })?;

        let rel = relative_to(&options.src, file);
        for (platform_index, converter) in converters.iter().enumerate() {
            let platform = converter.platform();
            let artifact = converter.convert(&ir)?;

            if options.strict {
                let target = output_path(&options.out, platform, &rel, &artifact.filename)?;
                let document = converter.document(&target, &artifact.content)?;
                self.schemas
                    .for_platform(platform)
                    .validate(&document)
                    .map_err(|errors| AdapterError::IrInvalid {
                        file: target,
                        errors,
                    })?;
            }

            let path = write_artifact(&self.fs, &options.out, platform, &rel, &artifact)?;
            info!(%platform, out_path = %path.display(), "wrote artifact");

            written
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(Written {
                    file_index: index,
                    platform_index,
                    path,
                    hash: artifact.hash(),
                });
        }
        Ok(())
    }
}
