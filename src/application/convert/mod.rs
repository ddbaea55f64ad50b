//! Convert Use Case
//!
//! The batch pipeline: scan a source tree, then drive
//! import → validate → convert → write for every file across a bounded pool
//! of worker threads, and record one transaction covering everything written.
//!
//! The transaction is recorded whether or not the batch failed, so a failed
//! batch can still be rolled back.

mod options;
mod result;
mod use_case;

pub use options::{ConvertOptions, DEFAULT_CONCURRENCY};
pub use result::{ConvertResult, FileFailure};
pub use use_case::ConvertUseCase;
