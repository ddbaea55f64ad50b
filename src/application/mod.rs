//! Application Layer
//!
//! Use cases that orchestrate the conversion flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain conversion rules (those are in Domain and the adapters)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ConvertUseCase` - Batch conversion of a source tree, recorded as a transaction
//! - `InstallUseCase` - Copy converted output into a project, honoring a conflict strategy
//! - `RollbackUseCase` - Reverse a recorded transaction
//! - `RoundtripUseCase` - Convert and re-import, reporting field-level loss
//! - `ValidateUseCase` - Check converted output against the platform schemas
//! - `inspect_transaction` - Current state of a transaction's files

pub mod convert;
pub mod importer;
pub mod inspect;
pub mod install;
pub mod rollback;
pub mod roundtrip;
pub mod validate;
pub mod writer;

pub use convert::{ConvertOptions, ConvertResult, ConvertUseCase, FileFailure};
pub use importer::{import_to_ir, is_source_file, scan_sources};
pub use inspect::{inspect_transaction, FileEntry, FileState, TransactionView};
pub use install::{InstallOptions, InstallPlan, InstallResult, InstallUseCase};
pub use rollback::{RollbackResult, RollbackUseCase};
pub use roundtrip::{RoundtripOptions, RoundtripReport, RoundtripUseCase};
pub use validate::{InvalidFile, ValidateReport, ValidateTarget, ValidateUseCase};
pub use writer::{output_path, write_artifact};
