//! Domain Entities
//!
//! - `CommandIr` - The canonical, platform-neutral command
//! - `Artifact` - A converted platform file (filename + content)
//! - `Transaction` - Durable record of one batch of filesystem writes

mod artifact;
mod ir;
mod transaction;

pub use artifact::Artifact;
pub use ir::{Argument, CommandIr, DEFAULT_ARGUMENT_TYPE, UNNAMED};
pub(crate) use ir::empty_object;
pub use transaction::{BackupEntry, InstallInfo, InstallStats, Transaction, TransactionStatus};
