//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod transaction;

pub use transaction::{JsonTransactionStore, RECORD_FILE_NAME};
