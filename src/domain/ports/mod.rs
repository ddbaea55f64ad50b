//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod platform_converter;
pub mod transaction_store;

pub use file_system::FileSystem;
pub use platform_converter::PlatformConverter;
pub use transaction_store::TransactionStore;
