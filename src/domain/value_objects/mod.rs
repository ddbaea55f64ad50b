//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod conflict_strategy;
mod format;
mod platform;

pub use conflict_strategy::ConflictStrategy;
pub use format::{ClaudeFormat, Format};
pub use platform::{Platform, PlatformSelection, SourcePlatform};
