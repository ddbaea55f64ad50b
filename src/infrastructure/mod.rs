//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `codec` - JSON/YAML/TOML/Markdown decoding
//! - `fs/` - Local file system and source scanning
//! - `schema` - JSON Schema validation
//! - `repositories/` - Transaction record storage
//! - `adapters/` - Platform converters (Gemini, Codex, Claude)

pub mod adapters;
pub mod codec;
pub mod fs;
pub mod repositories;
pub mod schema;

// Re-export for convenience
pub use adapters::{all_converters, get_converter, ClaudeConverter, CodexConverter, GeminiConverter};
pub use fs::LocalFs;
pub use repositories::JsonTransactionStore;
pub use schema::{SchemaSet, SchemaValidator};
