//! Install Use Case
//!
//! Mirrors converted output trees into a project's platform directories
//! (`.gemini/commands`, `.codex/prompts`, `.claude/commands`) under a
//! conflict strategy, and records what it created and backed up so the
//! install can be rolled back.

mod options;
mod result;
mod use_case;

pub use options::InstallOptions;
pub use result::{InstallPlan, InstallResult};
pub use use_case::{backup_path, InstallUseCase};
