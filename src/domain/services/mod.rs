//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod differ;
mod ir_builder;

pub use differ::{diff_fields, unified_text_diff, FieldDiff};
pub use ir_builder::{build_ir, build_prompt, normalize_arguments};
