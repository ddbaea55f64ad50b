//! Infrastructure Adapters
//!
//! These adapters implement the PlatformConverter port from the domain layer.
//! Each one encodes a CommandIr as one platform artifact and decodes it back.
//!
//! Fields a platform cannot express natively (`metadata`, `runtime`) travel in
//! a namespaced preserve table: `preserve` for Gemini, `x-preserve` for Codex.

pub mod claude;
pub mod codex;
pub mod gemini;

pub use claude::ClaudeConverter;
pub use codex::CodexConverter;
pub use gemini::GeminiConverter;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::entities::empty_object;
use crate::domain::ports::PlatformConverter;
use crate::domain::value_objects::{ClaudeFormat, Platform};

/// The opaque bags carried verbatim through an artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Preserve {
    #[serde(default = "empty_object")]
    pub metadata: Value,
    #[serde(default = "empty_object")]
    pub runtime: Value,
}

impl Default for Preserve {
    fn default() -> Self {
        Self {
            metadata: empty_object(),
            runtime: empty_object(),
        }
    }
}

/// Get converters for every platform, in write order
pub fn all_converters(claude_format: ClaudeFormat) -> Vec<Box<dyn PlatformConverter>> {
    Platform::ALL
        .iter()
        .map(|p| get_converter(*p, claude_format))
        .collect()
}

/// Get the converter for a specific platform
pub fn get_converter(platform: Platform, claude_format: ClaudeFormat) -> Box<dyn PlatformConverter> {
    match platform {
        Platform::Gemini => Box::new(GeminiConverter::new()),
        Platform::Codex => Box::new(CodexConverter::new()),
        Platform::Claude => Box::new(ClaudeConverter::new(claude_format)),
    }
}
