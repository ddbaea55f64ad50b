//! Claude Code Adapter
//!
//! Claude commands are the IR itself, written as pretty JSON or YAML with
//! every IR field present.

use std::path::Path;

use serde_json::Value;

use crate::domain::entities::{Artifact, CommandIr};
use crate::domain::ports::platform_converter::name_from_path;
use crate::domain::ports::PlatformConverter;
use crate::domain::value_objects::{ClaudeFormat, Format, Platform};
use crate::error::{AdapterError, AdapterResult};
use crate::infrastructure::codec;

/// Claude converter
#[derive(Debug, Clone, Copy, Default)]
pub struct ClaudeConverter {
    format: ClaudeFormat,
}

impl ClaudeConverter {
    pub fn new(format: ClaudeFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> ClaudeFormat {
        self.format
    }

    fn encode(&self, ir: &CommandIr) -> Result<String, String> {
        match self.format {
            ClaudeFormat::Json => serde_json::to_string_pretty(ir)
                .map(|json| json + "\n")
                .map_err(|e| e.to_string()),
            ClaudeFormat::Yaml => codec::encode_yaml(ir),
        }
    }
}

impl PlatformConverter for ClaudeConverter {
    fn platform(&self) -> Platform {
        Platform::Claude
    }

    fn extension(&self) -> &'static str {
        self.format.extension()
    }

    fn convert(&self, ir: &CommandIr) -> AdapterResult<Artifact> {
        let content = self.encode(ir).map_err(|message| AdapterError::Encode {
            platform: self.platform().to_string(),
            name: ir.name.clone(),
            message,
        })?;
        Ok(Artifact::new(format!("{}.{}", ir.name, self.extension()), content))
    }

    /// Structural decode with defaults filled in; nameless arguments are dropped
    ///
    /// The encoding follows the file's extension, not this converter's
    /// format, so a `.yaml` artifact imports the same under either setting.
    fn import(&self, path: &Path, content: &str) -> AdapterResult<CommandIr> {
        let mut doc = self.document(path, content)?;
        if let Some(obj) = doc.as_object_mut() {
            obj.insert("name".to_string(), Value::String(name_from_path(path)));
        }

        let mut ir: CommandIr = serde_json::from_value(doc).map_err(|e| AdapterError::Decode {
            file: path.to_path_buf(),
            format: Format::from_path(path).unwrap_or(self.format.into()),
            message: e.to_string(),
        })?;
        ir.arguments.retain(|a| !a.name.is_empty());
        Ok(ir)
    }

    fn document(&self, path: &Path, content: &str) -> AdapterResult<Value> {
        let format = match Format::from_path(path) {
            Some(format @ (Format::Json | Format::Yaml)) => format,
            _ => Format::from(self.format),
        };
        codec::decode(format, content, path)
    }
}
