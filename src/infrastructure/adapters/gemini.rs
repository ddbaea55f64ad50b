//! Gemini CLI Adapter
//!
//! Generates `.toml` command files:
//!
//! ```toml
//! description = "..."
//! prompt = "..."
//!
//! [[args]]
//! name = "scope"
//! type = "string"
//! required = true
//! hint = ""
//!
//! [docs]
//! examples = ["..."]
//!
//! [preserve.metadata]
//! [preserve.runtime]
//! ```
//!
//! TOML has no null. An argument without a default omits the `default` key,
//! and `null` values inside the preserve bags are dropped on write.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Preserve;
use crate::domain::entities::{empty_object, Argument, Artifact, CommandIr, DEFAULT_ARGUMENT_TYPE};
use crate::domain::ports::platform_converter::name_from_path;
use crate::domain::ports::PlatformConverter;
use crate::domain::value_objects::{Format, Platform};
use crate::error::{AdapterError, AdapterResult};

/// Gemini converter
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiConverter;

impl GeminiConverter {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiDocument {
    #[serde(default)]
    description: String,
    #[serde(default)]
    prompt: String,
    #[serde(default)]
    args: Vec<GeminiArg>,
    #[serde(default)]
    docs: GeminiDocs,
    #[serde(default)]
    preserve: Preserve,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiArg {
    #[serde(default)]
    name: String,
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default: Option<Value>,
    #[serde(default)]
    hint: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct GeminiDocs {
    #[serde(default)]
    examples: Vec<String>,
}

impl From<&Argument> for GeminiArg {
    fn from(arg: &Argument) -> Self {
        Self {
            name: arg.name.clone(),
            kind: arg.kind.clone(),
            required: arg.required,
            default: arg.default.as_ref().and_then(strip_nulls),
            hint: arg.hint.clone(),
        }
    }
}

impl From<GeminiArg> for Argument {
    fn from(arg: GeminiArg) -> Self {
        Self {
            name: arg.name,
            kind: if arg.kind.is_empty() {
                DEFAULT_ARGUMENT_TYPE.to_string()
            } else {
                arg.kind
            },
            required: arg.required,
            default: arg.default.filter(|v| !v.is_null()),
            hint: arg.hint,
        }
    }
}

impl PlatformConverter for GeminiConverter {
    fn platform(&self) -> Platform {
        Platform::Gemini
    }

    fn extension(&self) -> &'static str {
        "toml"
    }

    fn convert(&self, ir: &CommandIr) -> AdapterResult<Artifact> {
        let doc = GeminiDocument {
            description: ir.description.clone(),
            prompt: ir.prompt.clone(),
            args: ir.arguments.iter().map(GeminiArg::from).collect(),
            docs: GeminiDocs {
                examples: ir.examples.clone(),
            },
            preserve: Preserve {
                metadata: strip_nulls(&ir.metadata).unwrap_or_else(empty_object),
                runtime: strip_nulls(&ir.runtime).unwrap_or_else(empty_object),
            },
        };

        let content = toml::to_string(&doc).map_err(|e| AdapterError::Encode {
            platform: self.platform().to_string(),
            name: ir.name.clone(),
            message: e.to_string(),
        })?;

        Ok(Artifact::new(format!("{}.toml", ir.name), content))
    }

    fn import(&self, path: &Path, content: &str) -> AdapterResult<CommandIr> {
        let doc: GeminiDocument = toml::from_str(content).map_err(|e| AdapterError::Decode {
            file: path.to_path_buf(),
            format: Format::Toml,
            message: e.to_string(),
        })?;

        Ok(CommandIr {
            name: name_from_path(path),
            description: doc.description,
            arguments: doc
                .args
                .into_iter()
                .filter(|a| !a.name.is_empty())
                .map(Argument::from)
                .collect(),
            prompt: doc.prompt,
            examples: doc.docs.examples,
            metadata: doc.preserve.metadata,
            runtime: doc.preserve.runtime,
        })
    }

    fn document(&self, path: &Path, content: &str) -> AdapterResult<Value> {
        toml::from_str(content).map_err(|e| AdapterError::Decode {
            file: path.to_path_buf(),
            format: Format::Toml,
            message: e.to_string(),
        })
    }
}

/// Copy of `value` without nulls; `None` when `value` itself is null
fn strip_nulls(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::Array(items) => Some(Value::Array(items.iter().filter_map(strip_nulls).collect())),
        Value::Object(map) => Some(Value::Object(
            map.iter()
                .filter_map(|(k, v)| strip_nulls(v).map(|v| (k.clone(), v)))
                .collect(),
        )),
        other => Some(other.clone()),
    }
}
