//! Intermediate representation of one command definition
//!
//! Every platform converter reads only this type, and every importer
//! produces it. `metadata` and `runtime` are opaque bags: they are copied,
//! never inspected.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name used when a source object carries neither `name` nor `id`
pub const UNNAMED: &str = "unnamed";

/// Argument type used when none is given
pub const DEFAULT_ARGUMENT_TYPE: &str = "string";

/// The canonical, platform-neutral command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandIr {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub arguments: Vec<Argument>,

    #[serde(default)]
    pub prompt: String,

    #[serde(default)]
    pub examples: Vec<String>,

    #[serde(default = "empty_object")]
    pub metadata: Value,

    #[serde(default = "empty_object")]
    pub runtime: Value,
}

impl CommandIr {
    /// Create an IR with only a name and prompt set
    pub fn new(name: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            arguments: Vec::new(),
            prompt: prompt.into(),
            examples: Vec::new(),
            metadata: empty_object(),
            runtime: empty_object(),
        }
    }

    /// Serialize to a JSON object (for schema validation and diffing)
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| empty_object())
    }
}

/// One declared command argument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Argument {
    #[serde(default)]
    pub name: String,

    #[serde(rename = "type", default = "default_argument_type")]
    pub kind: String,

    #[serde(default)]
    pub required: bool,

    /// `None` means "no default"; an explicit `null` decodes to `None` too
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    #[serde(default)]
    pub hint: String,
}

impl Argument {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: default_argument_type(),
            required: false,
            default: None,
            hint: String::new(),
        }
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Render for an `argument-hint`: `<name>` when required, `[name]` otherwise
    pub fn hint_token(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

pub(crate) fn default_argument_type() -> String {
    DEFAULT_ARGUMENT_TYPE.to_string()
}

pub(crate) fn empty_object() -> Value {
    Value::Object(serde_json::Map::new())
}
