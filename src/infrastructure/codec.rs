//! Format codecs
//!
//! Decodes JSON, YAML, TOML and Markdown-frontmatter text into
//! `serde_json::Value`, and encodes YAML for frontmatter and Claude output.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{json, Value};

use crate::domain::value_objects::Format;
use crate::error::{AdapterError, AdapterResult};

static FRONTMATTER_RE: OnceLock<Regex> = OnceLock::new();

fn frontmatter_re() -> &'static Regex {
    FRONTMATTER_RE.get_or_init(|| {
        Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n(.*)\z").expect("frontmatter pattern is valid")
    })
}

/// A Markdown file split into its frontmatter block and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownParts<'a> {
    /// Raw YAML between the `---` lines, if the file has a frontmatter block
    pub yaml: Option<&'a str>,
    /// Everything after the closing `---` line (the whole file without frontmatter)
    pub body: &'a str,
}

/// Split on the first `---\n...\n---\n` block anchored at the start of the file
pub fn split_frontmatter(content: &str) -> MarkdownParts<'_> {
    match frontmatter_re().captures(content) {
        Some(caps) => MarkdownParts {
            yaml: caps.get(1).map(|m| m.as_str()),
            body: caps.get(2).map(|m| m.as_str()).unwrap_or_default(),
        },
        None => MarkdownParts {
            yaml: None,
            body: content,
        },
    }
}

/// Resolve a file's format from its extension
pub fn format_for(path: &Path) -> AdapterResult<Format> {
    Format::from_path(path).ok_or_else(|| AdapterError::UnsupportedFormat {
        file: path.to_path_buf(),
        extension: path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default(),
    })
}

/// Decode text in the given format
///
/// Markdown decodes to `{ "frontmatter": <object>, "body": <string> }`; a file
/// without frontmatter yields an empty frontmatter object.
pub fn decode(format: Format, text: &str, file: &Path) -> AdapterResult<Value> {
    let err = |message: String| AdapterError::Decode {
        file: file.to_path_buf(),
        format,
        message,
    };

    match format {
        Format::Json => serde_json::from_str(text).map_err(|e| err(e.to_string())),
        Format::Yaml => decode_yaml(text).map_err(err),
        Format::Toml => toml::from_str::<Value>(text).map_err(|e| err(e.to_string())),
        Format::Markdown => {
            let parts = split_frontmatter(text);
            let frontmatter = match parts.yaml {
                Some(yaml) => decode_yaml(yaml).map_err(err)?,
                None => json!({}),
            };
            Ok(json!({ "frontmatter": frontmatter, "body": parts.body }))
        }
    }
}

/// Decode YAML; an empty document is an empty object
fn decode_yaml(text: &str) -> Result<Value, String> {
    let value: Value = serde_yaml_ng::from_str(text).map_err(|e| e.to_string())?;
    Ok(if value.is_null() { json!({}) } else { value })
}

/// Encode any serializable value as YAML
pub fn encode_yaml<T: Serialize>(value: &T) -> Result<String, String> {
    serde_yaml_ng::to_string(value).map_err(|e| e.to_string())
}
