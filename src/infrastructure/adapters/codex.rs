//! OpenAI Codex CLI Adapter
//!
//! Generates `.md` prompts with a YAML frontmatter block:
//!
//! ```markdown
//! ---
//! description: Review the code
//! argument-hint: <scope> [depth]
//! arguments: [...]
//! x-preserve:
//!   metadata: {}
//!   runtime: {}
//! ---
//!
//! <prompt>
//!
//! ## Examples
//! - /review src
//! ```
//!
//! The importer trims the body, so leading and trailing whitespace of the
//! prompt does not survive a round trip. Examples are single lines.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::Preserve;
use crate::domain::entities::{Argument, Artifact, CommandIr};
use crate::domain::services::normalize_arguments;
use crate::domain::ports::platform_converter::name_from_path;
use crate::domain::ports::PlatformConverter;
use crate::domain::value_objects::{Format, Platform};
use crate::error::{AdapterError, AdapterResult};
use crate::infrastructure::codec;

static EXAMPLES_RE: OnceLock<Regex> = OnceLock::new();

fn examples_re() -> &'static Regex {
    EXAMPLES_RE.get_or_init(|| {
        Regex::new(r"(?is)##\s*examples\r?\n(.*)").expect("examples pattern is valid")
    })
}

/// Codex converter
#[derive(Debug, Clone, Copy, Default)]
pub struct CodexConverter;

impl CodexConverter {
    pub fn new() -> Self {
        Self
    }
}

/// Hand-written prompts are read leniently: scalar text fields accept any
/// YAML scalar, and arguments go through the same normalization as sources.
#[derive(Debug, Serialize, Deserialize)]
struct Frontmatter {
    #[serde(default, deserialize_with = "lenient_text")]
    description: String,
    #[serde(rename = "argument-hint", default, deserialize_with = "lenient_text")]
    argument_hint: String,
    #[serde(default, deserialize_with = "lenient_arguments")]
    arguments: Vec<Argument>,
    #[serde(rename = "x-preserve", default)]
    preserve: Preserve,
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

fn lenient_arguments<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Argument>, D::Error> {
    Ok(normalize_arguments(&Value::deserialize(deserializer)?))
}

/// `<name>` for required arguments, `[name]` otherwise, space separated
fn argument_hint(arguments: &[Argument]) -> String {
    arguments
        .iter()
        .map(Argument::hint_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split the body into prompt text and the bullets of its `## Examples` section
fn split_examples(body: &str) -> (&str, Vec<String>) {
    let Some(caps) = examples_re().captures(body) else {
        return (body, Vec::new());
    };

    let start = caps.get(0).map(|m| m.start()).unwrap_or(body.len());
    let examples = caps
        .get(1)
        .map(|section| {
            section
                .as_str()
                .lines()
                .filter_map(|line| line.trim_start().strip_prefix("- "))
                .map(|example| example.trim().to_string())
                .collect()
        })
        .unwrap_or_default();

    (&body[..start], examples)
}

impl PlatformConverter for CodexConverter {
    fn platform(&self) -> Platform {
        Platform::Codex
    }

    fn extension(&self) -> &'static str {
        "md"
    }

    fn convert(&self, ir: &CommandIr) -> AdapterResult<Artifact> {
        let frontmatter = Frontmatter {
            description: ir.description.clone(),
            argument_hint: argument_hint(&ir.arguments),
            arguments: ir.arguments.clone(),
            preserve: Preserve {
                metadata: ir.metadata.clone(),
                runtime: ir.runtime.clone(),
            },
        };

        let yaml = codec::encode_yaml(&frontmatter).map_err(|message| AdapterError::Encode {
            platform: self.platform().to_string(),
            name: ir.name.clone(),
            message,
        })?;

        let mut out = String::from("---\n");
        out.push_str(&yaml);
        if !yaml.ends_with('\n') {
            out.push('\n');
        }
        out.push_str("---\n\n");
        out.push_str(&ir.prompt);

        if !ir.examples.is_empty() {
            out.push_str("\n\n## Examples\n");
            for example in &ir.examples {
                out.push_str(&format!("- {}\n", example));
            }
        }

        Ok(Artifact::new(format!("{}.md", ir.name), out))
    }

    fn import(&self, path: &Path, content: &str) -> AdapterResult<CommandIr> {
        let decoded = self.document(path, content)?;
        let frontmatter: Frontmatter =
            serde_json::from_value(decoded).map_err(|e| AdapterError::Decode {
                file: path.to_path_buf(),
                format: Format::Markdown,
                message: e.to_string(),
            })?;

        let body = codec::split_frontmatter(content).body;
        let (prompt, examples) = split_examples(body);

        Ok(CommandIr {
            name: name_from_path(path),
            description: frontmatter.description,
            arguments: frontmatter.arguments,
            prompt: prompt.trim().to_string(),
            examples,
            metadata: frontmatter.preserve.metadata,
            runtime: frontmatter.preserve.runtime,
        })
    }

    /// The frontmatter object (empty when the file has none)
    fn document(&self, path: &Path, content: &str) -> AdapterResult<Value> {
        let decoded = codec::decode(Format::Markdown, content, path)?;
        Ok(decoded
            .get("frontmatter")
            .cloned()
            .unwrap_or_else(|| Value::Object(Default::default())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::build_ir;
    use serde_json::json;

    fn review_ir() -> CommandIr {
        build_ir(&json!({
            "name": "review",
            "description": "Review the code",
            "arguments": [
                { "name": "scope", "required": true },
                { "name": "depth", "type": "number", "default": 2 }
            ],
            "prompt": "Review the code in $1.",
            "examples": ["/review src", "/review tests 3"],
            "version": "1.0"
        }))
    }

    #[test]
    fn frontmatter_and_body_layout() {
        let artifact = CodexConverter::new().convert(&review_ir()).unwrap();

        assert_eq!(artifact.filename, "review.md");
        assert!(artifact.content.starts_with("---\n"));
        assert!(artifact.content.contains("argument-hint:"));
        assert!(artifact.content.contains("x-preserve:"));
        assert!(artifact
            .content
            .ends_with("---\n\nReview the code in $1.\n\n## Examples\n- /review src\n- /review tests 3\n"));
    }

    #[test]
    fn round_trips_every_field() {
        let ir = review_ir();
        let converter = CodexConverter::new();
        let artifact = converter.convert(&ir).unwrap();

        let back = converter.import(Path::new("review.md"), &artifact.content).unwrap();

        assert_eq!(back, ir);
    }

    #[test]
    fn round_trips_nulls_and_empty_prompt() {
        let mut ir = CommandIr::new("empty", "");
        ir.metadata = json!({ "extra": { "owner": null } });
        ir.runtime = json!([1, "two"]);

        let converter = CodexConverter::new();
        let artifact = converter.convert(&ir).unwrap();
        assert!(!artifact.content.contains("## Examples"));

        let back = converter.import(Path::new("empty.md"), &artifact.content).unwrap();
        assert_eq!(back, ir);
    }

    #[test]
    fn import_without_frontmatter_uses_whole_body() {
        let ir = CodexConverter::new()
            .import(Path::new("plain.md"), "  Just do it.\n")
            .unwrap();
        assert_eq!(ir.name, "plain");
        assert_eq!(ir.prompt, "Just do it.");
        assert!(ir.arguments.is_empty());
        assert_eq!(ir.metadata, json!({}));
    }

    #[test]
    fn examples_heading_is_case_insensitive() {
        let content = "---\ndescription: d\n---\n\nBody\n\n## EXAMPLES\n- one\nnot a bullet\n  - two  \n";
        let ir = CodexConverter::new().import(Path::new("x.md"), content).unwrap();
        assert_eq!(ir.prompt, "Body");
        assert_eq!(ir.examples, vec!["one", "two"]);
    }

    #[test]
    fn nameless_arguments_are_dropped_on_import() {
        let content = "---\narguments:\n  - name: a\n  - hint: no name\n---\nBody\n";
        let ir = CodexConverter::new().import(Path::new("x.md"), content).unwrap();
        assert_eq!(ir.arguments.len(), 1);
        assert_eq!(ir.arguments[0].name, "a");
    }

    #[test]
    fn hand_written_scalars_are_coerced_to_text() {
        let content = "---\ndescription: 42\nargument-hint: ~\narguments:\n  - name: 7\n    required: 1\n    help: a number\n---\nBody\n";
        let ir = CodexConverter::new().import(Path::new("x.md"), content).unwrap();

        assert_eq!(ir.description, "42");
        assert_eq!(ir.arguments.len(), 1);
        let arg = &ir.arguments[0];
        assert_eq!(arg.name, "7");
        assert!(arg.required);
        assert_eq!(arg.hint, "a number");
        assert_eq!(arg.kind, "string");
    }

    #[test]
    fn bad_frontmatter_is_decode_error() {
        let err = CodexConverter::new()
            .import(Path::new("x.md"), "---\ndescription: [unclosed\n---\nBody\n")
            .unwrap_err();
        assert_eq!(err.code().as_str(), "DECODE");
    }

    #[test]
    fn document_is_frontmatter() {
        let artifact = CodexConverter::new().convert(&review_ir()).unwrap();
        let doc = CodexConverter::new()
            .document(Path::new("review.md"), &artifact.content)
            .unwrap();
        assert_eq!(doc["argument-hint"], "<scope> [depth]");
        assert_eq!(doc["x-preserve"]["metadata"]["version"], "1.0");
    }
}
