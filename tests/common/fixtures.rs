//! Reusable command file contents.

#![allow(dead_code)]

/// Claude JSON command with one required argument and an example
pub const REVIEW_JSON: &str = r#"{
  "name": "review",
  "description": "Review code",
  "arguments": [{"name": "scope", "required": true}],
  "prompt": "Review the code",
  "examples": ["/review src"]
}"#;

/// Claude YAML command using builder aliases (`id`, `desc`, `system`/`user`, `params`)
pub const COMMIT_YAML: &str = "id: commit
desc: Write a commit message
system: Be concise.
user: Summarize the staged diff.
params:
  - key: style
    default: conventional
";

/// Not valid JSON
pub const BROKEN_JSON: &str = r#"{"name": "broken", "prompt": "#;

/// IR schema that additionally demands a non-empty description
pub const STRICT_IR_SCHEMA: &str = r#"{
  "$schema": "http://json-schema.org/draft-07/schema#",
  "type": "object",
  "required": ["name", "prompt", "description"],
  "properties": {
    "name": {"type": "string", "minLength": 1},
    "prompt": {"type": "string"},
    "description": {"type": "string", "minLength": 1}
  }
}"#;
