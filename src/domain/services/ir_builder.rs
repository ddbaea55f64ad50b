//! IR Builder Domain Service
//!
//! Normalizes an arbitrary decoded source object into a [`CommandIr`].
//! Building never fails: every field is resolved through a chain of aliases
//! and falls back to a default.

use serde_json::{Map, Value};

use crate::domain::entities::{Argument, CommandIr, DEFAULT_ARGUMENT_TYPE, UNNAMED};

/// Field names that may hold the argument list, in precedence order
const ARGUMENT_ALIASES: [&str; 3] = ["arguments", "params", "parameters"];

/// Build the canonical IR from a decoded source object
///
/// Non-object input is treated as an empty object.
pub fn build_ir(input: &Value) -> CommandIr {
    let empty = Map::new();
    let obj = input.as_object().unwrap_or(&empty);

    let name = first_text(obj, &["name", "id"]).unwrap_or_else(|| UNNAMED.to_string());
    let description = first_text(obj, &["description", "desc"]).unwrap_or_default();

    let arguments = ARGUMENT_ALIASES
        .iter()
        .find_map(|key| present(obj, key))
        .map(normalize_arguments)
        .unwrap_or_default();

    let examples = present(obj, "examples")
        .and_then(Value::as_array)
        .map(|items| items.iter().map(value_text).collect())
        .unwrap_or_default();

    CommandIr {
        name,
        description,
        arguments,
        prompt: build_prompt(input),
        examples,
        metadata: collect_metadata(obj),
        runtime: collect_runtime(obj),
    }
}

/// Normalize an argument list, dropping entries without a resolvable name
///
/// Anything other than an array yields an empty list.
pub fn normalize_arguments(list: &Value) -> Vec<Argument> {
    let Some(items) = list.as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let arg = item.as_object()?;
            let name = first_text(arg, &["name", "key"])?;
            Some(Argument {
                name,
                kind: first_text(arg, &["type", "kind"])
                    .unwrap_or_else(|| DEFAULT_ARGUMENT_TYPE.to_string()),
                required: arg.get("required").map(is_truthy).unwrap_or(false),
                default: present(arg, "default").cloned(),
                hint: first_text(arg, &["hint", "help", "description"]).unwrap_or_default(),
            })
        })
        .collect()
}

/// Resolve the prompt text
///
/// An explicit `prompt` string wins verbatim. Otherwise `system`, `user` and
/// the joined `messages` contents are concatenated with blank lines between
/// them, and the result is trimmed.
pub fn build_prompt(input: &Value) -> String {
    if let Some(prompt) = input.get("prompt").and_then(Value::as_str) {
        return prompt.to_string();
    }

    let mut parts = Vec::new();
    for key in ["system", "user"] {
        if let Some(value) = input.get(key).filter(|v| is_truthy(v)) {
            parts.push(value_text(value));
        }
    }
    if let Some(messages) = input.get("messages").and_then(Value::as_array) {
        let joined = messages
            .iter()
            .map(|m| {
                m.get("content")
                    .filter(|v| is_truthy(v))
                    .or_else(|| m.get("text").filter(|v| is_truthy(v)))
                    .map(value_text)
                    .unwrap_or_default()
            })
            .collect::<Vec<_>>()
            .join("\n");
        parts.push(joined);
    }

    parts.join("\n\n").trim().to_string()
}

/// `metadata`: common top-level aliases plus the whole `metadata`/`meta` bag as `extra`
fn collect_metadata(obj: &Map<String, Value>) -> Value {
    let mut metadata = Map::new();
    for key in ["version", "author", "tags"] {
        if let Some(value) = present(obj, key) {
            metadata.insert(key.to_string(), value.clone());
        }
    }
    if let Some(extra) = present(obj, "metadata").or_else(|| present(obj, "meta")) {
        metadata.insert("extra".to_string(), extra.clone());
    }
    Value::Object(metadata)
}

/// `runtime`: taken whole when present, else assembled from `model`/`temperature`
fn collect_runtime(obj: &Map<String, Value>) -> Value {
    if let Some(runtime) = present(obj, "runtime") {
        return runtime.clone();
    }
    let mut runtime = Map::new();
    for key in ["model", "temperature"] {
        if let Some(value) = present(obj, key) {
            runtime.insert(key.to_string(), value.clone());
        }
    }
    Value::Object(runtime)
}

/// A field that exists and is not `null`
fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|v| !v.is_null())
}

/// First alias holding a non-empty string (or a number, rendered as text)
fn first_text(obj: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match obj.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
