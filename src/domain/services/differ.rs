//! Differ Domain Service
//!
//! Field-level comparison of two decoded objects, used by the round-trip
//! report, plus a line diff for text fields that changed.

use serde::Serialize;
use serde_json::Value;
use similar::TextDiff;

/// Keys added, removed and changed between two objects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldDiff {
    /// Keys present only in the right-hand object
    pub added: Vec<String>,
    /// Keys present only in the left-hand object
    pub removed: Vec<String>,
    /// Shared keys whose values differ
    pub changed: Vec<String>,
}

impl FieldDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Compare the top-level keys of two objects
///
/// Key order in each list follows the objects' own key order. Non-object
/// values are compared as if they had no keys.
pub fn diff_fields(a: &Value, b: &Value) -> FieldDiff {
    let empty = serde_json::Map::new();
    let left = a.as_object().unwrap_or(&empty);
    let right = b.as_object().unwrap_or(&empty);

    let added = right
        .keys()
        .filter(|k| !left.contains_key(*k))
        .cloned()
        .collect();
    let removed = left
        .keys()
        .filter(|k| !right.contains_key(*k))
        .cloned()
        .collect();
    let changed = left
        .iter()
        .filter(|(k, v)| right.get(*k).is_some_and(|other| other != *v))
        .map(|(k, _)| k.clone())
        .collect();

    FieldDiff {
        added,
        removed,
        changed,
    }
}

/// Unified line diff between two texts (empty when equal)
pub fn unified_text_diff(old: &str, new: &str) -> String {
    if old == new {
        return String::new();
    }
    TextDiff::from_lines(old, new)
        .unified_diff()
        .context_radius(2)
        .header("before", "after")
        .to_string()
}
