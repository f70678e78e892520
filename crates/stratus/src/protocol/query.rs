//! Query protocol request encoding.
//!
//! Requests are first encoded to a JSON value by serde, then flattened into
//! form parameters:
//!
//! - nested structures become `Name.Field`
//! - lists become `Name.member.1`, `Name.member.2`, ... (an empty list is `Name=`)
//! - [`Entries`] maps become `Name.entry.N.key` / `Name.entry.N.value`
//! - booleans are lowercase and numbers use their decimal form
//!
//! The Query protocol has no null, so `Optional::Null` fields are omitted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::http::signing::uri_encode;

/// A string map carried as `entry.N.key`/`entry.N.value` pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Entries {
    #[serde(rename = "entry", default)]
    entries: Vec<Entry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Entry {
    key: String,
    value: String,
}

impl Entries {
    /// Look up a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Copy into an ordered map.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .map(|e| (e.key.clone(), e.value.clone()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Entries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| Entry { key: k.into(), value: v.into() })
                .collect(),
        }
    }
}

/// Flatten an encoded request into ordered form parameters.
pub fn flatten(value: &Value) -> Vec<(String, String)> {
    let mut out = Vec::new();
    if let Value::Object(map) = value {
        for (key, child) in map {
            flatten_into(key.clone(), child, &mut out);
        }
    }
    out
}

fn flatten_into(prefix: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {
            tracing::debug!(param = %prefix, "dropping null parameter, query protocol has no null");
        }
        Value::Bool(b) => out.push((prefix, b.to_string())),
        Value::Number(n) => out.push((prefix, n.to_string())),
        Value::String(s) => out.push((prefix, s.clone())),
        Value::Array(items) if items.is_empty() => out.push((prefix, String::new())),
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                flatten_into(format!("{prefix}.member.{}", i + 1), item, out);
            }
        }
        Value::Object(map) => {
            for (key, child) in map {
                match (key.as_str(), child) {
                    ("entry", Value::Array(entries)) => {
                        for (i, entry) in entries.iter().enumerate() {
                            flatten_into(format!("{prefix}.entry.{}", i + 1), entry, out);
                        }
                    }
                    _ => flatten_into(format!("{prefix}.{key}"), child, out),
                }
            }
        }
    }
}

/// Encode a complete form body: `Action`, `Version`, then the flattened input.
pub fn encode_body(action: &str, version: &str, input: &Value) -> String {
    let mut params = vec![
        ("Action".to_string(), action.to_string()),
        ("Version".to_string(), version.to_string()),
    ];
    params.extend(flatten(input));
    params
        .iter()
        .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
