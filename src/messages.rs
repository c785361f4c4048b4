//! Locale message loading.
//!
//! The rewrite command resolves translation keys by inverting the primary
//! locale's message file: nested JSON objects are flattened to dot-path keys,
//! then the key→text map is turned into a text→key lookup.

use std::{collections::HashMap, path::Path};

use anyhow::{Context, Result, bail};
use serde_json::Value;

/// Flattened key→text map for one locale file, in file order.
pub type MessageMap = Vec<(String, String)>;

/// Loads `<messages_root>/<locale>.json` and flattens nested objects into
/// dot-path keys.
pub fn load_messages(messages_root: &str, locale: &str) -> Result<MessageMap> {
    let path = Path::new(messages_root).join(format!("{locale}.json"));
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read messages file: {}", path.display()))?;

    let root: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse messages file: {}", path.display()))?;

    if !root.is_object() {
        bail!("Messages file is not a JSON object: {}", path.display());
    }

    let mut messages = Vec::new();
    flatten("", &root, &mut messages);
    Ok(messages)
}

fn flatten(prefix: &str, value: &Value, out: &mut MessageMap) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(&key, child, out);
            }
        }
        Value::String(text) => out.push((prefix.to_string(), text.clone())),
        // Non-string leaves (arrays, numbers, booleans) carry no translatable
        // text and are skipped.
        _ => {}
    }
}

/// Inverts a key→text map into a text→key lookup.
///
/// When several keys share the same text, the first one in file order wins.
pub fn invert_messages(messages: &MessageMap) -> HashMap<String, String> {
    let mut lookup = HashMap::new();
    for (key, text) in messages {
        lookup
            .entry(text.clone())
            .or_insert_with(|| key.clone());
    }
    lookup
}
