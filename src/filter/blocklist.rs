use std::{collections::HashSet, fs, path::Path};

use serde_json::Value;

/// Loads an optional external blocklist. Either a JSON array of hostnames
/// or an object keyed by hostname is accepted. Missing, unreadable, or
/// malformed files degrade to an empty set with a warning; this never
/// fails the run.
pub fn load_blocklist(path: Option<&Path>) -> HashSet<String> {
    let Some(path) = path else {
        return HashSet::new();
    };
    if !path.exists() {
        return HashSet::new();
    }

    match read_entries(path) {
        Ok(Some(entries)) => entries,
        Ok(None) => {
            tracing::warn!(
                target: "blocklist",
                path = %path.display(),
                "blocklist is neither a JSON array nor an object; ignoring"
            );
            HashSet::new()
        }
        Err(err) => {
            tracing::warn!(
                target: "blocklist",
                path = %path.display(),
                error = %err,
                "failed to load blocklist"
            );
            HashSet::new()
        }
    }
}

fn read_entries(path: &Path) -> anyhow::Result<Option<HashSet<String>>> {
    let raw = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&raw)?;
    Ok(match value {
        Value::Array(items) => Some(items.iter().map(coerce_string).collect()),
        Value::Object(map) => Some(map.keys().cloned().collect()),
        _ => None,
    })
}

fn coerce_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
