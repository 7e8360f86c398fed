use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::Path,
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::NamedTempFile;

#[derive(Debug, Clone, Copy)]
pub struct NormalizeOutcome {
    pub total: usize,
    pub changed: usize,
}

/// Rewrites the `languages_detected` list of every record in place:
/// each entry goes through the normalization collaborator, entries that
/// normalize away and duplicate codes are dropped, first-seen order is
/// preserved. The file is replaced atomically via a temp sibling.
pub fn normalize_languages<F>(path: &Path, normalize: F) -> Result<NormalizeOutcome>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mut records: Vec<Value> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    let mut changed = 0;
    for record in &mut records {
        if rewrite_languages(record, &normalize) {
            changed += 1;
        }
    }

    write_atomic(path, &records)?;
    Ok(NormalizeOutcome {
        total: records.len(),
        changed,
    })
}

fn rewrite_languages<F>(record: &mut Value, normalize: &F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    let Some(langs) = record.get("languages_detected").and_then(Value::as_array) else {
        return false;
    };

    let mut seen = HashSet::new();
    let mut normalized = Vec::new();
    for entry in langs {
        let Some(raw) = entry.as_str() else { continue };
        let Some(code) = normalize(raw) else { continue };
        if code.is_empty() || !seen.insert(code.clone()) {
            continue;
        }
        normalized.push(Value::String(code));
    }

    if normalized == *langs {
        return false;
    }
    record["languages_detected"] = Value::Array(normalized);
    true
}

fn write_atomic(path: &Path, records: &[Value]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut rendered = serde_json::to_string_pretty(records)?;
    rendered.push('\n');

    let mut tmp = NamedTempFile::new_in(dir)
        .with_context(|| format!("failed to create temp file next to {}", path.display()))?;
    tmp.write_all(rendered.as_bytes())?;
    tmp.persist(path)
        .map_err(|err| err.error)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    Ok(())
}
