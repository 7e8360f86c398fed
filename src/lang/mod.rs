mod codes;
mod normalizer;

pub use codes::normalize_language_code;
pub use normalizer::{normalize_languages, NormalizeOutcome};

use std::path::Path;

use anyhow::Result;

pub fn run(path: &Path) -> Result<()> {
    let outcome = normalize_languages(path, normalize_language_code)?;
    tracing::debug!(target: "lang", total = outcome.total, changed = outcome.changed, "dataset rewritten");
    println!("updated {} records", outcome.changed);
    Ok(())
}
