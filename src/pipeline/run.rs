use std::{
    collections::HashSet,
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::Serialize;
use thiserror::Error;

use crate::{
    domain::{FilterOutcome, PeerRecord, RejectedPeer},
    filter::{self, PatternTables},
};

use super::report;

#[derive(Debug, Clone)]
pub struct FilterOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log: Option<PathBuf>,
    pub blocklist: Option<PathBuf>,
    pub dry_run: bool,
}

/// Failures on the primary input are the one fatal error class: there is
/// no meaningful partial result without the dataset.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input file not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {} as a peer list", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub fn run(opts: &FilterOptions) -> Result<FilterOutcome> {
    let peers = load_peers(&opts.input)?;
    tracing::debug!(target: "pipeline", total = peers.len(), input = %opts.input.display(), "peer list loaded");

    let blocklist = filter::load_blocklist(opts.blocklist.as_deref());
    if !blocklist.is_empty() {
        println!("external blocklist loaded: {} domains", blocklist.len());
    }

    let outcome = classify_peers(peers, &blocklist, PatternTables::builtin());
    report::print_summary(&outcome);

    if opts.dry_run {
        println!("(dry-run: no files were written)");
        return Ok(outcome);
    }

    write_json(&opts.output, &outcome.kept)
        .with_context(|| format!("failed to write filtered list to {}", opts.output.display()))?;
    println!("✓ filtered list saved: {}", opts.output.display());

    if let Some(log_path) = &opts.log {
        let log = serde_json::json!({
            "summary": outcome.summary(),
            "filtered_servers": outcome.rejected,
        });
        write_json(log_path, &log)
            .with_context(|| format!("failed to write filtering log to {}", log_path.display()))?;
        println!("✓ filtering log saved: {}", log_path.display());
    }

    Ok(outcome)
}

/// Partitions the peer list. Classification runs on the normalized shape;
/// kept records stay in their original input shape.
pub fn classify_peers(
    peers: Vec<PeerRecord>,
    blocklist: &HashSet<String>,
    tables: &PatternTables,
) -> FilterOutcome {
    let mut kept = Vec::new();
    let mut rejected = Vec::new();

    for peer in peers {
        let server = peer.to_server();
        match filter::is_spam_server(&server, blocklist, tables) {
            Some(reason) => {
                tracing::debug!(target: "pipeline", host = server.host(), %reason, "peer rejected");
                rejected.push(RejectedPeer {
                    host: server.host().to_string(),
                    reason,
                    platform: server.platform.clone(),
                    stats: server.stats.clone().unwrap_or_default(),
                });
            }
            None => kept.push(peer),
        }
    }

    FilterOutcome { kept, rejected }
}

fn load_peers(path: &Path) -> Result<Vec<PeerRecord>, InputError> {
    if !path.exists() {
        return Err(InputError::Missing(path.to_path_buf()));
    }
    let raw = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| InputError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)?;
    fs::write(path, rendered)?;
    Ok(())
}
