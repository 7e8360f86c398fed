use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "peerguard",
    version,
    about = "Filters spam and malicious servers out of fediverse peer suggestion datasets"
)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter suspicious servers out of a peer suggestions file
    Filter(FilterArgs),

    /// Normalize detected-language codes in the peer stats dataset
    NormalizeLangs(NormalizeLangsArgs),
}

#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Input peer suggestions file
    #[arg(long, default_value = "data/peer_suggestions.json", value_name = "FILE")]
    pub input: PathBuf,

    /// Output file for the filtered list
    #[arg(long, default_value = "data/filtered_peers.json", value_name = "FILE")]
    pub output: PathBuf,

    /// Filtering log file
    #[arg(long, default_value = "data/spam_filtered.log.json", value_name = "FILE")]
    pub log: Option<PathBuf>,

    /// External blocklist JSON file (array of hosts or object keyed by host)
    #[arg(long, value_name = "FILE")]
    pub blocklist: Option<PathBuf>,

    /// Report the outcome without writing any files
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args, Debug)]
pub struct NormalizeLangsArgs {
    /// Peer stats dataset, rewritten in place
    #[arg(long, default_value = "data/peer_stats.json", value_name = "FILE")]
    pub file: PathBuf,
}
