mod cli;
mod domain;
mod filter;
mod infrastructure;
mod lang;
mod pipeline;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    infrastructure::logging::init_tracing(cli.verbose)?;

    match cli.command {
        Command::Filter(args) => {
            let opts = pipeline::FilterOptions {
                input: args.input,
                output: args.output,
                log: args.log,
                blocklist: args.blocklist,
                dry_run: args.dry_run,
            };
            pipeline::run(&opts)?;
        }
        Command::NormalizeLangs(args) => {
            lang::run(&args.file)?;
        }
    }

    Ok(())
}
