use std::io;

use anyhow::Result;
use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

static INIT: OnceCell<()> = OnceCell::new();

// Diagnostics go to stderr so the console report on stdout stays parseable.
pub fn init_tracing(verbose: bool) -> Result<()> {
    INIT.get_or_try_init::<_, anyhow::Error>(|| {
        let default_level = if verbose { "debug" } else { "info" };
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let console_layer = fmt::layer()
            .with_writer(io::stderr)
            .with_target(true)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .init();

        Ok(())
    })?;
    Ok(())
}
