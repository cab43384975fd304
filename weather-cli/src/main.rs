//! Binary crate for the `waybar-weather` status-bar module.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Diagnostic logging to stderr (off unless `WAYBAR_WEATHER_LOG` is set)
//! - Printing exactly one JSON record to stdout, whatever happens

use std::io;

use clap::{Parser, error::ErrorKind};
use tracing_subscriber::{EnvFilter, filter::LevelFilter};
use waybar_weather_core::emit;

mod cli;

const LOG_ENV: &str = "WAYBAR_WEATHER_LOG";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    init_logging();

    let record = match cli::Cli::try_parse() {
        Ok(cmd) => cmd.run().await,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => cli::record_for_parse_error(&err),
    };

    // The host only reads stdout; a failed write has nowhere else to go.
    if let Err(err) = emit(&mut io::stdout().lock(), &record) {
        tracing::error!("{err:#}");
    }
}

fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
