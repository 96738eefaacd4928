//! Command-line interface for stalk
//!
//! A single command: load config, look up one email, print what was found.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{default_search_dirs, load_config, resolve_api_key, CliOverrides};
use crate::enrich::ClearbitClient;

mod lookup;

pub use lookup::{run_lookup, LookupOutcome};

pub const DEFAULT_EMAIL: &str = "alex@clearbit.com";

/// A little command line stalker using the Clearbit API
#[derive(Parser, Debug)]
#[command(name = "stalk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default is $HOME/.stalk/config.yaml, then ./config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Clearbit API key; overrides CLEARBIT_KEY and the config file
    #[arg(long, value_name = "KEY")]
    pub key: Option<String>,

    /// Email of the person to find
    #[arg(short, long, value_name = "EMAIL", default_value = DEFAULT_EMAIL)]
    pub email: String,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref(), &default_search_dirs())
        .context("Failed to load configuration")?;
    if let Some(ref source) = config.source {
        tracing::debug!("Using config file {}", source.display());
    }

    let api_key = resolve_api_key(&config, &CliOverrides { key: cli.key.clone() })?;
    let client = ClearbitClient::new(api_key, config.clearbit_endpoint.as_deref())
        .context("Failed to create Clearbit client")?;

    let outcome = run_lookup(&client, &cli.email, &mut io::stdout().lock())?;
    tracing::debug!("Lookup for {} finished: {:?}", cli.email, outcome);
    Ok(())
}

// RUST_LOG in the environment always takes precedence; otherwise --verbose picks DEBUG over WARN.
fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .try_init();
}
