//! GroundZero command-line front end.
//!
//! Exposes the pipeline operations and a configuration dump:
//!
//!   groundzero parse "SOL jumped 8% after ETF approval this morning"
//!   groundzero check "SOL jumped 8% after ETF approval this morning"
//!   groundzero parse "..." | groundzero route
//!   groundzero route parsed.json
//!   groundzero --config config/groundzero.toml --cache-dir data/prices check "..."
//!   groundzero config
//!
//! Results are written to stdout as JSON. Errors go to stderr with exit
//! status 1.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use groundzero_config::{build_parser, build_pipeline, GroundZeroConfig};
use groundzero_contracts::{
    claim::ParsedClaim,
    error::{GroundZeroError, GroundZeroResult},
};
use groundzero_core::ensure_claim_text;
use groundzero_finance::SystemClock;

// ── CLI definition ────────────────────────────────────────────────────────────

/// GroundZero: check short factual claims against cached evidence.
#[derive(Parser)]
#[command(
    name = "groundzero",
    about = "Deterministic claim checker",
    long_about = "Extracts a structured claim, routes it to a domain verification procedure,\n\
                  and aggregates the results into one verdict with a confidence."
)]
struct Cli {
    /// TOML configuration file. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding cached price and news files.
    #[arg(long, global = true)]
    cache_dir: Option<PathBuf>,

    /// Print single-line JSON instead of pretty-printed JSON.
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract and classify a claim without verifying it.
    Parse {
        /// The claim text.
        text: String,
    },
    /// Run the full pipeline and print the verdict.
    Check {
        /// The claim text.
        text: String,
    },
    /// Route a parsed claim (the JSON `parse` prints) and print every
    /// procedure result without aggregating them.
    Route {
        /// File holding the parsed claim. Reads stdin when omitted or `-`.
        input: Option<PathBuf>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    // Set RUST_LOG=debug for routing and verifier detail.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("groundzero error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> GroundZeroResult<String> {
    if let Command::Parse { text } | Command::Check { text } = &cli.command {
        ensure_claim_text(text)?;
    }
    let config = load_config(cli)?;

    match &cli.command {
        Command::Config => config.to_toml_string(),
        Command::Parse { text } => render(&build_parser().parse(text)?, cli.compact),
        Command::Check { text } => {
            let pipeline = build_pipeline(&config, Arc::new(SystemClock))?;
            render(&pipeline.check(text)?, cli.compact)
        }
        Command::Route { input } => {
            let parsed = read_parsed_claim(input.as_deref())?;
            let pipeline = build_pipeline(&config, Arc::new(SystemClock))?;
            render(&pipeline.route(&parsed), cli.compact)
        }
    }
}

fn read_parsed_claim(input: Option<&Path>) -> GroundZeroResult<ParsedClaim> {
    let raw = match input.filter(|p| *p != Path::new("-")) {
        Some(path) => std::fs::read_to_string(path).map_err(|e| GroundZeroError::InvalidInput {
            reason: format!("failed to read '{}': {}", path.display(), e),
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| GroundZeroError::InvalidInput {
                    reason: format!("failed to read stdin: {}", e),
                })?;
            buf
        }
    };
    serde_json::from_str(&raw).map_err(|e| GroundZeroError::InvalidInput {
        reason: format!("parsed claim is not valid JSON: {}", e),
    })
}

fn load_config(cli: &Cli) -> GroundZeroResult<GroundZeroConfig> {
    let mut config = match &cli.config {
        Some(path) => GroundZeroConfig::from_file(path)?,
        None => GroundZeroConfig::default(),
    };
    if let Some(dir) = &cli.cache_dir {
        config.market_data.cache_dir = dir.clone();
    }
    debug!(cache_dir = %config.market_data.cache_dir.display(), "configuration loaded");
    Ok(config)
}

fn render<T: Serialize>(value: &T, compact: bool) -> GroundZeroResult<String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|e| GroundZeroError::Serialization {
        reason: e.to_string(),
    })
}
