//! # mapcheck CLI entry point
//!
//! Parses command-line arguments, loads the validation settings, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mapcheck_cli::fix::{run_fix, FixArgs};
use mapcheck_cli::inspect::{run_inspect, InspectArgs};
use mapcheck_cli::sample::{run_sample, SampleArgs};
use mapcheck_cli::validate::{run_validate, ValidateArgs};
use mapcheck_cli::{load_config, EXIT_OPERATIONAL};

/// Territory map validator.
///
/// Checks that borders trace their territories' outlines, that territories
/// and borders agree on adjacency, and that continents list real
/// territories. Repairs the defects that have a mechanical fix.
#[derive(Parser, Debug)]
#[command(name = "mapcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML validation config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Emit log events as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate a map and print every finding.
    Validate(ValidateArgs),

    /// Apply mechanical fixes and write the corrected map.
    Fix(FixArgs),

    /// Write the built-in sample map (or its broken twin).
    Sample(SampleArgs),

    /// Summarize continents, adjacency, and border hits.
    Inspect(InspectArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "mapcheck starting");

    let result = load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Validate(args) => run_validate(&args, &config),
        Commands::Fix(args) => run_fix(&args, &config),
        Commands::Sample(args) => run_sample(&args),
        Commands::Inspect(args) => run_inspect(&args, &config),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL)
        }
    }
}
