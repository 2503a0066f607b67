//! # Validate Subcommand
//!
//! Runs the validator over one map file and prints the findings, either as
//! a human-readable report or as the JSON-serialized result.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use mapcheck_validate::{ValidationConfig, ValidationResult, Validator};

/// Arguments for the `mapcheck validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Map document to validate (JSON, or YAML by extension).
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Print the full validation result as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the validate subcommand.
///
/// Returns exit code: 0 if the map is valid, 1 if it has errors.
pub fn run_validate(args: &ValidateArgs, config: &ValidationConfig) -> Result<u8> {
    let map = crate::read_map(&args.map)?;
    let result = Validator::new(config.clone()).validate(&map);

    if args.json {
        let json = serde_json::to_string_pretty(&result).context("failed to encode result")?;
        println!("{json}");
    } else {
        print!("{}", render_report(&args.map.display().to_string(), &result));
    }

    Ok(if result.valid { 0 } else { crate::EXIT_INVALID })
}

/// Plain-text report: a status line, the border stats, then every finding.
pub fn render_report(label: &str, result: &ValidationResult) -> String {
    let mut out = String::new();
    let status = if result.valid { "OK" } else { "FAIL" };
    let _ = writeln!(
        out,
        "{status}: {label} ({} error(s), {} warning(s))",
        result.errors.len(),
        result.warnings.len()
    );

    let stats = &result.stats;
    let _ = writeln!(
        out,
        "Territories: {}  Borders: {} ({} valid, {} invalid, {} orphan)",
        stats.total_territories,
        stats.total_borders,
        stats.valid_borders,
        stats.invalid_borders,
        stats.orphan_borders
    );

    for finding in result.errors.iter().chain(&result.warnings) {
        let _ = writeln!(out, "  {finding}");
    }
    out
}
