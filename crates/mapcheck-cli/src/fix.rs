//! # Fix Subcommand
//!
//! Validates a map, applies the mechanical fixes, re-validates the result,
//! and writes the corrected map. Findings that need an editor are printed
//! so nothing is silently dropped.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mapcheck_validate::{suggest_fixes_with_summary, ValidationConfig, Validator};

/// Arguments for the `mapcheck fix` subcommand.
#[derive(Args, Debug)]
pub struct FixArgs {
    /// Map document to repair.
    #[arg(value_name = "MAP")]
    pub map: PathBuf,

    /// Where to write the corrected map. Defaults to JSON on stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the fix subcommand.
///
/// Returns exit code: 0 if the corrected map is valid, 1 otherwise. The
/// corrected map is written either way.
pub fn run_fix(args: &FixArgs, config: &ValidationConfig) -> Result<u8> {
    let validator = Validator::new(config.clone());
    let map = crate::read_map(&args.map)?;

    let before = validator.validate(&map);
    let (fixed, summary) = suggest_fixes_with_summary(&map, &before);
    let after = validator.validate(&fixed);

    tracing::info!(
        removed_borders = summary.removed_borders.len(),
        pruned_references = summary.pruned_references.len(),
        unaddressed = summary.unaddressed,
        errors_before = before.errors.len(),
        errors_after = after.errors.len(),
        "fixes applied"
    );
    for border in &summary.removed_borders {
        eprintln!("removed border {border}");
    }
    for (territory, border) in &summary.pruned_references {
        eprintln!("pruned {territory} -> {border}");
    }
    for remaining in &after.errors {
        eprintln!("  {remaining}");
    }

    crate::write_map(&fixed, args.output.as_ref())?;

    Ok(if after.valid { 0 } else { crate::EXIT_INVALID })
}
