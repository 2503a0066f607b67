//! # mapcheck-cli: CLI Tool for Territory Maps
//!
//! Provides the `mapcheck` command-line interface over the validation
//! library.
//!
//! ## Subcommands
//!
//! - `mapcheck validate`: Run every check and print the findings.
//! - `mapcheck fix`: Apply the mechanical fixes and write the result.
//! - `mapcheck sample`: Emit the sample (or deliberately broken) map.
//! - `mapcheck inspect`: Summarize continents, adjacency, and border hits.
//!
//! ```bash
//! mapcheck sample --invalid --output broken.json
//! mapcheck validate broken.json
//! mapcheck fix broken.json --output fixed.json
//! mapcheck inspect fixed.json --at 100,50
//! ```
//!
//! ## Exit Codes
//!
//! `0` success, `1` the map (or the fixed map) is invalid, `2` operational
//! error such as an unreadable file.

pub mod fix;
pub mod inspect;
pub mod sample;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mapcheck_core::{load_map, save_map, MapData, MapFormat};
use mapcheck_validate::ValidationConfig;

/// Exit code for a map that failed validation.
pub const EXIT_INVALID: u8 = 1;

/// Exit code for I/O, decode, or configuration failures.
pub const EXIT_OPERATIONAL: u8 = 2;

/// Load the validator settings from `path`, or the defaults if none given.
pub fn load_config(path: Option<&Path>) -> Result<ValidationConfig> {
    match path {
        Some(path) => {
            let config = ValidationConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            tracing::debug!(config = %path.display(), ?config, "loaded validation config");
            Ok(config)
        }
        None => Ok(ValidationConfig::default()),
    }
}

/// Load the map at `path`, attaching the path to any error.
pub fn read_map(path: &Path) -> Result<MapData> {
    let map = load_map(path).with_context(|| format!("failed to load map {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        territories = map.territories.len(),
        borders = map.borders.len(),
        continents = map.continents.len(),
        "loaded map"
    );
    Ok(map)
}

/// Write `map` to `output`, or to stdout as pretty JSON when no path is given.
pub fn write_map(map: &MapData, output: Option<&PathBuf>) -> Result<()> {
    match output {
        Some(path) => {
            save_map(map, path).with_context(|| format!("failed to write map {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote map");
        }
        None => {
            let json = MapFormat::Json.encode(map).context("failed to encode map")?;
            println!("{json}");
        }
    }
    Ok(())
}
