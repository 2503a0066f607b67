//! # Sample Subcommand
//!
//! Emits one of the built-in fixture maps, as a starting point for a new map
//! or as input for trying out `validate` and `fix`.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mapcheck_core::{invalid_map_data, sample_map_data};

/// Arguments for the `mapcheck sample` subcommand.
#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Emit the map with seeded defects instead of the clean one.
    #[arg(long)]
    pub invalid: bool,

    /// Where to write the map. Defaults to JSON on stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the sample subcommand. Always returns exit code 0.
pub fn run_sample(args: &SampleArgs) -> Result<u8> {
    let map = if args.invalid { invalid_map_data() } else { sample_map_data() };
    crate::write_map(&map, args.output.as_ref())?;
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcheck_core::load_map;

    #[test]
    fn test_sample_writes_clean_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.json");
        let args = SampleArgs { invalid: false, output: Some(path.clone()) };
        assert_eq!(run_sample(&args).unwrap(), 0);
        assert_eq!(load_map(&path).unwrap(), sample_map_data());
    }

    #[test]
    fn test_sample_writes_invalid_map_as_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("invalid.yml");
        let args = SampleArgs { invalid: true, output: Some(path.clone()) };
        run_sample(&args).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("b_orphan"));
        assert_eq!(load_map(&path).unwrap(), invalid_map_data());
    }

    #[test]
    fn test_sample_unwritable_output_is_error() {
        let args = SampleArgs {
            invalid: false,
            output: Some(PathBuf::from("/nonexistent/dir/sample.json")),
        };
        assert!(run_sample(&args).is_err());
    }
}
