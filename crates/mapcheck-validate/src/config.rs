//! # Validation Settings
//!
//! Tunables for the validator, readable from a YAML file. Every field has a
//! default, so a config file only needs to name what it changes.
//!
//! ```yaml
//! edge_tolerance: 5.0
//! edge_match_threshold: 0.8
//! strict_paths: false
//! check_overlaps: true
//! ```

use std::path::Path;

use mapcheck_geometry::{DEFAULT_EDGE_MATCH_THRESHOLD, DEFAULT_EDGE_TOLERANCE};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error loading a [`ValidationConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The config is not valid YAML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// A value is outside its permitted range.
    #[error("invalid config value for {field}: {reason}")]
    OutOfRange { field: &'static str, reason: String },
}

/// Validator settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Distance within which a border point counts as on a territory edge.
    pub edge_tolerance: f64,
    /// Fraction of border points that must lie on each territory's edge.
    pub edge_match_threshold: f64,
    /// Also run the strict path parser over every territory outline.
    pub strict_paths: bool,
    /// Run the bounding-box overlap heuristic.
    pub check_overlaps: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            edge_match_threshold: DEFAULT_EDGE_MATCH_THRESHOLD,
            strict_paths: false,
            check_overlaps: true,
        }
    }
}

impl ValidationConfig {
    /// Parse a YAML document and check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed YAML or unknown keys and
    /// [`ConfigError::OutOfRange`] for a negative tolerance or a threshold
    /// outside `[0, 1]`.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.check()?;
        Ok(config)
    }

    /// Load a YAML config file.
    ///
    /// # Errors
    ///
    /// As [`from_yaml_str`](Self::from_yaml_str), plus [`ConfigError::Io`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Reject values the validator cannot use.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::OutOfRange`] naming the first offending field.
    pub fn check(&self) -> Result<(), ConfigError> {
        if !(self.edge_tolerance.is_finite() && self.edge_tolerance >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "edge_tolerance",
                reason: format!("{} is not a non-negative distance", self.edge_tolerance),
            });
        }
        if !(0.0..=1.0).contains(&self.edge_match_threshold) {
            return Err(ConfigError::OutOfRange {
                field: "edge_match_threshold",
                reason: format!("{} is not within [0, 1]", self.edge_match_threshold),
            });
        }
        Ok(())
    }
}
