//! # Map Documents
//!
//! Loading and saving [`MapData`] as JSON or YAML. The format is chosen from
//! the file extension (`.yaml`/`.yml` for YAML, anything else as JSON).

use std::path::Path;

use crate::error::MapError;
use crate::map::MapData;

/// On-disk encoding of a map document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapFormat {
    Json,
    Yaml,
}

impl MapFormat {
    /// Pick the format for `path` from its extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    /// Decode a map document held in memory.
    pub fn decode(self, content: &str) -> Result<MapData, String> {
        match self {
            Self::Json => serde_json::from_str(content).map_err(|e| format!("invalid JSON: {e}")),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| format!("invalid YAML: {e}")),
        }
    }

    /// Encode a map for writing. JSON output is pretty-printed.
    pub fn encode(self, map: &MapData) -> Result<String, MapError> {
        match self {
            Self::Json => {
                serde_json::to_string_pretty(map).map_err(|e| MapError::Encode(e.to_string()))
            }
            Self::Yaml => serde_yaml::to_string(map).map_err(|e| MapError::Encode(e.to_string())),
        }
    }
}

/// Read a map document from `path`.
///
/// # Errors
///
/// Returns [`MapError::Io`] if the file cannot be read and
/// [`MapError::Decode`] if its content is not a map.
pub fn load_map(path: impl AsRef<Path>) -> Result<MapData, MapError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| MapError::Io {
        path: path.display().to_string(),
        source,
    })?;

    MapFormat::from_path(path)
        .decode(&content)
        .map_err(|reason| MapError::Decode {
            path: path.display().to_string(),
            reason,
        })
}

/// Write `map` to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`MapError::Encode`] if serialization fails and
/// [`MapError::Io`] if the file cannot be written.
pub fn save_map(map: &MapData, path: impl AsRef<Path>) -> Result<(), MapError> {
    let path = path.as_ref();
    let content = MapFormat::from_path(path).encode(map)?;
    std::fs::write(path, content).map_err(|source| MapError::Io {
        path: path.display().to_string(),
        source,
    })
}
