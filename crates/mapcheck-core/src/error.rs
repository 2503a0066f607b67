//! # Error Types
//!
//! Errors raised while moving map data in and out of the process. Anomalies
//! inside a successfully parsed map are not errors at this layer; the
//! validator reports them as structured findings.

use thiserror::Error;

/// Top-level error type for map I/O.
#[derive(Error, Debug)]
pub enum MapError {
    /// The map file could not be read or written.
    #[error("io error on '{path}': {source}")]
    Io {
        /// Path of the file being accessed.
        path: String,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },

    /// The document was readable but did not decode into a map.
    #[error("cannot decode map '{path}': {reason}")]
    Decode {
        /// Path of the offending document.
        path: String,
        /// Decoder message.
        reason: String,
    },

    /// The map could not be encoded for writing.
    #[error("cannot encode map: {0}")]
    Encode(String),
}
