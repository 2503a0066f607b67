//! # Map Identifier Newtypes
//!
//! Newtype wrappers for the three identifier namespaces of a territory map.
//! They serialize as bare strings, so map documents stay plain JSON/YAML.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Territory id of the synthetic open-water region.
pub const OCEAN: &str = "ocean";

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Wrap a raw identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Access the raw identifier.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id!(
    /// Identifier of a territory, or the [`OCEAN`] sentinel.
    TerritoryId
);

string_id!(
    /// Identifier of a border segment.
    BorderId
);

string_id!(
    /// Identifier of a continent.
    ContinentId
);

impl TerritoryId {
    /// The open-water sentinel.
    pub fn ocean() -> Self {
        Self(OCEAN.to_string())
    }

    /// True for the open-water sentinel.
    pub fn is_ocean(&self) -> bool {
        self.0 == OCEAN
    }
}
