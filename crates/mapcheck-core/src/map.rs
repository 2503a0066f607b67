//! # Map Data Model
//!
//! The aggregate root [`MapData`] and the records it owns. Field names
//! serialize in camelCase (`fillPath`, `borderSegments`) and a border's kind
//! serializes as `type`, matching the map documents served to the frontend.
//!
//! Cross-references between records are by id only. Nothing here enforces
//! that a reference resolves; that is the validator's job, and the model must
//! be able to hold broken maps so they can be reported on.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::identity::{BorderId, ContinentId, TerritoryId};
use crate::point::Point;

/// A named region of the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub continent: ContinentId,
    /// Label anchor.
    pub center: Point,
    /// Closed SVG path outlining the territory.
    pub fill_path: String,
    /// Borders this territory claims, in drawing order.
    #[serde(default)]
    pub border_segments: Vec<BorderId>,
}

impl Territory {
    /// True if `border` is listed in `border_segments`.
    pub fn declares(&self, border: &BorderId) -> bool {
        self.border_segments.contains(border)
    }
}

/// Border classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderKind {
    /// Shared land boundary between two territories.
    Land,
    /// Crossing over open water.
    Sea,
    /// Land boundary running along a coastline.
    Coast,
}

impl BorderKind {
    /// The serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Land => "land",
            Self::Sea => "sea",
            Self::Coast => "coast",
        }
    }
}

impl std::fmt::Display for BorderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edge shared by exactly two territories, one of which may be the ocean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub id: BorderId,
    /// Open SVG path tracing the border.
    pub path: String,
    pub territories: (TerritoryId, TerritoryId),
    #[serde(rename = "type")]
    pub kind: BorderKind,
    /// Simplified samples used for hit-testing.
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Border {
    /// True if either side of the border is `territory`.
    pub fn touches(&self, territory: &TerritoryId) -> bool {
        self.territories.0 == *territory || self.territories.1 == *territory
    }

    /// True if the border joins `a` and `b`, in either order.
    pub fn connects(&self, a: &TerritoryId, b: &TerritoryId) -> bool {
        (self.territories.0 == *a && self.territories.1 == *b)
            || (self.territories.0 == *b && self.territories.1 == *a)
    }

    /// The side opposite `territory`, or `None` if the border does not touch it.
    pub fn other_side(&self, territory: &TerritoryId) -> Option<&TerritoryId> {
        if self.territories.0 == *territory {
            Some(&self.territories.1)
        } else if self.territories.1 == *territory {
            Some(&self.territories.0)
        } else {
            None
        }
    }

    /// Sea crossings and coastlines facing the ocean sentinel.
    pub fn is_maritime(&self) -> bool {
        self.kind == BorderKind::Sea
            || self.territories.0.is_ocean()
            || self.territories.1.is_ocean()
    }
}

/// A group of territories that yields a bonus when held together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Continent {
    pub id: ContinentId,
    pub name: String,
    #[serde(default)]
    pub territories: Vec<TerritoryId>,
    pub bonus: u32,
    pub color: String,
}

/// Descriptive header of a map document.
///
/// Keys other than the named ones are preserved in `extra` so that a map
/// round-trips through the fixer without losing editor annotations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MapMetadata {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Aggregate root of a territory map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapData {
    pub version: String,
    #[serde(default)]
    pub metadata: MapMetadata,
    #[serde(default)]
    pub territories: BTreeMap<TerritoryId, Territory>,
    #[serde(default)]
    pub borders: BTreeMap<BorderId, Border>,
    #[serde(default)]
    pub continents: BTreeMap<ContinentId, Continent>,
}

impl MapData {
    /// An empty map with the given version and name.
    pub fn new(version: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            metadata: MapMetadata {
                name: name.into(),
                ..MapMetadata::default()
            },
            territories: BTreeMap::new(),
            borders: BTreeMap::new(),
            continents: BTreeMap::new(),
        }
    }

    /// Insert a territory keyed by its own id, replacing any previous entry.
    pub fn insert_territory(&mut self, territory: Territory) {
        self.territories.insert(territory.id.clone(), territory);
    }

    /// Insert a border keyed by its own id, replacing any previous entry.
    pub fn insert_border(&mut self, border: Border) {
        self.borders.insert(border.id.clone(), border);
    }

    /// Insert a continent keyed by its own id, replacing any previous entry.
    pub fn insert_continent(&mut self, continent: Continent) {
        self.continents.insert(continent.id.clone(), continent);
    }

    pub fn territory(&self, id: &TerritoryId) -> Option<&Territory> {
        self.territories.get(id)
    }

    pub fn border(&self, id: &BorderId) -> Option<&Border> {
        self.borders.get(id)
    }

    pub fn continent(&self, id: &ContinentId) -> Option<&Continent> {
        self.continents.get(id)
    }

    /// True if `id` names a territory in this map. The ocean sentinel is not
    /// a territory.
    pub fn has_territory(&self, id: &TerritoryId) -> bool {
        self.territories.contains_key(id)
    }

    /// Every border whose territory pair includes `territory`, in id order.
    pub fn borders_of<'a, 'b>(
        &'a self,
        territory: &'b TerritoryId,
    ) -> impl Iterator<Item = &'a Border> + 'b
    where
        'a: 'b,
    {
        self.borders.values().filter(move |b| b.touches(territory))
    }

    /// Distinct territories sharing a border with `territory`. The ocean
    /// sentinel is excluded.
    pub fn neighbors(&self, territory: &TerritoryId) -> BTreeSet<&TerritoryId> {
        self.borders_of(territory)
            .filter_map(|b| b.other_side(territory))
            .filter(|other| !other.is_ocean() && *other != territory)
            .collect()
    }

    /// True if some border joins `a` and `b`.
    pub fn are_connected(&self, a: &TerritoryId, b: &TerritoryId) -> bool {
        self.borders.values().any(|border| border.connects(a, b))
    }
}
