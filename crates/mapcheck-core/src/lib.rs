//! # mapcheck-core: Foundational Types for Territory Maps
//!
//! This crate is the leaf of the mapcheck workspace. It defines the map
//! data model that every other crate consumes: territories, borders,
//! continents, and the aggregate [`MapData`] root.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `TerritoryId`, `BorderId` and
//!    `ContinentId` are distinct types. A border id cannot be passed where a
//!    territory id is expected.
//!
//! 2. **Deterministic iteration.** Every id-keyed collection is a `BTreeMap`,
//!    so validation output is ordered by id and stable across runs.
//!
//! 3. **No global map state.** Fixtures are factory functions returning owned
//!    values; callers inject a `MapData` wherever one is needed.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `mapcheck-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod fixtures;
pub mod identity;
pub mod io;
pub mod map;
pub mod point;

pub use error::MapError;
pub use fixtures::{invalid_map_data, sample_map_data};
pub use identity::{BorderId, ContinentId, TerritoryId, OCEAN};
pub use io::{load_map, save_map, MapFormat};
pub use map::{Border, BorderKind, Continent, MapData, MapMetadata, Territory};
pub use point::Point;
