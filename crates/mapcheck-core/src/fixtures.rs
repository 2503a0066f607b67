//! # Reference Maps
//!
//! Two factory-built maps used by tests, the CLI `sample` command, and
//! anyone wanting a known-good starting point.
//!
//! The sample world lays six territories on a 3×2 grid of 100-unit cells,
//! each inset by one unit so neighbouring bounding boxes never touch. Shared
//! borders run along the two-unit gutter between cells, one unit from each
//! territory's edge.
//!
//! ```text
//!   x: 0        100        200        300
//!   y:0 +---------+----------+----------+
//!       | alaska  |   nwt    | greenland|
//!   100 +---------+----------+----------+
//!       | alberta | ontario  |  quebec  |
//!   200 +---------+----------+----------+
//! ```

use crate::identity::{BorderId, ContinentId, TerritoryId};
use crate::map::{Border, BorderKind, Continent, MapData, MapMetadata, Territory};
use crate::point::Point;

fn territory(
    id: &str,
    name: &str,
    continent: &str,
    center: (f64, f64),
    fill_path: &str,
    borders: &[&str],
) -> Territory {
    Territory {
        id: TerritoryId::from(id),
        name: name.to_string(),
        continent: ContinentId::from(continent),
        center: Point::from(center),
        fill_path: fill_path.to_string(),
        border_segments: borders.iter().map(|b| BorderId::from(*b)).collect(),
    }
}

fn border(
    id: &str,
    path: &str,
    a: &str,
    b: &str,
    kind: BorderKind,
    points: &[(f64, f64)],
) -> Border {
    Border {
        id: BorderId::from(id),
        path: path.to_string(),
        territories: (TerritoryId::from(a), TerritoryId::from(b)),
        kind,
        points: points.iter().copied().map(Point::from).collect(),
    }
}

fn continent(id: &str, name: &str, members: &[&str], bonus: u32, color: &str) -> Continent {
    Continent {
        id: ContinentId::from(id),
        name: name.to_string(),
        territories: members.iter().map(|t| TerritoryId::from(*t)).collect(),
        bonus,
        color: color.to_string(),
    }
}

/// The six-territory world. Valid, with no warnings, under the default
/// validation settings.
pub fn sample_map_data() -> MapData {
    let mut map = MapData::new("1.0.0", "Sample World");
    map.metadata = MapMetadata {
        name: "Sample World".to_string(),
        description: Some("Six-territory reference map".to_string()),
        author: None,
        width: Some(300.0),
        height: Some(200.0),
        ..MapMetadata::default()
    };

    for t in [
        territory(
            "alaska",
            "Alaska",
            "north_america",
            (50.0, 50.0),
            "M 1 1 L 99 1 L 99 99 L 1 99 Z",
            &["b_alaska_nwt", "b_alaska_alberta", "b_alaska_ocean"],
        ),
        territory(
            "northwest_territory",
            "Northwest Territory",
            "north_america",
            (150.0, 50.0),
            "M 101 1 L 199 1 L 199 99 L 101 99 Z",
            &["b_alaska_nwt", "b_nwt_greenland", "b_nwt_ontario"],
        ),
        territory(
            "greenland",
            "Greenland",
            "north_atlantic",
            (250.0, 50.0),
            "M 201 1 L 299 1 L 299 99 L 201 99 Z",
            &["b_nwt_greenland", "b_greenland_quebec"],
        ),
        territory(
            "alberta",
            "Alberta",
            "north_america",
            (50.0, 150.0),
            "M 1 101 L 99 101 L 99 199 L 1 199 Z",
            &["b_alaska_alberta", "b_alberta_ontario"],
        ),
        territory(
            "ontario",
            "Ontario",
            "north_america",
            (150.0, 150.0),
            "M 101 101 L 199 101 L 199 199 C 170 199 130 199 101 199 Z",
            &["b_nwt_ontario", "b_alberta_ontario", "b_ontario_quebec"],
        ),
        territory(
            "quebec",
            "Quebec",
            "north_atlantic",
            (250.0, 150.0),
            "M 201 101 L 299 101 L 299 199 L 201 199 Z",
            &["b_greenland_quebec", "b_ontario_quebec"],
        ),
    ] {
        map.insert_territory(t);
    }

    for b in [
        border(
            "b_alaska_nwt",
            "M 100 1 L 100 99",
            "alaska",
            "northwest_territory",
            BorderKind::Land,
            &[(100.0, 1.0), (100.0, 99.0)],
        ),
        border(
            "b_alaska_alberta",
            "M 1 100 L 99 100",
            "alaska",
            "alberta",
            BorderKind::Land,
            &[(1.0, 100.0), (99.0, 100.0)],
        ),
        border(
            "b_alaska_ocean",
            "M 0 1 L 0 99",
            "alaska",
            "ocean",
            BorderKind::Coast,
            &[(0.0, 1.0), (0.0, 99.0)],
        ),
        border(
            "b_nwt_greenland",
            "M 200 1 L 200 99",
            "northwest_territory",
            "greenland",
            BorderKind::Sea,
            &[(200.0, 1.0), (200.0, 99.0)],
        ),
        border(
            "b_nwt_ontario",
            "M 101 100 L 199 100",
            "northwest_territory",
            "ontario",
            BorderKind::Land,
            &[(101.0, 100.0), (199.0, 100.0)],
        ),
        border(
            "b_greenland_quebec",
            "M 201 100 L 299 100",
            "greenland",
            "quebec",
            BorderKind::Coast,
            &[(201.0, 100.0), (299.0, 100.0)],
        ),
        border(
            "b_alberta_ontario",
            "M 100 101 Q 100 150 100 199",
            "alberta",
            "ontario",
            BorderKind::Land,
            &[(100.0, 101.0), (100.0, 150.0), (100.0, 199.0)],
        ),
        border(
            "b_ontario_quebec",
            "M 200 101 L 200 199",
            "ontario",
            "quebec",
            BorderKind::Land,
            &[(200.0, 101.0), (200.0, 199.0)],
        ),
    ] {
        map.insert_border(b);
    }

    map.insert_continent(continent(
        "north_america",
        "North America",
        &["alaska", "northwest_territory", "alberta", "ontario"],
        3,
        "#d4a017",
    ));
    map.insert_continent(continent(
        "north_atlantic",
        "North Atlantic",
        &["greenland", "quebec"],
        2,
        "#3a7bd5",
    ));

    map
}

/// The sample world with three deliberate defects:
///
/// - `b_invalid` claims to join alaska and greenland but traces neither;
/// - `b_orphan` joins alaska to `atlantis`, which does not exist;
/// - `orphan-territory` declares `non-existent-border` and touches no border.
pub fn invalid_map_data() -> MapData {
    let mut map = sample_map_data();
    map.metadata.name = "Invalid World".to_string();
    map.metadata.description = Some("Sample world with seeded defects".to_string());

    map.insert_border(border(
        "b_invalid",
        "M 500 500 L 600 600",
        "alaska",
        "greenland",
        BorderKind::Land,
        &[(500.0, 500.0), (600.0, 600.0)],
    ));
    map.insert_border(border(
        "b_orphan",
        "M 0 100 L 0 200",
        "alaska",
        "atlantis",
        BorderKind::Land,
        &[],
    ));
    map.insert_territory(territory(
        "orphan-territory",
        "Orphan Territory",
        "north_america",
        (425.0, 425.0),
        "M 400 400 L 450 400 L 450 450 L 400 450 Z",
        &["non-existent-border"],
    ));

    map
}
