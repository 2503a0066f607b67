//! # Map Validator
//!
//! Five checks run in order over an immutable map. Each appends findings to a
//! shared list; none of them looks at what the others found, so one broken
//! record never hides another.
//!
//! Maritime borders (type `sea`, or an endpoint on the ocean sentinel) are
//! exempt from edge alignment. They cross water and are not expected to
//! trace a land boundary.
//!
//! The overlap check compares every pair of territories and the alignment
//! check compares every border point with every outline segment. Both are
//! quadratic, which is negligible at the tens of territories real maps have.

use mapcheck_core::{Border, MapData, Territory, TerritoryId};
use mapcheck_geometry::{
    is_border_on_territory_edge, parse_svg_path, parse_svg_path_strict, path_bounding_box,
};

use crate::config::ValidationConfig;
use crate::report::{
    ErrorDetails, PathDefect, ReferenceProblem, TopologyProblem, ValidationError,
    ValidationResult, ValidationStats,
};

/// Validate `map` with the default settings.
pub fn validate_map(map: &MapData) -> ValidationResult {
    Validator::default().validate(map)
}

/// A configured validator. Holds no state between runs.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Run every check over `map` and collect the findings.
    pub fn validate(&self, map: &MapData) -> ValidationResult {
        let mut findings = Vec::new();
        let mut stats = ValidationStats {
            total_territories: map.territories.len(),
            total_borders: map.borders.len(),
            ..ValidationStats::default()
        };

        self.check_territory_paths(map, &mut findings);
        self.check_borders(map, &mut findings, &mut stats);
        check_border_references(map, &mut findings);
        if self.config.check_overlaps {
            check_overlaps(map, &mut findings);
        }
        check_continents(map, &mut findings);

        let result = ValidationResult::from_findings(findings, stats);
        tracing::info!(
            map = %map.metadata.name,
            valid = result.valid,
            errors = result.errors.len(),
            warnings = result.warnings.len(),
            valid_borders = stats.valid_borders,
            invalid_borders = stats.invalid_borders,
            orphan_borders = stats.orphan_borders,
            "map validated"
        );
        result
    }

    fn check_territory_paths(&self, map: &MapData, findings: &mut Vec<ValidationError>) {
        let before = findings.len();

        for territory in map.territories.values() {
            let defect = if parse_svg_path(&territory.fill_path).is_empty() {
                Some(PathDefect::NoSegments)
            } else if self.config.strict_paths {
                parse_svg_path_strict(&territory.fill_path)
                    .err()
                    .map(|reason| PathDefect::Malformed { reason })
            } else {
                None
            };

            if let Some(defect) = defect {
                let message = match &defect {
                    PathDefect::NoSegments => {
                        format!("Territory {} has an empty or unparseable fill path", territory.id)
                    }
                    PathDefect::Malformed { reason } => {
                        format!("Territory {} has a malformed fill path: {reason}", territory.id)
                    }
                };
                findings.push(
                    ValidationError::error(
                        ErrorDetails::InvalidPath {
                            path: territory.fill_path.clone(),
                            defect,
                        },
                        message,
                    )
                    .with_territories([territory.id.clone()]),
                );
            }
        }

        tracing::debug!(findings = findings.len() - before, "territory path check done");
    }

    fn check_borders(
        &self,
        map: &MapData,
        findings: &mut Vec<ValidationError>,
        stats: &mut ValidationStats,
    ) {
        let before = findings.len();

        for border in map.borders.values() {
            let (a, b) = &border.territories;
            let unknown: Vec<TerritoryId> = [a, b]
                .into_iter()
                .filter(|t| !t.is_ocean() && !map.has_territory(t))
                .cloned()
                .collect();

            if !unknown.is_empty() {
                stats.orphan_borders += 1;
                let names: Vec<&str> = unknown.iter().map(|t| t.as_str()).collect();
                findings.push(
                    ValidationError::error(
                        ErrorDetails::OrphanBorder {
                            unknown_territories: unknown.clone(),
                        },
                        format!(
                            "Border {} references non-existent territory {}",
                            border.id,
                            names.join(", ")
                        ),
                    )
                    .with_border(border.id.clone())
                    .with_territories([a.clone(), b.clone()]),
                );
                continue;
            }

            if border.is_maritime() {
                stats.valid_borders += 1;
                continue;
            }

            if let (Some(first), Some(second)) = (map.territory(a), map.territory(b)) {
                if let Some(finding) = self.check_alignment(border, first, second) {
                    stats.invalid_borders += 1;
                    findings.push(finding);
                } else {
                    stats.valid_borders += 1;
                }
            }
        }

        tracing::debug!(
            findings = findings.len() - before,
            valid = stats.valid_borders,
            invalid = stats.invalid_borders,
            orphan = stats.orphan_borders,
            "border check done"
        );
    }

    fn check_alignment(
        &self,
        border: &Border,
        first: &Territory,
        second: &Territory,
    ) -> Option<ValidationError> {
        let on_edge = |t: &Territory| {
            is_border_on_territory_edge(
                &border.path,
                &t.fill_path,
                self.config.edge_tolerance,
                self.config.edge_match_threshold,
            )
        };
        let on_territory1_edge = on_edge(first);
        let on_territory2_edge = on_edge(second);

        if on_territory1_edge && on_territory2_edge {
            return None;
        }

        Some(
            ValidationError::error(
                ErrorDetails::BorderMismatch {
                    on_territory1_edge,
                    on_territory2_edge,
                    border_path: border.path.clone(),
                },
                format!(
                    "Border {} does not align with the edges of {} and {}",
                    border.id, first.id, second.id
                ),
            )
            .with_border(border.id.clone())
            .with_territories([first.id.clone(), second.id.clone()]),
        )
    }
}

fn check_border_references(map: &MapData, findings: &mut Vec<ValidationError>) {
    let before = findings.len();

    for territory in map.territories.values() {
        for declared in &territory.border_segments {
            if map.border(declared).is_none() {
                findings.push(
                    ValidationError::error(
                        ErrorDetails::MissingBorder {
                            reference: ReferenceProblem::Nonexistent,
                        },
                        format!(
                            "Territory {} references non-existent border {declared}",
                            territory.id
                        ),
                    )
                    .with_border(declared.clone())
                    .with_territories([territory.id.clone()]),
                );
            }
        }

        let mut touched = false;
        for border in map.borders_of(&territory.id) {
            touched = true;
            if !territory.declares(&border.id) {
                findings.push(
                    ValidationError::warning(
                        ErrorDetails::MissingBorder {
                            reference: ReferenceProblem::Undeclared,
                        },
                        format!(
                            "Border {} touches territory {} but is not in its border segments",
                            border.id, territory.id
                        ),
                    )
                    .with_border(border.id.clone())
                    .with_territories([territory.id.clone()]),
                );
            }
        }

        if !touched {
            findings.push(
                ValidationError::error(
                    ErrorDetails::DisconnectedTerritory,
                    format!("Territory {} has no borders", territory.id),
                )
                .with_territories([territory.id.clone()]),
            );
        }
    }

    tracing::debug!(findings = findings.len() - before, "border reference check done");
}

fn check_overlaps(map: &MapData, findings: &mut Vec<ValidationError>) {
    let before = findings.len();
    let boxed: Vec<_> = map
        .territories
        .values()
        .map(|t| (t, path_bounding_box(&t.fill_path)))
        .collect();

    for (i, (first, first_box)) in boxed.iter().enumerate() {
        for (second, second_box) in &boxed[i + 1..] {
            if first_box.overlaps(second_box) && !map.are_connected(&first.id, &second.id) {
                findings.push(
                    ValidationError::warning(
                        ErrorDetails::OverlappingTerritories {
                            first: *first_box,
                            second: *second_box,
                        },
                        format!(
                            "Territories {} and {} have overlapping bounds but share no border",
                            first.id, second.id
                        ),
                    )
                    .with_territories([first.id.clone(), second.id.clone()]),
                );
            }
        }
    }

    tracing::debug!(findings = findings.len() - before, "overlap check done");
}

fn check_continents(map: &MapData, findings: &mut Vec<ValidationError>) {
    let before = findings.len();

    for continent in map.continents.values() {
        for member in &continent.territories {
            if !map.has_territory(member) {
                findings.push(
                    ValidationError::error(
                        ErrorDetails::InvalidTopology {
                            continent: continent.id.clone(),
                            territory: member.clone(),
                            problem: TopologyProblem::UnknownTerritory,
                        },
                        format!(
                            "Continent {} references non-existent territory {member}",
                            continent.id
                        ),
                    )
                    .with_territories([member.clone()]),
                );
            }
        }
    }

    for territory in map.territories.values() {
        if map.continent(&territory.continent).is_none() {
            findings.push(
                ValidationError::warning(
                    ErrorDetails::InvalidTopology {
                        continent: territory.continent.clone(),
                        territory: territory.id.clone(),
                        problem: TopologyProblem::UnknownContinent,
                    },
                    format!(
                        "Territory {} belongs to unknown continent {}",
                        territory.id, territory.continent
                    ),
                )
                .with_territories([territory.id.clone()]),
            );
        }
    }

    tracing::debug!(findings = findings.len() - before, "continent check done");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ErrorType;
    use mapcheck_core::{sample_map_data, BorderId, BorderKind, ContinentId};

    #[test]
    fn test_sample_map_is_clean() {
        let result = validate_map(&sample_map_data());
        assert!(result.valid, "unexpected errors: {:#?}", result.errors);
        assert!(result.warnings.is_empty(), "unexpected warnings: {:#?}", result.warnings);
        assert_eq!(result.stats.total_territories, 6);
        assert_eq!(result.stats.total_borders, 8);
        assert_eq!(result.stats.valid_borders, 8);
        assert_eq!(result.stats.invalid_borders, 0);
        assert_eq!(result.stats.orphan_borders, 0);
    }

    #[test]
    fn test_empty_fill_path_is_invalid() {
        let mut map = sample_map_data();
        map.territories.get_mut(&TerritoryId::from("quebec")).unwrap().fill_path = String::new();
        let result = validate_map(&map);
        let found: Vec<_> = result.errors_of(ErrorType::InvalidPath).collect();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].territory_ids, vec![TerritoryId::from("quebec")]);
        assert!(matches!(
            found[0].details,
            ErrorDetails::InvalidPath { defect: PathDefect::NoSegments, .. }
        ));
    }

    #[test]
    fn test_strict_paths_reports_malformed_outline() {
        let mut map = sample_map_data();
        map.territories.get_mut(&TerritoryId::from("quebec")).unwrap().fill_path =
            "M 201 101 L 299 101 L 299 199 L 201 199 7 Z".to_string();

        assert_eq!(validate_map(&map).count_of(ErrorType::InvalidPath), 0);

        let strict = Validator::new(ValidationConfig {
            strict_paths: true,
            ..ValidationConfig::default()
        });
        let result = strict.validate(&map);
        let found: Vec<_> = result.errors_of(ErrorType::InvalidPath).collect();
        assert_eq!(found.len(), 1);
        assert!(matches!(
            found[0].details,
            ErrorDetails::InvalidPath { defect: PathDefect::Malformed { .. }, .. }
        ));
    }

    #[test]
    fn test_orphan_border_is_not_counted_valid_or_invalid() {
        let mut map = sample_map_data();
        map.insert_border(Border {
            id: BorderId::from("b_ghost"),
            path: "M 0 0 L 1 1".to_string(),
            territories: (TerritoryId::from("alaska"), TerritoryId::from("ghost")),
            kind: BorderKind::Land,
            points: Vec::new(),
        });
        let result = validate_map(&map);
        assert_eq!(result.stats.orphan_borders, 1);
        assert_eq!(result.stats.valid_borders, 8);
        assert_eq!(result.stats.invalid_borders, 0);
        let orphan = result.errors_of(ErrorType::OrphanBorder).next().unwrap();
        assert_eq!(orphan.border_id, Some(BorderId::from("b_ghost")));
        assert!(matches!(
            &orphan.details,
            ErrorDetails::OrphanBorder { unknown_territories }
                if unknown_territories == &vec![TerritoryId::from("ghost")]
        ));
    }

    #[test]
    fn test_ocean_endpoint_is_not_orphan() {
        let mut map = sample_map_data();
        map.insert_border(Border {
            id: BorderId::from("b_quebec_ocean"),
            path: "nonsense".to_string(),
            territories: (TerritoryId::ocean(), TerritoryId::from("quebec")),
            kind: BorderKind::Land,
            points: Vec::new(),
        });
        map.territories
            .get_mut(&TerritoryId::from("quebec"))
            .unwrap()
            .border_segments
            .push(BorderId::from("b_quebec_ocean"));
        let result = validate_map(&map);
        assert!(result.valid, "{:#?}", result.errors);
        assert_eq!(result.stats.valid_borders, 9);
    }

    #[test]
    fn test_misaligned_land_border() {
        let mut map = sample_map_data();
        map.borders.get_mut(&BorderId::from("b_ontario_quebec")).unwrap().path =
            "M 250 120 L 250 180".to_string();
        let result = validate_map(&map);
        assert!(!result.valid);
        assert_eq!(result.stats.invalid_borders, 1);
        let mismatch = result.errors_of(ErrorType::BorderMismatch).next().unwrap();
        assert!(matches!(
            mismatch.details,
            ErrorDetails::BorderMismatch {
                on_territory1_edge: false,
                on_territory2_edge: false,
                ..
            }
        ));
    }

    #[test]
    fn test_one_sided_alignment_still_mismatches() {
        let mut map = sample_map_data();
        // Traces alaska's right edge, far from northwest_territory's left edge.
        map.borders.get_mut(&BorderId::from("b_alaska_nwt")).unwrap().path =
            "M 95 1 L 95 99".to_string();
        let result = validate_map(&map);
        let mismatch = result.errors_of(ErrorType::BorderMismatch).next().unwrap();
        assert!(matches!(
            mismatch.details,
            ErrorDetails::BorderMismatch {
                on_territory1_edge: true,
                on_territory2_edge: false,
                ..
            }
        ));
    }

    #[test]
    fn test_tolerance_is_configurable() {
        let mut map = sample_map_data();
        map.borders.get_mut(&BorderId::from("b_alaska_nwt")).unwrap().path =
            "M 95 1 L 95 99".to_string();
        let loose = Validator::new(ValidationConfig {
            edge_tolerance: 10.0,
            ..ValidationConfig::default()
        });
        assert!(loose.validate(&map).valid);
    }

    #[test]
    fn test_empty_land_border_mismatches_at_zero_threshold() {
        let mut map = sample_map_data();
        map.borders.get_mut(&BorderId::from("b_ontario_quebec")).unwrap().path = String::new();
        let lenient = Validator::new(ValidationConfig {
            edge_match_threshold: 0.0,
            ..ValidationConfig::default()
        });
        let result = lenient.validate(&map);
        assert!(!result.valid);
        assert_eq!(result.stats.invalid_borders, 1);
        assert_eq!(result.count_of(ErrorType::BorderMismatch), 1);
    }

    #[test]
    fn test_undeclared_border_is_warning_only() {
        let mut map = sample_map_data();
        map.territories
            .get_mut(&TerritoryId::from("ontario"))
            .unwrap()
            .border_segments
            .retain(|b| b != "b_ontario_quebec");
        let result = validate_map(&map);
        assert!(result.valid);
        let warning = result.warnings_of(ErrorType::MissingBorder).next().unwrap();
        assert_eq!(warning.border_id, Some(BorderId::from("b_ontario_quebec")));
        assert_eq!(warning.territory_ids, vec![TerritoryId::from("ontario")]);
    }

    #[test]
    fn test_declared_nonexistent_border_is_error() {
        let mut map = sample_map_data();
        map.territories
            .get_mut(&TerritoryId::from("alberta"))
            .unwrap()
            .border_segments
            .push(BorderId::from("b_nowhere"));
        let result = validate_map(&map);
        assert!(!result.valid);
        let error = result.errors_of(ErrorType::MissingBorder).next().unwrap();
        assert_eq!(error.border_id, Some(BorderId::from("b_nowhere")));
        assert_eq!(error.territory_ids, vec![TerritoryId::from("alberta")]);
    }

    #[test]
    fn test_overlap_without_border_warns() {
        let mut map = sample_map_data();
        // Drag a vertex of alaska into ontario's cell.
        map.territories.get_mut(&TerritoryId::from("alaska")).unwrap().fill_path =
            "M 1 1 L 99 1 L 99 99 L 1 99 L 150 150 Z".to_string();
        let result = validate_map(&map);
        let overlaps: Vec<_> = result.warnings_of(ErrorType::OverlappingTerritories).collect();
        assert!(!overlaps.is_empty());
        // alaska and ontario share no border.
        assert!(overlaps.iter().any(|w| w.territory_ids
            == vec![TerritoryId::from("alaska"), TerritoryId::from("ontario")]));
        // alaska and alberta overlap too, but are bordered.
        assert!(!overlaps.iter().any(|w| w.territory_ids
            == vec![TerritoryId::from("alaska"), TerritoryId::from("alberta")]));
    }

    #[test]
    fn test_overlap_check_can_be_disabled() {
        let mut map = sample_map_data();
        map.territories.get_mut(&TerritoryId::from("alaska")).unwrap().fill_path =
            "M 1 1 L 99 1 L 99 99 L 1 99 L 150 150 Z".to_string();
        let quiet = Validator::new(ValidationConfig {
            check_overlaps: false,
            ..ValidationConfig::default()
        });
        assert_eq!(quiet.validate(&map).count_of(ErrorType::OverlappingTerritories), 0);
    }

    #[test]
    fn test_continent_with_unknown_member() {
        let mut map = sample_map_data();
        map.continents
            .get_mut(&ContinentId::from("north_atlantic"))
            .unwrap()
            .territories
            .push(TerritoryId::from("iceland"));
        let result = validate_map(&map);
        assert!(!result.valid);
        let error = result.errors_of(ErrorType::InvalidTopology).next().unwrap();
        assert_eq!(error.territory_ids, vec![TerritoryId::from("iceland")]);
    }

    #[test]
    fn test_territory_with_unknown_continent_warns() {
        let mut map = sample_map_data();
        map.territories.get_mut(&TerritoryId::from("greenland")).unwrap().continent =
            ContinentId::from("europe");
        let result = validate_map(&map);
        assert!(result.valid);
        assert_eq!(result.warnings_of(ErrorType::InvalidTopology).count(), 1);
    }

    #[test]
    fn test_empty_map_is_valid() {
        let result = validate_map(&MapData::new("1", "empty"));
        assert!(result.valid);
        assert_eq!(result.stats, ValidationStats::default());
    }
}
