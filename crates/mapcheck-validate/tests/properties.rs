//! Property tests over randomly damaged copies of the sample world.
//!
//! Each case applies a handful of edits that break references, delete
//! records, or move geometry, then checks the validator and fixer contracts:
//! validation is deterministic, validity means "no errors", fixes eliminate
//! the orphan/missing-border errors they target, and nothing else changes.

use std::collections::BTreeSet;

use mapcheck_core::{sample_map_data, Border, BorderId, BorderKind, MapData, TerritoryId};
use mapcheck_validate::{suggest_fixes, validate_map, ErrorType, ValidationError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Damage {
    DeleteBorder(usize),
    OrphanBorder(usize),
    DeclaredOrphanBorder(usize),
    DeclareMissing(usize),
    Undeclare(usize),
    ClearFillPath(usize),
    ShiftBorder(usize, f64),
    RetypeBorder(usize, BorderKind),
}

fn damage() -> impl Strategy<Value = Damage> {
    let kind = prop_oneof![Just(BorderKind::Land), Just(BorderKind::Sea), Just(BorderKind::Coast)];
    prop_oneof![
        any::<usize>().prop_map(Damage::DeleteBorder),
        any::<usize>().prop_map(Damage::OrphanBorder),
        any::<usize>().prop_map(Damage::DeclaredOrphanBorder),
        any::<usize>().prop_map(Damage::DeclareMissing),
        any::<usize>().prop_map(Damage::Undeclare),
        any::<usize>().prop_map(Damage::ClearFillPath),
        (any::<usize>(), -40.0f64..40.0).prop_map(|(i, d)| Damage::ShiftBorder(i, d)),
        (any::<usize>(), kind).prop_map(|(i, k)| Damage::RetypeBorder(i, k)),
    ]
}

fn nth_territory(map: &MapData, i: usize) -> Option<TerritoryId> {
    map.territories.keys().nth(i % map.territories.len().max(1)).cloned()
}

fn nth_border(map: &MapData, i: usize) -> Option<BorderId> {
    map.borders.keys().nth(i % map.borders.len().max(1)).cloned()
}

fn apply(map: &mut MapData, damage: &Damage) {
    match *damage {
        Damage::DeleteBorder(i) => {
            if let Some(id) = nth_border(map, i) {
                map.borders.remove(&id);
            }
        }
        Damage::OrphanBorder(i) => {
            if let Some(t) = nth_territory(map, i) {
                let id = BorderId::new(format!("b_orphan_{i}"));
                map.insert_border(Border {
                    id,
                    path: "M 0 0 L 10 10".to_string(),
                    territories: (t, TerritoryId::new(format!("ghost_{i}"))),
                    kind: BorderKind::Land,
                    points: Vec::new(),
                });
            }
        }
        Damage::DeclaredOrphanBorder(i) => {
            if let Some(t) = nth_territory(map, i) {
                let id = BorderId::new(format!("b_declared_orphan_{i}"));
                if let Some(territory) = map.territories.get_mut(&t) {
                    territory.border_segments.push(id.clone());
                }
                map.insert_border(Border {
                    id,
                    path: "M 0 0 L 10 10".to_string(),
                    territories: (t, TerritoryId::new(format!("ghost_{i}"))),
                    kind: BorderKind::Land,
                    points: Vec::new(),
                });
            }
        }
        Damage::DeclareMissing(i) => {
            if let Some(t) = nth_territory(map, i) {
                if let Some(territory) = map.territories.get_mut(&t) {
                    territory.border_segments.push(BorderId::new(format!("b_missing_{i}")));
                }
            }
        }
        Damage::Undeclare(i) => {
            if let Some(t) = nth_territory(map, i) {
                if let Some(territory) = map.territories.get_mut(&t) {
                    territory.border_segments.pop();
                }
            }
        }
        Damage::ClearFillPath(i) => {
            if let Some(t) = nth_territory(map, i) {
                if let Some(territory) = map.territories.get_mut(&t) {
                    territory.fill_path.clear();
                }
            }
        }
        Damage::ShiftBorder(i, dx) => {
            if let Some(id) = nth_border(map, i) {
                if let Some(border) = map.borders.get_mut(&id) {
                    border.path = format!("M {} 10 L {} 90", 100.0 + dx, 100.0 + dx);
                }
            }
        }
        Damage::RetypeBorder(i, kind) => {
            if let Some(id) = nth_border(map, i) {
                if let Some(border) = map.borders.get_mut(&id) {
                    border.kind = kind;
                }
            }
        }
    }
}

fn damaged_map() -> impl Strategy<Value = MapData> {
    prop::collection::vec(damage(), 0..6).prop_map(|damages| {
        let mut map = sample_map_data();
        for d in &damages {
            apply(&mut map, d);
        }
        map
    })
}

/// Identity of a finding for before/after comparison.
fn key(e: &ValidationError) -> (ErrorType, Option<BorderId>, Vec<TerritoryId>) {
    (e.error_type(), e.border_id.clone(), e.territory_ids.clone())
}

proptest! {
    /// Validating the same map twice gives the same result.
    #[test]
    fn validation_is_deterministic(map in damaged_map()) {
        prop_assert_eq!(validate_map(&map), validate_map(&map));
    }

    /// Idempotence through the fixer: whichever map is picked, validating it
    /// twice agrees.
    #[test]
    fn validation_after_fix_is_deterministic(map in damaged_map()) {
        let first = validate_map(&map);
        let chosen = if first.valid { map.clone() } else { suggest_fixes(&map, &first) };
        prop_assert_eq!(validate_map(&chosen), validate_map(&chosen));
    }

    /// Validity is exactly "no errors", whatever the warnings.
    #[test]
    fn valid_iff_no_errors(map in damaged_map()) {
        let result = validate_map(&map);
        prop_assert_eq!(result.valid, result.errors.is_empty());
        prop_assert!(result.errors.iter().all(|e| e.is_error()));
        prop_assert!(result.warnings.iter().all(|w| !w.is_error()));
    }

    /// Every border lands in exactly one stats bucket.
    #[test]
    fn border_stats_partition(map in damaged_map()) {
        let stats = validate_map(&map).stats;
        prop_assert_eq!(stats.total_borders, map.borders.len());
        prop_assert_eq!(
            stats.valid_borders + stats.invalid_borders + stats.orphan_borders,
            stats.total_borders
        );
    }

    /// Maritime borders never mismatch.
    #[test]
    fn maritime_borders_never_mismatch(map in damaged_map()) {
        let result = validate_map(&map);
        for error in result.errors_of(ErrorType::BorderMismatch) {
            let id = error.border_id.as_ref().unwrap();
            prop_assert!(!map.border(id).unwrap().is_maritime());
        }
    }

    /// Fixes eliminate the orphan and missing-border errors they target and
    /// leave mismatches and overlaps alone.
    #[test]
    fn fixes_converge(map in damaged_map()) {
        let before = validate_map(&map);
        let fixed = suggest_fixes(&map, &before);
        let after = validate_map(&fixed);

        let targeted: BTreeSet<_> = before
            .errors
            .iter()
            .filter(|e| {
                matches!(e.error_type(), ErrorType::OrphanBorder | ErrorType::MissingBorder)
            })
            .map(key)
            .collect();
        for e in &after.errors {
            prop_assert!(!targeted.contains(&key(e)), "fix left {:?}", key(e));
        }

        prop_assert_eq!(
            before.count_of(ErrorType::BorderMismatch),
            after.count_of(ErrorType::BorderMismatch)
        );
        prop_assert_eq!(
            before.count_of(ErrorType::OverlappingTerritories),
            after.count_of(ErrorType::OverlappingTerritories)
        );
    }

    /// Removing a declared orphan border leaves a dangling declaration; a
    /// second pass prunes it, after which no orphan or missing-border error
    /// remains.
    #[test]
    fn two_fix_passes_clear_reference_errors(map in damaged_map()) {
        let first = suggest_fixes(&map, &validate_map(&map));
        let second = suggest_fixes(&first, &validate_map(&first));
        let result = validate_map(&second);
        prop_assert_eq!(result.errors_of(ErrorType::OrphanBorder).count(), 0);
        prop_assert_eq!(result.errors_of(ErrorType::MissingBorder).count(), 0);
    }

    /// The fixer never touches its input.
    #[test]
    fn fixes_do_not_mutate_input(map in damaged_map()) {
        let snapshot = map.clone();
        let result = validate_map(&map);
        let _ = suggest_fixes(&map, &result);
        prop_assert_eq!(map, snapshot);
    }
}
