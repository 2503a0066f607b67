//! # Auto-Fix Suggester
//!
//! Repairs the two defect classes that have an unambiguous mechanical fix:
//!
//! - an `ORPHAN_BORDER` error removes the border;
//! - a `MISSING_BORDER` error for a declared-but-nonexistent border removes
//!   the id from the declaring territory's `border_segments`.
//!
//! Only errors are acted on. `BORDER_MISMATCH`, `OVERLAPPING_TERRITORIES`
//! and every other finding are carried through untouched: realigning a
//! border or reshaping a territory needs a person with an editor. Callers
//! should re-validate the returned map; removing an orphan border that some
//! territory declared turns that declaration into a new `MISSING_BORDER`.

use mapcheck_core::{BorderId, MapData, TerritoryId};
use serde::Serialize;

use crate::report::{ErrorType, ValidationResult};

/// What [`suggest_fixes_with_summary`] changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FixSummary {
    /// Borders deleted from the map.
    pub removed_borders: Vec<BorderId>,
    /// `(territory, border)` references pruned from `border_segments`.
    pub pruned_references: Vec<(TerritoryId, BorderId)>,
    /// Errors left for a human.
    pub unaddressed: usize,
}

impl FixSummary {
    /// True if the fixer changed nothing.
    pub fn is_empty(&self) -> bool {
        self.removed_borders.is_empty() && self.pruned_references.is_empty()
    }
}

/// Return a corrected copy of `map`. The input is left untouched.
pub fn suggest_fixes(map: &MapData, result: &ValidationResult) -> MapData {
    suggest_fixes_with_summary(map, result).0
}

/// As [`suggest_fixes`], also reporting what was changed.
pub fn suggest_fixes_with_summary(
    map: &MapData,
    result: &ValidationResult,
) -> (MapData, FixSummary) {
    let mut fixed = map.clone();
    let mut summary = FixSummary::default();

    for error in &result.errors {
        match (error.error_type(), &error.border_id) {
            (ErrorType::OrphanBorder, Some(border_id)) => {
                if fixed.borders.remove(border_id).is_some() {
                    tracing::debug!(border = %border_id, "removed orphan border");
                    summary.removed_borders.push(border_id.clone());
                }
            }
            (ErrorType::MissingBorder, Some(border_id)) => {
                let Some(territory_id) = error.territory_ids.first() else {
                    summary.unaddressed += 1;
                    continue;
                };
                if let Some(territory) = fixed.territories.get_mut(territory_id) {
                    let before = territory.border_segments.len();
                    territory.border_segments.retain(|b| b != border_id);
                    if territory.border_segments.len() != before {
                        tracing::debug!(
                            territory = %territory_id,
                            border = %border_id,
                            "pruned reference to missing border"
                        );
                        summary
                            .pruned_references
                            .push((territory_id.clone(), border_id.clone()));
                    }
                }
            }
            _ => summary.unaddressed += 1,
        }
    }

    tracing::debug!(
        removed_borders = summary.removed_borders.len(),
        pruned_references = summary.pruned_references.len(),
        unaddressed = summary.unaddressed,
        "fixes applied"
    );

    (fixed, summary)
}
