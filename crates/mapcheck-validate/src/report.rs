//! # Validation Report
//!
//! Findings are typed by their diagnostic payload. [`ErrorDetails`] is a
//! closed union with one variant per [`ErrorType`], so a finding's type is
//! derived from what it carries and the two can never disagree.
//!
//! Reports serialize for UI consumption with camelCase keys; each finding's
//! `type` tag sits next to its `details` payload:
//!
//! ```json
//! {
//!   "severity": "error",
//!   "borderId": "b_invalid",
//!   "territoryIds": ["alaska", "greenland"],
//!   "message": "border b_invalid does not trace ...",
//!   "type": "BORDER_MISMATCH",
//!   "details": {
//!     "onTerritory1Edge": false,
//!     "onTerritory2Edge": false,
//!     "borderPath": "M 500 500 L 600 600"
//!   }
//! }
//! ```

use std::fmt;

use mapcheck_core::{BorderId, ContinentId, TerritoryId};
use mapcheck_geometry::{BoundingBox, PathError};
use serde::Serialize;

/// Whether a finding invalidates the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

/// The closed taxonomy of findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorType {
    BorderMismatch,
    MissingBorder,
    OrphanBorder,
    InvalidPath,
    DisconnectedTerritory,
    OverlappingTerritories,
    InvalidTopology,
}

impl ErrorType {
    /// All types, in taxonomy order.
    pub fn all() -> &'static [ErrorType] {
        &[
            Self::BorderMismatch,
            Self::MissingBorder,
            Self::OrphanBorder,
            Self::InvalidPath,
            Self::DisconnectedTerritory,
            Self::OverlappingTerritories,
            Self::InvalidTopology,
        ]
    }

    /// The serialized name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BorderMismatch => "BORDER_MISMATCH",
            Self::MissingBorder => "MISSING_BORDER",
            Self::OrphanBorder => "ORPHAN_BORDER",
            Self::InvalidPath => "INVALID_PATH",
            Self::DisconnectedTerritory => "DISCONNECTED_TERRITORY",
            Self::OverlappingTerritories => "OVERLAPPING_TERRITORIES",
            Self::InvalidTopology => "INVALID_TOPOLOGY",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a territory outline was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathDefect {
    /// The path parsed to no segments at all.
    NoSegments,
    /// The strict parser rejected the path.
    Malformed { reason: PathError },
}

/// Which side of a territory/border reference is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceProblem {
    /// The territory declares a border id that does not exist.
    Nonexistent,
    /// A border touches the territory but the territory does not declare it.
    Undeclared,
}

/// Which end of a continent membership is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TopologyProblem {
    /// The continent lists a territory that does not exist.
    UnknownTerritory,
    /// The territory names a continent that does not exist.
    UnknownContinent,
}

/// Typed diagnostic payload, one variant per [`ErrorType`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "type",
    content = "details",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum ErrorDetails {
    BorderMismatch {
        on_territory1_edge: bool,
        on_territory2_edge: bool,
        border_path: String,
    },
    MissingBorder {
        reference: ReferenceProblem,
    },
    OrphanBorder {
        /// Endpoints that name no territory.
        unknown_territories: Vec<TerritoryId>,
    },
    InvalidPath {
        path: String,
        defect: PathDefect,
    },
    DisconnectedTerritory,
    OverlappingTerritories {
        first: BoundingBox,
        second: BoundingBox,
    },
    InvalidTopology {
        continent: ContinentId,
        territory: TerritoryId,
        problem: TopologyProblem,
    },
}

impl ErrorDetails {
    pub fn error_type(&self) -> ErrorType {
        match self {
            Self::BorderMismatch { .. } => ErrorType::BorderMismatch,
            Self::MissingBorder { .. } => ErrorType::MissingBorder,
            Self::OrphanBorder { .. } => ErrorType::OrphanBorder,
            Self::InvalidPath { .. } => ErrorType::InvalidPath,
            Self::DisconnectedTerritory => ErrorType::DisconnectedTerritory,
            Self::OverlappingTerritories { .. } => ErrorType::OverlappingTerritories,
            Self::InvalidTopology { .. } => ErrorType::InvalidTopology,
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub severity: Severity,
    /// Territories involved, most relevant first.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub territory_ids: Vec<TerritoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_id: Option<BorderId>,
    pub message: String,
    #[serde(flatten)]
    pub details: ErrorDetails,
}

impl ValidationError {
    /// A finding that invalidates the map.
    pub fn error(details: ErrorDetails, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, details, message)
    }

    /// A finding that does not affect validity.
    pub fn warning(details: ErrorDetails, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, details, message)
    }

    fn with_severity(
        severity: Severity,
        details: ErrorDetails,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            territory_ids: Vec::new(),
            border_id: None,
            message: message.into(),
            details,
        }
    }

    pub fn with_territories<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = TerritoryId>,
    {
        self.territory_ids.extend(ids);
        self
    }

    pub fn with_border(mut self, id: BorderId) -> Self {
        self.border_id = Some(id);
        self
    }

    pub fn error_type(&self) -> ErrorType {
        self.details.error_type()
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity.as_str(), self.error_type(), self.message)
    }
}

/// Counters accumulated while validating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationStats {
    pub total_territories: usize,
    pub total_borders: usize,
    /// Borders that passed: maritime borders and aligned land borders.
    pub valid_borders: usize,
    /// Land borders failing edge alignment.
    pub invalid_borders: usize,
    /// Borders naming an unknown territory. Counted in neither of the above.
    pub orphan_borders: usize,
}

/// Outcome of one validation pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// True iff `errors` is empty.
    pub valid: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationError>,
    pub stats: ValidationStats,
}

impl ValidationResult {
    /// Partition findings by severity, preserving their order.
    pub fn from_findings(findings: Vec<ValidationError>, stats: ValidationStats) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) = findings.into_iter().partition(|f| f.is_error());
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
            stats,
        }
    }

    /// Errors of the given type.
    pub fn errors_of(&self, kind: ErrorType) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter().filter(move |e| e.error_type() == kind)
    }

    /// Warnings of the given type.
    pub fn warnings_of(&self, kind: ErrorType) -> impl Iterator<Item = &ValidationError> {
        self.warnings.iter().filter(move |e| e.error_type() == kind)
    }

    /// Findings of the given type at either severity.
    pub fn count_of(&self, kind: ErrorType) -> usize {
        self.errors_of(kind).count() + self.warnings_of(kind).count()
    }
}
