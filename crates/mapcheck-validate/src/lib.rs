//! # mapcheck-validate: Map Validation and Auto-Fix
//!
//! Runs consistency checks over a [`MapData`](mapcheck_core::MapData) and
//! proposes a corrected copy for the defects that can be repaired
//! mechanically.
//!
//! ## Validation (`validator`)
//!
//! [`validate_map`] runs five independent checks in a fixed order and
//! collects every finding; no check is skipped because an earlier one
//! failed:
//!
//! 1. territory fill paths parse;
//! 2. borders reference real territories and trace both of their edges;
//! 3. territories and borders agree on who borders whom;
//! 4. territories with overlapping bounds share a border;
//! 5. continents list real territories.
//!
//! Findings with severity `error` make the map invalid. Warnings never do.
//!
//! ## Auto-fix (`fix`)
//!
//! [`suggest_fixes`] deletes orphan borders and prunes declared references
//! to borders that do not exist. Misaligned borders and overlapping
//! territories are left alone; fixing them needs an editor.
//!
//! ## Crate Policy
//!
//! - Validation never fails: anomalies become findings, not `Err`s.
//! - Inputs are borrowed immutably; the fixer returns a new map.

pub mod config;
pub mod fix;
pub mod report;
pub mod validator;

pub use config::{ConfigError, ValidationConfig};
pub use fix::{suggest_fixes, suggest_fixes_with_summary, FixSummary};
pub use report::{
    ErrorDetails, ErrorType, PathDefect, ReferenceProblem, Severity, TopologyProblem,
    ValidationError, ValidationResult, ValidationStats,
};
pub use validator::{validate_map, Validator};
