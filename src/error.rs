//! Errors raised while loading or validating level data
//!
//! Gameplay itself never fails: rejected selects and capped placements are
//! ordinary outcomes. Only data coming in from JSON (or hand-edited tables)
//! can be wrong.

use thiserror::Error;

/// Errors raised when level, catalog or tuning data violates its invariants.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("unknown level `{0}`")]
    UnknownLevel(String),
    #[error("level `{level}` has an empty {catalog} catalog")]
    EmptyCatalog { level: String, catalog: &'static str },
    #[error("level `{level}` places no objects")]
    NoObjects { level: String },
    #[error("trash entry `{id}` must lower the score (score_delta = {delta})")]
    NonNegativeTrashDelta { id: String, delta: i32 },
    #[error("{field} range must lie within 0..=1 with min <= max (got {min}..{max})")]
    InvalidRange {
        field: &'static str,
        min: f32,
        max: f32,
    },
    #[error("{field} must be positive (got {value})")]
    NonPositive { field: &'static str, value: f32 },
    #[error("trash chance must be within 0..=1 (got {0})")]
    TrashChance(f32),
}
