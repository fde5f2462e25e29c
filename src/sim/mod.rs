//! Level session simulation
//!
//! All gameplay rules live here. This module stays free of rendering and
//! platform code:
//! - Every random draw goes through `RandomSource`
//! - Stable iteration order (objects sorted by id)
//! - State changes only through `tick` and `select_object`

pub mod catalog;
pub mod interact;
pub mod placement;
pub mod random;
pub mod state;
pub mod summary;
pub mod tick;

pub use catalog::{Catalog, CritterEntry, TrashEntry};
pub use interact::{Find, FindKind, IgnoreReason, Interaction, select_object};
pub use placement::{
    Placement, PlacementReport, PlacementRequest, PlacementTrace, Span, generate_placements,
    generate_placements_with_report, place_categories,
};
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use state::{
    InteractiveObject, LevelSession, ObjectKind, ObjectStatus, Player, SceneryItem, SessionPhase,
    SessionState,
};
pub use summary::{CritterTally, FEEDBACK_PROMPT, LevelSummary, SummaryChoice, TrashLine};
pub use tick::{TickInput, tick};
