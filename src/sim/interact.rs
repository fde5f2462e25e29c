//! Select resolution and scoring
//!
//! A select either changes nothing (and says why) or consumes exactly one
//! object, appends exactly one history entry and applies exactly one score
//! change.

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use super::state::{LevelSession, ObjectStatus, SessionPhase};
use super::summary::TrashLine;

/// Which table a find came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindKind {
    Critter,
    Trash,
}

/// What was revealed under an object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Find {
    pub kind: FindKind,
    pub object_id: u32,
    pub entry_id: String,
    pub display_name: String,
    pub description: String,
    pub asset: String,
    pub score_delta: i32,
}

/// Why a select did nothing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum IgnoreReason {
    LevelComplete,
    UnknownObject,
    AlreadyConsumed,
    /// Player too far; carries the actual distance
    OutOfRange { distance: f32 },
    /// The drawn table has no entries
    EmptyCatalog,
}

/// Result of a select
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Interaction {
    Ignored(IgnoreReason),
    Found {
        find: Find,
        /// True only on the select that consumed the last object
        completed: bool,
    },
}

impl Interaction {
    pub fn find(&self) -> Option<&Find> {
        match self {
            Interaction::Found { find, .. } => Some(find),
            Interaction::Ignored(_) => None,
        }
    }

    pub fn completed(&self) -> bool {
        matches!(self, Interaction::Found { completed: true, .. })
    }
}

/// Resolve a select on object `id` against the current player position
pub fn select_object<R: RandomSource + ?Sized>(
    session: &mut LevelSession,
    id: u32,
    rng: &mut R,
) -> Interaction {
    if session.phase == SessionPhase::Complete {
        return ignore(id, IgnoreReason::LevelComplete);
    }

    let player_pos = session.player.pos;
    let radius = session.tuning.activation_radius;
    let Some(object) = session.object(id) else {
        return ignore(id, IgnoreReason::UnknownObject);
    };
    if !object.is_active() {
        return ignore(id, IgnoreReason::AlreadyConsumed);
    }
    let distance = player_pos.distance(object.pos);
    if distance >= radius {
        return ignore(id, IgnoreReason::OutOfRange { distance });
    }

    let is_trash = rng.percent() <= session.tuning.trash_threshold();
    let catalog = &session.level.catalog;
    let find = if is_trash {
        catalog.draw_trash(rng).map(|entry| Find {
            kind: FindKind::Trash,
            object_id: id,
            entry_id: entry.id.clone(),
            display_name: entry.display_name.clone(),
            description: entry.description.clone(),
            asset: entry.asset.clone(),
            score_delta: entry.score_delta,
        })
    } else {
        catalog.draw_critter(rng).map(|entry| Find {
            kind: FindKind::Critter,
            object_id: id,
            entry_id: entry.id.clone(),
            display_name: entry.display_name.clone(),
            description: entry.description.clone(),
            asset: entry.asset.clone(),
            score_delta: session.tuning.critter_score,
        })
    };
    let Some(find) = find else {
        return ignore(id, IgnoreReason::EmptyCatalog);
    };

    if let Some(object) = session.object_mut(id) {
        object.status = ObjectStatus::Consumed;
    }

    let state = &mut session.state;
    state.score += find.score_delta;
    match find.kind {
        FindKind::Critter => state.collected_critters.push(find.display_name.clone()),
        FindKind::Trash => state.collected_trash.push(TrashLine {
            name: find.display_name.clone(),
            score_delta: find.score_delta,
        }),
    }
    state.consumed_count += 1;

    log::info!(
        "Object {} revealed {} ({:+}), score {}, {} left",
        id,
        find.display_name,
        find.score_delta,
        state.score,
        state.remaining()
    );

    let completed = state.is_complete();
    if completed {
        session.phase = SessionPhase::Complete;
        log::info!("Level complete with score {}", session.state.score);
    }

    Interaction::Found { find, completed }
}

fn ignore(id: u32, reason: IgnoreReason) -> Interaction {
    log::debug!("Select on object {} ignored: {:?}", id, reason);
    Interaction::Ignored(reason)
}
