//! Level session state and core types
//!
//! Everything a level mutates lives in one [`LevelSession`]. It is built from
//! scratch at level start and thrown away on restart; nothing is reset in place.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::placement::{Placement, PlacementRequest, place_categories};
use super::random::RandomSource;
use super::summary::TrashLine;
use crate::levels::Level;
use crate::tuning::Tuning;
use crate::to_world;

/// Kind of flippable object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    Rock,
    Log,
    LilyPad,
}

impl ObjectKind {
    /// Verb for the "move closer" hint
    pub fn verb(&self) -> &'static str {
        match self {
            ObjectKind::Rock => "flip the rock",
            ObjectKind::Log => "roll the log",
            ObjectKind::LilyPad => "lift the lily pad",
        }
    }
}

/// Object lifecycle; `Consumed` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectStatus {
    Active,
    Consumed,
}

/// A placed object the player can select
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractiveObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub placement: Placement,
    /// World position (pixels), derived from the placement and playfield size
    pub pos: Vec2,
    pub status: ObjectStatus,
}

impl InteractiveObject {
    pub fn is_active(&self) -> bool {
        self.status == ObjectStatus::Active
    }
}

/// The walking character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
}

/// Non-interactive decoration (bushes, trees)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneryItem {
    pub asset: String,
    /// Normalized position
    pub pos: Vec2,
    pub scale: f32,
    /// Draw order; objects and the player sit at depth 2
    pub depth: i32,
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Objects remain to be flipped
    Exploring,
    /// Every object consumed; summary fired
    Complete,
}

/// Score and collection history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// May go negative
    pub score: i32,
    pub consumed_count: u32,
    pub total_count: u32,
    /// Critter display names in the order found
    pub collected_critters: Vec<String>,
    /// Trash finds in the order found, each with the delta it applied
    pub collected_trash: Vec<TrashLine>,
}

impl SessionState {
    pub fn new(total_count: u32) -> Self {
        Self {
            total_count,
            ..Default::default()
        }
    }

    pub fn is_complete(&self) -> bool {
        self.consumed_count >= self.total_count
    }

    pub fn remaining(&self) -> u32 {
        self.total_count.saturating_sub(self.consumed_count)
    }
}

/// All per-level mutable state
#[derive(Debug, Clone, Serialize)]
pub struct LevelSession {
    pub(crate) level: Level,
    pub(crate) tuning: Tuning,
    /// Playfield size in pixels
    pub(crate) size: Vec2,
    pub(crate) player: Player,
    /// Sorted by id
    pub(crate) objects: Vec<InteractiveObject>,
    pub(crate) scenery: Vec<SceneryItem>,
    pub(crate) state: SessionState,
    pub(crate) phase: SessionPhase,
    /// Frames ticked since level start
    pub(crate) time_ticks: u64,
}

impl LevelSession {
    /// Build a fresh session: place objects, scatter scenery, spawn the player
    pub fn new<R: RandomSource + ?Sized>(
        level: Level,
        tuning: Tuning,
        size: Vec2,
        rng: &mut R,
    ) -> Self {
        let categories: Vec<(ObjectKind, PlacementRequest)> = level
            .categories
            .iter()
            .map(|c| (c.kind, c.request(tuning.placement_attempts)))
            .collect();

        let objects: Vec<InteractiveObject> = place_categories(rng, &categories)
            .into_iter()
            .zip(1u32..)
            .map(|((kind, placement), id)| InteractiveObject {
                id,
                kind,
                placement,
                pos: to_world(placement.pos, size),
                status: ObjectStatus::Active,
            })
            .collect();

        let scenery = level.scenery(rng);

        let player = Player {
            pos: to_world(tuning.player_start, size),
            vel: Vec2::ZERO,
            scale: tuning.player_scale,
        };

        let total = objects.len() as u32;
        log::info!(
            "Level '{}' started: {} objects on {}x{} playfield",
            level.name,
            total,
            size.x,
            size.y
        );

        Self {
            level,
            tuning,
            size,
            player,
            objects,
            scenery,
            state: SessionState::new(total),
            phase: SessionPhase::Exploring,
            time_ticks: 0,
        }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn objects(&self) -> &[InteractiveObject] {
        &self.objects
    }

    pub fn object(&self, id: u32) -> Option<&InteractiveObject> {
        let index = self.objects.binary_search_by_key(&id, |o| o.id).ok()?;
        self.objects.get(index)
    }

    pub fn scenery(&self) -> &[SceneryItem] {
        &self.scenery
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_complete(&self) -> bool {
        self.phase == SessionPhase::Complete
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Objects not yet consumed
    pub fn active_objects(&self) -> impl Iterator<Item = &InteractiveObject> {
        self.objects.iter().filter(|o| o.is_active())
    }

    /// Count of objects whose status is `Consumed`
    pub fn consumed_objects(&self) -> u32 {
        self.objects.iter().filter(|o| !o.is_active()).count() as u32
    }

    /// Place the player directly (spawn points, replays, tests)
    pub fn set_player_pos(&mut self, pos: Vec2) {
        self.player.pos = pos.clamp(Vec2::ZERO, self.size);
    }

    /// Playfield resized: re-derive world positions from the normalized
    /// placements and put the player back at the spawn point
    pub fn resize(&mut self, size: Vec2) {
        self.size = size;
        for object in &mut self.objects {
            object.pos = to_world(object.placement.pos, size);
        }
        self.player.pos = to_world(self.tuning.player_start, size);
        self.player.vel = Vec2::ZERO;
        log::debug!("Playfield resized to {}x{}", size.x, size.y);
    }

    pub(crate) fn object_mut(&mut self, id: u32) -> Option<&mut InteractiveObject> {
        let index = self.objects.binary_search_by_key(&id, |o| o.id).ok()?;
        self.objects.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SeededRandom;

    fn session(seed: u64) -> LevelSession {
        let mut rng = SeededRandom::new(seed);
        LevelSession::new(
            Level::stream(),
            Tuning::default(),
            Vec2::new(1000.0, 800.0),
            &mut rng,
        )
    }

    #[test]
    fn test_new_session() {
        let s = session(1);
        assert_eq!(s.objects().len(), 18);
        assert_eq!(s.state().total_count, 18);
        assert_eq!(s.state().consumed_count, 0);
        assert_eq!(s.phase(), SessionPhase::Exploring);
        assert!(s.objects().iter().all(|o| o.is_active()));
        assert_eq!(s.player().pos, Vec2::new(500.0, 640.0));

        // Ids are sequential from 1
        for (i, o) in s.objects().iter().enumerate() {
            assert_eq!(o.id, i as u32 + 1);
            assert_eq!(o.pos, o.placement.pos * Vec2::new(1000.0, 800.0));
        }
        assert!(s.object(18).is_some());
        assert!(s.object(19).is_none());
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = session(5);
        let b = session(5);
        for (x, y) in a.objects().iter().zip(b.objects()) {
            assert_eq!(x.pos, y.pos);
            assert_eq!(x.placement.scale, y.placement.scale);
        }
        assert_eq!(a.scenery(), b.scenery());
    }

    #[test]
    fn test_resize_rescales_objects() {
        let mut s = session(3);
        s.player.pos = Vec2::new(10.0, 10.0);
        s.resize(Vec2::new(500.0, 400.0));
        for o in s.objects() {
            assert_eq!(o.pos, o.placement.pos * Vec2::new(500.0, 400.0));
        }
        assert_eq!(s.player().pos, Vec2::new(250.0, 320.0));
    }

    #[test]
    fn test_object_json_kind_keys() {
        let mut s = session(4);
        s.objects[0].kind = ObjectKind::LilyPad;
        let json = serde_json::to_value(&s.objects()[..2]).unwrap();
        assert_eq!(json[0]["kind"], "lily_pad");
        assert_eq!(json[1]["kind"], "rock");
        assert_eq!(json[1]["status"], "Active");
    }

    #[test]
    fn test_set_player_pos_clamped() {
        let mut s = session(3);
        s.set_player_pos(Vec2::new(-50.0, 5000.0));
        assert_eq!(s.player().pos, Vec2::new(0.0, 800.0));
    }
}
