//! Autopilot for demos and headless runs
//!
//! Walks to the nearest active object and selects it once inside half the
//! activation radius.

use crate::game::{Game, LevelEnd};
use crate::platform::Platform;
use crate::sim::{LevelSession, RandomSource, TickInput};

/// What the pilot wants to do this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PilotAction {
    Walk(TickInput),
    Select(u32),
    /// Nothing left to flip
    Done,
}

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Fraction of the activation radius to close in to before selecting
    pub reach: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { reach: 0.5 }
    }
}

impl Autopilot {
    pub fn next_action(&self, session: &LevelSession, dt: f32) -> PilotAction {
        if session.is_complete() {
            return PilotAction::Done;
        }

        let player = session.player().pos;
        let Some(target) = session.active_objects().min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .partial_cmp(&b.pos.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        }) else {
            return PilotAction::Done;
        };

        let delta = target.pos - player;
        if delta.length() < session.tuning().activation_radius * self.reach {
            return PilotAction::Select(target.id);
        }

        // Only press an axis when the gap exceeds one frame of travel, so the
        // pilot settles instead of oscillating around the target
        let step = session.tuning().player_speed * dt;
        let mut input = TickInput {
            left: delta.x < -step,
            right: delta.x > step,
            up: delta.y < -step,
            down: delta.y > step,
        };
        if input.is_idle() {
            // Reach smaller than one step: nudge along the larger axis
            if delta.x.abs() >= delta.y.abs() {
                input.left = delta.x < 0.0;
                input.right = delta.x >= 0.0;
            } else {
                input.up = delta.y < 0.0;
                input.down = delta.y >= 0.0;
            }
        }
        PilotAction::Walk(input)
    }
}

/// Drive `game` until the level ends or `max_frames` pass
pub fn run_level<P: Platform, R: RandomSource>(
    game: &mut Game<P, R>,
    pilot: &Autopilot,
    dt: f32,
    max_frames: u32,
) -> Option<LevelEnd> {
    for _ in 0..max_frames {
        match pilot.next_action(game.session(), dt) {
            PilotAction::Walk(input) => game.tick(&input, dt),
            PilotAction::Select(id) => {
                if let Some(end) = game.select(id).end {
                    return Some(end);
                }
            }
            PilotAction::Done => return None,
        }
    }
    log::warn!("Autopilot gave up after {} frames", max_frames);
    None
}
