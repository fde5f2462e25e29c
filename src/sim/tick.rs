//! Per-frame player movement

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{LevelSession, SessionPhase};

/// Held direction keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl TickInput {
    /// Velocity for these keys. Axes are independent (diagonals are faster);
    /// left beats right and up beats down when both are held.
    pub fn velocity(&self, speed: f32) -> Vec2 {
        let x = if self.left {
            -speed
        } else if self.right {
            speed
        } else {
            0.0
        };
        let y = if self.up {
            -speed
        } else if self.down {
            speed
        } else {
            0.0
        };
        Vec2::new(x, y)
    }

    pub fn is_idle(&self) -> bool {
        !(self.left || self.right || self.up || self.down)
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut LevelSession, input: &TickInput, dt: f32) {
    // Frozen once the summary has fired
    if session.phase == SessionPhase::Complete {
        session.player.vel = Vec2::ZERO;
        return;
    }

    session.time_ticks += 1;

    let player = &mut session.player;
    player.vel = input.velocity(session.tuning.player_speed);
    player.pos = (player.pos + player.vel * dt).clamp(Vec2::ZERO, session.size);
}
