//! Stream Explorer - an educational stream ecology game
//!
//! Core modules:
//! - `sim`: Level session (placement, interaction resolution, scoring, summary)
//! - `levels`: Built-in level data (catalogs, object categories, scenery)
//! - `game`: Driver tying a session to the platform collaborators
//! - `platform`: Info panel / audio / dialog seams (headless and browser)
//! - `audio`: Sound cues and volume mixing
//! - `tuning`: Data-driven gameplay constants
//! - `settings`: Player preferences

pub mod audio;
pub mod autoplay;
pub mod error;
pub mod game;
pub mod levels;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::LevelError;
pub use game::{Game, LevelEnd, SelectResult};
pub use levels::Level;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matches the browser frame callback)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Max player-to-object distance (pixels) for a select to count
    pub const ACTIVATION_RADIUS: f32 = 60.0;
    /// Points for every critter, regardless of which one
    pub const CRITTER_SCORE: i32 = 10;
    /// Chance (percent) that a flipped object hides trash
    pub const TRASH_PERCENT: u32 = 20;
    /// Player walking speed (pixels/s)
    pub const PLAYER_SPEED: f32 = 200.0;
    /// Player sprite scale
    pub const PLAYER_SCALE: f32 = 0.5;
    /// Candidate draws per placement before accepting an overlap
    pub const PLACEMENT_ATTEMPTS: u32 = 30;
}

/// Convert a normalized playfield point to world (pixel) coordinates
#[inline]
pub fn to_world(normalized: Vec2, size: Vec2) -> Vec2 {
    normalized * size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_world() {
        let size = Vec2::new(800.0, 600.0);
        assert_eq!(to_world(Vec2::new(0.25, 0.5), size), Vec2::new(200.0, 300.0));
        assert_eq!(to_world(Vec2::ONE, size), size);
    }

    #[test]
    fn test_consts_feed_tuning_defaults() {
        let tuning = Tuning::default();
        assert_eq!(tuning.activation_radius, consts::ACTIVATION_RADIUS);
        assert_eq!(tuning.critter_score, consts::CRITTER_SCORE);
        assert_eq!(tuning.trash_threshold(), consts::TRASH_PERCENT);
        assert_eq!(tuning.player_speed, consts::PLAYER_SPEED);
        assert_eq!(tuning.player_scale, consts::PLAYER_SCALE);
        assert_eq!(tuning.placement_attempts, consts::PLACEMENT_ATTEMPTS);
    }
}
