//! Data-driven gameplay balance
//!
//! Every variant of the game ships the defaults below; levels or hosts may
//! override them from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::LevelError;
use crate::consts::*;

/// Gameplay constants that shape a level session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Player must be strictly closer than this (pixels) to flip an object
    pub activation_radius: f32,
    /// Score awarded for any critter
    pub critter_score: i32,
    /// Probability (0-1) that a flip reveals trash
    pub trash_chance: f32,
    /// Walking speed (pixels/s)
    pub player_speed: f32,
    /// Player sprite scale
    pub player_scale: f32,
    /// Player spawn point (normalized)
    pub player_start: Vec2,
    /// Candidate draws per placement before an overlap is accepted
    pub placement_attempts: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            activation_radius: ACTIVATION_RADIUS,
            critter_score: CRITTER_SCORE,
            trash_chance: TRASH_PERCENT as f32 / 100.0,
            player_speed: PLAYER_SPEED,
            player_scale: PLAYER_SCALE,
            player_start: Vec2::new(0.5, 0.8),
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

impl Tuning {
    /// Parse tuning overrides; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let tuning: Self = serde_json::from_str(json).map_err(|source| LevelError::Parse {
            what: "tuning",
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check every field is within its documented bounds
    pub fn validate(&self) -> Result<(), LevelError> {
        if !(self.activation_radius > 0.0) {
            return Err(LevelError::NonPositive {
                field: "activation_radius",
                value: self.activation_radius,
            });
        }
        if self.critter_score <= 0 {
            return Err(LevelError::NonPositive {
                field: "critter_score",
                value: self.critter_score as f32,
            });
        }
        if !(self.player_speed > 0.0) {
            return Err(LevelError::NonPositive {
                field: "player_speed",
                value: self.player_speed,
            });
        }
        if !(0.0..=1.0).contains(&self.trash_chance) {
            return Err(LevelError::TrashChance(self.trash_chance));
        }
        let start = self.player_start;
        if !(0.0..=1.0).contains(&start.x) || !(0.0..=1.0).contains(&start.y) {
            return Err(LevelError::InvalidRange {
                field: "player_start",
                min: start.x,
                max: start.y,
            });
        }
        Ok(())
    }

    /// Trash threshold on a 1..=100 roll (roll <= threshold means trash)
    pub fn trash_threshold(&self) -> u32 {
        (self.trash_chance.clamp(0.0, 1.0) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.trash_threshold(), 20);
        assert_eq!(tuning.critter_score, 10);
        assert_eq!(tuning.activation_radius, 60.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "activation_radius": 80.0 }"#).unwrap();
        assert_eq!(tuning.activation_radius, 80.0);
        assert_eq!(tuning.placement_attempts, PLACEMENT_ATTEMPTS);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Tuning::from_json(r#"{ "trash_chance": 1.5 }"#),
            Err(LevelError::TrashChance(_))
        ));
        assert!(matches!(
            Tuning::from_json(r#"{ "activation_radius": 0.0 }"#),
            Err(LevelError::NonPositive { .. })
        ));
        for score in ["0", "-10"] {
            let json = format!(r#"{{ "critter_score": {score} }}"#);
            assert!(matches!(
                Tuning::from_json(&json),
                Err(LevelError::NonPositive { field: "critter_score", .. })
            ));
        }
        assert!(matches!(
            Tuning::from_json("not json"),
            Err(LevelError::Parse { .. })
        ));
    }
}
