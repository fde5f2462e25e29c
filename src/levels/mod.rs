//! Level definitions
//!
//! A level is pure data: which objects to place and where, the critter and
//! trash catalogs, decorative scenery and the sounds to play. Built-in levels
//! live in the submodules; hosts can also load one from JSON.

mod stream;
mod wetland;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::LevelError;
use crate::sim::catalog::Catalog;
use crate::sim::placement::{PlacementRequest, Span};
use crate::sim::random::RandomSource;
use crate::sim::state::{ObjectKind, SceneryItem};

/// Names accepted by [`Level::by_name`]
pub const LEVEL_NAMES: &[&str] = &["stream", "wetland"];

/// Default feedback form opened from the summary
pub const FEEDBACK_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLScFHSVlx0Fp4j5Kp8qVK7krCadWA7juq-U34Pt_ZWN8IUARKw/viewform?usp=sf_link";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Biome {
    Stream,
    Wetland,
}

/// One category of flippable objects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectCategory {
    pub kind: ObjectKind,
    pub count: u32,
    pub x: Span,
    pub y: Span,
    pub scale: Span,
    /// Normalized minimum distance to earlier objects
    pub min_separation: f32,
}

impl ObjectCategory {
    pub fn request(&self, max_attempts: u32) -> PlacementRequest {
        PlacementRequest {
            count: self.count,
            x: self.x,
            y: self.y,
            scale: self.scale,
            min_separation: self.min_separation,
            max_attempts,
        }
    }
}

/// Randomized tree line along the top border
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLine {
    pub asset: String,
    pub count: u32,
    /// Normalized y of every tree
    pub y: f32,
    pub scale: Span,
    pub min_depth: i32,
    pub max_depth: i32,
}

/// Sound assets for a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelSounds {
    pub critter_found: String,
    pub trash_found: String,
    pub ambient: String,
}

/// Complete level definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub name: String,
    pub title: String,
    pub biome: Biome,
    /// Placed in order; later categories avoid earlier ones
    pub categories: Vec<ObjectCategory>,
    pub catalog: Catalog,
    /// Fixed bushes (normalized positions)
    pub bushes: Vec<SceneryItem>,
    pub trees: Option<TreeLine>,
    pub sounds: LevelSounds,
    pub background_color: String,
    pub feedback_url: String,
}

impl Level {
    /// Built-in level by name
    pub fn by_name(name: &str) -> Result<Self, LevelError> {
        match name.to_lowercase().as_str() {
            "stream" => Ok(Self::stream()),
            "wetland" => Ok(Self::wetland()),
            _ => Err(LevelError::UnknownLevel(name.to_string())),
        }
    }

    pub fn stream() -> Self {
        stream::level()
    }

    pub fn wetland() -> Self {
        wetland::level()
    }

    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let level: Self = serde_json::from_str(json).map_err(|source| LevelError::Parse {
            what: "level",
            source,
        })?;
        level.validate()?;
        Ok(level)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        serde_json::to_string_pretty(self).map_err(|source| LevelError::Parse {
            what: "level",
            source,
        })
    }

    /// Objects the level will place
    pub fn total_objects(&self) -> u32 {
        self.categories.iter().map(|c| c.count).sum()
    }

    pub fn validate(&self) -> Result<(), LevelError> {
        self.catalog.validate(&self.name)?;
        if self.total_objects() == 0 {
            return Err(LevelError::NoObjects {
                level: self.name.clone(),
            });
        }
        for category in &self.categories {
            for (field, span) in [("x", category.x), ("y", category.y)] {
                if !span.is_unit() {
                    return Err(LevelError::InvalidRange {
                        field,
                        min: span.min,
                        max: span.max,
                    });
                }
            }
            let scale = category.scale;
            if !(scale.min > 0.0 && scale.min <= scale.max) {
                return Err(LevelError::InvalidRange {
                    field: "scale",
                    min: scale.min,
                    max: scale.max,
                });
            }
            if !(category.min_separation >= 0.0) {
                return Err(LevelError::NonPositive {
                    field: "min_separation",
                    value: category.min_separation,
                });
            }
        }
        Ok(())
    }

    /// Bushes plus a freshly scattered tree line
    pub fn scenery<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Vec<SceneryItem> {
        let mut items = self.bushes.clone();
        if let Some(trees) = &self.trees {
            for _ in 0..trees.count {
                let x = rng.float_between(0.0, 1.0);
                let scale = trees.scale.sample(rng);
                let depth = rng.int_between(trees.min_depth, trees.max_depth);
                items.push(SceneryItem {
                    asset: trees.asset.clone(),
                    pos: Vec2::new(x, trees.y),
                    scale,
                    depth,
                });
            }
        }
        items
    }
}

fn bush(x: f32, y: f32) -> SceneryItem {
    SceneryItem {
        asset: "bush".to_string(),
        pos: Vec2::new(x, y),
        scale: 0.3,
        depth: 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::SeededRandom;

    #[test]
    fn test_builtin_levels_validate() {
        for name in LEVEL_NAMES {
            let level = Level::by_name(name).unwrap();
            assert!(level.validate().is_ok(), "{name} should validate");
            assert_eq!(&level.name, name);
        }
        assert!(matches!(
            Level::by_name("desert"),
            Err(LevelError::UnknownLevel(_))
        ));
    }

    #[test]
    fn test_stream_level_shape() {
        let level = Level::stream();
        assert_eq!(level.total_objects(), 18);
        assert_eq!(level.catalog.critters.len(), 7);
        assert_eq!(level.catalog.trash.len(), 7);
        assert_eq!(level.bushes.len(), 4);
        assert!(level.catalog.trash.iter().all(|t| t.score_delta < 0));
    }

    #[test]
    fn test_wetland_places_in_order() {
        let level = Level::wetland();
        let kinds: Vec<_> = level.categories.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ObjectKind::Rock, ObjectKind::Log, ObjectKind::LilyPad]);
    }

    #[test]
    fn test_scenery_has_trees() {
        let level = Level::stream();
        let mut rng = SeededRandom::new(3);
        let scenery = level.scenery(&mut rng);
        let trees: Vec<_> = scenery.iter().filter(|s| s.asset == "tree").collect();
        assert_eq!(trees.len(), 24);
        for tree in trees {
            assert!((0.0..1.0).contains(&tree.pos.x));
            assert_eq!(tree.pos.y, 0.05);
            assert!((0.5..0.7).contains(&tree.scale));
            assert!((1..=2).contains(&tree.depth));
        }
    }

    #[test]
    fn test_json_roundtrip_validates() {
        let json = Level::wetland().to_json().unwrap();
        let parsed = Level::from_json(&json).unwrap();
        assert_eq!(parsed, Level::wetland());
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut level = Level::stream();
        level.categories[0].x = Span::new(0.9, 0.1);
        assert!(matches!(
            level.validate(),
            Err(LevelError::InvalidRange { field: "x", .. })
        ));

        let mut level = Level::stream();
        level.categories[0].count = 0;
        assert!(matches!(level.validate(), Err(LevelError::NoObjects { .. })));
    }
}
