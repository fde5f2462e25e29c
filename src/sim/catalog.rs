//! Critter and trash catalogs
//!
//! Static per-level tables. A flip draws one entry uniformly, with
//! replacement, from whichever table the trash roll picked.

use serde::{Deserialize, Serialize};

use super::random::RandomSource;
use crate::LevelError;

/// A beneficial find (macroinvertebrate, amphibian, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CritterEntry {
    pub id: String,
    pub display_name: String,
    /// Image shown in the explorer panel
    pub asset: String,
    pub description: String,
}

/// A pollutant find; always lowers the score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashEntry {
    pub id: String,
    pub display_name: String,
    pub asset: String,
    pub description: String,
    /// Negative score change
    pub score_delta: i32,
}

/// Both tables for one level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub critters: Vec<CritterEntry>,
    pub trash: Vec<TrashEntry>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        serde_json::from_str(json).map_err(|source| LevelError::Parse {
            what: "catalog",
            source,
        })
    }

    /// Both tables non-empty, every trash entry strictly negative
    pub fn validate(&self, level: &str) -> Result<(), LevelError> {
        if self.critters.is_empty() {
            return Err(LevelError::EmptyCatalog {
                level: level.to_string(),
                catalog: "critter",
            });
        }
        if self.trash.is_empty() {
            return Err(LevelError::EmptyCatalog {
                level: level.to_string(),
                catalog: "trash",
            });
        }
        if let Some(bad) = self.trash.iter().find(|t| t.score_delta >= 0) {
            return Err(LevelError::NonNegativeTrashDelta {
                id: bad.id.clone(),
                delta: bad.score_delta,
            });
        }
        Ok(())
    }

    pub fn draw_critter<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&CritterEntry> {
        if self.critters.is_empty() {
            return None;
        }
        self.critters.get(rng.index(self.critters.len()))
    }

    pub fn draw_trash<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Option<&TrashEntry> {
        if self.trash.is_empty() {
            return None;
        }
        self.trash.get(rng.index(self.trash.len()))
    }
}

/// Build a critter table from `(id, name, asset, description)` rows
pub fn critters_from_rows(rows: &[(&str, &str, &str, &str)]) -> Vec<CritterEntry> {
    rows.iter()
        .map(|(id, name, asset, description)| CritterEntry {
            id: id.to_string(),
            display_name: name.to_string(),
            asset: asset.to_string(),
            description: description.to_string(),
        })
        .collect()
}

/// Build a trash table from `(id, name, asset, description, delta)` rows
pub fn trash_from_rows(rows: &[(&str, &str, &str, &str, i32)]) -> Vec<TrashEntry> {
    rows.iter()
        .map(|(id, name, asset, description, delta)| TrashEntry {
            id: id.to_string(),
            display_name: name.to_string(),
            asset: asset.to_string(),
            description: description.to_string(),
            score_delta: *delta,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::ScriptedRandom;

    fn sample() -> Catalog {
        Catalog {
            critters: critters_from_rows(&[
                ("a", "Critter A", "a.png", "first"),
                ("b", "Critter B", "b.png", "second"),
            ]),
            trash: trash_from_rows(&[("x", "Trash X", "x.png", "bad", -5)]),
        }
    }

    #[test]
    fn test_validate() {
        assert!(sample().validate("test").is_ok());

        let mut empty = sample();
        empty.critters.clear();
        assert!(matches!(
            empty.validate("test"),
            Err(LevelError::EmptyCatalog { catalog: "critter", .. })
        ));

        let mut positive = sample();
        positive.trash[0].score_delta = 0;
        assert!(matches!(
            positive.validate("test"),
            Err(LevelError::NonNegativeTrashDelta { delta: 0, .. })
        ));
    }

    #[test]
    fn test_draws_follow_script() {
        let catalog = sample();
        let mut rng = ScriptedRandom::new().critter(1).trash(0);
        let _ = rng.percent();
        assert_eq!(catalog.draw_critter(&mut rng).unwrap().id, "b");
        let _ = rng.percent();
        assert_eq!(catalog.draw_trash(&mut rng).unwrap().id, "x");
    }

    #[test]
    fn test_empty_draw_is_none() {
        let catalog = Catalog::default();
        let mut rng = ScriptedRandom::new();
        assert!(catalog.draw_critter(&mut rng).is_none());
        assert!(catalog.draw_trash(&mut rng).is_none());
    }

    #[test]
    fn test_json_roundtrip_shape() {
        let json = r#"{
            "critters": [{"id": "m", "display_name": "Mayfly Nymph", "asset": "mayfly.png", "description": "clean water"}],
            "trash": [{"id": "t", "display_name": "Tire", "asset": "tire.png", "description": "bad", "score_delta": -8}]
        }"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.trash[0].display_name, "Tire");
        assert_eq!(catalog.trash[0].score_delta, -8);
        assert!(catalog.validate("json").is_ok());
    }
}
