//! End-of-level summary

use serde::{Deserialize, Serialize};

use super::state::LevelSession;

/// Prompt shown after the summary
pub const FEEDBACK_PROMPT: &str = "Would you like to provide feedback on this level? \
Click OK to go to the feedback form, or Cancel to play again.";

/// One critter name with how many times it was found
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CritterTally {
    pub name: String,
    pub count: u32,
}

/// One trash find
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrashLine {
    pub name: String,
    pub score_delta: i32,
}

/// Final score and what was collected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSummary {
    pub title: String,
    pub score: i32,
    /// Grouped by name, in first-found order
    pub critters: Vec<CritterTally>,
    /// In found order, repeats kept
    pub trash: Vec<TrashLine>,
}

/// What the player picked after reading the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryChoice {
    OpenFeedback,
    Restart,
}

impl SummaryChoice {
    pub fn from_answer(wants_feedback: bool) -> Self {
        if wants_feedback {
            SummaryChoice::OpenFeedback
        } else {
            SummaryChoice::Restart
        }
    }
}

/// Group names by multiplicity, keeping first-seen order
pub fn tally(names: &[String]) -> Vec<CritterTally> {
    let mut out: Vec<CritterTally> = Vec::new();
    for name in names {
        match out.iter_mut().find(|t| &t.name == name) {
            Some(entry) => entry.count += 1,
            None => out.push(CritterTally {
                name: name.clone(),
                count: 1,
            }),
        }
    }
    out
}

impl LevelSummary {
    pub fn from_session(session: &LevelSession) -> Self {
        let state = session.state();
        Self {
            title: session.level().title.clone(),
            score: state.score,
            critters: tally(&state.collected_critters),
            trash: state.collected_trash.clone(),
        }
    }

    /// Total critters found
    pub fn critter_count(&self) -> u32 {
        self.critters.iter().map(|t| t.count).sum()
    }

    /// Human-readable report for the summary dialog
    pub fn report(&self) -> String {
        let mut out = format!("Level Complete!\nScore: {}\n\nCritters Collected:\n", self.score);
        if self.critters.is_empty() {
            out.push_str("- none\n");
        }
        for t in &self.critters {
            out.push_str(&format!("- {} x{}\n", t.name, t.count));
        }

        out.push_str("\nTrash Collected:\n");
        if self.trash.is_empty() {
            out.push_str("- none\n");
        }
        for t in &self.trash {
            out.push_str(&format!("- {} ({} points)\n", t.name, t.score_delta));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_tally_groups_in_first_seen_order() {
        let t = tally(&names(&["Mayfly", "Crayfish", "Mayfly", "Stonefly", "Mayfly"]));
        assert_eq!(
            t,
            vec![
                CritterTally { name: "Mayfly".into(), count: 3 },
                CritterTally { name: "Crayfish".into(), count: 1 },
                CritterTally { name: "Stonefly".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_report_format() {
        let summary = LevelSummary {
            title: "Stream".into(),
            score: 15,
            critters: tally(&names(&["Critter A", "Critter A"])),
            trash: vec![TrashLine {
                name: "Trash X".into(),
                score_delta: -5,
            }],
        };
        assert_eq!(summary.critter_count(), 2);
        assert_eq!(
            summary.report(),
            "Level Complete!\nScore: 15\n\nCritters Collected:\n- Critter A x2\n\n\
             Trash Collected:\n- Trash X (-5 points)\n"
        );
    }

    #[test]
    fn test_report_empty_sections() {
        let summary = LevelSummary {
            title: "Stream".into(),
            score: 0,
            critters: Vec::new(),
            trash: Vec::new(),
        };
        let report = summary.report();
        assert!(report.contains("Critters Collected:\n- none\n"));
        assert!(report.ends_with("Trash Collected:\n- none\n"));
    }

    #[test]
    fn test_choice_from_answer() {
        assert_eq!(SummaryChoice::from_answer(true), SummaryChoice::OpenFeedback);
        assert_eq!(SummaryChoice::from_answer(false), SummaryChoice::Restart);
    }
}
