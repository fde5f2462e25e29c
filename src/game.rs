//! Game driver
//!
//! Owns one [`LevelSession`] plus the host platform and turns session
//! outcomes into panel updates, sounds and the end-of-level dialogs.
//! Restarting builds a brand-new session; nothing is reset in place.

use glam::Vec2;

use crate::audio::{AudioManager, SoundCue};
use crate::levels::Level;
use crate::platform::Platform;
use crate::settings::Settings;
use crate::sim::{
    FEEDBACK_PROMPT, FindKind, IgnoreReason, Interaction, LevelSession, LevelSummary,
    RandomSource, SummaryChoice, TickInput, select_object, tick,
};
use crate::tuning::Tuning;

/// How a finished level was left
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelEnd {
    /// Feedback form opened; the finished session stays on screen
    FeedbackOpened,
    /// A fresh session replaced the finished one
    Restarted,
}

/// Outcome of a select routed through the driver
#[derive(Debug, Clone, PartialEq)]
pub struct SelectResult {
    pub interaction: Interaction,
    /// Set only on the select that completed the level
    pub end: Option<LevelEnd>,
}

pub struct Game<P: Platform, R: RandomSource> {
    level: Level,
    tuning: Tuning,
    settings: Settings,
    session: LevelSession,
    rng: R,
    platform: P,
    audio: AudioManager,
    last_summary: Option<LevelSummary>,
    restarts: u32,
}

impl<P: Platform, R: RandomSource> Game<P, R> {
    pub fn new(
        level: Level,
        tuning: Tuning,
        settings: Settings,
        size: Vec2,
        mut rng: R,
        mut platform: P,
    ) -> Self {
        let session = LevelSession::new(level.clone(), tuning.clone(), size, &mut rng);
        let mut audio = AudioManager::new(level.sounds.clone(), &settings);
        audio.start_ambient(&mut platform);

        Self {
            level,
            tuning,
            settings,
            session,
            rng,
            platform,
            audio,
            last_summary: None,
            restarts: 0,
        }
    }

    pub fn session(&self) -> &LevelSession {
        &self.session
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Summary of the most recently finished level
    pub fn last_summary(&self) -> Option<&LevelSummary> {
        self.last_summary.as_ref()
    }

    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Replace settings, remix audio and persist
    pub fn set_settings(&mut self, settings: Settings) {
        self.audio.apply_settings(&settings);
        if self.audio.ambient_playing() {
            // Restart the loop so it picks up the new volume
            self.audio.stop_ambient(&mut self.platform);
            self.audio.start_ambient(&mut self.platform);
        }
        settings.save();
        self.settings = settings;
    }

    /// Advance movement by one frame
    pub fn tick(&mut self, input: &TickInput, dt: f32) {
        tick(&mut self.session, input, dt);
    }

    pub fn resize(&mut self, size: Vec2) {
        self.session.resize(size);
    }

    /// Route a select on object `id`
    pub fn select(&mut self, id: u32) -> SelectResult {
        let interaction = select_object(&mut self.session, id, &mut self.rng);
        let mut end = None;

        match &interaction {
            Interaction::Ignored(IgnoreReason::OutOfRange { .. }) => {
                if self.settings.show_hints {
                    if let Some(object) = self.session.object(id) {
                        let message = format!("Move closer to {}!", object.kind.verb());
                        self.platform.hint(&message);
                    }
                }
            }
            Interaction::Ignored(_) => {}
            Interaction::Found { find, completed } => {
                let cue = match find.kind {
                    FindKind::Critter => SoundCue::CritterFound,
                    FindKind::Trash => SoundCue::TrashFound,
                };
                self.audio.play(&mut self.platform, cue);
                self.platform
                    .show(&find.asset, &find.display_name, &find.description);
                if *completed {
                    end = Some(self.finish_level());
                }
            }
        }

        SelectResult { interaction, end }
    }

    /// Present the summary, then follow the player's choice
    fn finish_level(&mut self) -> LevelEnd {
        let summary = LevelSummary::from_session(&self.session);
        self.platform.present_summary(&summary.report());
        let wants_feedback =
            self.settings.ask_feedback && self.platform.ask_feedback(FEEDBACK_PROMPT);
        self.last_summary = Some(summary);

        match SummaryChoice::from_answer(wants_feedback) {
            SummaryChoice::OpenFeedback => {
                log::info!("Opening feedback form");
                self.platform.open_url(&self.level.feedback_url);
                LevelEnd::FeedbackOpened
            }
            SummaryChoice::Restart => {
                self.restart();
                LevelEnd::Restarted
            }
        }
    }

    /// Throw the session away and build a new one from the level definition
    pub fn restart(&mut self) {
        self.audio.stop_ambient(&mut self.platform);
        let size = self.session.size();
        self.session = LevelSession::new(self.level.clone(), self.tuning.clone(), size, &mut self.rng);
        self.restarts += 1;
        self.audio.start_ambient(&mut self.platform);
        log::info!("Level '{}' restarted ({} restarts)", self.level.name, self.restarts);
    }
}
