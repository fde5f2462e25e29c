//! Sound cues and volume mixing
//!
//! The mixer decides *what* to play and how loud; an [`AudioOut`] backend
//! (browser audio elements, or the headless recorder) does the playing.

use crate::levels::LevelSounds;
use crate::platform::AudioOut;
use crate::settings::Settings;

/// Sound cue types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Object flipped, critter underneath
    CritterFound,
    /// Object flipped, trash underneath
    TrashFound,
    /// Background loop for the biome
    Ambient,
}

impl SoundCue {
    /// Mix level before settings are applied
    pub fn base_volume(&self) -> f32 {
        match self {
            SoundCue::CritterFound => 0.5,
            SoundCue::TrashFound => 0.5,
            SoundCue::Ambient => 0.3,
        }
    }

    pub fn is_loop(&self) -> bool {
        matches!(self, SoundCue::Ambient)
    }
}

/// Audio manager for a level
#[derive(Debug, Clone)]
pub struct AudioManager {
    sounds: LevelSounds,
    master_volume: f32,
    sfx_volume: f32,
    ambient_volume: f32,
    muted: bool,
    ambient_playing: bool,
}

impl AudioManager {
    pub fn new(sounds: LevelSounds, settings: &Settings) -> Self {
        let mut manager = Self {
            sounds,
            master_volume: 1.0,
            sfx_volume: 1.0,
            ambient_volume: 1.0,
            muted: false,
            ambient_playing: false,
        };
        manager.apply_settings(settings);
        manager
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_ambient_volume(settings.ambient_volume);
        self.muted = settings.muted;
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Set ambient loop volume (0.0 - 1.0)
    pub fn set_ambient_volume(&mut self, vol: f32) {
        self.ambient_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn asset(&self, cue: SoundCue) -> &str {
        match cue {
            SoundCue::CritterFound => self.sounds.critter_found.as_str(),
            SoundCue::TrashFound => self.sounds.trash_found.as_str(),
            SoundCue::Ambient => self.sounds.ambient.as_str(),
        }
    }

    /// Final volume for a cue
    pub fn effective_volume(&self, cue: SoundCue) -> f32 {
        if self.muted {
            return 0.0;
        }
        let channel = if cue.is_loop() {
            self.ambient_volume
        } else {
            self.sfx_volume
        };
        cue.base_volume() * self.master_volume * channel
    }

    /// Fire-and-forget one-shot
    pub fn play(&self, out: &mut dyn AudioOut, cue: SoundCue) {
        let vol = self.effective_volume(cue);
        if vol <= 0.0 {
            return;
        }
        out.play_once(self.asset(cue), vol);
    }

    /// Start the ambient loop (no-op if already running)
    pub fn start_ambient(&mut self, out: &mut dyn AudioOut) {
        if self.ambient_playing {
            return;
        }
        let vol = self.effective_volume(SoundCue::Ambient);
        out.start_loop(self.asset(SoundCue::Ambient), vol);
        self.ambient_playing = true;
    }

    pub fn stop_ambient(&mut self, out: &mut dyn AudioOut) {
        if !self.ambient_playing {
            return;
        }
        out.stop_loop(self.asset(SoundCue::Ambient));
        self.ambient_playing = false;
    }

    pub fn ambient_playing(&self) -> bool {
        self.ambient_playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::levels::Level;
    use crate::platform::headless::HeadlessPlatform;

    #[test]
    fn test_default_mix_matches_cues() {
        let audio = AudioManager::new(Level::stream().sounds, &Settings::default());
        assert_eq!(audio.effective_volume(SoundCue::CritterFound), 0.5);
        assert_eq!(audio.effective_volume(SoundCue::TrashFound), 0.5);
        assert_eq!(audio.effective_volume(SoundCue::Ambient), 0.3);
        assert_eq!(audio.asset(SoundCue::CritterFound), "rockFlip.wav");
    }

    #[test]
    fn test_settings_scale_volume() {
        let settings = Settings {
            master_volume: 0.5,
            ambient_volume: 0.0,
            ..Settings::default()
        };
        let audio = AudioManager::new(Level::stream().sounds, &settings);
        assert_eq!(audio.effective_volume(SoundCue::TrashFound), 0.25);
        assert_eq!(audio.effective_volume(SoundCue::Ambient), 0.0);
    }

    #[test]
    fn test_muted_plays_nothing() {
        let mut audio = AudioManager::new(Level::stream().sounds, &Settings::default());
        audio.set_muted(true);
        let mut out = HeadlessPlatform::default();
        audio.play(&mut out, SoundCue::CritterFound);
        assert!(out.sounds.is_empty());
    }

    #[test]
    fn test_ambient_starts_once() {
        let mut audio = AudioManager::new(Level::stream().sounds, &Settings::default());
        let mut out = HeadlessPlatform::default();
        audio.start_ambient(&mut out);
        audio.start_ambient(&mut out);
        assert_eq!(out.loops, vec!["ambientWater.wav".to_string()]);
        audio.stop_ambient(&mut out);
        assert!(out.loops.is_empty());
        assert!(!audio.ambient_playing());
    }
}
