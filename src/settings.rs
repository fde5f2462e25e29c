//! Player preferences
//!
//! Persisted in LocalStorage on the web; native builds always start from
//! defaults.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Ambient loop volume (0.0 - 1.0)
    pub ambient_volume: f32,
    /// Mute everything
    pub muted: bool,

    // === HUD ===
    /// Show "move closer" hints when a select is out of range
    pub show_hints: bool,
    /// Ask for feedback after the summary
    pub ask_feedback: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 1.0,
            sfx_volume: 1.0,
            ambient_volume: 1.0,
            muted: false,
            show_hints: true,
            ask_feedback: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "stream_explorer_settings";

    /// Parse settings, falling back to defaults for anything missing or broken
    pub fn from_json_or_default(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json_or_default(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json() {
        let settings = Settings::from_json_or_default(r#"{ "muted": true }"#);
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 1.0);
        assert!(settings.show_hints);
    }

    #[test]
    fn test_broken_json_falls_back() {
        assert_eq!(Settings::from_json_or_default("{"), Settings::default());
    }
}
