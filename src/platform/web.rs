//! Browser platform and JS bindings
//!
//! The JS scene engine owns sprites and input; it calls into [`WebGame`] every
//! frame and on every object click, and reads object/player state back as JSON.

use std::collections::HashMap;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlAudioElement, HtmlImageElement};

use super::{AudioOut, Dialogs, InfoPanel};
use crate::game::Game;
use crate::levels::Level;
use crate::settings::Settings;
use crate::sim::{SeededRandom, TickInput};
use crate::tuning::Tuning;

/// DOM-backed collaborators
#[derive(Default)]
pub struct WebPlatform {
    loops: HashMap<String, HtmlAudioElement>,
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

impl InfoPanel for WebPlatform {
    fn show(&mut self, asset: &str, name: &str, description: &str) {
        let Some(document) = document() else {
            log::warn!("No document - explorer panel not updated");
            return;
        };

        if let Some(img) = document
            .get_element_by_id("explorerImage")
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            img.set_src(asset);
        }
        if let Some(el) = document.get_element_by_id("explorerName") {
            el.set_text_content(Some(name));
        }
        if let Some(el) = document.get_element_by_id("explorerText") {
            el.set_text_content(Some(description));
        }
    }
}

impl AudioOut for WebPlatform {
    fn play_once(&mut self, asset: &str, volume: f32) {
        match HtmlAudioElement::new_with_src(asset) {
            Ok(audio) => {
                audio.set_volume(volume as f64);
                if let Err(e) = audio.play() {
                    log::warn!("Failed to play {}: {:?}", asset, e);
                }
            }
            Err(e) => log::warn!("Failed to load {}: {:?}", asset, e),
        }
    }

    fn start_loop(&mut self, asset: &str, volume: f32) {
        match HtmlAudioElement::new_with_src(asset) {
            Ok(audio) => {
                audio.set_loop(true);
                audio.set_volume(volume as f64);
                // Browsers may reject until the first user gesture
                if let Err(e) = audio.play() {
                    log::warn!("Ambient loop {} blocked: {:?}", asset, e);
                }
                self.loops.insert(asset.to_string(), audio);
            }
            Err(e) => log::warn!("Failed to load {}: {:?}", asset, e),
        }
    }

    fn stop_loop(&mut self, asset: &str) {
        if let Some(audio) = self.loops.remove(asset) {
            let _ = audio.pause();
        }
    }
}

impl Dialogs for WebPlatform {
    fn present_summary(&mut self, report: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(report);
        }
    }

    fn ask_feedback(&mut self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn open_url(&mut self, url: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                log::warn!("Failed to open {}: {:?}", url, e);
            }
        }
    }
}

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Stream Explorer starting...");
}

/// Game handle exported to JS
#[wasm_bindgen]
pub struct WebGame {
    game: Game<WebPlatform, SeededRandom>,
}

fn random_seed() -> u64 {
    (js_sys::Math::random() * u32::MAX as f64) as u64 ^ (js_sys::Date::now() as u64)
}

impl WebGame {
    fn start(level: Level, tuning: Tuning, width: f32, height: f32) -> WebGame {
        let seed = random_seed();
        log::info!("Level '{}' seed {}", level.name, seed);
        let game = Game::new(
            level,
            tuning,
            Settings::load(),
            Vec2::new(width, height),
            SeededRandom::new(seed),
            WebPlatform::default(),
        );
        WebGame { game }
    }
}

#[wasm_bindgen]
impl WebGame {
    /// Start a built-in level on a `width` x `height` playfield
    #[wasm_bindgen(constructor)]
    pub fn new(level: &str, width: f32, height: f32) -> Result<WebGame, JsValue> {
        let level = Level::by_name(level).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self::start(level, Tuning::default(), width, height))
    }

    /// Start a level described by JSON, with optional tuning JSON
    pub fn from_json(
        level_json: &str,
        tuning_json: Option<String>,
        width: f32,
        height: f32,
    ) -> Result<WebGame, JsValue> {
        let level = Level::from_json(level_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let tuning = match tuning_json {
            Some(json) => Tuning::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
            None => Tuning::default(),
        };
        Ok(Self::start(level, tuning, width, height))
    }

    /// Per-frame movement step
    pub fn tick(&mut self, left: bool, right: bool, up: bool, down: bool, dt: f32) {
        let input = TickInput {
            left,
            right,
            up,
            down,
        };
        self.game.tick(&input, dt);
    }

    /// Object clicked; returns true when something was revealed
    pub fn select(&mut self, id: u32) -> bool {
        self.game.select(id).interaction.find().is_some()
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.game.resize(Vec2::new(width, height));
    }

    pub fn score(&self) -> i32 {
        self.game.session().state().score
    }

    pub fn remaining(&self) -> u32 {
        self.game.session().state().remaining()
    }

    pub fn player_x(&self) -> f32 {
        self.game.session().player().pos.x
    }

    pub fn player_y(&self) -> f32 {
        self.game.session().player().pos.y
    }

    pub fn title(&self) -> String {
        self.game.session().level().title.clone()
    }

    /// Objects with world positions and status
    pub fn objects_json(&self) -> String {
        serde_json::to_string(self.game.session().objects()).unwrap_or_default()
    }

    /// Bushes and trees (normalized positions)
    pub fn scenery_json(&self) -> String {
        serde_json::to_string(self.game.session().scenery()).unwrap_or_default()
    }

    pub fn set_muted(&mut self, muted: bool) {
        let settings = Settings {
            muted,
            ..self.game.settings().clone()
        };
        self.game.set_settings(settings);
    }
}
