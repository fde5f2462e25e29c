//! Platform abstraction layer
//!
//! The level session never touches the DOM, audio hardware or dialogs
//! directly. It pushes to these sinks instead:
//! - `InfoPanel`: explorer panel showing the latest find
//! - `AudioOut`: one-shot and looping sound playback
//! - `Dialogs`: blocking summary, feedback question, navigation

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

/// Explorer panel sink. Display only; nothing flows back.
pub trait InfoPanel {
    fn show(&mut self, asset: &str, name: &str, description: &str);

    /// Short transient message ("Move closer...")
    fn hint(&mut self, message: &str) {
        log::info!("{}", message);
    }
}

/// Sound playback
pub trait AudioOut {
    fn play_once(&mut self, asset: &str, volume: f32);
    fn start_loop(&mut self, asset: &str, volume: f32);
    fn stop_loop(&mut self, asset: &str);
}

/// Modal dialogs and navigation. Calls block until the player answers.
pub trait Dialogs {
    fn present_summary(&mut self, report: &str);
    /// Yes/no question; `true` means yes
    fn ask_feedback(&mut self, prompt: &str) -> bool;
    /// Open an external page in a new context
    fn open_url(&mut self, url: &str);
}

/// Everything the game driver needs from its host
pub trait Platform: InfoPanel + AudioOut + Dialogs {}

impl<T: InfoPanel + AudioOut + Dialogs> Platform for T {}
