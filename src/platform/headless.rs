//! Headless platform: records every call, optionally echoing to stdout

use super::{AudioOut, Dialogs, InfoPanel};

/// A find pushed to the explorer panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelEntry {
    pub asset: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessPlatform {
    /// Print panel updates and dialogs to stdout
    pub echo: bool,
    /// Answer given to the feedback question
    pub feedback_answer: bool,
    pub panel: Vec<PanelEntry>,
    pub hints: Vec<String>,
    /// One-shots played, with volume
    pub sounds: Vec<(String, f32)>,
    /// Loops currently running
    pub loops: Vec<String>,
    pub summaries: Vec<String>,
    pub opened_urls: Vec<String>,
}

impl HeadlessPlatform {
    pub fn new(echo: bool, feedback_answer: bool) -> Self {
        Self {
            echo,
            feedback_answer,
            ..Default::default()
        }
    }
}

impl InfoPanel for HeadlessPlatform {
    fn show(&mut self, asset: &str, name: &str, description: &str) {
        if self.echo {
            println!("[{}] {}: {}", asset, name, description);
        }
        self.panel.push(PanelEntry {
            asset: asset.to_string(),
            name: name.to_string(),
            description: description.to_string(),
        });
    }

    fn hint(&mut self, message: &str) {
        log::debug!("{}", message);
        self.hints.push(message.to_string());
    }
}

impl AudioOut for HeadlessPlatform {
    fn play_once(&mut self, asset: &str, volume: f32) {
        self.sounds.push((asset.to_string(), volume));
    }

    fn start_loop(&mut self, asset: &str, _volume: f32) {
        self.loops.push(asset.to_string());
    }

    fn stop_loop(&mut self, asset: &str) {
        self.loops.retain(|a| a != asset);
    }
}

impl Dialogs for HeadlessPlatform {
    fn present_summary(&mut self, report: &str) {
        if self.echo {
            println!("\n{}", report);
        }
        self.summaries.push(report.to_string());
    }

    fn ask_feedback(&mut self, prompt: &str) -> bool {
        if self.echo {
            println!("{} -> {}", prompt, if self.feedback_answer { "OK" } else { "Cancel" });
        }
        self.feedback_answer
    }

    fn open_url(&mut self, url: &str) {
        if self.echo {
            println!("Opening {}", url);
        }
        self.opened_urls.push(url.to_string());
    }
}
