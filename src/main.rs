//! Stream Explorer entry point
//!
//! The browser build is driven from JS through `platform::web::WebGame`.
//! Natively this runs a headless autopilot through one level and prints what
//! the explorer panel and summary dialog would have shown.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::{Path, PathBuf};

    use anyhow::{Context, Result};
    use clap::Parser;
    use glam::Vec2;

    use stream_explorer::autoplay::{Autopilot, run_level};
    use stream_explorer::consts::SIM_DT;
    use stream_explorer::platform::headless::HeadlessPlatform;
    use stream_explorer::sim::SeededRandom;
    use stream_explorer::{Game, Level, Settings, Tuning};

    /// Play a level headlessly with the autopilot
    #[derive(Debug, Parser)]
    #[command(name = "stream-explorer", version, about)]
    struct Cli {
        /// Built-in level name (stream, wetland)
        #[arg(short, long, default_value = "stream")]
        level: String,
        /// Level definition JSON file (overrides --level)
        #[arg(long)]
        level_file: Option<PathBuf>,
        /// Tuning overrides JSON file
        #[arg(long)]
        tuning_file: Option<PathBuf>,
        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1280.0)]
        width: f32,
        #[arg(long, default_value_t = 720.0)]
        height: f32,
        /// Answer "yes" to the feedback question
        #[arg(long)]
        feedback: bool,
        /// Frame limit for the autopilot
        #[arg(long, default_value_t = 100_000)]
        max_frames: u32,
    }

    fn read(path: &Path) -> Result<String> {
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
    }

    fn load_level(cli: &Cli) -> Result<Level> {
        match &cli.level_file {
            Some(path) => Level::from_json(&read(path)?)
                .with_context(|| format!("loading level {}", path.display())),
            None => Level::by_name(&cli.level).context("selecting built-in level"),
        }
    }

    fn load_tuning(cli: &Cli) -> Result<Tuning> {
        match &cli.tuning_file {
            Some(path) => Tuning::from_json(&read(path)?)
                .with_context(|| format!("loading tuning {}", path.display())),
            None => Ok(Tuning::default()),
        }
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        let level = load_level(&cli)?;
        let tuning = load_tuning(&cli)?;
        let seed = cli.seed.unwrap_or_else(rand::random);
        log::info!("Playing '{}' with seed {}", level.name, seed);

        let mut game = Game::new(
            level,
            tuning,
            Settings::load(),
            Vec2::new(cli.width, cli.height),
            SeededRandom::new(seed),
            HeadlessPlatform::new(true, cli.feedback),
        );

        match run_level(&mut game, &Autopilot::default(), SIM_DT, cli.max_frames) {
            Some(end) => log::info!("Level finished: {:?}", end),
            None => log::warn!(
                "Level unfinished: {} objects left",
                game.session().state().remaining()
            ),
        }
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn cli(args: &[&str]) -> Cli {
            Cli::parse_from(std::iter::once("stream-explorer").chain(args.iter().copied()))
        }

        #[test]
        fn test_missing_level_file_names_path() {
            let err = load_level(&cli(&["--level-file", "/nonexistent/level.json"])).unwrap_err();
            assert!(format!("{:#}", err).contains("reading /nonexistent/level.json"));
        }

        #[test]
        fn test_missing_tuning_file_names_path() {
            let err = load_tuning(&cli(&["--tuning-file", "/nonexistent/tuning.json"])).unwrap_err();
            assert!(format!("{:#}", err).contains("/nonexistent/tuning.json"));
        }

        #[test]
        fn test_unknown_level_reports_context() {
            let err = load_level(&cli(&["--level", "desert"])).unwrap_err();
            assert!(format!("{:#}", err).starts_with("selecting built-in level"));
        }

        #[test]
        fn test_defaults() {
            let cli = cli(&[]);
            assert_eq!(load_level(&cli).unwrap().name, "stream");
            assert_eq!(load_tuning(&cli).unwrap(), Tuning::default());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Stream Explorer (native) starting...");
    native::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
