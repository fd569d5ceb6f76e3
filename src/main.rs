//! Headless autoplay runner.
//!
//! `cosmic-scales <catalog.json> [options.toml] [seconds]`
//!
//! Loads a scale catalog, starts autoplay and drives the engine in real
//! time, logging every scale change with its grid label. Set `RUST_LOG=info`
//! (or `debug`) to see the output.

use std::path::Path;

use cosmic_scales::engine::ScaleEngine;
use cosmic_scales::options::Options;
use cosmic_scales::scale::ScaleCatalog;
use cosmic_scales::util::FrameTiming;
use cosmic_scales::ScalesError;

const TARGET_FPS: u32 = 60;

struct RunnerApp {
    engine: ScaleEngine,
    options: Options,
    timing: FrameTiming,
    last_primary: Option<usize>,
}

impl RunnerApp {
    fn new(catalog_path: &str, options_path: Option<&str>) -> Result<Self, ScalesError> {
        let mut options = match options_path {
            Some(path) => Options::load(Path::new(path))?,
            None => Options::default(),
        };
        let catalog = ScaleCatalog::load(Path::new(catalog_path))?;
        if let Some(duration) = catalog.transition_duration {
            options.animation.transition_duration = duration;
        }
        let engine = ScaleEngine::new(catalog.into_sequence()?, &options);

        Ok(Self {
            engine,
            options,
            timing: FrameTiming::new(TARGET_FPS),
            last_primary: None,
        })
    }

    /// Advance one frame and return its length in seconds.
    fn frame(&mut self) -> f32 {
        let dt = self.timing.end_frame();
        self.engine.update(dt);

        let info = self.engine.render_info(&self.options.display);
        let primary = info.primary_index();
        if primary != self.last_primary {
            if let Some(scale) = primary.and_then(|i| self.engine.scales().get(i)) {
                log::info!(
                    "{} ({}), grid {}",
                    scale.name,
                    scale.size_label,
                    info.grid_label
                );
            }
            self.last_primary = primary;
        }
        dt
    }

    fn run(&mut self, seconds: Option<f32>) {
        self.engine.play();
        let mut elapsed = 0.0;
        loop {
            if !self.timing.should_render() {
                std::thread::sleep(self.timing.until_next_frame());
                continue;
            }
            elapsed += self.frame();

            let done = seconds.map_or_else(
                || !self.engine.is_playing() && !self.engine.is_transitioning(),
                |limit| elapsed >= limit,
            );
            if done {
                break;
            }
        }
        log::info!(
            "Stopped at scale {} ({:.0} fps)",
            self.engine.current_index(),
            self.timing.fps()
        );
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(catalog_path) = args.first() else {
        log::error!("Usage: cosmic-scales <catalog.json> [options.toml] [seconds]");
        std::process::exit(1);
    };

    let (options_path, seconds) = match args.get(1) {
        Some(arg) => match arg.parse::<f32>() {
            Ok(secs) => (None, Some(secs)),
            Err(_) => (Some(arg.as_str()), args.get(2).and_then(|s| s.parse().ok())),
        },
        None => (None, None),
    };

    let mut app = match RunnerApp::new(catalog_path, options_path) {
        Ok(app) => app,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    app.run(seconds);
}
