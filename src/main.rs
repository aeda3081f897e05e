//! Dark Blue entry point
//!
//! On the web, parses the configured level and draws it into the page.
//! Natively, parses a plan file (or every built-in level) and reports it.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    use dark_blue::levels::BUILTIN_LEVELS;
    use dark_blue::renderer::DomDisplay;
    use dark_blue::sim::{GameState, Level};
    use dark_blue::{Settings, run_seed};

    pub fn run() {
        console_error_panic_hook::set_once();
        let settings = Settings::load();
        console_log::init_with_level(settings.log_level()).expect("Failed to init logger");

        log::info!("Dark Blue starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let body = document.body().expect("no body");

        let (name, plan) = match BUILTIN_LEVELS.get(settings.level) {
            Some(entry) => *entry,
            None => {
                log::warn!("No level {}, starting at level 0", settings.level);
                BUILTIN_LEVELS[0]
            }
        };

        let seed = run_seed(&settings);
        let mut rng = Pcg32::seed_from_u64(seed);
        log::info!("Level '{}' with seed: {}", name, seed);

        let level = match Level::parse(plan, &mut rng) {
            Ok(level) => level,
            Err(e) => {
                log::error!("Level '{}' rejected: {}", name, e);
                return;
            }
        };
        log::info!("{} by {}", level.width, level.height);

        let state = GameState::start(&level);
        let drawn = DomDisplay::new(&document, &body, &level, settings.scale)
            .and_then(|mut display| display.sync_state(&state));
        if let Err(e) = drawn {
            log::error!("Render error: {:?}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use std::process::ExitCode;

    use dark_blue::levels::BUILTIN_LEVELS;
    use dark_blue::sim::Level;
    use dark_blue::{Settings, run_seed};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Dark Blue (native) starting...");

    let settings = Settings::load();
    let seed = run_seed(&settings);
    let mut rng = Pcg32::seed_from_u64(seed);
    log::debug!("Seed: {}", seed);

    let plans: Vec<(String, String)> = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(plan) => vec![(path, plan)],
            Err(e) => {
                log::error!("Could not read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        None => BUILTIN_LEVELS
            .iter()
            .map(|(name, plan)| (name.to_string(), plan.to_string()))
            .collect(),
    };

    for (name, plan) in &plans {
        match Level::parse(plan, &mut rng) {
            Ok(level) => log::info!(
                "{}: {} by {}, {} actors",
                name,
                level.width,
                level.height,
                level.start_actors().len()
            ),
            Err(e) => {
                log::error!("{}: {}", name, e);
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
