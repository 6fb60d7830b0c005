//! Droplets: two tiny arcade games on macroquad
//!
//! - Catch the Droplets: move the bucket (arrows, A/D, pointer or gamepad)
//!   to intercept droplets falling from the top of an 8x5 world
//! - Endless runner: skeleton screen, background only
//!
//! Which one runs, and every tunable, comes from `assets/droplets.ron`.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod assets;
mod audio;
mod config;
mod game;
mod input;
mod render;
mod screen;

use std::path::Path;
use macroquad::prelude::*;
use assets::Assets;
use config::{ConfigSource, GameConfig, GameKind, DEFAULT_CONFIG_PATH};
use input::{Action, FrameInput, InputState};
use screen::{DropletsScreen, RunnerScreen, Screen};

lazy_static::lazy_static! {
    /// Read once, before `main`: the window needs it before logging is up
    static ref CONFIG: (GameConfig, ConfigSource) =
        GameConfig::load_or_default(Path::new(DEFAULT_CONFIG_PATH));
}

fn window_conf() -> Conf {
    let (config, _) = &*CONFIG;
    Conf {
        window_title: format!("{} v{}", config.window.title, VERSION),
        window_width: config.window.width,
        window_height: config.window.height,
        window_resizable: true,
        ..Default::default()
    }
}

fn init_logging() {
    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    init_logging();

    let (config, source) = &*CONFIG;
    let config_path = Path::new(DEFAULT_CONFIG_PATH);
    source.log(config_path);

    // Leave an editable copy of the defaults behind
    #[cfg(not(target_arch = "wasm32"))]
    if *source == ConfigSource::Defaults {
        match config.save(config_path) {
            Ok(()) => log::info!("wrote default config to {}", config_path.display()),
            Err(e) => log::warn!("could not write {}: {}", config_path.display(), e),
        }
    }

    macroquad::rand::srand(macroquad::miniquad::date::now() as u64);

    let assets = match Assets::load(&config.assets).await {
        Ok(assets) => assets,
        Err(e) => {
            log::error!("{}", e);
            return;
        }
    };

    let mut screen: Box<dyn Screen> = match config.game {
        GameKind::Droplets => Box::new(DropletsScreen::new(config, assets)),
        GameKind::Runner => Box::new(RunnerScreen::new(config, assets)),
    };

    let mut input = InputState::new();
    if input.has_gamepad() {
        log::info!("gamepad connected");
    }

    // Route the window close button through the same shutdown path as Escape
    prevent_quit();

    log::info!("=== Droplets v{} ({:?}) ===", VERSION, config.game);
    screen.show();

    let mut window_size = (0, 0);
    let mut paused = false;

    loop {
        input.poll();

        let size = (screen_width() as i32, screen_height() as i32);
        if size != window_size {
            window_size = size;
            screen.resize(size.0, size.1);
        }

        if input.action_pressed(Action::Quit) || is_quit_requested() {
            break;
        }

        if input.action_pressed(Action::Pause) {
            paused = !paused;
            if paused {
                screen.pause();
            } else {
                screen.resume();
            }
        }

        // Paused screens keep drawing but don't advance
        if paused {
            screen.render(0.0, &FrameInput::default());
        } else {
            screen.render(get_frame_time(), &input.frame_input());
        }

        next_frame().await;
    }

    screen.hide();
    screen.dispose();
}
