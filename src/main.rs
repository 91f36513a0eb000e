//! Dino Jump entry point
//!
//! Sets up logging, settings and the SDL2 window, then runs the frame loop.

use anyhow::{Context, Result};
use clap::Parser;

use dino_jump::Settings;
use dino_jump::app::App;
use dino_jump::consts::FIELD_HEIGHT;
use dino_jump::platform::{FixedClock, RecordingSurface, ScriptedInput, SdlInput, SleepClock};
use dino_jump::renderer::{Fonts, SdlCanvas};
use dino_jump::settings::LaunchArgs;
use dino_jump::sim::GameState;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = LaunchArgs::parse();
    let settings = Settings::load(args.config.as_deref())?;

    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or_else(rand::random::<u64>);
    log::info!("Dino Jump starting with seed {}", seed);

    let state = GameState::new(seed, settings.tuning.clone());

    match args.headless {
        Some(frames) => run_headless(state, &settings, frames),
        None => run_windowed(state, &settings),
    }
}

/// Simulate without a window and print the final frame as JSON
fn run_headless(state: GameState, settings: &Settings, frames: u64) -> Result<()> {
    let mut app = App::new(
        state,
        ScriptedInput::idle(),
        FixedClock::new(settings.target_fps),
        RecordingSurface::new(),
        settings.show_fps,
    )
    .with_restart_hint(settings.restart_hint.as_str());
    app.run(Some(frames))?;

    log::info!(
        "Headless run finished: score {}, best {}, {:?}",
        app.state.score,
        app.state.high_score,
        app.state.phase
    );
    let json = serde_json::to_string_pretty(&app.surface().last_frame)
        .context("failed to serialize frame")?;
    println!("{json}");
    Ok(())
}

fn run_windowed(state: GameState, settings: &Settings) -> Result<()> {
    let sdl = sdl2::init()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize SDL")?;
    let video = sdl
        .video()
        .map_err(anyhow::Error::msg)
        .context("failed to initialize SDL video")?;

    let width = state.tuning.field_width as u32;
    let window = video
        .window(&settings.window_title, width, FIELD_HEIGHT as u32)
        .position_centered()
        .build()
        .context("failed to create window")?;

    let mut builder = window.into_canvas().accelerated();
    if settings.vsync {
        builder = builder.present_vsync();
    }
    let canvas = builder.build().context("failed to create canvas")?;

    let ttf = sdl2::ttf::init().map_err(anyhow::Error::msg).context("failed to initialize SDL_ttf")?;
    let fonts = Fonts::load(
        &ttf,
        settings.font_path.as_deref(),
        settings.font_size,
        settings.large_font_size,
    );

    let pump = sdl
        .event_pump()
        .map_err(anyhow::Error::msg)
        .context("failed to get event pump")?;

    log::info!("Window {}x{} at {} FPS", width, FIELD_HEIGHT, settings.target_fps);

    let mut app = App::new(
        state,
        SdlInput::new(pump),
        SleepClock::new(settings.target_fps),
        SdlCanvas::new(canvas, fonts),
        settings.show_fps,
    )
    .with_restart_hint(settings.restart_hint.as_str());
    app.run(None)?;
    Ok(())
}
