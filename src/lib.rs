//! Dino Jump - A side-scrolling jump-over-the-obstacles arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, game state)
//! - `renderer`: Draw command stream and the SDL2 backend that executes it
//! - `platform`: Input, frame clock and render surface capabilities
//! - `app`: The synchronous frame loop tying the above together
//! - `tuning`: Data-driven game balance

pub mod app;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use highscores::HighScores;
pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions (pixels)
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 300.0;

    /// Target frame rate; the simulation advances one step per frame
    pub const TARGET_FPS: u32 = 60;

    /// Top of the ground band
    pub const GROUND_Y: f32 = FIELD_HEIGHT - 50.0;

    /// Player defaults
    pub const DINO_X: f32 = 50.0;
    pub const DINO_WIDTH: f32 = 44.0;
    pub const DINO_HEIGHT: f32 = 44.0;

    /// Obstacles are dropped once their right edge is this far past x = 0
    pub const CULL_MARGIN: f32 = 50.0;

    /// Leg and wing animations both cycle over this many frames
    pub const ANIMATION_PERIOD: u32 = 20;

    /// Ground scroll offset wraps at this width
    pub const GROUND_TICK_SPACING: f32 = 40.0;
}
