//! Platform abstraction layer
//!
//! The simulation consumes three capabilities from its host:
//! - Input events (jump / restart / exit)
//! - A frame clock that paces the loop
//! - A surface that presents draw commands
//!
//! SDL2 provides the windowed implementations; `headless` provides
//! scripted ones for tests and `--headless` runs.

pub mod headless;
pub mod input;
pub mod time;

pub use headless::{FixedClock, RecordingSurface, ScriptedInput};
pub use input::SdlInput;
pub use time::{FpsCounter, SleepClock};

use anyhow::Result;

use crate::renderer::DrawCommand;

/// Semantic input signals; raw key codes never reach the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Jump,
    Restart,
    Exit,
}

/// Source of per-frame input events
pub trait InputSource {
    /// Drain every event that arrived since the last poll
    fn poll(&mut self) -> Vec<InputEvent>;
}

/// Paces the frame loop
pub trait FrameClock {
    /// Wait toward the target frame rate and return elapsed seconds
    fn tick(&mut self) -> f32;
}

/// Something that can present a frame of draw commands
pub trait RenderSurface {
    fn draw(&mut self, frame: &[DrawCommand]) -> Result<()>;
    fn present(&mut self);
}
