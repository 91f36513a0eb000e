//! Windowless implementations of the platform capabilities

use std::collections::VecDeque;

use anyhow::Result;

use super::{FrameClock, InputEvent, InputSource, RenderSurface};
use crate::renderer::DrawCommand;

/// Replays a fixed list of per-frame event batches, then stays silent
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// No input at all
    pub fn idle() -> Self {
        Self::default()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frames.pop_front().unwrap_or_default()
    }
}

/// Reports a constant frame time without sleeping
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: f32,
}

impl FixedClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            dt: 1.0 / target_fps.max(1) as f32,
        }
    }
}

impl FrameClock for FixedClock {
    fn tick(&mut self) -> f32 {
        self.dt
    }
}

/// Keeps the most recent frame so it can be inspected or dumped
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub last_frame: Vec<DrawCommand>,
    pub frames_drawn: u64,
    pub frames_presented: u64,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSurface for RecordingSurface {
    fn draw(&mut self, frame: &[DrawCommand]) -> Result<()> {
        self.last_frame = frame.to_vec();
        self.frames_drawn += 1;
        Ok(())
    }

    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
