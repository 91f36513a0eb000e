//! Player entity and its vertical physics

use glam::Vec2;

use crate::consts::*;
use crate::tuning::Tuning;

/// The player-controlled dinosaur
///
/// Only `pos.y` moves; x stays pinned at `DINO_X`.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (pixels/frame, negative is up)
    pub vel_y: f32,
    pub grounded: bool,
    /// Leg animation counter, cycles while grounded, 0 while airborne
    pub step: u32,
}

impl Player {
    /// A player standing on the ground
    pub fn new(ground_y: f32) -> Self {
        Self {
            pos: Vec2::new(DINO_X, ground_y - DINO_HEIGHT),
            size: Vec2::new(DINO_WIDTH, DINO_HEIGHT),
            vel_y: 0.0,
            grounded: true,
            step: 0,
        }
    }

    /// Bottom edge (feet)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Start a jump. No-op while airborne (no double jump).
    pub fn jump(&mut self, tuning: &Tuning) {
        if self.grounded {
            self.vel_y = tuning.jump_velocity;
            self.grounded = false;
        }
    }

    /// Integrate one frame of gravity and clamp to the ground
    pub fn update(&mut self, tuning: &Tuning) {
        self.vel_y += tuning.gravity;
        self.pos.y += self.vel_y;

        let rest_y = tuning.ground_y - self.size.y;
        if self.pos.y >= rest_y {
            self.pos.y = rest_y;
            self.vel_y = 0.0;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        if self.grounded {
            self.step = (self.step + 1) % ANIMATION_PERIOD;
        } else {
            self.step = 0;
        }

        debug_assert!(self.bottom() <= tuning.ground_y);
    }
}
