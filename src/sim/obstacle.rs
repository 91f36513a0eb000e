//! Obstacles and the procedural generator that spawns, scrolls and culls them

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Cactus-like block standing on the ground
    Ground,
    /// Bird flying at one of the altitude bands
    Flying,
}

/// An obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left corner; y never changes after spawn
    pub pos: Vec2,
    pub size: Vec2,
    /// Scroll speed, overwritten from the global speed every frame
    pub speed: f32,
    /// Animation phase (wing flap for flying obstacles)
    pub phase: u32,
}

impl Obstacle {
    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    /// Whether the obstacle has scrolled fully past the left margin
    #[inline]
    pub fn off_screen(&self) -> bool {
        self.right() < -CULL_MARGIN
    }

    /// Scroll left by `speed` and advance the animation
    pub fn advance(&mut self, speed: f32) {
        self.speed = speed;
        self.pos.x -= self.speed;
        match self.kind {
            ObstacleKind::Flying => self.phase = (self.phase + 1) % ANIMATION_PERIOD,
            ObstacleKind::Ground => {}
        }
    }
}

/// Scroll every obstacle by the current global speed
pub fn advance(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.advance(speed);
    }
}

/// Drop obstacles that left the field; keeps the order of the rest
pub fn cull(obstacles: &mut Vec<Obstacle>) {
    obstacles.retain(|o| !o.off_screen());
}

/// Procedural obstacle spawner
///
/// Owns the seeded RNG and the running spawn threshold: how far the field
/// must scroll after a spawn before the next one. The threshold and the
/// distance scrolled live here, not on any obstacle, so culling never
/// disturbs spawn timing.
#[derive(Debug, Clone)]
pub struct ObstacleGenerator {
    rng: Pcg32,
    tuning: Tuning,
    /// Scroll distance required between the last spawn and the next
    threshold: f32,
    /// Distance scrolled since the last spawn
    scrolled: f32,
    /// Gap drawn for the next spawn
    pending_gap: u32,
    /// No obstacle spawned yet this run; the armed threshold is the initial one
    fresh_run: bool,
}

impl ObstacleGenerator {
    /// Create a generator with its own seeded RNG
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let mut generator = Self {
            rng: Pcg32::seed_from_u64(seed),
            tuning: tuning.clone(),
            threshold: 0.0,
            scrolled: 0.0,
            pending_gap: 0,
            fresh_run: true,
        };
        generator.reset();
        generator
    }

    /// Re-arm for a fresh run. The RNG stream continues.
    pub fn reset(&mut self) {
        let offset = self
            .rng
            .random_range(self.tuning.initial_threshold_min..=self.tuning.initial_threshold_max);
        self.threshold = offset as f32;
        self.scrolled = 0.0;
        self.pending_gap = self.draw_gap();
        self.fresh_run = true;
    }

    /// Scroll distance the next spawn waits for
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Distance scrolled since the last spawn
    pub fn scrolled(&self) -> f32 {
        self.scrolled
    }

    /// X position the next obstacle will spawn at
    pub fn pending_spawn_x(&self) -> f32 {
        self.tuning.field_width + self.pending_gap as f32 / 2.0
    }

    fn draw_gap(&mut self) -> u32 {
        self.rng.random_range(self.tuning.min_gap..=self.tuning.max_gap)
    }

    /// Whether a spawn should happen this frame.
    ///
    /// The threshold sets the spacing; `min_gap` is only a floor under it.
    pub fn is_due(&self, obstacles: &[Obstacle]) -> bool {
        match obstacles.last() {
            None => true,
            Some(last) => {
                self.scrolled >= self.threshold
                    && self.pending_spawn_x() - last.pos.x >= self.tuning.min_gap as f32
            }
        }
    }

    /// Account for one frame of scrolling at `speed`, then spawn one
    /// obstacle if due. Returns true when one was added.
    pub fn spawn_if_due(&mut self, obstacles: &mut Vec<Obstacle>, speed: f32) -> bool {
        self.scrolled += speed;
        if !self.is_due(obstacles) {
            return false;
        }

        let x = self.pending_spawn_x();
        let obstacle = self.create(x, speed);

        // The threshold armed by reset() times the gap after a run's first obstacle
        if self.fresh_run {
            self.fresh_run = false;
        } else {
            let offset = self
                .rng
                .random_range(self.tuning.spawn_threshold_min..=self.tuning.spawn_threshold_max);
            self.threshold = offset as f32;
        }
        self.scrolled = 0.0;
        self.pending_gap = self.draw_gap();

        log::debug!(
            "Spawned {:?} at x={:.0} size={}x{} (next after {:.0}px)",
            obstacle.kind,
            obstacle.pos.x,
            obstacle.size.x,
            obstacle.size.y,
            self.threshold
        );
        obstacles.push(obstacle);
        true
    }

    fn pick_kind(&mut self) -> ObstacleKind {
        let total = self.tuning.ground_weight + self.tuning.flying_weight;
        if self.rng.random_range(0..total) < self.tuning.ground_weight {
            ObstacleKind::Ground
        } else {
            ObstacleKind::Flying
        }
    }

    /// Build an obstacle of a randomly chosen kind at `x`
    fn create(&mut self, x: f32, speed: f32) -> Obstacle {
        let kind = self.pick_kind();
        let ground_y = self.tuning.ground_y;

        let (size, y) = match kind {
            ObstacleKind::Ground => {
                let w = pick(&mut self.rng, &self.tuning.ground_widths);
                let h = pick(&mut self.rng, &self.tuning.ground_heights);
                (Vec2::new(w, h), ground_y - h)
            }
            ObstacleKind::Flying => {
                let altitude = pick(&mut self.rng, &self.tuning.flying_altitudes);
                (
                    Vec2::new(self.tuning.flying_width, self.tuning.flying_height),
                    ground_y - altitude,
                )
            }
        };

        debug_assert!(size.x > 0.0 && size.y > 0.0);

        Obstacle {
            kind,
            pos: Vec2::new(x, y),
            size,
            speed,
            phase: 0,
        }
    }
}

/// Uniform choice from a non-empty option list
fn pick(rng: &mut Pcg32, options: &[f32]) -> f32 {
    options[rng.random_range(0..options.len())]
}
