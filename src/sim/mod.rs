//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock input
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod obstacle;
pub mod player;
pub mod scoring;
pub mod state;
pub mod tick;

pub use collision::{Aabb, check_collision, first_collision};
pub use obstacle::{Obstacle, ObstacleGenerator, ObstacleKind, advance, cull};
pub use player::Player;
pub use scoring::{compute_speed, fold_high_score};
pub use state::{GamePhase, GameState};
pub use tick::{TickInput, tick};
