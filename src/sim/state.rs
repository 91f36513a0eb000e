//! Game state and core simulation types
//!
//! Everything a frame needs lives here; the tick only transforms it.

use serde::{Deserialize, Serialize};

use super::obstacle::{Obstacle, ObstacleGenerator};
use super::player::Player;
use super::scoring::{compute_speed, fold_high_score};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; frozen until restart
    GameOver,
}

/// Complete game state for one process lifetime
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the generator was created with
    pub seed: u64,
    /// Gameplay balance shared by all subsystems
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Frames survived this run
    pub score: u64,
    /// Best score since the process started
    pub high_score: u64,
    /// Global scroll speed, derived from score
    pub speed: f32,
    /// Cosmetic ground scroll offset, wraps into [0, GROUND_TICK_SPACING)
    pub ground_offset: f32,
    /// Number of runs started (1 for the first)
    pub run: u32,
    /// Frames simulated this run
    pub time_ticks: u64,
    pub player: Player,
    /// Active obstacles in spawn order (= left to right)
    pub obstacles: Vec<Obstacle>,
    pub generator: ObstacleGenerator,
}

impl GameState {
    /// Create a new game with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        let generator = ObstacleGenerator::new(seed, &tuning);
        Self {
            seed,
            phase: GamePhase::Playing,
            score: 0,
            high_score: 0,
            speed: compute_speed(0, &tuning),
            ground_offset: 0.0,
            run: 1,
            time_ticks: 0,
            player: Player::new(tuning.ground_y),
            obstacles: Vec::new(),
            generator,
            tuning,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Enter GameOver and fold the score into the high score
    pub fn end_run(&mut self) {
        self.phase = GamePhase::GameOver;
        self.high_score = fold_high_score(self.high_score, self.score);
    }

    /// Start a fresh run. Only the high score carries over.
    pub fn restart(&mut self) {
        self.high_score = fold_high_score(self.high_score, self.score);
        self.phase = GamePhase::Playing;
        self.score = 0;
        self.speed = compute_speed(0, &self.tuning);
        self.ground_offset = 0.0;
        self.time_ticks = 0;
        self.run += 1;
        self.player = Player::new(self.tuning.ground_y);
        self.obstacles.clear();
        self.generator.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_starts_playing() {
        let state = GameState::new(1, Tuning::default());
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, state.tuning.base_speed);
        assert!(state.obstacles.is_empty());
        assert!(state.player.grounded);
    }

    #[test]
    fn test_end_run_updates_high_score() {
        let mut state = GameState::new(1, Tuning::default());
        state.score = 250;
        state.end_run();
        assert!(state.is_game_over());
        assert_eq!(state.high_score, 250);

        state.restart();
        state.score = 100;
        state.end_run();
        assert_eq!(state.high_score, 250);
    }

    #[test]
    fn test_restart_resets_run_and_keeps_high_score() {
        let mut state = GameState::new(1, Tuning::default());
        state.phase = GamePhase::GameOver;
        state.score = 537;
        state.high_score = 0;
        state.speed = 8.5;
        state.player.pos.y -= 40.0;
        state.player.grounded = false;
        state.generator.spawn_if_due(&mut state.obstacles, 8.5);

        state.restart();

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 537);
        assert_eq!(state.speed, state.tuning.base_speed);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.player, Player::new(state.tuning.ground_y));
        assert_eq!(state.run, 2);
    }
}
