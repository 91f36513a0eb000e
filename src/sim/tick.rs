//! Per-frame simulation step
//!
//! One call advances the game by exactly one frame. The order inside a
//! Playing frame is fixed: physics, obstacle scroll + cull, spawn check,
//! collision, score/speed, ground scroll.

use super::collision::first_collision;
use super::obstacle;
use super::scoring::compute_speed;
use super::state::{GamePhase, GameState};
use crate::consts::GROUND_TICK_SPACING;

/// Semantic input for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Jump (only honoured while Playing)
    pub jump: bool,
    /// Restart (only honoured during GameOver)
    pub restart: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::GameOver => {
            if input.restart {
                let previous = state.score;
                state.restart();
                log::info!(
                    "Run {} started (last score {}, best {})",
                    state.run,
                    previous,
                    state.high_score
                );
            }
            // Frozen otherwise: only rendering continues
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Physics
    if input.jump {
        state.player.jump(&state.tuning);
    }
    state.player.update(&state.tuning);

    // Scroll, cull, spawn
    obstacle::advance(&mut state.obstacles, state.speed);
    obstacle::cull(&mut state.obstacles);
    state.generator.spawn_if_due(&mut state.obstacles, state.speed);

    // Collision against post-movement positions
    let hit = first_collision(&state.player, &state.obstacles);

    // The colliding frame still counts as played
    state.score += 1;
    state.speed = compute_speed(state.score, &state.tuning);

    state.ground_offset = (state.ground_offset - state.speed).rem_euclid(GROUND_TICK_SPACING);

    if let Some(index) = hit {
        // Folded after this frame's +1 so the frozen HUD shows score == best on a new record
        state.end_run();
        log::info!(
            "Game over: hit {:?} obstacle {} at frame {}, score {} (best {})",
            state.obstacles[index].kind,
            index,
            state.time_ticks,
            state.score,
            state.high_score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Obstacle, ObstacleKind};
    use crate::tuning::Tuning;
    use glam::Vec2;

    /// A fresh game with one far-off obstacle parked at the end of the list,
    /// so the spawn check never fires and the field near the player stays empty
    fn empty_field_state() -> GameState {
        let mut state = GameState::new(1, Tuning::default());
        park_far_obstacle(&mut state);
        state
    }

    fn park_far_obstacle(state: &mut GameState) {
        state.obstacles.clear();
        state.obstacles.push(Obstacle {
            kind: ObstacleKind::Ground,
            pos: Vec2::new(1.0e7, state.tuning.ground_y - 30.0),
            size: Vec2::new(20.0, 30.0),
            speed: state.speed,
            phase: 0,
        });
    }

    /// Put a tall cactus ahead of the parked obstacle (keeps spawn order)
    fn cactus_in_front(state: &mut GameState, x: f32) {
        let h = 45.0;
        let cactus = Obstacle {
            kind: ObstacleKind::Ground,
            pos: Vec2::new(x, state.tuning.ground_y - h),
            size: Vec2::new(30.0, h),
            speed: state.speed,
            phase: 0,
        };
        state.obstacles.insert(0, cactus);
    }

    #[test]
    fn test_score_and_speed_step_after_increment_every_frames() {
        let mut state = empty_field_state();
        let every = state.tuning.speed_increment_every;
        let input = TickInput::default();

        for _ in 0..every {
            tick(&mut state, &input);
            assert_eq!(state.phase, GamePhase::Playing);
        }

        assert_eq!(state.score, every);
        assert_eq!(
            state.speed,
            state.tuning.base_speed + state.tuning.speed_increment_amount
        );
    }

    #[test]
    fn test_obstacle_speed_tracks_global_speed() {
        let mut state = GameState::new(3, Tuning::default());
        let input = TickInput::default();

        for _ in 0..250 {
            let speed_before = state.speed;
            tick(&mut state, &input);
            if state.is_game_over() {
                state.restart();
                continue;
            }
            for o in &state.obstacles {
                assert_eq!(o.speed, speed_before);
            }
        }
    }

    #[test]
    fn test_collision_ends_run_and_freezes() {
        let mut state = empty_field_state();
        cactus_in_front(&mut state, 80.0);

        tick(&mut state, &TickInput::default());
        assert_eq!(state.phase, GamePhase::GameOver);
        // The colliding frame is still scored, and the best matches it
        assert_eq!(state.score, 1);
        assert_eq!(state.high_score, state.score);

        let frozen_x: Vec<f32> = state.obstacles.iter().map(|o| o.pos.x).collect();
        let frozen_player = state.player.clone();
        for _ in 0..10 {
            tick(
                &mut state,
                &TickInput {
                    jump: true,
                    ..Default::default()
                },
            );
        }
        assert_eq!(state.score, 1);
        assert_eq!(state.player, frozen_player);
        let xs: Vec<f32> = state.obstacles.iter().map(|o| o.pos.x).collect();
        assert_eq!(xs, frozen_x);
    }

    #[test]
    fn test_restart_ignored_while_playing() {
        let mut state = empty_field_state();
        tick(&mut state, &TickInput::default());
        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );
        assert_eq!(state.score, 2);
        assert_eq!(state.run, 1);
    }

    #[test]
    fn test_restart_from_game_over() {
        let mut state = empty_field_state();
        state.phase = GamePhase::GameOver;
        state.score = 537;
        state.high_score = 0;

        tick(
            &mut state,
            &TickInput {
                restart: true,
                ..Default::default()
            },
        );

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.high_score, 537);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.speed, state.tuning.base_speed);

        // Next frame still runs at base speed
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score, 1);
        assert_eq!(state.speed, state.tuning.base_speed);
    }

    #[test]
    fn test_jump_clears_obstacle() {
        let mut state = empty_field_state();
        // Lands under the player's arc: airborne from frame 1 to ~35
        cactus_in_front(&mut state, 200.0);

        let mut input = TickInput {
            jump: true,
            ..Default::default()
        };
        for _ in 0..60 {
            tick(&mut state, &input);
            input.jump = false;
            assert_eq!(state.phase, GamePhase::Playing);
        }
        assert!(state.player.grounded);
    }

    #[test]
    fn test_offscreen_obstacle_culled_next_update() {
        let mut state = empty_field_state();
        // Already past the margin, then a visible one behind it
        state.obstacles.insert(
            0,
            Obstacle {
                kind: ObstacleKind::Ground,
                pos: Vec2::new(-75.0, state.tuning.ground_y - 30.0),
                size: Vec2::new(20.0, 30.0),
                speed: state.speed,
                phase: 0,
            },
        );
        state.obstacles.insert(
            1,
            Obstacle {
                kind: ObstacleKind::Flying,
                pos: Vec2::new(400.0, state.tuning.ground_y - 140.0),
                size: Vec2::new(34.0, 24.0),
                speed: state.speed,
                phase: 0,
            },
        );

        tick(&mut state, &TickInput::default());

        let kinds: Vec<ObstacleKind> = state.obstacles.iter().map(|o| o.kind).collect();
        assert_eq!(kinds, vec![ObstacleKind::Flying, ObstacleKind::Ground]);
        assert!(state.obstacles.iter().all(|o| o.right() >= -50.0));
    }

    #[test]
    fn test_ground_offset_wraps() {
        let mut state = empty_field_state();
        for _ in 0..500 {
            tick(&mut state, &TickInput::default());
            assert!(state.ground_offset >= 0.0 && state.ground_offset < GROUND_TICK_SPACING);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = GameState::new(2024, Tuning::default());
        let mut b = GameState::new(2024, Tuning::default());

        for frame in 0..2000u32 {
            let input = TickInput {
                jump: frame % 45 == 0,
                restart: true,
            };
            tick(&mut a, &input);
            tick(&mut b, &input);
        }

        assert_eq!(a.score, b.score);
        assert_eq!(a.high_score, b.high_score);
        assert_eq!(a.run, b.run);
        assert_eq!(a.obstacles, b.obstacles);
        assert_eq!(a.player, b.player);
    }
}
