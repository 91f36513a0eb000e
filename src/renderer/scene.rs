//! Shape generation for a full frame
//!
//! Pure functions from simulation state to draw commands. Nothing here
//! touches a window, so frames can be inspected headlessly.

use glam::Vec2;

use super::commands::{Anchor, DrawCommand, TextSize, colors};
use crate::consts::*;
use crate::sim::{GameState, Obstacle, ObstacleKind, Player};

/// Overlay text shown on the GameOver screen
pub const GAME_OVER_TITLE: &str = "GAME OVER";
pub const GAME_OVER_HINT: &str = "Press R to restart  \u{2022}  Esc to quit";

/// Values shown on the HUD that don't come from the simulation
#[derive(Debug, Clone, Copy)]
pub struct HudInfo<'a> {
    /// Frames per second readout, if enabled
    pub fps: Option<u32>,
    /// Line under the game-over title
    pub restart_hint: &'a str,
}

impl Default for HudInfo<'_> {
    fn default() -> Self {
        Self {
            fps: None,
            restart_hint: GAME_OVER_HINT,
        }
    }
}

/// Build every draw command for the current frame, back to front
pub fn build_frame(state: &GameState, hud: &HudInfo) -> Vec<DrawCommand> {
    let width = state.tuning.field_width;
    let mut frame = Vec::with_capacity(32 + state.obstacles.len() * 3);

    frame.push(DrawCommand::rect(0.0, 0.0, width, FIELD_HEIGHT, colors::BACKGROUND));
    ground(&mut frame, width, state.tuning.ground_y, state.ground_offset);

    for obstacle in &state.obstacles {
        obstacle_shapes(&mut frame, obstacle);
    }
    player_shapes(&mut frame, &state.player);

    hud_text(&mut frame, state, hud, width);
    if state.is_game_over() {
        game_over_overlay(&mut frame, width, hud.restart_hint);
    }

    frame
}

/// Ground band plus ticks that scroll with the offset
fn ground(frame: &mut Vec<DrawCommand>, width: f32, ground_y: f32, offset: f32) {
    frame.push(DrawCommand::rect(
        0.0,
        ground_y,
        width,
        FIELD_HEIGHT - ground_y,
        colors::GROUND,
    ));

    let count = (width / GROUND_TICK_SPACING) as i32;
    for i in -1..=count {
        let x = i as f32 * GROUND_TICK_SPACING + offset;
        frame.push(DrawCommand::rect(x, ground_y + 30.0, 6.0, 6.0, colors::GROUND_TICK));
    }
}

fn obstacle_shapes(frame: &mut Vec<DrawCommand>, obstacle: &Obstacle) {
    let Vec2 { x, y } = obstacle.pos;
    let Vec2 { x: w, y: h } = obstacle.size;
    let color = colors::OBSTACLE;

    match obstacle.kind {
        ObstacleKind::Ground => {
            frame.push(DrawCommand::rounded_rect(x, y, w, h, 4.0, color));
            // Arms
            frame.push(DrawCommand::rect(x - 3.0, y + 8.0, 6.0, 6.0, color));
            frame.push(DrawCommand::rect(x + w - 3.0, y + 14.0, 6.0, 6.0, color));
        }
        ObstacleKind::Flying => {
            frame.push(DrawCommand::rounded_rect(x, y, w, h, 6.0, color));
            // Wing flaps between the left and right side of the body
            let points = if obstacle.phase < ANIMATION_PERIOD / 2 {
                vec![
                    Vec2::new(x + 6.0, y + 6.0),
                    Vec2::new(x - 6.0, y + 12.0),
                    Vec2::new(x + 6.0, y + 18.0),
                ]
            } else {
                vec![
                    Vec2::new(x + 28.0, y + 6.0),
                    Vec2::new(x + 40.0, y + 12.0),
                    Vec2::new(x + 28.0, y + 18.0),
                ]
            };
            frame.push(DrawCommand::Polygon { points, color });
        }
    }
}

fn player_shapes(frame: &mut Vec<DrawCommand>, player: &Player) {
    let Vec2 { x, y } = player.pos;
    let Vec2 { x: w, y: h } = player.size;
    let color = colors::DINO;

    frame.push(DrawCommand::rounded_rect(x, y, w, h, 6.0, color));

    let eye_x = x + (w * 0.7).floor();
    let eye_y = y + h * 0.25;
    frame.push(DrawCommand::circle(eye_x, eye_y, 4.0, colors::EYE));
    frame.push(DrawCommand::circle(eye_x, eye_y, 2.0, colors::PUPIL));

    let feet = y + h;
    if !player.grounded {
        // Tucked
        frame.push(DrawCommand::rect(x + 18.0, feet - 6.0, 10.0, 6.0, color));
    } else if player.step < ANIMATION_PERIOD / 2 {
        frame.push(DrawCommand::rect(x + 6.0, feet, 10.0, 6.0, color));
        frame.push(DrawCommand::rect(x + 28.0, feet, 12.0, 10.0, color));
    } else {
        frame.push(DrawCommand::rect(x + 6.0, feet, 12.0, 10.0, color));
        frame.push(DrawCommand::rect(x + 28.0, feet, 10.0, 6.0, color));
    }
}

fn hud_text(frame: &mut Vec<DrawCommand>, state: &GameState, hud: &HudInfo, width: f32) {
    frame.push(DrawCommand::text(
        format!("Score: {}", state.score),
        width - 150.0,
        10.0,
        TextSize::Normal,
        Anchor::TopLeft,
    ));
    frame.push(DrawCommand::text(
        format!("High: {}", state.high_score),
        width - 150.0,
        32.0,
        TextSize::Normal,
        Anchor::TopLeft,
    ));
    if let Some(fps) = hud.fps {
        frame.push(DrawCommand::text(
            format!("FPS: {fps}"),
            10.0,
            10.0,
            TextSize::Normal,
            Anchor::TopLeft,
        ));
    }
}

fn game_over_overlay(frame: &mut Vec<DrawCommand>, width: f32, hint: &str) {
    let cx = width / 2.0;
    let cy = FIELD_HEIGHT / 2.0;
    frame.push(DrawCommand::text(
        GAME_OVER_TITLE,
        cx,
        cy - 10.0,
        TextSize::Large,
        Anchor::Center,
    ));
    frame.push(DrawCommand::text(
        hint,
        cx,
        cy + 30.0,
        TextSize::Normal,
        Anchor::Center,
    ));
}
