//! The frame loop
//!
//! Each frame: tick the clock, sample input to completion, advance the
//! simulation, then draw and present. Everything runs on one thread.

use anyhow::Result;

use crate::highscores::HighScores;
use crate::platform::{FpsCounter, FrameClock, InputEvent, InputSource, RenderSurface};
use crate::renderer::scene::GAME_OVER_HINT;
use crate::renderer::{HudInfo, build_frame};
use crate::sim::{GamePhase, GameState, TickInput, tick};

/// Why the loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Exit signal from the player
    Quit,
    /// Requested number of frames ran (headless runs)
    FrameLimit,
}

/// Fold a frame's events into the simulation's input.
/// Exit is handled by the loop itself and never reaches the simulation.
pub fn tick_input(events: &[InputEvent]) -> TickInput {
    TickInput {
        jump: events.contains(&InputEvent::Jump),
        restart: events.contains(&InputEvent::Restart),
    }
}

/// Game instance holding the simulation and its host capabilities
pub struct App<I, C, S> {
    pub state: GameState,
    pub scores: HighScores,
    input: I,
    clock: C,
    surface: S,
    fps: FpsCounter,
    show_fps: bool,
    restart_hint: String,
    frames: u64,
    last_phase: GamePhase,
}

impl<I, C, S> App<I, C, S>
where
    I: InputSource,
    C: FrameClock,
    S: RenderSurface,
{
    pub fn new(state: GameState, input: I, clock: C, surface: S, show_fps: bool) -> Self {
        let last_phase = state.phase;
        Self {
            state,
            scores: HighScores::new(),
            input,
            clock,
            surface,
            fps: FpsCounter::new(),
            show_fps,
            restart_hint: GAME_OVER_HINT.to_string(),
            frames: 0,
            last_phase,
        }
    }

    /// Replace the line shown under the game-over title
    pub fn with_restart_hint(mut self, hint: impl Into<String>) -> Self {
        self.restart_hint = hint.into();
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. Returns `Some` when the loop should stop.
    pub fn frame(&mut self) -> Result<Option<ExitReason>> {
        let dt = self.clock.tick();
        self.fps.record(dt);

        let events = self.input.poll();
        if events.contains(&InputEvent::Exit) {
            return Ok(Some(ExitReason::Quit));
        }

        tick(&mut self.state, &tick_input(&events));
        self.track_phase();

        let hud = HudInfo {
            fps: self.show_fps.then(|| self.fps.fps()),
            restart_hint: &self.restart_hint,
        };
        let frame = build_frame(&self.state, &hud);
        self.surface.draw(&frame)?;
        self.surface.present();
        self.frames += 1;

        Ok(None)
    }

    /// Loop until the player quits or `max_frames` have been rendered
    pub fn run(&mut self, max_frames: Option<u64>) -> Result<ExitReason> {
        log::info!("Run {} started (seed {})", self.state.run, self.state.seed);
        loop {
            if max_frames.is_some_and(|max| self.frames >= max) {
                return Ok(ExitReason::FrameLimit);
            }
            if let Some(reason) = self.frame()? {
                log::info!(
                    "Exiting after {} frames, best score {}",
                    self.frames,
                    self.state.high_score
                );
                return Ok(reason);
            }
        }
    }

    /// Record finished runs on the session leaderboard
    fn track_phase(&mut self) {
        let phase = self.state.phase;
        if phase != self.last_phase {
            if phase == GamePhase::GameOver {
                if let Some(rank) =
                    self.scores
                        .add_score(self.state.score, self.state.run, self.state.time_ticks)
                {
                    log::info!("Run {} placed #{} this session", self.state.run, rank);
                }
            }
            self.last_phase = phase;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FixedClock, RecordingSurface, ScriptedInput};
    use crate::renderer::DrawCommand;
    use crate::renderer::scene::GAME_OVER_TITLE;
    use crate::tuning::Tuning;

    fn headless(seed: u64, script: Vec<Vec<InputEvent>>) -> App<ScriptedInput, FixedClock, RecordingSurface> {
        App::new(
            GameState::new(seed, Tuning::default()),
            ScriptedInput::new(script),
            FixedClock::new(60),
            RecordingSurface::new(),
            false,
        )
    }

    fn has_text(frame: &[DrawCommand], needle: &str) -> bool {
        frame
            .iter()
            .any(|c| matches!(c, DrawCommand::Text { text, .. } if text == needle))
    }

    #[test]
    fn test_tick_input_from_events() {
        let input = tick_input(&[InputEvent::Restart, InputEvent::Jump]);
        assert!(input.jump && input.restart);
        assert_eq!(tick_input(&[]), TickInput::default());
    }

    #[test]
    fn test_exit_stops_before_simulating() {
        let mut app = headless(1, vec![vec![], vec![], vec![InputEvent::Jump, InputEvent::Exit]]);
        let reason = app.run(None).unwrap();

        assert_eq!(reason, ExitReason::Quit);
        assert_eq!(app.frames(), 2);
        assert_eq!(app.state.score, 2);
        assert!(app.state.player.grounded);
        assert_eq!(app.surface().frames_presented, 2);
    }

    #[test]
    fn test_frame_limit() {
        let mut app = headless(1, Vec::new());
        assert_eq!(app.run(Some(30)).unwrap(), ExitReason::FrameLimit);
        assert_eq!(app.surface().frames_drawn, 30);
        assert!(has_text(&app.surface().last_frame, "Score: 30"));
    }

    #[test]
    fn test_idle_player_eventually_crashes_and_frame_is_rendered() {
        let mut app = headless(5, Vec::new());

        let mut crashed_at = None;
        for _ in 0..5000 {
            app.frame().unwrap();
            if app.state.is_game_over() {
                crashed_at = Some(app.frames());
                break;
            }
        }

        let crashed_at = crashed_at.expect("an idle player should hit something");
        // The colliding frame itself was drawn, with the overlay
        assert_eq!(app.surface().frames_drawn, crashed_at);
        assert!(has_text(&app.surface().last_frame, GAME_OVER_TITLE));
        assert_eq!(app.scores.top_score(), Some(app.state.score));

        // Frozen: more frames change nothing but keep rendering
        let score = app.state.score;
        for _ in 0..10 {
            app.frame().unwrap();
        }
        assert_eq!(app.state.score, score);
        assert_eq!(app.surface().frames_drawn, crashed_at + 10);
    }

    #[test]
    fn test_restart_after_crash_keeps_high_score() {
        let mut app = headless(9, Vec::new());
        while !app.state.is_game_over() {
            app.frame().unwrap();
        }
        let first_score = app.state.score;

        app.input = ScriptedInput::new(vec![vec![InputEvent::Restart]]);
        app.frame().unwrap();

        assert_eq!(app.state.phase, GamePhase::Playing);
        assert_eq!(app.state.score, 0);
        assert_eq!(app.state.high_score, first_score);
        assert!(has_text(&app.surface().last_frame, &format!("High: {first_score}")));
    }

    #[test]
    fn test_configured_restart_hint_shown_on_game_over() {
        let mut app = headless(9, Vec::new()).with_restart_hint("R: again");
        while !app.state.is_game_over() {
            app.frame().unwrap();
        }
        assert!(has_text(&app.surface().last_frame, "R: again"));
    }

    #[test]
    fn test_fps_readout_when_enabled() {
        let mut app = App::new(
            GameState::new(1, Tuning::default()),
            ScriptedInput::idle(),
            FixedClock::new(60),
            RecordingSurface::new(),
            true,
        );
        app.run(Some(3)).unwrap();
        assert!(has_text(&app.surface().last_frame, "FPS: 60"));
    }
}
