//! Frame pacing and FPS measurement

use std::thread;
use std::time::{Duration, Instant};

use super::FrameClock;

/// Sleeps off whatever is left of each frame's time budget
#[derive(Debug)]
pub struct SleepClock {
    frame: Duration,
    last: Instant,
}

impl SleepClock {
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / target_fps.max(1),
            last: Instant::now(),
        }
    }
}

impl FrameClock for SleepClock {
    fn tick(&mut self) -> f32 {
        let busy = self.last.elapsed();
        // Never waits longer than one frame
        if let Some(remaining) = self.frame.checked_sub(busy) {
            thread::sleep(remaining);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last).as_secs_f32();
        self.last = now;
        dt
    }
}

/// Number of frames averaged by the FPS readout
const FPS_WINDOW: usize = 60;

/// Rolling frame-rate average over the last `FPS_WINDOW` frames
#[derive(Debug, Clone)]
pub struct FpsCounter {
    frame_times: [f32; FPS_WINDOW],
    frame_index: usize,
    filled: usize,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self {
            frame_times: [0.0; FPS_WINDOW],
            frame_index: 0,
            filled: 0,
        }
    }
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame's duration in seconds
    pub fn record(&mut self, dt: f32) {
        self.frame_times[self.frame_index] = dt;
        self.frame_index = (self.frame_index + 1) % FPS_WINDOW;
        self.filled = (self.filled + 1).min(FPS_WINDOW);
    }

    pub fn fps(&self) -> u32 {
        let total: f32 = self.frame_times[..self.filled].iter().sum();
        if total <= 0.0 {
            return 0;
        }
        (self.filled as f32 / total).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_empty_is_zero() {
        assert_eq!(FpsCounter::new().fps(), 0);
    }

    #[test]
    fn test_fps_average() {
        let mut counter = FpsCounter::new();
        for _ in 0..10 {
            counter.record(1.0 / 60.0);
        }
        assert_eq!(counter.fps(), 60);
    }

    #[test]
    fn test_fps_window_rolls() {
        let mut counter = FpsCounter::new();
        for _ in 0..FPS_WINDOW {
            counter.record(0.1);
        }
        assert_eq!(counter.fps(), 10);
        for _ in 0..FPS_WINDOW {
            counter.record(0.02);
        }
        assert_eq!(counter.fps(), 50);
    }

    #[test]
    fn test_sleep_clock_paces_frames() {
        let mut clock = SleepClock::new(100);
        clock.tick();
        let dt = clock.tick();
        assert!(dt >= 0.009, "frame took {dt}s");
    }
}
