//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives here so a JSON config
//! can rebalance the game without a rebuild. Defaults reproduce the classic
//! feel: 60 FPS, gravity 0.8 px/frame², jump impulse -14 px/frame.

use anyhow::{Result, bail, ensure};
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Field ===
    /// Visible field width; obstacles spawn past this edge
    pub field_width: f32,
    /// Top of the ground band
    pub ground_y: f32,

    // === Player physics (per frame) ===
    pub gravity: f32,
    /// Upward impulse, must be negative (screen y grows downward)
    pub jump_velocity: f32,

    // === Difficulty ===
    pub base_speed: f32,
    /// Speed steps up once per this many score points
    pub speed_increment_every: u64,
    pub speed_increment_amount: f32,

    // === Spawning ===
    /// Gap range; new obstacles appear at `field_width + gap / 2`
    pub min_gap: u32,
    pub max_gap: u32,
    /// Range for the distance the field scrolls between two spawns
    /// (`min_gap` still applies as a floor on spacing)
    pub spawn_threshold_min: u32,
    pub spawn_threshold_max: u32,
    /// Range for the threshold after the first obstacle of a run
    pub initial_threshold_min: u32,
    pub initial_threshold_max: u32,
    /// Kind weights (ground : flying)
    pub ground_weight: u32,
    pub flying_weight: u32,

    // === Obstacle shapes ===
    pub ground_widths: Vec<f32>,
    pub ground_heights: Vec<f32>,
    pub flying_width: f32,
    pub flying_height: f32,
    /// Heights above `ground_y` for the top edge of flying obstacles
    pub flying_altitudes: Vec<f32>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            ground_y: GROUND_Y,

            gravity: 0.8,
            jump_velocity: -14.0,

            base_speed: 6.0,
            speed_increment_every: 100,
            speed_increment_amount: 0.5,

            min_gap: 400,
            max_gap: 900,
            spawn_threshold_min: 350,
            spawn_threshold_max: 800,
            initial_threshold_min: 300,
            initial_threshold_max: 700,
            ground_weight: 70,
            flying_weight: 30,

            ground_widths: vec![20.0, 25.0, 30.0],
            ground_heights: vec![30.0, 40.0, 45.0],
            flying_width: 34.0,
            flying_height: 24.0,
            flying_altitudes: vec![100.0, 140.0],
        }
    }
}

impl Tuning {
    /// Reject configurations that would break simulation invariants
    /// (negative sizes, inverted ranges, a jump that points down).
    pub fn validate(&self) -> Result<()> {
        ensure!(self.field_width > 0.0, "field_width must be positive");
        ensure!(
            self.ground_y > 0.0 && self.ground_y <= FIELD_HEIGHT,
            "ground_y must lie inside the field (0, {FIELD_HEIGHT}]"
        );
        ensure!(self.gravity > 0.0, "gravity must be positive");
        ensure!(self.jump_velocity < 0.0, "jump_velocity must be negative (upward)");
        ensure!(self.base_speed > 0.0, "base_speed must be positive");
        ensure!(self.speed_increment_every > 0, "speed_increment_every must be at least 1");
        ensure!(
            self.speed_increment_amount >= 0.0,
            "speed_increment_amount must not be negative"
        );

        for (name, min, max) in [
            ("gap", self.min_gap, self.max_gap),
            ("spawn_threshold", self.spawn_threshold_min, self.spawn_threshold_max),
            ("initial_threshold", self.initial_threshold_min, self.initial_threshold_max),
        ] {
            if min > max {
                bail!("{name} range is inverted: {min} > {max}");
            }
        }

        ensure!(
            self.ground_weight + self.flying_weight > 0,
            "obstacle kind weights must not both be zero"
        );

        for (name, options) in [
            ("ground_widths", &self.ground_widths),
            ("ground_heights", &self.ground_heights),
            ("flying_altitudes", &self.flying_altitudes),
        ] {
            ensure!(!options.is_empty(), "{name} must list at least one option");
            ensure!(
                options.iter().all(|v| *v > 0.0),
                "{name} values must be positive"
            );
        }
        ensure!(
            self.flying_width > 0.0 && self.flying_height > 0.0,
            "flying obstacle size must be positive"
        );
        ensure!(
            self.ground_heights.iter().all(|h| *h <= self.ground_y),
            "ground obstacles must fit above the ground line"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Tuning::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 1.2 }"#).unwrap();
        assert_eq!(tuning.gravity, 1.2);
        assert_eq!(tuning.min_gap, 400);
        assert_eq!(tuning.ground_widths, vec![20.0, 25.0, 30.0]);
    }

    #[test]
    fn test_rejects_inverted_gap_range() {
        let tuning = Tuning {
            min_gap: 900,
            max_gap: 400,
            ..Default::default()
        };
        let err = tuning.validate().unwrap_err();
        assert!(err.to_string().contains("gap"));
    }

    #[test]
    fn test_rejects_downward_jump() {
        let tuning = Tuning {
            jump_velocity: 5.0,
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_size_options() {
        let tuning = Tuning {
            ground_heights: Vec::new(),
            ..Default::default()
        };
        assert!(tuning.validate().is_err());
    }
}
