//! Game settings and launch options
//!
//! Settings come from a JSON file (partial files are fine, missing keys keep
//! their defaults). Launch options come from the command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;
use crate::renderer::scene::GAME_OVER_HINT;
use crate::tuning::Tuning;

/// Environment variable naming a settings file when `--config` is absent
pub const CONFIG_ENV: &str = "DINO_JUMP_CONFIG";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_title: String,
    /// Frames per second the loop paces itself to
    pub target_fps: u32,
    /// Let the display pace presentation as well
    pub vsync: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,
    /// TTF font to use; common system fonts are tried when unset
    pub font_path: Option<PathBuf>,
    pub font_size: u16,
    /// Game-over title size
    pub large_font_size: u16,
    /// Line under the game-over title
    pub restart_hint: String,

    // === Gameplay ===
    /// Fixed seed for reproducible runs; random when unset
    pub seed: Option<u64>,
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Dino Jump".to_string(),
            target_fps: TARGET_FPS,
            vsync: false,

            show_fps: false,
            font_path: None,
            font_size: 24,
            large_font_size: 48,
            restart_hint: GAME_OVER_HINT.to_string(),

            seed: None,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json).context("invalid settings JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from `path`, or from the file named by `DINO_JUMP_CONFIG`,
    /// or fall back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        };

        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };

        let json = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("failed to load settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.target_fps == 0 {
            bail!("target_fps must be at least 1");
        }
        if self.font_size == 0 || self.large_font_size == 0 {
            bail!("font sizes must be positive");
        }
        self.tuning.validate().context("invalid tuning")
    }
}

/// Command-line arguments for launching Dino Jump
#[derive(Debug, Clone, Default, PartialEq, Eq, Parser)]
#[command(author, version, about, long_about = None)]
pub struct LaunchArgs {
    /// Settings JSON file (falls back to $DINO_JUMP_CONFIG, then defaults)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Seed for the obstacle generator, overrides the settings seed
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Run without a window for this many frames and print the last frame as JSON
    #[arg(long, value_name = "FRAMES")]
    pub headless: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "show_fps": true, "tuning": { "gravity": 1.0 } }"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.restart_hint, GAME_OVER_HINT);
        assert_eq!(settings.tuning.gravity, 1.0);
        assert_eq!(settings.target_fps, TARGET_FPS);
        assert_eq!(settings.tuning.min_gap, Tuning::default().min_gap);
    }

    #[test]
    fn test_invalid_tuning_rejected() {
        let err = Settings::from_json(r#"{ "tuning": { "min_gap": 900, "max_gap": 10 } }"#)
            .unwrap_err();
        assert!(format!("{err:#}").contains("gap"));
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(Settings::from_json("{ not json").is_err());
        assert!(Settings::from_json(r#"{ "target_fps": 0 }"#).is_err());
    }

    #[test]
    fn test_load_missing_file_names_path() {
        let path = Path::new("/nonexistent/dino-jump-settings.json");
        let err = Settings::load(Some(path)).unwrap_err();
        assert!(format!("{err:#}").contains("dino-jump-settings.json"));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("dino-jump-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "seed": 42, "window_title": "Test" }"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.window_title, "Test");
    }

    #[test]
    fn test_parse_launch_args() {
        let args = LaunchArgs::try_parse_from([
            "dino-jump",
            "--seed",
            "7",
            "--headless",
            "120",
            "--config",
            "cfg.json",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.headless, Some(120));
        assert_eq!(args.config, Some(PathBuf::from("cfg.json")));

        assert_eq!(
            LaunchArgs::try_parse_from(["dino-jump"]).unwrap(),
            LaunchArgs::default()
        );
    }

    #[test]
    fn test_parse_launch_args_errors() {
        assert!(LaunchArgs::try_parse_from(["dino-jump", "--seed"]).is_err());
        assert!(LaunchArgs::try_parse_from(["dino-jump", "--seed", "abc"]).is_err());
        assert!(LaunchArgs::try_parse_from(["dino-jump", "--fullscreen"]).is_err());
    }
}
