//! Game configuration.
//!
//! All timings are in seconds, matching how designers tune them. Every field
//! has a default, so a JSON file only needs the values it changes.
//!
//! Validation uses Stillwater's `Validation` to report every bad value in one
//! pass instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use minigame::config::GameConfig;
//!
//! let config = GameConfig::from_json(r#"{ "board": { "win_points": 3 } }"#).unwrap();
//! assert_eq!(config.board.win_points, 3);
//! assert_eq!(config.splash.next_scene, "mini_1");
//! ```

use crate::core::{secs, DEFAULT_HISTORY_LIMIT};
use crate::engine::SearchStrategy;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::{ConfigError, ConfigViolation};

type Check = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Top-level configuration shared through `GameApp`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub app: AppConfig,
    pub board: BoardConfig,
    pub splash: SplashConfig,
}

/// Application shell settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Scene requested when the application starts
    pub initial_scene: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_scene: "_splash_screen".to_string(),
        }
    }
}

/// Tic-tac-toe board pacing, scoring and AI settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Pause before the first move of a round
    pub new_game_delay_secs: f32,
    /// Pause between the deciding move and the result announcement
    pub result_delay_secs: f32,
    /// Spacing between cell visuals being cleared on reset
    pub reset_cell_interval_secs: f32,
    pub result_fade_speed: f32,
    /// Delay before the leftover result text is faded out at startup
    pub intro_fade_delay_secs: f32,
    pub intro_fade_speed: f32,
    pub win_points: u32,
    /// Awarded to both sides
    pub draw_points: u32,
    pub player_moves_first: bool,
    pub search: SearchStrategy,
    /// Phase transitions remembered by the board machine
    pub history_limit: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            new_game_delay_secs: 1.0,
            result_delay_secs: 0.5,
            reset_cell_interval_secs: 0.02,
            result_fade_speed: 2.0,
            intro_fade_delay_secs: 4.0,
            intro_fade_speed: 1.0,
            win_points: 5,
            draw_points: 1,
            player_moves_first: true,
            search: SearchStrategy::Minimax,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl BoardConfig {
    pub fn new_game_delay(&self) -> Duration {
        secs(self.new_game_delay_secs)
    }

    pub fn result_delay(&self) -> Duration {
        secs(self.result_delay_secs)
    }

    pub fn reset_cell_interval(&self) -> Duration {
        secs(self.reset_cell_interval_secs)
    }

    pub fn intro_fade_delay(&self) -> Duration {
        secs(self.intro_fade_delay_secs)
    }

    fn checks(&self) -> Vec<Check> {
        vec![
            non_negative("board.new_game_delay_secs", self.new_game_delay_secs),
            non_negative("board.result_delay_secs", self.result_delay_secs),
            non_negative("board.reset_cell_interval_secs", self.reset_cell_interval_secs),
            positive("board.result_fade_speed", self.result_fade_speed),
            non_negative("board.intro_fade_delay_secs", self.intro_fade_delay_secs),
            positive("board.intro_fade_speed", self.intro_fade_speed),
            non_zero("board.history_limit", self.history_limit),
        ]
    }
}

/// Splash screen sequence timings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplashConfig {
    pub fade_in_secs: f32,
    pub stay_secs: f32,
    pub fade_out_secs: f32,
    /// Scene requested once the sequence completes
    pub next_scene: String,
}

impl Default for SplashConfig {
    fn default() -> Self {
        Self {
            fade_in_secs: 2.0,
            stay_secs: 2.0,
            fade_out_secs: 1.0,
            next_scene: "mini_1".to_string(),
        }
    }
}

impl SplashConfig {
    pub fn fade_in(&self) -> Duration {
        secs(self.fade_in_secs)
    }

    pub fn stay(&self) -> Duration {
        secs(self.stay_secs)
    }

    pub fn fade_out(&self) -> Duration {
        secs(self.fade_out_secs)
    }

    fn checks(&self) -> Vec<Check> {
        vec![
            positive("splash.fade_in_secs", self.fade_in_secs),
            non_negative("splash.stay_secs", self.stay_secs),
            positive("splash.fade_out_secs", self.fade_out_secs),
            scene_name("splash.next_scene", &self.next_scene),
        ]
    }
}

impl GameConfig {
    /// Parse JSON and validate the result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validated()
    }

    /// Read a JSON file and validate the result.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Check every field, accumulating ALL violations.
    pub fn validate(&self) -> Check {
        let mut checks = vec![scene_name("app.initial_scene", &self.app.initial_scene)];
        checks.extend(self.board.checks());
        checks.extend(self.splash.checks());

        Validation::all_vec(checks).map(|_| ())
    }

    /// Return the config unchanged if it is valid.
    pub fn validated(self) -> Result<Self, ConfigError> {
        match self.validate() {
            Validation::Success(_) => Ok(self),
            Validation::Failure(violations) => {
                Err(ConfigError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}

fn non_negative(field: &'static str, value: f32) -> Check {
    if value.is_finite() && value >= 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::InvalidDuration { field, value })
    }
}

fn positive(field: &'static str, value: f32) -> Check {
    if value.is_finite() && value > 0.0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::NotPositive { field, value })
    }
}

fn non_zero(field: &'static str, value: usize) -> Check {
    if value > 0 {
        Validation::success(())
    } else {
        Validation::fail(ConfigViolation::ZeroLimit { field })
    }
}

fn scene_name(field: &'static str, value: &str) -> Check {
    if value.trim().is_empty() {
        Validation::fail(ConfigViolation::EmptySceneName { field })
    } else {
        Validation::success(())
    }
}
