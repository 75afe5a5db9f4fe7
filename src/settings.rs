//! Game settings and arcade configuration
//!
//! `GameSettings` is what the game-control prompt produces before each round.
//! `ArcadeConfig` describes the machine itself and is loaded from JSON.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::grid::Grid;

/// Per-round settings chosen by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSettings {
    /// Snake: walls are lethal. Pong: shorter paddles.
    pub hard_mode: bool,
    /// Movement interval of the ball / snake
    pub tick_interval_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            hard_mode: false,
            tick_interval_ms: BASE_GAME_SPEED_MS,
        }
    }
}

impl GameSettings {
    /// Settings from a speed level (1 slowest, 5 fastest).
    ///
    /// Level 3 moves every 300 ms, each level up is 50 ms faster.
    /// Out-of-range levels are clamped.
    pub fn from_level(hard_mode: bool, level: u8) -> Self {
        let level = level.clamp(MIN_SPEED_LEVEL, MAX_SPEED_LEVEL) as i64;
        let offset = (MID_SPEED_LEVEL as i64 - level) * SPEED_STEP_MS as i64;
        Self {
            hard_mode,
            tick_interval_ms: (BASE_GAME_SPEED_MS as i64 + offset) as u64,
        }
    }

    /// Paddle length divisor for Pong
    pub fn pong_difficulty(&self) -> i32 {
        if self.hard_mode {
            PONG_DIFFICULTY_HARD
        } else {
            PONG_DIFFICULTY_NORMAL
        }
    }
}

/// Arcade machine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Pause between scheduler ticks
    pub frame_interval_ms: u64,
    pub game_over_pause_ms: u64,
    /// Speed level answered to the settings prompt (1..=5)
    pub speed_level: u8,
    pub hard_mode: bool,
    /// Rounds played before quitting
    pub rounds: u32,
    /// Ticks after which a round is abandoned, `null` to play until game over
    pub max_ticks: Option<u64>,
    /// RNG seed, random when absent
    pub seed: Option<u64>,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            grid_width: GRID_WIDTH,
            grid_height: GRID_HEIGHT,
            frame_interval_ms: FRAME_INTERVAL_MS,
            game_over_pause_ms: GAME_OVER_PAUSE_MS,
            speed_level: MID_SPEED_LEVEL,
            hard_mode: false,
            rounds: 1,
            max_ticks: Some(MAX_ROUND_TICKS),
            seed: None,
        }
    }
}

impl ArcadeConfig {
    /// Read and validate a JSON config file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn game_settings(&self) -> GameSettings {
        GameSettings::from_level(self.hard_mode, self.speed_level)
    }

    /// Check the preconditions the engines rely on. Done once, never per tick.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_width < MIN_GRID_SIDE || self.grid_height < MIN_GRID_SIDE {
            return Err(ConfigError::GridTooSmall {
                width: self.grid_width,
                height: self.grid_height,
                min: MIN_GRID_SIDE,
            });
        }
        if !(MIN_SPEED_LEVEL..=MAX_SPEED_LEVEL).contains(&self.speed_level) {
            return Err(ConfigError::SpeedLevel(self.speed_level));
        }
        let difficulty = self.game_settings().pong_difficulty();
        if self.grid_height / difficulty < 1 {
            return Err(ConfigError::PaddleTooShort {
                height: self.grid_height,
                difficulty,
            });
        }
        if self.frame_interval_ms == 0 {
            return Err(ConfigError::ZeroFrameInterval);
        }
        if self.max_ticks == Some(0) {
            return Err(ConfigError::ZeroTickBudget);
        }
        Ok(())
    }
}
