//! Configuration errors
//!
//! Game conditions (ball out, snake crash) are state transitions, not errors.
//! Only setting up a session can fail.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("grid {width}x{height} is too small, both sides must be at least {min}")]
    GridTooSmall { width: i32, height: i32, min: i32 },
    #[error("speed level {0} is outside 1..=5")]
    SpeedLevel(u8),
    #[error("paddle length would be zero for height {height} and difficulty {difficulty}")]
    PaddleTooShort { height: i32, difficulty: i32 },
    #[error("frame interval must be non-zero")]
    ZeroFrameInterval,
    #[error("round tick budget must be non-zero, use null for no limit")]
    ZeroTickBudget,
}
