//! Brick Arcade - Snake and Pong on a tiny pixel matrix
//!
//! Core modules:
//! - `sched`: Cooperative tick scheduler, timed delay, clocks
//! - `render`: Diff-based redraw tracking (off before on)
//! - `pong`: Pong engine (paddles, ball, collisions, computer player)
//! - `snake`: Snake engine (steering, growth, food, wrap or lethal walls)
//! - `session`: Init -> Playing -> GameOver -> Reset/Quit lifecycle
//! - `hub`: Interfaces of the hardware collaborators (display, buttons, prompts)

pub mod display;
pub mod error;
pub mod grid;
pub mod hub;
pub mod pong;
pub mod render;
pub mod sched;
pub mod session;
pub mod settings;
pub mod snake;

#[cfg(test)]
mod testing;

pub use error::ConfigError;
pub use grid::{Direction, Grid, Position, Velocity};
pub use hub::{Button, Color, Display, GameControl, Hub, InputSource, ResetDecision, Scoreboard};
pub use session::{Game, Session, SessionPhase, SessionReport};
pub use settings::{ArcadeConfig, GameSettings};

/// Game configuration constants
pub mod consts {
    /// Default matrix resolution (two by two tiles of 3x3 modules)
    pub const GRID_WIDTH: i32 = 6;
    pub const GRID_HEIGHT: i32 = 6;
    /// Smallest playfield the engines are laid out for
    pub const MIN_GRID_SIDE: i32 = 6;

    /// Scheduler cadence: pause between two full rounds of task steps
    pub const FRAME_INTERVAL_MS: u64 = 100;
    /// Pause after the game-over screen before asking for a reset
    pub const GAME_OVER_PAUSE_MS: u64 = 1500;
    /// Tick budget per round for unattended play (one minute at the default cadence)
    pub const MAX_ROUND_TICKS: u64 = 600;

    /// Movement interval at the middle speed level
    pub const BASE_GAME_SPEED_MS: u64 = 300;
    /// Movement interval change per speed level
    pub const SPEED_STEP_MS: u64 = 50;
    pub const MIN_SPEED_LEVEL: u8 = 1;
    pub const MID_SPEED_LEVEL: u8 = 3;
    pub const MAX_SPEED_LEVEL: u8 = 5;

    /// Paddle length divisors (length = height / difficulty)
    pub const PONG_DIFFICULTY_NORMAL: i32 = 2;
    pub const PONG_DIFFICULTY_HARD: i32 = 3;

    /// Force sensor bands in newtons
    pub const FORCE_SOFT: f32 = 2.0;
    pub const FORCE_HARD: f32 = 6.0;

    /// Upper bound (inclusive) of the computer paddle's random speed factor
    pub const AI_MAX_SPEED: i32 = 2;
}
