//! Pong engine
//!
//! Human paddle on the left, computer paddle on the right, one ball bouncing
//! diagonally between the top and bottom walls. Only human returns score.

pub mod collision;
pub mod state;
pub mod tasks;

pub use collision::{Contacts, resolve_collisions};
pub use state::{Ball, Paddle, PongState, Side};
pub use tasks::pong_tasks;

use rand_pcg::Pcg32;

use crate::grid::Grid;
use crate::sched::Task;
use crate::session::Game;
use crate::settings::GameSettings;

/// Pong as a playable [`Game`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PongGame;

impl Game for PongGame {
    type State = PongState;

    fn name(&self) -> &'static str {
        "Pong"
    }

    fn new_round(&self, grid: Grid, settings: &GameSettings, _rng: &mut Pcg32) -> PongState {
        PongState::new(grid, settings.pong_difficulty())
    }

    fn tasks(&self, grid: Grid, settings: &GameSettings) -> Vec<Box<dyn Task<PongState>>> {
        pong_tasks(grid, settings.tick_interval_ms)
    }

    fn score(&self, state: &PongState) -> u32 {
        state.score
    }
}
