//! Snake engine
//!
//! The snake steers relative to its heading, grows by one cell per food and
//! dies on biting itself. In easy mode the walls wrap around; in hard mode
//! leaving the grid ends the round.

pub mod state;
pub mod tasks;

pub use state::{MoveOutcome, Snake, SnakeState, Turn};
pub use tasks::snake_tasks;

use rand_pcg::Pcg32;

use crate::grid::Grid;
use crate::sched::Task;
use crate::session::Game;
use crate::settings::GameSettings;

/// Snake as a playable [`Game`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SnakeGame;

impl Game for SnakeGame {
    type State = SnakeState;

    fn name(&self) -> &'static str {
        "Snake"
    }

    fn new_round(&self, grid: Grid, settings: &GameSettings, rng: &mut Pcg32) -> SnakeState {
        SnakeState::new(grid, settings.hard_mode, rng)
    }

    fn tasks(&self, grid: Grid, settings: &GameSettings) -> Vec<Box<dyn Task<SnakeState>>> {
        snake_tasks(grid, settings)
    }

    fn score(&self, state: &SnakeState) -> u32 {
        state.food_eaten
    }
}
