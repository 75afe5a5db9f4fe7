//! Snake entities and round state

use std::collections::VecDeque;

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::grid::{Direction, Grid, Position};
use crate::sched::RoundState;

/// Relative steering command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
}

/// The snake: body cells from head to tail plus its heading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snake {
    /// Head first, most recent first
    pub body: VecDeque<Position>,
    pub direction: Direction,
    /// Open when a turn may still be registered before the next move
    pub input_open: bool,
    /// Tail cell released by the last move
    pub vacated: Option<Position>,
}

impl Snake {
    pub fn new(body: impl IntoIterator<Item = Position>, direction: Direction) -> Self {
        Self {
            body: body.into_iter().collect(),
            direction,
            input_open: true,
            vacated: None,
        }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Register a turn. At most one turn is accepted per movement step,
    /// so the snake can never reverse into its own neck.
    pub fn turn(&mut self, turn: Turn) -> bool {
        if !self.input_open {
            return false;
        }
        self.direction = match turn {
            Turn::Clockwise => self.direction.turn_cw(),
            Turn::CounterClockwise => self.direction.turn_ccw(),
        };
        self.input_open = false;
        true
    }
}

/// Result of one movement step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub ate: bool,
    pub self_hit: bool,
}

/// Everything one Snake round mutates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnakeState {
    pub grid: Grid,
    /// Walls are lethal instead of wrapping around
    pub hard_mode: bool,
    pub snake: Snake,
    pub food: Position,
    pub food_eaten: u32,
    pub game_over: bool,
}

impl SnakeState {
    /// Fresh round: three cells on row 2 heading right, food on a random free cell
    pub fn new<R: Rng>(grid: Grid, hard_mode: bool, rng: &mut R) -> Self {
        let body = [IVec2::new(2, 2), IVec2::new(1, 2), IVec2::new(0, 2)];
        let snake = Snake::new(body, Direction::Right);
        let mut state = Self::with_snake(grid, hard_mode, snake, body[0]);
        state.place_food(rng);
        state
    }

    pub fn with_snake(grid: Grid, hard_mode: bool, snake: Snake, food: Position) -> Self {
        Self {
            grid,
            hard_mode,
            snake,
            food,
            food_eaten: 0,
            game_over: false,
        }
    }

    /// Move the food to a uniformly random cell not covered by the snake.
    /// Falls back to any cell when the snake fills the grid.
    pub fn place_food<R: Rng>(&mut self, rng: &mut R) {
        let free: Vec<Position> = self
            .grid
            .cells()
            .filter(|&c| !self.snake.occupies(c))
            .collect();
        self.food = if free.is_empty() {
            self.grid.random_cell(rng)
        } else {
            free[rng.random_range(0..free.len())]
        };
        log::debug!("Food placed at ({}, {})", self.food.x, self.food.y);
    }

    /// One movement step: advance the head, eat or drop the tail, detect a bite
    pub fn advance<R: Rng>(&mut self, rng: &mut R) -> MoveOutcome {
        let mut head = self.snake.head() + self.snake.direction.delta();
        if !self.hard_mode {
            head = self.grid.wrap(head);
        }
        self.snake.body.push_front(head);

        let ate = head == self.food;
        if ate {
            self.food_eaten += 1;
            self.snake.vacated = None;
            self.place_food(rng);
        } else {
            self.snake.vacated = self.snake.body.pop_back();
        }

        let self_hit = self.snake.body.iter().skip(1).any(|&c| c == head);
        if self_hit {
            self.game_over = true;
        }
        self.snake.input_open = true;

        MoveOutcome { ate, self_hit }
    }

    /// Lethal walls: the head left the grid
    pub fn check_boundary(&mut self) -> bool {
        let head = self.snake.head();
        if head.x == -1 || head.y == -1 || head.x == self.grid.width || head.y == self.grid.height {
            self.game_over = true;
        }
        self.game_over
    }
}

impl RoundState for SnakeState {
    fn is_over(&self) -> bool {
        self.game_over
    }
}
