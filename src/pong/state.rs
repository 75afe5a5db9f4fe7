//! Pong entities and round state

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::grid::{Grid, Position, Velocity};
use crate::sched::RoundState;

/// Which end of the field a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// Human player, column 0
    Left,
    /// Computer player, last column
    Right,
}

/// A vertical run of cells with constant length, pinned to one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top to bottom, contiguous
    pub cells: Vec<Position>,
    /// Cells left behind by the last move
    pub vacated: Vec<Position>,
}

impl Paddle {
    /// Build a paddle of `height / difficulty` cells.
    ///
    /// The left paddle starts one row below the top edge, the right paddle
    /// ends one row above the bottom edge.
    pub fn new(side: Side, grid: Grid, difficulty: i32) -> Self {
        let length = grid.height / difficulty;
        let (x, first_y) = match side {
            Side::Left => (0, 1),
            Side::Right => (grid.width - 1, grid.height - 1 - length),
        };
        Self {
            side,
            cells: (0..length).map(|i| IVec2::new(x, first_y + i)).collect(),
            vacated: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Topmost cell (leading edge when moving up)
    pub fn top(&self) -> Position {
        self.cells[0]
    }

    /// Bottommost cell (leading edge when moving down)
    pub fn bottom(&self) -> Position {
        self.cells[self.cells.len() - 1]
    }

    /// Whether any paddle cell sits on row `y`
    pub fn covers_row(&self, y: i32) -> bool {
        self.cells.iter().any(|c| c.y == y)
    }

    /// Move vertically by up to `speed` rows; `direction` is +1 (down) or -1 (up).
    ///
    /// Moves `speed` rows at once when there is room, falls back to a single
    /// row close to the edge, and does nothing at the edge. Going down, room
    /// for exactly `speed` rows is enough; going up the top cell must sit
    /// strictly below row `speed`. A zero speed skips the move. Returns the
    /// number of rows moved.
    pub fn move_by(&mut self, direction: i32, speed: i32, grid: Grid) -> i32 {
        let (room, fast) = if direction > 0 {
            let room = grid.height - 1 - self.bottom().y;
            (room, room >= speed)
        } else {
            let room = self.top().y;
            (room, room > speed)
        };
        let step = if speed <= 0 || room <= 0 {
            0
        } else if fast {
            speed
        } else {
            1
        };
        if step == 0 {
            self.vacated.clear();
            return 0;
        }

        let before = self.cells.clone();
        let offset = IVec2::new(0, direction.signum() * step);
        for cell in &mut self.cells {
            *cell += offset;
        }
        self.vacated = before
            .into_iter()
            .filter(|c| !self.cells.contains(c))
            .collect();
        step
    }
}

/// The ball: diagonal motion only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Position,
    /// Both components are always +1 or -1
    pub vel: Velocity,
}

impl Ball {
    pub fn new(pos: Position) -> Self {
        Self {
            pos,
            vel: IVec2::new(1, 1),
        }
    }

    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Everything one Pong round mutates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    pub grid: Grid,
    /// Paddle length divisor
    pub difficulty: i32,
    /// Human paddle
    pub left: Paddle,
    /// Computer paddle
    pub right: Paddle,
    pub ball: Ball,
    /// Returns by the human paddle
    pub score: u32,
    pub game_over: bool,
}

impl PongState {
    /// Fresh round: paddles in their home rows, ball in the middle heading down-right
    pub fn new(grid: Grid, difficulty: i32) -> Self {
        Self {
            grid,
            difficulty,
            left: Paddle::new(Side::Left, grid, difficulty),
            right: Paddle::new(Side::Right, grid, difficulty),
            ball: Ball::new(IVec2::new(grid.width / 2, grid.height / 2)),
            score: 0,
            game_over: false,
        }
    }

    /// Length every paddle keeps for the whole round
    pub fn paddle_length(&self) -> usize {
        (self.grid.height / self.difficulty) as usize
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl RoundState for PongState {
    fn is_over(&self) -> bool {
        self.game_over
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(paddle: &Paddle) -> Vec<i32> {
        paddle.cells.iter().map(|c| c.y).collect()
    }

    #[test]
    fn test_initial_layout() {
        let state = PongState::new(Grid::new(6, 6), 2);
        assert_eq!(state.paddle_length(), 3);
        assert_eq!(rows(&state.left), [1, 2, 3]);
        assert!(state.left.cells.iter().all(|c| c.x == 0));
        assert_eq!(rows(&state.right), [2, 3, 4]);
        assert!(state.right.cells.iter().all(|c| c.x == 5));
        assert_eq!(state.ball.pos, IVec2::new(3, 3));
        assert_eq!(state.ball.vel, IVec2::new(1, 1));
        assert!(!state.is_over());
    }

    #[test]
    fn test_hard_paddles_shorter() {
        let state = PongState::new(Grid::new(6, 6), 3);
        assert_eq!(state.left.len(), 2);
        assert_eq!(state.right.len(), 2);
        assert_eq!(rows(&state.right), [3, 4]);
    }

    #[test]
    fn test_move_fast_with_room() {
        let grid = Grid::new(6, 6);
        let mut paddle = Paddle::new(Side::Left, grid, 2);
        assert_eq!(paddle.move_by(1, 2, grid), 2);
        assert_eq!(rows(&paddle), [3, 4, 5]);
        assert_eq!(paddle.vacated, vec![IVec2::new(0, 1), IVec2::new(0, 2)]);
    }

    #[test]
    fn test_move_falls_back_to_single_step() {
        let grid = Grid::new(6, 6);
        let mut paddle = Paddle::new(Side::Right, grid, 2);
        // Rows 2..=4, one row of room below
        assert_eq!(paddle.move_by(1, 2, grid), 1);
        assert_eq!(rows(&paddle), [3, 4, 5]);
        assert_eq!(paddle.vacated, vec![IVec2::new(5, 2)]);
    }

    #[test]
    fn test_move_blocked_at_edge_clears_vacated() {
        let grid = Grid::new(6, 6);
        let mut paddle = Paddle::new(Side::Left, grid, 2);
        paddle.move_by(-1, 1, grid);
        assert_eq!(rows(&paddle), [0, 1, 2]);
        assert!(!paddle.vacated.is_empty());
        assert_eq!(paddle.move_by(-1, 2, grid), 0);
        assert_eq!(rows(&paddle), [0, 1, 2]);
        assert!(paddle.vacated.is_empty());
    }

    #[test]
    fn test_fast_move_up_needs_spare_row() {
        let grid = Grid::new(6, 6);
        let mut paddle = Paddle::new(Side::Left, grid, 2);
        paddle.move_by(1, 1, grid);
        // Top at row 2: two rows of room up, but a fast move needs more
        assert_eq!(paddle.top().y, 2);
        assert_eq!(paddle.move_by(-1, 2, grid), 1);
        assert_eq!(rows(&paddle), [1, 2, 3]);
        assert_eq!(paddle.vacated, vec![IVec2::new(0, 4)]);
    }

    #[test]
    fn test_zero_speed_skips() {
        let grid = Grid::new(6, 6);
        let mut paddle = Paddle::new(Side::Left, grid, 2);
        assert_eq!(paddle.move_by(1, 0, grid), 0);
        assert_eq!(rows(&paddle), [1, 2, 3]);
    }

    #[test]
    fn test_ball_advance() {
        let mut ball = Ball::new(IVec2::new(3, 3));
        ball.advance();
        assert_eq!(ball.pos, IVec2::new(4, 4));
    }
}
