//! Playfield coordinates
//!
//! The matrix is addressed with integer cells, x to the right and y downward.
//! Positions have no identity of their own and compare by value.

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A cell on the matrix
pub type Position = IVec2;

/// Per-step displacement, each component in {-1, 0, 1}
pub type Velocity = IVec2;

/// Fixed-size pixel grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Whether `pos` lies in `[0, width) x [0, height)`
    #[inline]
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Fold a position back onto the grid (toroidal topology)
    #[inline]
    pub fn wrap(&self, pos: Position) -> Position {
        IVec2::new(pos.x.rem_euclid(self.width), pos.y.rem_euclid(self.height))
    }

    pub fn cell_count(&self) -> usize {
        (self.width.max(0) * self.height.max(0)) as usize
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Position> + use<> {
        let (w, h) = (self.width, self.height);
        (0..h).flat_map(move |y| (0..w).map(move |x| IVec2::new(x, y)))
    }

    /// Uniformly random cell
    pub fn random_cell<R: Rng>(&self, rng: &mut R) -> Position {
        IVec2::new(rng.random_range(0..self.width), rng.random_range(0..self.height))
    }
}

/// Cardinal heading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step for this heading
    pub fn delta(self) -> Velocity {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    pub fn turn_cw(self) -> Self {
        match self {
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
            Direction::Up => Direction::Right,
        }
    }

    pub fn turn_ccw(self) -> Self {
        match self {
            Direction::Right => Direction::Up,
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let grid = Grid::new(6, 6);
        assert!(grid.contains(IVec2::new(0, 0)));
        assert!(grid.contains(IVec2::new(5, 5)));
        assert!(!grid.contains(IVec2::new(6, 0)));
        assert!(!grid.contains(IVec2::new(0, -1)));
    }

    #[test]
    fn test_wrap_is_toroidal() {
        let grid = Grid::new(6, 4);
        assert_eq!(grid.wrap(IVec2::new(6, 2)), IVec2::new(0, 2));
        assert_eq!(grid.wrap(IVec2::new(-1, 2)), IVec2::new(5, 2));
        assert_eq!(grid.wrap(IVec2::new(3, 4)), IVec2::new(3, 0));
        assert_eq!(grid.wrap(IVec2::new(3, -1)), IVec2::new(3, 3));
    }

    #[test]
    fn test_cells_row_major() {
        let grid = Grid::new(3, 2);
        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), grid.cell_count());
        assert_eq!(cells[0], IVec2::new(0, 0));
        assert_eq!(cells[3], IVec2::new(0, 1));
    }

    #[test]
    fn test_turns() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(dir.turn_cw().turn_ccw(), dir);
            assert_eq!(dir.turn_cw().turn_cw().delta(), -dir.delta());
        }
        // y grows downward: turning clockwise from right heads down the screen
        assert_eq!(Direction::Right.turn_cw(), Direction::Down);
        assert_eq!(Direction::Right.turn_ccw(), Direction::Up);
    }
}
