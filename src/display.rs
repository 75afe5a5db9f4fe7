//! In-memory pixel matrix
//!
//! `FrameBuffer` stands in for the tiled light matrix and keeps the color of
//! every cell. `StatusDisplay` holds the last number shown next to it.

use glam::IVec2;

use crate::grid::{Grid, Position};
use crate::hub::{Color, Display, Scoreboard};

/// Happy face, shown on the play-again screen
pub const SMILEY: [(i32, i32); 8] = [
    (1, 1),
    (4, 1),
    (0, 3),
    (5, 3),
    (1, 4),
    (4, 4),
    (2, 5),
    (3, 5),
];

/// Sad face, shown on game over
pub const SAD_FACE: [(i32, i32); 8] = [
    (1, 1),
    (4, 1),
    (2, 3),
    (3, 3),
    (1, 4),
    (4, 4),
    (0, 5),
    (5, 5),
];

/// Convert a static pixel picture into positions
pub fn graphic(points: &[(i32, i32)]) -> Vec<Position> {
    points.iter().map(|&(x, y)| IVec2::new(x, y)).collect()
}

/// Pixel matrix kept in memory
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    grid: Grid,
    cells: Vec<Option<Color>>,
    /// Pixel on/off instructions received so far
    pub writes: u64,
}

impl FrameBuffer {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            cells: vec![None; grid.cell_count()],
            writes: 0,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.grid.contains(pos) {
            Some((pos.y * self.grid.width + pos.x) as usize)
        } else {
            log::warn!("Ignoring pixel outside the matrix: ({}, {})", pos.x, pos.y);
            None
        }
    }

    /// Color currently shown at `pos`
    pub fn get(&self, pos: Position) -> Option<Color> {
        if self.grid.contains(pos) {
            self.cells[(pos.y * self.grid.width + pos.x) as usize]
        } else {
            None
        }
    }

    /// Positions of every lit cell, row by row
    pub fn lit(&self) -> Vec<Position> {
        self.grid.cells().filter(|&p| self.get(p).is_some()).collect()
    }

    /// Text rendering, one line per row, `.` for dark cells
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.grid.height as usize);
        for y in 0..self.grid.height {
            for x in 0..self.grid.width {
                out.push(self.get(IVec2::new(x, y)).map(Color::glyph).unwrap_or('.'));
            }
            out.push('\n');
        }
        out
    }
}

impl Display for FrameBuffer {
    fn pixel_on(&mut self, pos: Position, color: Color) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = Some(color);
            self.writes += 1;
        }
    }

    fn pixel_off(&mut self, pos: Position) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = None;
            self.writes += 1;
        }
    }

    fn matrix_off(&mut self) {
        self.cells.fill(None);
    }

    fn snapshot(&self) -> Option<String> {
        Some(self.to_ascii())
    }
}

/// Status display that remembers the last number shown
#[derive(Debug, Clone, Default)]
pub struct StatusDisplay {
    pub value: Option<u32>,
    pub updates: u64,
}

impl Scoreboard for StatusDisplay {
    fn show_number(&mut self, value: u32) {
        if self.value != Some(value) {
            log::trace!("Status display: {}", value);
        }
        self.value = Some(value);
        self.updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_on_off() {
        let mut fb = FrameBuffer::new(Grid::new(6, 6));
        fb.pixel_on(IVec2::new(2, 3), Color::Red);
        assert_eq!(fb.get(IVec2::new(2, 3)), Some(Color::Red));
        fb.pixel_off(IVec2::new(2, 3));
        assert_eq!(fb.get(IVec2::new(2, 3)), None);
        assert_eq!(fb.writes, 2);
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut fb = FrameBuffer::new(Grid::new(6, 6));
        fb.pixel_on(IVec2::new(6, 0), Color::Red);
        fb.pixel_on(IVec2::new(0, -1), Color::Red);
        assert!(fb.lit().is_empty());
        assert_eq!(fb.writes, 0);
    }

    #[test]
    fn test_graphic_and_matrix_off() {
        let mut fb = FrameBuffer::new(Grid::new(6, 6));
        fb.draw_pixel_graphic(&graphic(&SAD_FACE), Color::Red);
        assert_eq!(fb.lit().len(), SAD_FACE.len());
        fb.matrix_off();
        assert!(fb.lit().is_empty());
    }

    #[test]
    fn test_ascii() {
        let mut fb = FrameBuffer::new(Grid::new(3, 2));
        fb.pixel_on(IVec2::new(1, 0), Color::White);
        fb.pixel_on(IVec2::new(2, 1), Color::SnakeHead);
        assert_eq!(fb.to_ascii(), ".#.\n..@\n");
        let display: &dyn Display = &fb;
        assert_eq!(display.snapshot().as_deref(), Some(".#.\n..@\n"));
    }
}
