//! Diff-based redraw tracking
//!
//! The matrix can show only one color per cell and every write is slow, so each
//! tick we switch off only the cells an entity has left and then (re)assert the
//! cells it occupies. All offs go out before any on: a cell handed from one
//! entity to another ends up lit, never blanked after the fact.
//!
//! Each entity is a layer with its own color and its own one-tick history.
//! Engines may also hand over the cells a move left behind; those go out with
//! the next diff even when the history was forgotten in between.

use crate::grid::{Grid, Position};
use crate::hub::{Color, Display};

/// Index of a layer inside a [`RenderTracker`]
pub type LayerId = usize;

/// Cells to switch off and cells to switch on for one tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderDiff {
    /// Previously active, now vacant
    pub turn_off: Vec<Position>,
    /// Currently active, in layer order
    pub turn_on: Vec<(Position, Color)>,
}

impl RenderDiff {
    pub fn is_empty(&self) -> bool {
        self.turn_off.is_empty() && self.turn_on.is_empty()
    }
}

#[derive(Debug, Clone)]
struct Layer {
    color: Color,
    previous: Vec<Position>,
}

/// Remembers last tick's active cells per entity
#[derive(Debug, Clone)]
pub struct RenderTracker {
    grid: Grid,
    layers: Vec<Layer>,
    released: Vec<Position>,
}

impl RenderTracker {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            layers: Vec::new(),
            released: Vec::new(),
        }
    }

    /// Register an entity. Layers are drawn in registration order.
    pub fn add_layer(&mut self, color: Color) -> LayerId {
        self.layers.push(Layer {
            color,
            previous: Vec::new(),
        });
        self.layers.len() - 1
    }

    /// Queue cells an entity reports as vacated. They are switched off with the
    /// next diff unless some layer occupies them again.
    pub fn release(&mut self, cells: impl IntoIterator<Item = Position>) {
        self.released.extend(cells);
    }

    /// Forget all history, e.g. after the matrix was blanked
    pub fn reset(&mut self) {
        for layer in &mut self.layers {
            layer.previous.clear();
        }
    }

    /// Compute this tick's diff. `frame[i]` holds the active cells of layer `i`;
    /// layers missing from `frame` count as empty.
    pub fn diff(&mut self, frame: &[&[Position]]) -> RenderDiff {
        let mut out = RenderDiff::default();
        for (id, layer) in self.layers.iter_mut().enumerate() {
            let current = frame.get(id).copied().unwrap_or(&[]);
            for &cell in &layer.previous {
                if !current.contains(&cell) && !out.turn_off.contains(&cell) {
                    out.turn_off.push(cell);
                }
            }
            out.turn_on
                .extend(current.iter().map(|&cell| (cell, layer.color)));
            layer.previous.clear();
            layer.previous.extend_from_slice(current);
        }
        for cell in self.released.drain(..) {
            let active = out.turn_on.iter().any(|&(c, _)| c == cell);
            if !active && !out.turn_off.contains(&cell) {
                out.turn_off.push(cell);
            }
        }
        out
    }

    /// Send a diff to the display, offs first. Cells outside the grid are dropped.
    pub fn apply(&self, diff: &RenderDiff, display: &mut dyn Display) {
        for &cell in diff.turn_off.iter().filter(|&&c| self.grid.contains(c)) {
            display.pixel_off(cell);
        }
        for &(cell, color) in diff.turn_on.iter().filter(|(c, _)| self.grid.contains(*c)) {
            display.pixel_on(cell, color);
        }
    }

    /// Diff and apply in one go
    pub fn render(&mut self, frame: &[&[Position]], display: &mut dyn Display) -> RenderDiff {
        let diff = self.diff(frame);
        if !diff.is_empty() {
            self.apply(&diff, display);
        }
        diff
    }
}
