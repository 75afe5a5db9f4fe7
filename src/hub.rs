//! Hardware collaborators
//!
//! The engines never talk to devices directly. Everything they need from the
//! outside world goes through the traits below, bundled per session in a [`Hub`].
//! All calls are local, synchronous and fire-and-forget.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::grid::Position;
use crate::sched::Clock;
use crate::settings::GameSettings;

/// Pixel colors understood by the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Red,
    Orange,
    Green,
    SnakeHead,
    SnakeBody,
}

impl Color {
    /// Single character used by text renderings of the matrix
    pub fn glyph(self) -> char {
        match self {
            Color::White => '#',
            Color::Red => 'o',
            Color::Orange => '*',
            Color::Green => '+',
            Color::SnakeHead => '@',
            Color::SnakeBody => 's',
        }
    }
}

/// Logical input buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Left,
    Right,
}

/// Pixel matrix driver
pub trait Display {
    fn pixel_on(&mut self, pos: Position, color: Color);
    fn pixel_off(&mut self, pos: Position);
    /// Blank the whole matrix
    fn matrix_off(&mut self);
    fn draw_pixel_graphic(&mut self, cells: &[Position], color: Color) {
        for &cell in cells {
            self.pixel_on(cell, color);
        }
    }

    /// Text picture of the matrix, for drivers that can read back their state
    fn snapshot(&self) -> Option<String> {
        None
    }
}

/// Small numeric status display (score, food counter)
pub trait Scoreboard {
    fn show_number(&mut self, value: u32);
}

/// Instantaneous button readings, polled once per tick
pub trait InputSource {
    /// Force on the button in newtons
    fn force(&mut self, button: Button) -> f32;
    fn touched(&mut self, button: Button) -> bool;
}

/// Answer to the play-again prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResetDecision {
    pub quit: bool,
    pub reset: bool,
}

impl ResetDecision {
    pub fn play_again() -> Self {
        Self {
            quit: false,
            reset: true,
        }
    }

    pub fn quit() -> Self {
        Self {
            quit: true,
            reset: false,
        }
    }

    /// Another round is played only on an explicit reset without quit
    pub fn wants_reset(&self) -> bool {
        self.reset && !self.quit
    }
}

/// Settings prompts and game-over presentation. Calls block until resolved.
pub trait GameControl {
    fn prompt_settings(&mut self) -> GameSettings;
    fn present_game_over(&mut self, display: &mut dyn Display, score: u32);
    fn prompt_reset(&mut self, display: &mut dyn Display) -> ResetDecision;
}

/// Session context handed by reference to every task
pub struct Hub<'a> {
    pub display: &'a mut dyn Display,
    pub scoreboard: &'a mut dyn Scoreboard,
    pub input: &'a mut dyn InputSource,
    pub clock: &'a dyn Clock,
    pub rng: &'a mut Pcg32,
}

/// Input source with no buttons pressed
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn force(&mut self, _button: Button) -> f32 {
        0.0
    }

    fn touched(&mut self, _button: Button) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_decision() {
        assert!(ResetDecision::play_again().wants_reset());
        assert!(!ResetDecision::quit().wants_reset());
        // Both flags set: quit wins
        let both = ResetDecision {
            quit: true,
            reset: true,
        };
        assert!(!both.wants_reset());
        assert!(!ResetDecision::default().wants_reset());
    }
}
