//! Shared fixtures for unit tests

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::display::{FrameBuffer, StatusDisplay};
use crate::grid::Grid;
use crate::hub::{Button, Hub, InputSource};
use crate::sched::ManualClock;

/// Buttons whose readings are set directly by the test
#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub left_force: f32,
    pub right_force: f32,
    pub left_touch: bool,
    pub right_touch: bool,
}

impl InputSource for ScriptedInput {
    fn force(&mut self, button: Button) -> f32 {
        match button {
            Button::Left => self.left_force,
            Button::Right => self.right_force,
        }
    }

    fn touched(&mut self, button: Button) -> bool {
        match button {
            Button::Left => self.left_touch,
            Button::Right => self.right_touch,
        }
    }
}

/// Owns every collaborator a `Hub` borrows
pub struct Rig {
    pub display: FrameBuffer,
    pub status: StatusDisplay,
    pub input: ScriptedInput,
    pub clock: ManualClock,
    pub rng: Pcg32,
}

impl Rig {
    pub fn new(grid: Grid) -> Self {
        Self {
            display: FrameBuffer::new(grid),
            status: StatusDisplay::default(),
            input: ScriptedInput::default(),
            clock: ManualClock::new(),
            rng: Pcg32::seed_from_u64(12345),
        }
    }

    pub fn hub(&mut self) -> Hub<'_> {
        Hub {
            display: &mut self.display,
            scoreboard: &mut self.status,
            input: &mut self.input,
            clock: &self.clock,
            rng: &mut self.rng,
        }
    }
}
