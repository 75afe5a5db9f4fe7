//! Pong tasks, stepped once per tick in this order:
//! render, player paddle, computer paddle, ball motion, collisions, scoreboard.

use rand::Rng;

use super::collision::resolve_collisions;
use super::state::PongState;
use crate::consts::{AI_MAX_SPEED, FORCE_HARD, FORCE_SOFT};
use crate::grid::{Grid, Position};
use crate::hub::{Button, Color, Hub};
use crate::render::RenderTracker;
use crate::sched::{Delay, Task};

/// Draws both paddles and the ball, consuming the cells the paddles vacated
pub struct RenderTask {
    tracker: RenderTracker,
}

impl RenderTask {
    pub fn new(grid: Grid) -> Self {
        let mut tracker = RenderTracker::new(grid);
        tracker.add_layer(Color::White);
        tracker.add_layer(Color::White);
        tracker.add_layer(Color::Red);
        Self { tracker }
    }
}

impl Task<PongState> for RenderTask {
    fn name(&self) -> &'static str {
        "render"
    }

    fn step(&mut self, state: &mut PongState, hub: &mut Hub<'_>) {
        self.tracker.release(std::mem::take(&mut state.left.vacated));
        self.tracker.release(std::mem::take(&mut state.right.vacated));
        let ball = [state.ball.pos];
        let frame: [&[Position]; 3] = [&state.left.cells, &state.right.cells, &ball];
        self.tracker.render(&frame, hub.display);
    }
}

/// Moves the human paddle from the force sensors.
///
/// A hard press moves two rows, a light press one row. Left button up,
/// right button down.
pub struct PlayerPaddleTask;

impl Task<PongState> for PlayerPaddleTask {
    fn name(&self) -> &'static str {
        "player_paddle"
    }

    fn step(&mut self, state: &mut PongState, hub: &mut Hub<'_>) {
        let up = hub.input.force(Button::Left);
        let down = hub.input.force(Button::Right);
        let (direction, speed) = if up > FORCE_HARD {
            (-1, 2)
        } else if up > FORCE_SOFT {
            (-1, 1)
        } else if down > FORCE_HARD {
            (1, 2)
        } else if down > FORCE_SOFT {
            (1, 1)
        } else {
            state.left.vacated.clear();
            return;
        };
        state.left.move_by(direction, speed, state.grid);
    }
}

/// Computer paddle: chases the ball while the ball comes its way, with a
/// random speed of 0..=2 rows per tick so it can miss.
///
/// It heads down while the ball is below the row two above its bottom cell,
/// and up while the ball is above its top cell. For a three-cell paddle both
/// rules aim the top cell at the ball; a two-cell paddle also heads down when
/// the ball is level with its top.
pub struct ComputerPaddleTask;

impl Task<PongState> for ComputerPaddleTask {
    fn name(&self) -> &'static str {
        "computer_paddle"
    }

    fn step(&mut self, state: &mut PongState, hub: &mut Hub<'_>) {
        if state.ball.vel.x <= 0 {
            state.right.vacated.clear();
            return;
        }
        let speed = hub.rng.random_range(0..=AI_MAX_SPEED);
        let ball_y = state.ball.pos.y;
        if state.right.bottom().y - 2 < ball_y {
            state.right.move_by(1, speed, state.grid);
        } else if state.right.top().y > ball_y {
            state.right.move_by(-1, speed, state.grid);
        } else {
            state.right.vacated.clear();
        }
    }
}

/// Moves the ball one cell diagonally whenever its delay elapses
pub struct BallMotionTask {
    delay: Delay,
}

impl BallMotionTask {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            delay: Delay::new(interval_ms),
        }
    }
}

impl Task<PongState> for BallMotionTask {
    fn name(&self) -> &'static str {
        "ball_motion"
    }

    fn step(&mut self, state: &mut PongState, hub: &mut Hub<'_>) {
        if self.delay.ready(hub.clock.now_ms()) {
            state.ball.advance();
            log::trace!("Ball at ({}, {})", state.ball.pos.x, state.ball.pos.y);
        }
    }
}

/// Paddle returns, wall bounces, and the out-of-field check
pub struct CollisionTask;

impl Task<PongState> for CollisionTask {
    fn name(&self) -> &'static str {
        "collisions"
    }

    fn step(&mut self, state: &mut PongState, _hub: &mut Hub<'_>) {
        let contacts = resolve_collisions(state);
        if let Some(side) = contacts.paddle {
            log::debug!(
                "{:?} paddle return at row {}, score {}",
                side,
                state.paddle(side).top().y,
                state.score
            );
        }
        if contacts.out {
            log::info!(
                "Ball out at ({}, {}), final score {}",
                state.ball.pos.x,
                state.ball.pos.y,
                state.score
            );
        }
    }
}

/// Shows the score on the status display
pub struct ScoreTask;

impl Task<PongState> for ScoreTask {
    fn name(&self) -> &'static str {
        "score"
    }

    fn step(&mut self, state: &mut PongState, hub: &mut Hub<'_>) {
        hub.scoreboard.show_number(state.score);
    }
}

/// Task list for one round, in execution order
pub fn pong_tasks(grid: Grid, ball_interval_ms: u64) -> Vec<Box<dyn Task<PongState>>> {
    vec![
        Box::new(RenderTask::new(grid)),
        Box::new(PlayerPaddleTask),
        Box::new(ComputerPaddleTask),
        Box::new(BallMotionTask::new(ball_interval_ms)),
        Box::new(CollisionTask),
        Box::new(ScoreTask),
    ]
}
