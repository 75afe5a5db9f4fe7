//! Snake tasks, stepped once per tick in this order:
//! render, scoreboard, steering input, movement, wall check (hard mode).

use super::state::{SnakeState, Turn};
use crate::grid::{Grid, Position};
use crate::hub::{Button, Color, Hub};
use crate::render::RenderTracker;
use crate::sched::{Delay, Task};
use crate::settings::GameSettings;

/// Draws food, head and body, consuming the tail cell the last move released
pub struct RenderTask {
    tracker: RenderTracker,
}

impl RenderTask {
    pub fn new(grid: Grid) -> Self {
        let mut tracker = RenderTracker::new(grid);
        tracker.add_layer(Color::Orange);
        tracker.add_layer(Color::SnakeHead);
        tracker.add_layer(Color::SnakeBody);
        Self { tracker }
    }
}

impl Task<SnakeState> for RenderTask {
    fn name(&self) -> &'static str {
        "render"
    }

    fn step(&mut self, state: &mut SnakeState, hub: &mut Hub<'_>) {
        self.tracker.release(state.snake.vacated.take());
        let food = [state.food];
        let (head, body) = state.snake.body.make_contiguous().split_at(1);
        let frame: [&[Position]; 3] = [&food, head, body];
        self.tracker.render(&frame, hub.display);
    }
}

/// Shows the food counter on the status display
pub struct ScoreTask;

impl Task<SnakeState> for ScoreTask {
    fn name(&self) -> &'static str {
        "score"
    }

    fn step(&mut self, state: &mut SnakeState, hub: &mut Hub<'_>) {
        hub.scoreboard.show_number(state.food_eaten);
    }
}

/// Turns the snake on a fresh touch: left counter-clockwise, right clockwise.
///
/// Only the press itself counts; holding a button does nothing more. A press
/// while the turn lock is closed is dropped, not queued.
#[derive(Default)]
pub struct SteeringTask {
    left_was_down: bool,
    right_was_down: bool,
}

impl Task<SnakeState> for SteeringTask {
    fn name(&self) -> &'static str {
        "steering"
    }

    fn step(&mut self, state: &mut SnakeState, hub: &mut Hub<'_>) {
        let left = hub.input.touched(Button::Left);
        let right = hub.input.touched(Button::Right);
        let left_pressed = left && !self.left_was_down;
        let right_pressed = right && !self.right_was_down;
        self.left_was_down = left;
        self.right_was_down = right;

        let turn = if left_pressed {
            Turn::CounterClockwise
        } else if right_pressed {
            Turn::Clockwise
        } else {
            return;
        };
        if state.snake.turn(turn) {
            log::trace!("Turned {:?}, heading {:?}", turn, state.snake.direction);
        }
    }
}

/// Advances the snake whenever its delay elapses
pub struct MovementTask {
    delay: Delay,
}

impl MovementTask {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            delay: Delay::new(interval_ms),
        }
    }
}

impl Task<SnakeState> for MovementTask {
    fn name(&self) -> &'static str {
        "movement"
    }

    fn step(&mut self, state: &mut SnakeState, hub: &mut Hub<'_>) {
        if !self.delay.ready(hub.clock.now_ms()) {
            return;
        }
        let outcome = state.advance(&mut *hub.rng);
        if outcome.ate {
            log::debug!("Food eaten, length {}", state.snake.len());
        }
        if outcome.self_hit {
            log::info!("Snake bit itself, {} food eaten", state.food_eaten);
        }
    }
}

/// Ends the round when the head leaves the grid
pub struct WallTask;

impl Task<SnakeState> for WallTask {
    fn name(&self) -> &'static str {
        "walls"
    }

    fn step(&mut self, state: &mut SnakeState, _hub: &mut Hub<'_>) {
        if !state.game_over && state.check_boundary() {
            log::info!("Snake hit the wall, {} food eaten", state.food_eaten);
        }
    }
}

/// Task list for one round, in execution order
pub fn snake_tasks(grid: Grid, settings: &GameSettings) -> Vec<Box<dyn Task<SnakeState>>> {
    let mut tasks: Vec<Box<dyn Task<SnakeState>>> = vec![
        Box::new(RenderTask::new(grid)),
        Box::new(ScoreTask),
        Box::new(SteeringTask::default()),
        Box::new(MovementTask::new(settings.tick_interval_ms)),
    ];
    if settings.hard_mode {
        tasks.push(Box::new(WallTask));
    }
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Direction;
    use crate::sched::Scheduler;
    use crate::snake::Snake;
    use crate::testing::Rig;
    use glam::IVec2;

    fn p(x: i32, y: i32) -> Position {
        IVec2::new(x, y)
    }

    fn start(hard_mode: bool) -> (Rig, SnakeState) {
        let grid = Grid::new(6, 6);
        let snake = Snake::new([p(2, 2), p(1, 2), p(0, 2)], Direction::Right);
        (Rig::new(grid), SnakeState::with_snake(grid, hard_mode, snake, p(5, 5)))
    }

    #[test]
    fn test_task_order() {
        let grid = Grid::new(6, 6);
        let easy = Scheduler::new(snake_tasks(grid, &GameSettings::from_level(false, 3)), 100);
        assert_eq!(easy.task_names(), ["render", "score", "steering", "movement"]);
        let hard = Scheduler::new(snake_tasks(grid, &GameSettings::from_level(true, 3)), 100);
        assert_eq!(hard.task_names(), ["render", "score", "steering", "movement", "walls"]);
    }

    #[test]
    fn test_steering_is_edge_triggered() {
        let (mut rig, mut state) = start(false);
        let mut task = SteeringTask::default();
        rig.input.right_touch = true;
        task.step(&mut state, &mut rig.hub());
        assert_eq!(state.snake.direction, Direction::Down);

        // Reopen the lock; a held button must not turn again
        state.snake.input_open = true;
        task.step(&mut state, &mut rig.hub());
        assert_eq!(state.snake.direction, Direction::Down);

        rig.input.right_touch = false;
        rig.input.left_touch = true;
        task.step(&mut state, &mut rig.hub());
        assert_eq!(state.snake.direction, Direction::Right);
    }

    #[test]
    fn test_press_during_lock_dropped() {
        let (mut rig, mut state) = start(false);
        let mut task = SteeringTask::default();
        rig.input.left_touch = true;
        task.step(&mut state, &mut rig.hub());
        assert_eq!(state.snake.direction, Direction::Up);

        rig.input.left_touch = false;
        task.step(&mut state, &mut rig.hub());
        rig.input.left_touch = true;
        task.step(&mut state, &mut rig.hub());
        assert_eq!(state.snake.direction, Direction::Up);
    }

    #[test]
    fn test_render_colors() {
        let (mut rig, mut state) = start(false);
        RenderTask::new(state.grid).step(&mut state, &mut rig.hub());
        assert_eq!(rig.display.get(p(5, 5)), Some(Color::Orange));
        assert_eq!(rig.display.get(p(2, 2)), Some(Color::SnakeHead));
        assert_eq!(rig.display.get(p(1, 2)), Some(Color::SnakeBody));
        assert_eq!(rig.display.get(p(0, 2)), Some(Color::SnakeBody));
    }

    #[test]
    fn test_render_follows_movement() {
        let (mut rig, mut state) = start(false);
        let mut sched = Scheduler::new(snake_tasks(state.grid, &GameSettings::default()), 100);
        // Arms the movement delay at t=0, fires at t=300, drawn on the next tick
        for _ in 0..5 {
            sched.tick(&mut state, &mut rig.hub());
            rig.clock.advance(100);
        }
        assert_eq!(state.snake.head(), p(3, 2));
        // The released tail cell was handed to the renderer
        assert_eq!(state.snake.vacated, None);
        assert_eq!(rig.display.get(p(3, 2)), Some(Color::SnakeHead));
        assert_eq!(rig.display.get(p(2, 2)), Some(Color::SnakeBody));
        assert_eq!(rig.display.get(p(0, 2)), None);
        assert_eq!(rig.display.lit().len(), 4);
    }

    #[test]
    fn test_hard_mode_round_ends_at_wall() {
        let (mut rig, mut state) = start(true);
        let settings = GameSettings::from_level(true, 3);
        let mut sched = Scheduler::new(snake_tasks(state.grid, &settings), 100);
        let ticks = sched.run(&mut state, &mut rig.hub());
        assert!(state.game_over);
        assert_eq!(state.snake.head(), p(6, 2));
        // Four moves at 300 ms: t = 300, 600, 900, 1200
        assert_eq!(ticks, 13);
        // The off-grid head was never drawn
        assert_eq!(rig.display.get(p(5, 2)), Some(Color::SnakeHead));
    }

    #[test]
    fn test_easy_mode_wraps_instead_of_ending() {
        let (mut rig, mut state) = start(false);
        let mut sched = Scheduler::new(snake_tasks(state.grid, &GameSettings::default()), 100);
        assert!(!sched.run_for(&mut state, &mut rig.hub(), 13));
        assert_eq!(state.snake.head(), p(0, 2));
        assert_eq!(rig.status.value, Some(0));
    }
}
