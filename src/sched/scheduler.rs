//! Fixed-order tick scheduler

use crate::hub::Hub;

/// One steppable unit of work, advanced at most once per tick.
///
/// Progress that must survive between steps (timers, edge detectors, render
/// history) lives in the task object itself.
pub trait Task<S> {
    fn name(&self) -> &'static str;
    fn step(&mut self, state: &mut S, hub: &mut Hub<'_>);
}

/// State of one round, exposing the game-over flag to the outer loop
pub trait RoundState {
    fn is_over(&self) -> bool;
}

/// Steps an ordered task list once per tick until the round is over
pub struct Scheduler<S> {
    tasks: Vec<Box<dyn Task<S>>>,
    frame_interval_ms: u64,
    ticks: u64,
}

impl<S: RoundState> Scheduler<S> {
    pub fn new(tasks: Vec<Box<dyn Task<S>>>, frame_interval_ms: u64) -> Self {
        Self {
            tasks,
            frame_interval_ms,
            ticks: 0,
        }
    }

    /// Completed ticks
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn task_names(&self) -> Vec<&'static str> {
        self.tasks.iter().map(|t| t.name()).collect()
    }

    /// Advance every task by exactly one step, in list order
    pub fn tick(&mut self, state: &mut S, hub: &mut Hub<'_>) {
        self.ticks += 1;
        log::trace!("Tick {}", self.ticks);
        for task in &mut self.tasks {
            task.step(state, hub);
        }
    }

    /// Tick at the frame cadence until the round is over. The flag is read
    /// once per full tick, so every task finishes the tick that ended the round.
    /// Returns the number of ticks run.
    pub fn run(&mut self, state: &mut S, hub: &mut Hub<'_>) -> u64 {
        let start = self.ticks;
        while !state.is_over() {
            self.tick(state, hub);
            hub.clock.sleep_ms(self.frame_interval_ms);
        }
        log::debug!("Round over after {} ticks", self.ticks - start);
        self.ticks - start
    }

    /// Like [`run`](Self::run) but gives up after `max_ticks`.
    /// Returns whether the round ended.
    pub fn run_for(&mut self, state: &mut S, hub: &mut Hub<'_>, max_ticks: u64) -> bool {
        for _ in 0..max_ticks {
            if state.is_over() {
                return true;
            }
            self.tick(state, hub);
            hub.clock.sleep_ms(self.frame_interval_ms);
        }
        state.is_over()
    }
}
