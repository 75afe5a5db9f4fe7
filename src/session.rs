//! Session lifecycle
//!
//! One session plays one game, possibly several rounds:
//!
//! ```text
//! Init -> Playing -> GameOver -> Reset -> Init ...
//!                             \-> Quit
//! ```
//!
//! Every round starts from freshly built entities and a fresh task list;
//! nothing survives from one round to the next except the settings prompt
//! answers recorded in the report.

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::display::{SAD_FACE, SMILEY, graphic};
use crate::grid::Grid;
use crate::hub::{Color, Display, GameControl, Hub, ResetDecision};
use crate::sched::{RoundState, Scheduler, Task};
use crate::settings::{ArcadeConfig, GameSettings};

/// A game the session can play
pub trait Game {
    type State: RoundState + 'static;

    fn name(&self) -> &'static str;
    /// Entities for a new round
    fn new_round(&self, grid: Grid, settings: &GameSettings, rng: &mut Pcg32) -> Self::State;
    /// Task list for a new round, in execution order
    fn tasks(&self, grid: Grid, settings: &GameSettings) -> Vec<Box<dyn Task<Self::State>>>;
    fn score(&self, state: &Self::State) -> u32;
}

/// Where the session currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Ask for settings, blank the matrix
    Init,
    /// Scheduler running until game over or the tick budget runs out
    Playing,
    /// Show feedback, ask whether to play again
    GameOver,
    /// Discard the round, back to Init
    Reset,
    /// Done, control returns to the caller
    Quit,
}

/// Outcome of one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub settings: GameSettings,
    pub score: u32,
    pub ticks: u64,
    /// False when the tick budget ran out before game over
    pub finished: bool,
}

/// Everything a finished session hands back
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionReport {
    pub rounds: Vec<RoundSummary>,
}

impl SessionReport {
    pub fn best_score(&self) -> Option<u32> {
        self.rounds.iter().map(|r| r.score).max()
    }
}

/// Drives one game through its rounds
pub struct Session<G: Game> {
    game: G,
    grid: Grid,
    frame_interval_ms: u64,
    game_over_pause_ms: u64,
    max_ticks: Option<u64>,
    phase: SessionPhase,
    settings: GameSettings,
    last_score: u32,
    report: SessionReport,
}

impl<G: Game> Session<G> {
    pub fn new(game: G, config: &ArcadeConfig) -> Self {
        Self {
            game,
            grid: config.grid(),
            frame_interval_ms: config.frame_interval_ms,
            game_over_pause_ms: config.game_over_pause_ms,
            max_ticks: config.max_ticks,
            phase: SessionPhase::Init,
            settings: GameSettings::default(),
            last_score: 0,
            report: SessionReport::default(),
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn report(&self) -> &SessionReport {
        &self.report
    }

    /// Perform the work of the current phase and move to the next one
    pub fn step(&mut self, control: &mut dyn GameControl, hub: &mut Hub<'_>) -> SessionPhase {
        self.phase = match self.phase {
            SessionPhase::Init => {
                hub.display.matrix_off();
                self.settings = control.prompt_settings();
                log::info!(
                    "{}: hard mode {}, moving every {} ms",
                    self.game.name(),
                    self.settings.hard_mode,
                    self.settings.tick_interval_ms
                );
                SessionPhase::Playing
            }
            SessionPhase::Playing => {
                self.play_round(hub);
                SessionPhase::GameOver
            }
            SessionPhase::GameOver => {
                control.present_game_over(hub.display, self.last_score);
                hub.clock.sleep_ms(self.game_over_pause_ms);
                hub.display.matrix_off();
                let decision = control.prompt_reset(hub.display);
                if decision.wants_reset() {
                    SessionPhase::Reset
                } else {
                    SessionPhase::Quit
                }
            }
            SessionPhase::Reset => {
                log::info!("{}: new round", self.game.name());
                SessionPhase::Init
            }
            SessionPhase::Quit => SessionPhase::Quit,
        };
        self.phase
    }

    /// Run until the player quits
    pub fn run(mut self, control: &mut dyn GameControl, hub: &mut Hub<'_>) -> SessionReport {
        while self.phase != SessionPhase::Quit {
            self.step(control, hub);
        }
        hub.display.matrix_off();
        log::info!(
            "{}: session over after {} round(s)",
            self.game.name(),
            self.report.rounds.len()
        );
        self.report
    }

    fn play_round(&mut self, hub: &mut Hub<'_>) {
        let mut state = self.game.new_round(self.grid, &self.settings, hub.rng);
        let tasks = self.game.tasks(self.grid, &self.settings);
        let mut scheduler = Scheduler::new(tasks, self.frame_interval_ms);
        let finished = match self.max_ticks {
            Some(max_ticks) => scheduler.run_for(&mut state, hub, max_ticks),
            None => {
                scheduler.run(&mut state, hub);
                true
            }
        };
        let ticks = scheduler.ticks();

        self.last_score = self.game.score(&state);
        if finished {
            log::info!(
                "{}: game over with score {} after {} ticks",
                self.game.name(),
                self.last_score,
                ticks
            );
        } else {
            log::warn!(
                "{}: round stopped after {} ticks with score {}",
                self.game.name(),
                ticks,
                self.last_score
            );
        }
        self.report.rounds.push(RoundSummary {
            settings: self.settings,
            score: self.last_score,
            ticks,
            finished,
        });
    }
}

/// Game control that answers every prompt from a script: fixed settings and a
/// fixed number of rounds. Shows a sad face on game over and a smiley on the
/// play-again screen. Keeps the last frame of every round when the display
/// can provide one.
#[derive(Debug, Clone)]
pub struct ScriptedControl {
    settings: GameSettings,
    rounds_left: u32,
    /// Scores presented on game over, in order
    pub scores: Vec<u32>,
    /// Times the settings prompt was shown
    pub prompts: u32,
    /// Matrix as it looked when each round ended
    pub final_frames: Vec<String>,
}

impl ScriptedControl {
    pub fn new(settings: GameSettings, rounds: u32) -> Self {
        Self {
            settings,
            rounds_left: rounds,
            scores: Vec::new(),
            prompts: 0,
            final_frames: Vec::new(),
        }
    }
}

impl GameControl for ScriptedControl {
    fn prompt_settings(&mut self) -> GameSettings {
        self.prompts += 1;
        self.settings
    }

    fn present_game_over(&mut self, display: &mut dyn Display, score: u32) {
        if let Some(frame) = display.snapshot() {
            self.final_frames.push(frame);
        }
        display.matrix_off();
        display.draw_pixel_graphic(&graphic(&SAD_FACE), Color::Red);
        self.scores.push(score);
    }

    fn prompt_reset(&mut self, display: &mut dyn Display) -> ResetDecision {
        display.draw_pixel_graphic(&graphic(&SMILEY), Color::Green);
        self.rounds_left = self.rounds_left.saturating_sub(1);
        let decision = if self.rounds_left > 0 {
            ResetDecision::play_again()
        } else {
            ResetDecision::quit()
        };
        display.matrix_off();
        decision
    }
}
