//! Brick Arcade entry point
//!
//! Runs one game headless on an in-memory matrix with the real clock.
//! Nobody is at the buttons, so the computer paddle plays against an idle
//! player and the snake goes wherever it is heading. Rounds stop at the
//! config's tick budget if they do not end by themselves.
//!
//! Usage: `brick-arcade [snake|pong] [config.json]`

use std::path::PathBuf;

use anyhow::{Context, bail};
use rand::SeedableRng;
use rand_pcg::Pcg32;

use brick_arcade::display::{FrameBuffer, StatusDisplay};
use brick_arcade::hub::NoInput;
use brick_arcade::pong::PongGame;
use brick_arcade::sched::SystemClock;
use brick_arcade::session::ScriptedControl;
use brick_arcade::snake::SnakeGame;
use brick_arcade::{ArcadeConfig, Game, Hub, Session, SessionReport};

fn play<G: Game>(
    game: G,
    config: &ArcadeConfig,
    hub: &mut Hub<'_>,
) -> (SessionReport, ScriptedControl) {
    log::info!("Starting {} for {} round(s)", game.name(), config.rounds);
    let mut control = ScriptedControl::new(config.game_settings(), config.rounds.max(1));
    let report = Session::new(game, config).run(&mut control, hub);
    (report, control)
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let game = args.next().unwrap_or_else(|| "snake".to_string());
    let config = match args.next().map(PathBuf::from) {
        Some(path) => ArcadeConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => ArcadeConfig::default(),
    };
    config.validate().context("Invalid config")?;

    let seed = config.seed.unwrap_or_else(rand::random);
    log::info!("Seed: {}", seed);

    let grid = config.grid();
    let mut display = FrameBuffer::new(grid);
    let mut status = StatusDisplay::default();
    let mut input = NoInput;
    let clock = SystemClock::new();
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut hub = Hub {
        display: &mut display,
        scoreboard: &mut status,
        input: &mut input,
        clock: &clock,
        rng: &mut rng,
    };

    let (report, control) = match game.as_str() {
        "snake" => play(SnakeGame, &config, &mut hub),
        "pong" => play(PongGame, &config, &mut hub),
        other => bail!("Unknown game '{}', expected snake or pong", other),
    };

    for (i, round) in report.rounds.iter().enumerate() {
        let ending = if round.finished { "game over" } else { "out of ticks" };
        println!(
            "Round {}: score {} after {} ticks ({})",
            i + 1,
            round.score,
            round.ticks,
            ending
        );
        if let Some(frame) = control.final_frames.get(i) {
            print!("{}", frame);
        }
    }
    if let Some(best) = report.best_score() {
        println!("Best score: {}", best);
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    println!("Writes to the matrix: {}", display.writes);
    Ok(())
}
