//! Neon Breaker entry point
//!
//! The graphical shell lives out of tree; this binary runs the simulation
//! headless with a simple autopilot, which doubles as a smoke test and a
//! balance probe. The autopilot tracks the lowest ball with the paddle and
//! advances whenever a level is cleared.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use neon_breaker::consts::TICK_RATE;
use neon_breaker::highscores::{FileHighScores, HighScoreStore};
use neon_breaker::sim::{GamePhase, GameState, TickInput, tick};
use neon_breaker::tuning::Tuning;

fn main() -> ExitCode {
    env_logger::init();

    let mut seed = None;
    let mut seconds: u64 = 60;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--seed" => seed = args.next().and_then(|value| value.parse().ok()),
            "--seconds" => {
                if let Some(value) = args.next().and_then(|value| value.parse().ok()) {
                    seconds = value;
                }
            }
            _ => {
                eprintln!("usage: neon-breaker [--seed N] [--seconds N]");
                return ExitCode::FAILURE;
            }
        }
    }
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or(0)
    });

    let mut store = FileHighScores::default();
    let high_score = store.load();
    let tuning = Tuning::load_or_default("tuning.json");
    let mut state = GameState::new(seed, tuning, high_score);
    log::info!("starting run: seed {seed}, high score {high_score}");

    for _ in 0..seconds * u64::from(TICK_RATE) {
        let input = autopilot(&state);
        tick(&mut state, &input, &mut store);
        if !state.running || state.phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = state.snapshot();
    println!(
        "seed {seed}: score {} (best {}), reached level {} with {} lives, {:?}",
        snapshot.score, snapshot.high_score, snapshot.level, snapshot.lives, snapshot.phase
    );
    ExitCode::SUCCESS
}

/// Build this tick's input: chase the ball closest to the bottom edge.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();
    if state.phase == GamePhase::Victory {
        input.advance_level = true;
        return input;
    }

    let paddle_center = state.paddle.rect.center().x;
    let target = state
        .balls
        .iter()
        .max_by(|a, b| {
            a.rect
                .top()
                .partial_cmp(&b.rect.top())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|ball| ball.rect.center().x);

    if let Some(x) = target {
        if x < paddle_center - state.paddle.speed {
            input.move_left = true;
        } else if x > paddle_center + state.paddle.speed {
            input.move_right = true;
        }
    }
    input
}
