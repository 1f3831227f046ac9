//! Sling Siege headless entry point
//!
//! Runs the simulation without a renderer: a seeded demo player fires shots at
//! the fixed level until it wins or runs out of attempts, logging game events
//! and printing the final frame snapshot as JSON.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use sling_siege::sim::{GameEvent, GameState, TickInput, tick};
use sling_siege::{FrameSnapshot, HudSnapshot, Tuning};

/// Host frame rate (display refresh)
const FRAME_DT: f32 = 1.0 / 60.0;
/// Give up on a single attempt after this many frames
const MAX_FRAMES_PER_ATTEMPT: u32 = 60 * 30;

#[derive(Parser, Debug)]
#[command(name = "sling-siege")]
#[command(about = "Headless Sling Siege run: seeded demo shots against the fixed level")]
struct Options {
    /// Seed for the demo player's shot selection
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// Maximum number of attempts before giving up
    #[arg(long, default_value_t = 20)]
    attempts: u32,
    /// JSON file overriding tuning values
    #[arg(long)]
    tuning: Option<PathBuf>,
}

/// Drag the sling by a random pull and release it
fn fire(state: &mut GameState, rng: &mut Pcg32) {
    let anchor = state.sling_anchor();
    let pull = Vec2::new(rng.random_range(-160.0..-60.0), rng.random_range(0.0..120.0));
    let inputs = [
        TickInput {
            pointer_down: Some(anchor),
            ..Default::default()
        },
        TickInput {
            pointer_move: Some(anchor + pull),
            ..Default::default()
        },
        TickInput {
            pointer_up: true,
            ..Default::default()
        },
    ];
    for input in &inputs {
        tick(state, input, FRAME_DT);
    }
}

/// Log events; returns true if the level was rebuilt
fn report(state: &mut GameState) -> bool {
    let mut rebuilt = false;
    for event in state.drain_events() {
        match event {
            GameEvent::BlockDestroyed { handle } => log::info!("Block {} destroyed", handle.index),
            GameEvent::PigDestroyed { handle } => log::info!("Pig {} down", handle.index),
            GameEvent::LevelRebuilt { cause } => {
                log::info!("{}", cause.message());
                rebuilt = true;
            }
            GameEvent::Launched { .. } | GameEvent::Victory { .. } => {}
        }
    }
    rebuilt
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    let tuning = match &options.tuning {
        Some(path) => Tuning::load_or_default(path),
        None => Tuning::default(),
    };

    log::info!("Sling Siege (headless) starting with seed {}", options.seed);
    let mut rng = Pcg32::seed_from_u64(options.seed);
    let mut state = GameState::new(tuning);
    let mut best_score = 0u64;

    'attempts: for attempt in 1..=options.attempts {
        fire(&mut state, &mut rng);
        report(&mut state);

        for _ in 0..MAX_FRAMES_PER_ATTEMPT {
            let score = state.score;
            tick(&mut state, &TickInput::default(), FRAME_DT);
            if state.won {
                report(&mut state);
                log::info!("Attempt {}: {}", attempt, HudSnapshot::from_state(&state).line());
                break 'attempts;
            }
            if report(&mut state) {
                best_score = best_score.max(score);
                log::info!("Attempt {} over, scored {}", attempt, score);
                continue 'attempts;
            }
        }

        log::warn!("Attempt {} never settled, resetting", attempt);
        best_score = best_score.max(state.score);
        state.reset();
        report(&mut state);
    }

    if state.won {
        log::info!("Level cleared, final score {}", state.score);
    } else {
        log::info!("Out of attempts, best score {}", best_score);
    }

    match serde_json::to_string_pretty(&FrameSnapshot::from_state(&state)) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Could not serialize final frame: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Options::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults_and_overrides() {
        let defaults = Options::try_parse_from(["sling-siege"]).unwrap();
        assert_eq!(defaults.seed, 12345);
        assert_eq!(defaults.attempts, 20);
        assert!(defaults.tuning.is_none());

        let custom = Options::try_parse_from([
            "sling-siege",
            "--seed",
            "7",
            "--attempts",
            "3",
            "--tuning",
            "balance.json",
        ])
        .unwrap();
        assert_eq!(custom.seed, 7);
        assert_eq!(custom.attempts, 3);
        assert_eq!(custom.tuning, Some(PathBuf::from("balance.json")));

        assert!(Options::try_parse_from(["sling-siege", "--seed", "nope"]).is_err());
    }
}
