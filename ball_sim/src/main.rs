//! Headless ball session
//!
//! Usage:
//!   ball-sim --seed=7 --level=2 --seconds=30
//!   ball-sim --fixed-camera
//!   RUST_LOG=debug ball-sim

use ball_core::{BallConfig, TickInput};
use ball_sim::{session::CameraView, LocalGame, SimInput};
use tracing_subscriber::EnvFilter;

const FRAME_DT: f32 = 1.0 / 60.0;
const LAUNCH_AT: f32 = 0.5;
const TRICK_FROM: f32 = 2.0;
const TRICK_UNTIL: f32 = 2.4;

struct SimArgs {
    seed: u64,
    level: u32,
    seconds: f32,
    fixed_camera: bool,
}

impl SimArgs {
    fn from_args() -> Self {
        let mut args = Self {
            seed: 12345,
            level: 0,
            seconds: 20.0,
            fixed_camera: false,
        };
        for arg in std::env::args().skip(1) {
            if let Some(v) = arg.strip_prefix("--seed=") {
                args.seed = parse_or_keep(&arg, v, args.seed);
            } else if let Some(v) = arg.strip_prefix("--level=") {
                args.level = parse_or_keep(&arg, v, args.level);
            } else if let Some(v) = arg.strip_prefix("--seconds=") {
                args.seconds = parse_or_keep(&arg, v, args.seconds);
            } else if arg == "--fixed-camera" {
                args.fixed_camera = true;
            } else {
                tracing::warn!(%arg, "Ignoring unknown argument");
            }
        }
        args
    }
}

/// Parse a flag value, keeping the current one if it does not parse
fn parse_or_keep<T>(arg: &str, value: &str, current: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
    T::Err: std::fmt::Display,
{
    match value.parse() {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(%arg, error = %e, keeping = %current, "Ignoring bad argument value");
            current
        }
    }
}

/// Scripted player: launch once, then a short burst of bullet time.
/// Buttons are re-pressed after every lost ball.
fn scripted_buttons(since_spawn: f32) -> TickInput {
    if (LAUNCH_AT..LAUNCH_AT + 0.1).contains(&since_spawn) {
        TickInput::launch()
    } else if (TRICK_FROM..TRICK_UNTIL).contains(&since_spawn) {
        TickInput::trick()
    } else {
        TickInput::idle()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = SimArgs::from_args();
    let config = if args.fixed_camera {
        BallConfig::fixed_camera()
    } else {
        BallConfig::load()
    };

    let mut game = match LocalGame::new(config, args.seed, args.level) {
        Ok(game) => game,
        Err(e) => {
            tracing::error!(error = %e, "Invalid ball config");
            std::process::exit(1);
        }
    };

    tracing::info!(
        seed = args.seed,
        level = args.level,
        seconds = args.seconds,
        "Session starting"
    );

    let mut real_time = 0.0;
    let mut since_spawn = 0.0;
    let mut resets_seen = game.stats.balls_lost + game.stats.levels_cleared;
    let mut ball_camera_frames = 0u32;
    while real_time < args.seconds {
        let input = SimInput::new(game.autopilot_dir(), scripted_buttons(since_spawn));
        game.advance(FRAME_DT, input);

        real_time += FRAME_DT;
        since_spawn += FRAME_DT;
        let resets = game.stats.balls_lost + game.stats.levels_cleared;
        if resets != resets_seen && game.ball.is_some() {
            resets_seen = resets;
            since_spawn = 0.0;
        }
        if game.session.camera() == CameraView::Ball {
            ball_camera_frames += 1;
        }
    }

    let stats = &game.stats;
    tracing::info!(
        ticks = stats.ticks,
        sim_seconds = game.clock.now,
        launches = stats.launches,
        trick_ticks = stats.trick_ticks,
        bricks = stats.brick_hits,
        walls = stats.wall_hits,
        paddle = stats.paddle_hits,
        lost = stats.balls_lost,
        levels = stats.levels_cleared,
        "Session finished"
    );
    println!(
        "ticks={} sim_time={:.2}s launches={} trick_ticks={} raised={} lowered={} peak_speed={:.2}",
        stats.ticks,
        game.clock.now,
        stats.launches,
        stats.trick_ticks,
        stats.raised,
        stats.lowered,
        stats.peak_speed,
    );
    println!(
        "bricks={} walls={} paddle={} lost={} levels={} sparks_alive={} sfx={} \
         camera_switches={} ball_camera_frames={}",
        stats.brick_hits,
        stats.wall_hits,
        stats.paddle_hits,
        stats.balls_lost,
        stats.levels_cleared,
        game.spark_count(),
        game.sfx.played.len(),
        game.session.camera_switches,
        ball_camera_frames,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_value_keeps_current() {
        assert_eq!(parse_or_keep("--seed=abc", "abc", 7u64), 7);
        assert_eq!(parse_or_keep("--level=-1", "-1", 2u32), 2);
        assert_eq!(parse_or_keep("--seconds=x", "x", 20.0f32), 20.0);
    }

    #[test]
    fn test_good_value_replaces_current() {
        assert_eq!(parse_or_keep("--seed=42", "42", 7u64), 42);
        assert_eq!(parse_or_keep("--seconds=1.5", "1.5", 20.0f32), 1.5);
    }

    #[test]
    fn test_trick_window_follows_launch() {
        assert!(scripted_buttons(LAUNCH_AT).primary_pressed());
        assert!(scripted_buttons(TRICK_FROM).secondary_pressed());
        assert!(!scripted_buttons(0.0).primary_pressed());
    }
}
