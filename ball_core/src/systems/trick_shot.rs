use crate::collaborators::{GameState, PhysicsBody};
use crate::params::Params;
use crate::{BallConfig, BallEvents, BallState, GameRng, SimulationClock, TickInput};
use glam::Vec3;

/// Bullet time: while the trick-shot button is held mid-play, slow the clock
/// and shove the ball diagonally in a random direction every tick.
/// Otherwise restore normal speed, launched or not.
#[allow(clippy::too_many_arguments)]
pub fn update_bullet_time(
    state: &BallState,
    config: &BallConfig,
    input: TickInput,
    game: &dyn GameState,
    body: &mut dyn PhysicsBody,
    clock: &mut SimulationClock,
    rng: &mut GameRng,
    events: &mut BallEvents,
) {
    if input.secondary_pressed() && game.is_playing() {
        let f = state.initial_force_magnitude;
        let force = Vec3::new(f * rng.sign(), f * rng.sign(), 0.0);
        body.apply_force(force);
        clock.set_time_scale(config.slow_motion_scale);
        events.trick_shot = true;
        events.time_scale = config.slow_motion_scale;

        tracing::debug!(?force, "Trick shot");
    } else {
        clock.set_time_scale(Params::NORMAL_TIME_SCALE);
        events.time_scale = Params::NORMAL_TIME_SCALE;
    }
}
