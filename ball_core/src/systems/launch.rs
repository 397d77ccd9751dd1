use crate::collaborators::{DeferredAction, GameState, PhysicsBody, Scheduler};
use crate::{BallConfig, BallEvents, BallState, TickInput};
use glam::Vec3;

/// Detach the ball from the paddle and kick it off on the first launch press
pub fn try_launch(
    state: &mut BallState,
    config: &BallConfig,
    input: TickInput,
    game: &mut dyn GameState,
    body: &mut dyn PhysicsBody,
    scheduler: &mut dyn Scheduler,
    events: &mut BallEvents,
) {
    if state.is_launched
        || !input.primary_pressed()
        || input.secondary_pressed()
        || game.is_playing()
    {
        return;
    }

    game.set_playing(true);

    // First second is always seen from the main camera
    if config.camera_switch {
        game.disable_ball_camera();
        let token = scheduler.schedule_once(
            config.camera_switch_delay,
            DeferredAction::EnableBallCamera,
        );
        state.camera_timer = Some(token);
    }

    body.detach_from_parent();
    body.set_kinematic(false);

    let f = state.initial_force_magnitude;
    body.apply_force(Vec3::new(f, f, 0.0));
    body.apply_torque(config.launch_torque);

    state.is_launched = true;
    events.launched = true;

    tracing::debug!(force = f, torque = ?config.launch_torque, "Ball launched");
}
