use crate::collaborators::PhysicsBody;
use crate::params::Params;
use crate::{BallConfig, BallEvents, SpeedClamp};
use glam::Vec3;

/// Rescale `velocity` into the `[min, max]` speed band, keeping its direction.
///
/// A zero vector has no direction and comes back unchanged. Speeds within
/// [`Params::SPEED_EPSILON`] of a band edge count as inside, so clamping an
/// already clamped vector is a no-op.
pub fn clamp_speed(velocity: Vec3, min: f32, max: f32) -> Vec3 {
    classify(velocity, min, max).map_or(velocity, |(v, _)| v)
}

fn classify(velocity: Vec3, min: f32, max: f32) -> Option<(Vec3, SpeedClamp)> {
    let dir = velocity.try_normalize()?;
    let speed = velocity.length();

    if speed > max + Params::SPEED_EPSILON {
        Some((dir * max, SpeedClamp::Lowered))
    } else if speed < min - Params::SPEED_EPSILON {
        Some((dir * min, SpeedClamp::Raised))
    } else {
        None
    }
}

/// Keep a launched ball inside the configured speed band
pub fn enforce_speed_band(
    body: &mut dyn PhysicsBody,
    config: &BallConfig,
    events: &mut BallEvents,
) {
    // Still riding the paddle
    if body.is_kinematic() {
        return;
    }

    let velocity = body.velocity();
    if let Some((clamped, clamp)) = classify(velocity, config.min_speed, config.max_speed) {
        body.set_velocity(clamped);
        events.speed_clamped = Some(clamp);

        tracing::trace!(
            from = velocity.length(),
            to = clamped.length(),
            ?clamp,
            "Speed clamped"
        );
    }
}
