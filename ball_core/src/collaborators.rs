//! Engine-side collaborators the ball controller drives.
//!
//! The controller never owns any of these; the driver lends them for the
//! duration of a single hook call.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Named audio asset
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundClip(pub String);

impl SoundClip {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Opaque handle to a spawned particle effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleHandle(pub u64);

/// Cancel token returned by [`Scheduler::schedule_once`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

/// Work a ball can defer to a later tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    EnableBallCamera,
}

/// Contact reported by the collision system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollisionEvent {
    pub other_tag: String,
}

impl CollisionEvent {
    pub fn new(other_tag: impl Into<String>) -> Self {
        Self {
            other_tag: other_tag.into(),
        }
    }
}

/// Level / session manager
pub trait GameState {
    fn is_playing(&self) -> bool;
    fn set_playing(&mut self, playing: bool);
    fn current_level(&self) -> u32;
    /// Switch to the camera mounted on the ball.
    fn enable_ball_camera(&mut self);
    /// Switch back to the main camera.
    fn disable_ball_camera(&mut self);
}

/// The ball's rigid body
pub trait PhysicsBody {
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    fn is_kinematic(&self) -> bool;
    fn set_kinematic(&mut self, kinematic: bool);
    fn apply_force(&mut self, force: Vec3);
    fn apply_torque(&mut self, torque: Vec3);
    fn detach_from_parent(&mut self);
    fn position(&self) -> Vec3;
    fn rotation(&self) -> Quat;
}

pub trait AudioPlayer {
    /// Play exactly one of `clips`, picked uniformly at random.
    fn play_random_one_of(&mut self, clips: &[SoundClip]);
}

pub trait CameraShake {
    fn shake(&mut self, intensity: f32);
}

pub trait ParticleSpawner {
    fn spawn_at(&mut self, position: Vec3, rotation: Quat) -> ParticleHandle;
    fn destroy_after(&mut self, handle: ParticleHandle, seconds: f32);
}

/// One-shot timers on the simulation tick queue
pub trait Scheduler {
    fn schedule_once(&mut self, delay: f32, action: DeferredAction) -> TimerToken;
    /// Cancelling a token that already fired is a no-op.
    fn cancel(&mut self, token: TimerToken);
}
