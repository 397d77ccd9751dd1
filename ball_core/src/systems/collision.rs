use crate::collaborators::{
    AudioPlayer, CameraShake, CollisionEvent, ParticleSpawner, PhysicsBody,
};
use crate::BallConfig;

/// What a contact turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Brick,
    Wall, // Walls, paddle and anything else solid
}

impl ContactKind {
    pub fn classify(event: &CollisionEvent, config: &BallConfig) -> Self {
        if event.other_tag == config.brick_tag {
            ContactKind::Brick
        } else {
            ContactKind::Wall
        }
    }
}

/// Play the effects for a ball contact
pub fn react_to_collision(
    event: &CollisionEvent,
    config: &BallConfig,
    body: &dyn PhysicsBody,
    audio: &mut dyn AudioPlayer,
    shaker: &mut dyn CameraShake,
    particles: &mut dyn ParticleSpawner,
) -> ContactKind {
    let kind = ContactKind::classify(event, config);

    match kind {
        ContactKind::Brick => {
            audio.play_random_one_of(&config.brick_sounds);
        }
        ContactKind::Wall => {
            shaker.shake(config.shake_intensity);

            // Sparks clean themselves up
            let sparks = particles.spawn_at(body.position(), body.rotation());
            particles.destroy_after(sparks, config.sparks_lifetime);

            audio.play_random_one_of(&config.wall_sounds);
        }
    }

    tracing::trace!(tag = %event.other_tag, ?kind, "Ball contact");
    kind
}
