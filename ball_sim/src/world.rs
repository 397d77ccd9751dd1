use ball_core::{ParticleHandle, ParticleSpawner};
use glam::{Quat, Vec3};
use hecs::{Entity, World};

use crate::arena::Arena;

/// Paddle component - the player's bat along the bottom edge
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub x: f32,
    pub speed: f32,
}

impl Paddle {
    pub fn new(x: f32, speed: f32) -> Self {
        Self { x, speed }
    }
}

/// Movement intent for paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = left, 0 = stop, 1 = right
}

/// World-space placement of a spawned effect
#[derive(Debug, Clone, Copy)]
pub struct Transform {
    pub pos: Vec3,
    pub rot: Quat,
}

/// Spark burst left behind by a wall hit
#[derive(Debug, Clone, Copy)]
pub struct Sparks;

/// Entity despawns once `t_left` runs out
#[derive(Debug, Clone, Copy)]
pub struct Lifetime {
    pub t_left: f32,
}

impl Lifetime {
    pub fn is_expired(&self) -> bool {
        self.t_left <= 0.0
    }
}

/// Helper to create the paddle entity
pub fn create_paddle(world: &mut World, x: f32, speed: f32) -> Entity {
    world.spawn((Paddle::new(x, speed), PaddleIntent::default()))
}

/// Apply paddle movement based on intents
pub fn move_paddles(world: &mut World, dt: f32, arena: &Arena) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.x += intent.dir as f32 * paddle.speed * dt;
            paddle.x = arena.clamp_paddle_x(paddle.x);
        }
    }
}

/// Garbage collection: tick lifetimes and despawn expired entities
pub fn gc(world: &mut World, dt: f32) {
    let mut to_remove = Vec::new();

    for (entity, lifetime) in world.query_mut::<&mut Lifetime>() {
        lifetime.t_left -= dt;
        if lifetime.is_expired() {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

pub fn spark_count(world: &World) -> usize {
    world.query::<&Sparks>().iter().count()
}

/// Particle spawner backed by the hecs world
pub struct SparkField<'w> {
    pub world: &'w mut World,
}

impl<'w> SparkField<'w> {
    pub fn new(world: &'w mut World) -> Self {
        Self { world }
    }
}

impl ParticleSpawner for SparkField<'_> {
    fn spawn_at(&mut self, position: Vec3, rotation: Quat) -> ParticleHandle {
        let entity = self.world.spawn((
            Sparks,
            Transform {
                pos: position,
                rot: rotation,
            },
        ));
        ParticleHandle(entity.to_bits().get())
    }

    fn destroy_after(&mut self, handle: ParticleHandle, seconds: f32) {
        if let Some(entity) = Entity::from_bits(handle.0) {
            // Already gone is fine
            let _ = self.world.insert_one(entity, Lifetime { t_left: seconds });
        }
    }
}
