//! Headless driver for the ball controller.
//!
//! `LocalGame` plays the part of the engine: it owns the paddle, a point-mass
//! body, the brick wall and every collaborator the controller talks to, and
//! turns real frame time into fixed ticks.

pub mod arena;
pub mod body;
pub mod effects;
pub mod session;
pub mod world;

use ball_core::{
    BallConfig, BallController, BallEvents, CollisionEvent, ConfigError, ContactContext,
    GameRng, GameState, Params, SimulationClock, SpeedClamp, TickContext, TickInput, TimerQueue,
};
use hecs::{Entity, World};

use arena::{Arena, Contact};
use body::SimBody;
use effects::{SfxLog, ShakeState};
use session::Session;
use world::{create_paddle, gc, move_paddles, Paddle, PaddleIntent, SparkField};

pub const PADDLE_SPEED: f32 = 20.0;
pub const RESPAWN_DELAY: f32 = 1.0;

/// Player input for one fixed tick
#[derive(Debug, Clone, Copy, Default)]
pub struct SimInput {
    pub paddle_dir: i8,
    pub buttons: TickInput,
}

impl SimInput {
    pub fn new(paddle_dir: i8, buttons: TickInput) -> Self {
        Self {
            paddle_dir,
            buttons,
        }
    }
}

/// Respawn state for managing ball respawn delays after a loss
#[derive(Debug, Clone, Copy, Default)]
pub struct RespawnState {
    pub timer: f32, // Time remaining before ball respawns (0 = ready to respawn)
}

impl RespawnState {
    pub fn start_delay(&mut self, delay: f32) {
        self.timer = delay;
    }

    pub fn update(&mut self, dt: f32) {
        if self.timer > 0.0 {
            self.timer = (self.timer - dt).max(0.0);
        }
    }

    pub fn can_respawn(&self) -> bool {
        self.timer <= 0.0
    }
}

/// Running totals for a session
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    pub ticks: u64,
    pub launches: u32,
    pub trick_ticks: u32,
    pub raised: u32,
    pub lowered: u32,
    pub brick_hits: u32,
    pub wall_hits: u32,
    pub paddle_hits: u32,
    pub balls_lost: u32,
    pub levels_cleared: u32,
    pub peak_speed: f32, // Fastest post-clamp speed seen
}

impl SimStats {
    fn record(&mut self, events: &BallEvents) {
        if events.launched {
            self.launches += 1;
        }
        if events.trick_shot {
            self.trick_ticks += 1;
        }
        match events.speed_clamped {
            Some(SpeedClamp::Raised) => self.raised += 1,
            Some(SpeedClamp::Lowered) => self.lowered += 1,
            None => {}
        }
    }

    fn record_contact(&mut self, contact: Contact) {
        match contact {
            Contact::Brick => self.brick_hits += 1,
            Contact::Wall => self.wall_hits += 1,
            Contact::Paddle => self.paddle_hits += 1,
        }
    }
}

pub struct LocalGame {
    pub world: World,
    pub paddle: Entity,
    pub arena: Arena,
    pub body: SimBody,
    pub ball: Option<BallController>,
    pub session: Session,
    pub sfx: SfxLog,
    pub shake: ShakeState,
    pub timers: TimerQueue,
    pub clock: SimulationClock,
    pub rng: GameRng,
    pub respawn: RespawnState,
    pub stats: SimStats,
    config: BallConfig,
    accumulator: f32,
}

impl LocalGame {
    /// Build a session with a ball resting on the paddle.
    /// Fails if the ball config is unusable.
    pub fn new(config: BallConfig, seed: u64, level: u32) -> Result<Self, ConfigError> {
        let arena = Arena::new();
        let mut world = World::new();
        let paddle = create_paddle(&mut world, arena.width / 2.0, PADDLE_SPEED);
        let body = SimBody::on_paddle(arena.ball_rest(arena.width / 2.0));
        let session = Session::new(level);
        let ball = BallController::on_spawn(config.clone(), &session)?;

        Ok(Self {
            world,
            paddle,
            arena,
            body,
            ball: Some(ball),
            session,
            sfx: SfxLog::new(seed ^ 0x5f5f),
            shake: ShakeState::default(),
            timers: TimerQueue::new(),
            clock: SimulationClock::default(),
            rng: GameRng::new(seed),
            respawn: RespawnState::default(),
            stats: SimStats::default(),
            config,
            accumulator: 0.0,
        })
    }

    pub fn config(&self) -> &BallConfig {
        &self.config
    }

    pub fn paddle_x(&self) -> f32 {
        self.world
            .get::<&Paddle>(self.paddle)
            .map(|p| p.x)
            .unwrap_or(self.arena.width / 2.0)
    }

    pub fn spark_count(&self) -> usize {
        world::spark_count(&self.world)
    }

    /// Feed one rendered frame of real time. Slow motion stretches it, so
    /// fewer fixed ticks run per real second. Returns the ticks run.
    pub fn advance(&mut self, real_dt: f32, input: SimInput) -> u32 {
        self.accumulator += real_dt.min(Params::MAX_DT) * self.clock.time_scale;

        let mut ticks = 0;
        while self.accumulator >= self.clock.fixed_dt {
            self.accumulator -= self.clock.fixed_dt;
            self.fixed_tick(input);
            ticks += 1;
        }
        ticks
    }

    /// Run exactly one fixed simulation step
    pub fn fixed_tick(&mut self, input: SimInput) {
        let dt = self.clock.fixed_dt;
        self.stats.ticks += 1;

        // 1. Paddle, carrying the ball while it is still attached
        if let Ok(mut intent) = self.world.get::<&mut PaddleIntent>(self.paddle) {
            intent.dir = input.paddle_dir;
        }
        move_paddles(&mut self.world, dt, &self.arena);
        let paddle_x = self.paddle_x();
        if self.body.attached {
            self.body.pos = self.arena.ball_rest(paddle_x);
        }

        // 2. Ball logic
        match self.ball.as_mut() {
            Some(ball) => {
                let events = ball.on_fixed_tick(
                    input.buttons,
                    &mut TickContext {
                        game: &mut self.session,
                        body: &mut self.body,
                        scheduler: &mut self.timers,
                        clock: &mut self.clock,
                        rng: &mut self.rng,
                    },
                );
                self.stats.record(events);
                if !self.body.kinematic {
                    self.stats.peak_speed = self.stats.peak_speed.max(self.body.vel.length());
                }
            }
            None => self.clock.set_time_scale(Params::NORMAL_TIME_SCALE),
        }

        // 3. Physics
        self.body.integrate(dt);

        // 4. Contacts
        let mut lost = false;
        if self.ball.is_some() && !self.body.kinematic {
            let contacts = self
                .arena
                .resolve(&mut self.body.pos, &mut self.body.vel, paddle_x);
            for contact in contacts {
                self.stats.record_contact(contact);
                if let Some(ball) = self.ball.as_mut() {
                    let mut sparks = SparkField::new(&mut self.world);
                    ball.on_collision(
                        &CollisionEvent::new(contact.tag()),
                        &mut ContactContext {
                            body: &self.body,
                            audio: &mut self.sfx,
                            shaker: &mut self.shake,
                            particles: &mut sparks,
                        },
                    );
                }
            }
            lost = self.arena.is_lost(self.body.pos);
        }

        // 5. Deferred work
        self.clock.advance();
        for (token, action) in self.timers.advance(dt) {
            if let Some(ball) = self.ball.as_mut() {
                ball.on_deferred(token, action, &mut self.session);
            }
        }

        // 6. Effects
        gc(&mut self.world, dt);
        self.shake.update(dt);

        // 7. Ball lifecycle
        if lost {
            self.stats.balls_lost += 1;
            tracing::info!(lost = self.stats.balls_lost, "Ball lost");
            self.destroy_ball();
        } else if self.ball.is_some() && self.arena.is_cleared() {
            self.stats.levels_cleared += 1;
            tracing::info!(level = self.session.current_level(), "Level cleared");
            self.destroy_ball();
            self.session.next_level();
            self.arena.reset_bricks();
        } else if self.ball.is_none() {
            self.respawn.update(dt);
            if self.respawn.can_respawn() {
                if let Err(e) = self.spawn_ball() {
                    tracing::error!(error = %e, "Ball respawn failed");
                }
            }
        }
    }

    /// Put a fresh ball on the paddle
    pub fn spawn_ball(&mut self) -> Result<(), ConfigError> {
        let ball = BallController::on_spawn(self.config.clone(), &self.session)?;
        self.body = SimBody::on_paddle(self.arena.ball_rest(self.paddle_x()));
        self.ball = Some(ball);
        Ok(())
    }

    /// Tear down the current ball and stop play until the next launch
    pub fn destroy_ball(&mut self) {
        if let Some(ball) = self.ball.take() {
            ball.on_destroy(&mut self.session, &mut self.timers);
        }
        self.session.set_playing(false);
        self.respawn.start_delay(RESPAWN_DELAY);
    }

    /// Paddle direction that keeps the paddle under the ball
    pub fn autopilot_dir(&self) -> i8 {
        if self.body.attached {
            return 0;
        }
        let diff = self.body.pos.x - self.paddle_x();
        let deadzone = 0.3;
        if diff > deadzone {
            1
        } else if diff < -deadzone {
            -1
        } else {
            0
        }
    }
}
