use crate::collaborators::*;
use crate::systems::*;
use crate::{BallConfig, BallEvents, BallState, ConfigError, GameRng, SimulationClock, TickInput};

/// Collaborators lent to the controller for one fixed tick
pub struct TickContext<'a> {
    pub game: &'a mut dyn GameState,
    pub body: &'a mut dyn PhysicsBody,
    pub scheduler: &'a mut dyn Scheduler,
    pub clock: &'a mut SimulationClock,
    pub rng: &'a mut GameRng,
}

/// Collaborators lent to the controller for one contact
pub struct ContactContext<'a> {
    pub body: &'a dyn PhysicsBody,
    pub audio: &'a mut dyn AudioPlayer,
    pub shaker: &'a mut dyn CameraShake,
    pub particles: &'a mut dyn ParticleSpawner,
}

/// Drives one ball from paddle to destruction.
///
/// The driver calls [`on_fixed_tick`](Self::on_fixed_tick) exactly once per
/// fixed step, forwards contacts to [`on_collision`](Self::on_collision),
/// delivers fired timers through [`on_deferred`](Self::on_deferred) and
/// finally hands the controller to [`on_destroy`](Self::on_destroy).
#[derive(Debug, Clone)]
pub struct BallController {
    config: BallConfig,
    state: BallState,
    events: BallEvents,
}

impl BallController {
    /// Create the controller for a ball sitting on the paddle.
    /// Launch force is fixed here from the current level.
    pub fn on_spawn(config: BallConfig, game: &dyn GameState) -> Result<Self, ConfigError> {
        config.validate()?;

        let level = game.current_level();
        let force = config.initial_force_magnitude(level);
        tracing::info!(level, force, camera_switch = config.camera_switch, "Ball spawned");

        Ok(Self {
            config,
            state: BallState::new(force),
            events: BallEvents::new(),
        })
    }

    pub fn config(&self) -> &BallConfig {
        &self.config
    }

    pub fn state(&self) -> &BallState {
        &self.state
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &BallEvents {
        &self.events
    }

    /// Run one fixed simulation step
    pub fn on_fixed_tick(&mut self, input: TickInput, ctx: &mut TickContext<'_>) -> &BallEvents {
        self.events.clear();

        // 1. Launch off the paddle
        try_launch(
            &mut self.state,
            &self.config,
            input,
            ctx.game,
            ctx.body,
            ctx.scheduler,
            &mut self.events,
        );

        // 2-3. Bullet time or normal speed
        update_bullet_time(
            &self.state,
            &self.config,
            input,
            ctx.game,
            ctx.body,
            ctx.clock,
            ctx.rng,
            &mut self.events,
        );

        // 4. Keep the ball lively but catchable
        enforce_speed_band(ctx.body, &self.config, &mut self.events);

        &self.events
    }

    /// Handle a timer this ball scheduled. Stale tokens are ignored.
    pub fn on_deferred(
        &mut self,
        token: TimerToken,
        action: DeferredAction,
        game: &mut dyn GameState,
    ) {
        if self.state.camera_timer != Some(token) {
            return;
        }
        self.state.camera_timer = None;

        match action {
            DeferredAction::EnableBallCamera => {
                self.state.camera_switch_armed = true;
                game.enable_ball_camera();
                tracing::debug!("Ball camera enabled");
            }
        }
    }

    pub fn on_collision(
        &mut self,
        event: &CollisionEvent,
        ctx: &mut ContactContext<'_>,
    ) -> ContactKind {
        react_to_collision(
            event,
            &self.config,
            ctx.body,
            ctx.audio,
            ctx.shaker,
            ctx.particles,
        )
    }

    /// Tear the ball down: drop any pending camera switch and hand the
    /// view back to the main camera.
    pub fn on_destroy(self, game: &mut dyn GameState, scheduler: &mut dyn Scheduler) {
        if let Some(token) = self.state.camera_timer {
            scheduler.cancel(token);
        }
        game.disable_ball_camera();

        tracing::info!(launched = self.state.is_launched, "Ball destroyed");
    }
}
