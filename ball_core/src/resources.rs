use crate::params::Params;

/// Simulation clock shared by every ball in the scene
#[derive(Debug, Clone, Copy)]
pub struct SimulationClock {
    pub fixed_dt: f32,   // Simulation seconds per fixed tick
    pub now: f32,        // Total simulation time
    pub time_scale: f32, // Game time per real second (1 = normal)
}

impl SimulationClock {
    pub fn new(fixed_dt: f32) -> Self {
        Self {
            fixed_dt,
            now: 0.0,
            time_scale: Params::NORMAL_TIME_SCALE,
        }
    }

    /// Last writer wins when several balls tick in the same step.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    pub fn is_slowed(&self) -> bool {
        self.time_scale < Params::NORMAL_TIME_SCALE
    }

    pub fn advance(&mut self) {
        self.now += self.fixed_dt;
    }
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::new(Params::FIXED_DT)
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    /// -1 or +1 with equal probability
    pub fn sign(&mut self) -> f32 {
        use rand::Rng;
        if self.0.gen_bool(0.5) {
            1.0
        } else {
            -1.0
        }
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Raw axis readings for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    pub primary: f32,   // Launch button
    pub secondary: f32, // Trick-shot button
}

impl TickInput {
    pub fn new(primary: f32, secondary: f32) -> Self {
        Self { primary, secondary }
    }

    pub fn idle() -> Self {
        Self::default()
    }

    pub fn launch() -> Self {
        Self::new(1.0, 0.0)
    }

    pub fn trick() -> Self {
        Self::new(0.0, 1.0)
    }

    pub fn primary_pressed(&self) -> bool {
        self.primary != 0.0
    }

    pub fn secondary_pressed(&self) -> bool {
        self.secondary != 0.0
    }
}

/// Which way the speed clamp pushed the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedClamp {
    Raised,
    Lowered,
}

/// Things that happened to a ball during the last tick
#[derive(Debug, Clone)]
pub struct BallEvents {
    pub launched: bool,
    pub trick_shot: bool,
    pub speed_clamped: Option<SpeedClamp>,
    pub time_scale: f32,
}

impl BallEvents {
    pub fn new() -> Self {
        Self {
            launched: false,
            trick_shot: false,
            speed_clamped: None,
            time_scale: Params::NORMAL_TIME_SCALE,
        }
    }

    pub fn clear(&mut self) {
        self.launched = false;
        self.trick_shot = false;
        self.speed_clamped = None;
        self.time_scale = Params::NORMAL_TIME_SCALE;
    }
}

impl Default for BallEvents {
    fn default() -> Self {
        Self::new()
    }
}
