use glam::Vec3;

/// Ball tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Launch
    pub const INITIAL_VELOCITY: f32 = 500.0; // force units at level 0
    pub const LEVEL_BONUS: f32 = 50.0; // extra force per level
    pub const LAUNCH_TORQUE: Vec3 = Vec3::new(7.0, 7.0, 0.0);
    pub const LAUNCH_TORQUE_FIXED_CAMERA: Vec3 = Vec3::new(7.0, 7.0, 7.0);

    // Speed band
    pub const MAX_SPEED: f32 = 19.0;
    pub const MAX_SPEED_FIXED_CAMERA: f32 = 20.0;
    pub const MIN_SPEED: f32 = 16.0;
    pub const SPEED_EPSILON: f32 = 1e-4;

    // Bullet time
    pub const SLOW_MOTION_SCALE: f32 = 0.2;
    pub const NORMAL_TIME_SCALE: f32 = 1.0;

    // Camera
    pub const CAMERA_SWITCH_DELAY: f32 = 1.0; // simulation seconds after launch

    // Collision effects
    pub const SHAKE_INTENSITY: f32 = 1.0;
    pub const SPARKS_LIFETIME: f32 = 3.0;
    pub const BRICK_TAG: &'static str = "Brick";

    // Physics
    pub const FIXED_DT: f32 = 0.02; // 50 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
