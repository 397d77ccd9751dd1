use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collaborators::SoundClip;
use crate::error::ConfigError;
use crate::params::Params;

/// Ball configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Launch force at level 0.
    pub initial_velocity: f32,
    /// Extra launch force per level.
    pub level_bonus: f32,
    pub max_speed: f32,
    pub min_speed: f32,
    /// Time scale while the trick-shot button is held.
    pub slow_motion_scale: f32,
    pub launch_torque: Vec3,
    /// Whether the ball camera takes over after launch.
    pub camera_switch: bool,
    pub camera_switch_delay: f32,
    pub shake_intensity: f32,
    pub sparks_lifetime: f32,
    /// Collision tag that counts as a brick hit.
    pub brick_tag: String,
    pub brick_sounds: Vec<SoundClip>,
    pub wall_sounds: Vec<SoundClip>,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            initial_velocity: Params::INITIAL_VELOCITY,
            level_bonus: Params::LEVEL_BONUS,
            max_speed: Params::MAX_SPEED,
            min_speed: Params::MIN_SPEED,
            slow_motion_scale: Params::SLOW_MOTION_SCALE,
            launch_torque: Params::LAUNCH_TORQUE,
            camera_switch: true,
            camera_switch_delay: Params::CAMERA_SWITCH_DELAY,
            shake_intensity: Params::SHAKE_INTENSITY,
            sparks_lifetime: Params::SPARKS_LIFETIME,
            brick_tag: Params::BRICK_TAG.to_string(),
            brick_sounds: vec![
                SoundClip::new("brick_explosion_1"),
                SoundClip::new("brick_explosion_2"),
                SoundClip::new("brick_explosion_3"),
            ],
            wall_sounds: vec![SoundClip::new("wall_hit_1"), SoundClip::new("wall_hit_2")],
        }
    }
}

impl BallConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Variant without the ball camera: a slightly faster ceiling and a
    /// full three-axis spin on launch.
    pub fn fixed_camera() -> Self {
        Self {
            max_speed: Params::MAX_SPEED_FIXED_CAMERA,
            launch_torque: Params::LAUNCH_TORQUE_FIXED_CAMERA,
            camera_switch: false,
            ..Self::default()
        }
    }

    /// Launch force for a ball spawned on the given level
    pub fn initial_force_magnitude(&self, level: u32) -> f32 {
        self.initial_velocity + self.level_bonus * level as f32
    }

    /// Reject configs the tick path cannot run with. NaN fails every check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_velocity.is_finite() {
            return Err(ConfigError::NonFinite("initial_velocity"));
        }
        if !self.level_bonus.is_finite() {
            return Err(ConfigError::NonFinite("level_bonus"));
        }
        if !self.max_speed.is_finite() {
            return Err(ConfigError::NonFinite("max_speed"));
        }
        if !self.launch_torque.is_finite() {
            return Err(ConfigError::NonFinite("launch_torque"));
        }
        if self.min_speed.is_nan() || self.min_speed <= 0.0 {
            return Err(ConfigError::SpeedBandNonPositive {
                min: self.min_speed,
            });
        }
        if self.min_speed > self.max_speed {
            return Err(ConfigError::SpeedBandInverted {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        if !(self.slow_motion_scale > 0.0 && self.slow_motion_scale <= 1.0) {
            return Err(ConfigError::SlowMotionOutOfRange(self.slow_motion_scale));
        }
        if !self.camera_switch_delay.is_finite() || self.camera_switch_delay < 0.0 {
            return Err(ConfigError::NegativeDelay(self.camera_switch_delay));
        }
        if !self.sparks_lifetime.is_finite() || self.sparks_lifetime < 0.0 {
            return Err(ConfigError::NegativeLifetime(self.sparks_lifetime));
        }
        if self.brick_sounds.is_empty() {
            return Err(ConfigError::MissingClips("brick"));
        }
        if self.wall_sounds.is_empty() {
            return Err(ConfigError::MissingClips("wall"));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    /// Load config from `BALL_CONFIG` or `config/ball.toml`, falling back to
    /// defaults when the file is missing or unusable.
    pub fn load() -> Self {
        let path = std::env::var("BALL_CONFIG").unwrap_or_else(|_| "config/ball.toml".to_string());
        match Self::from_path(&path) {
            Ok(config) => config,
            Err(ConfigError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Failed to load {path}: {e}, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(BallConfig::new().validate(), Ok(()));
        assert_eq!(BallConfig::fixed_camera().validate(), Ok(()));
    }

    #[test]
    fn test_variants_differ_only_in_camera_constants() {
        let chase = BallConfig::default();
        let fixed = BallConfig::fixed_camera();
        assert_eq!(chase.max_speed, 19.0);
        assert_eq!(fixed.max_speed, 20.0);
        assert_eq!(chase.launch_torque, Vec3::new(7.0, 7.0, 0.0));
        assert_eq!(fixed.launch_torque, Vec3::new(7.0, 7.0, 7.0));
        assert!(chase.camera_switch);
        assert!(!fixed.camera_switch);
        assert_eq!(chase.min_speed, fixed.min_speed);
    }

    #[test]
    fn test_initial_force_grows_with_level() {
        let config = BallConfig::new();
        assert_eq!(config.initial_force_magnitude(0), 500.0);
        assert_eq!(config.initial_force_magnitude(3), 650.0);
    }

    #[test]
    fn test_rejects_inverted_speed_band() {
        let config = BallConfig {
            min_speed: 25.0,
            ..BallConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::SpeedBandInverted {
                min: 25.0,
                max: 19.0
            })
        );
    }

    #[test]
    fn test_rejects_non_positive_min_speed() {
        let config = BallConfig {
            min_speed: 0.0,
            ..BallConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SpeedBandNonPositive { .. })
        ));
    }

    #[test]
    fn test_rejects_empty_clip_lists() {
        let config = BallConfig {
            wall_sounds: Vec::new(),
            ..BallConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::MissingClips("wall")));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BallConfig::from_toml_str(
            r#"
            max_speed = 22.0
            launch_torque = [1.0, 2.0, 3.0]
            camera_switch = false
            "#,
        )
        .unwrap();
        assert_eq!(config.max_speed, 22.0);
        assert_eq!(config.launch_torque, Vec3::new(1.0, 2.0, 3.0));
        assert!(!config.camera_switch);
        assert_eq!(config.min_speed, Params::MIN_SPEED);
        assert_eq!(config.brick_sounds.len(), 3);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = BallConfig::fixed_camera();
        let text = toml::to_string(&config).unwrap();
        assert_eq!(BallConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_a_parse_error() {
        let err = BallConfig::from_toml_str("max_speed = \"fast\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BallConfig::from_path("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_nan_speed_band_is_rejected() {
        let err = BallConfig::from_toml_str("max_speed = nan").unwrap_err();
        assert_eq!(err, ConfigError::NonFinite("max_speed"));

        let err = BallConfig::from_toml_str("min_speed = nan").unwrap_err();
        assert!(matches!(err, ConfigError::SpeedBandNonPositive { .. }));

        let err = BallConfig::from_toml_str("max_speed = inf").unwrap_err();
        assert_eq!(err, ConfigError::NonFinite("max_speed"));
    }

    #[test]
    fn test_nan_force_and_timings_are_rejected() {
        let err = BallConfig::from_toml_str("initial_velocity = nan").unwrap_err();
        assert_eq!(err, ConfigError::NonFinite("initial_velocity"));

        let err = BallConfig::from_toml_str("level_bonus = nan").unwrap_err();
        assert_eq!(err, ConfigError::NonFinite("level_bonus"));

        let err = BallConfig::from_toml_str("launch_torque = [7.0, nan, 0.0]").unwrap_err();
        assert_eq!(err, ConfigError::NonFinite("launch_torque"));

        let err = BallConfig::from_toml_str("camera_switch_delay = nan").unwrap_err();
        assert!(matches!(err, ConfigError::NegativeDelay(_)));

        let err = BallConfig::from_toml_str("sparks_lifetime = nan").unwrap_err();
        assert!(matches!(err, ConfigError::NegativeLifetime(_)));
    }
}
