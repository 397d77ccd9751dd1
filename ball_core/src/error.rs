/// Setup-time failures. Nothing in the tick path returns these.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    SpeedBandNonPositive { min: f32 },
    SpeedBandInverted { min: f32, max: f32 },
    SlowMotionOutOfRange(f32),
    NegativeDelay(f32),
    NegativeLifetime(f32),
    NonFinite(&'static str),
    MissingClips(&'static str),
    Parse(String),
    Io(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SpeedBandNonPositive { min } => {
                write!(f, "min_speed must be positive, got {min}")
            }
            Self::SpeedBandInverted { min, max } => {
                write!(f, "min_speed {min} exceeds max_speed {max}")
            }
            Self::SlowMotionOutOfRange(scale) => {
                write!(f, "slow_motion_scale must be in (0, 1], got {scale}")
            }
            Self::NegativeDelay(delay) => {
                write!(f, "camera_switch_delay must not be negative, got {delay}")
            }
            Self::NegativeLifetime(secs) => {
                write!(f, "sparks_lifetime must not be negative, got {secs}")
            }
            Self::NonFinite(field) => write!(f, "{field} must be a finite number"),
            Self::MissingClips(which) => write!(f, "no {which} sound clips configured"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
            Self::Io(e) => write!(f, "config read error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}
