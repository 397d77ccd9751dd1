use crate::collaborators::TimerToken;

/// Per-ball controller state, created on spawn and dropped on destroy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallState {
    pub is_launched: bool,
    pub camera_switch_armed: bool,   // Ball camera has taken over
    pub initial_force_magnitude: f32, // Fixed for the ball's lifetime
    pub camera_timer: Option<TimerToken>, // Pending ball-camera switch
}

impl BallState {
    pub fn new(initial_force_magnitude: f32) -> Self {
        Self {
            is_launched: false,
            camera_switch_armed: false,
            initial_force_magnitude,
            camera_timer: None,
        }
    }
}
