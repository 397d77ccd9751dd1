//! Session state the ball reports into: play flag, level, active camera.

use ball_core::GameState;

/// Which camera is rendering the scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraView {
    Main,
    Ball,
}

#[derive(Debug, Clone)]
pub struct Session {
    playing: bool,
    level: u32,
    camera: CameraView,
    pub camera_switches: u32, // Times the ball camera took over
}

impl Session {
    pub fn new(level: u32) -> Self {
        Self {
            playing: false,
            level,
            camera: CameraView::Main,
            camera_switches: 0,
        }
    }

    pub fn camera(&self) -> CameraView {
        self.camera
    }

    pub fn next_level(&mut self) {
        self.level += 1;
    }
}

impl GameState for Session {
    fn is_playing(&self) -> bool {
        self.playing
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
    }

    fn current_level(&self) -> u32 {
        self.level
    }

    fn enable_ball_camera(&mut self) {
        if self.camera != CameraView::Ball {
            self.camera_switches += 1;
        }
        self.camera = CameraView::Ball;
    }

    fn disable_ball_camera(&mut self) {
        self.camera = CameraView::Main;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle_on_main_camera() {
        let session = Session::new(2);
        assert!(!session.is_playing());
        assert_eq!(session.current_level(), 2);
        assert_eq!(session.camera(), CameraView::Main);
    }

    #[test]
    fn test_camera_toggle() {
        let mut session = Session::new(0);
        session.enable_ball_camera();
        session.enable_ball_camera();
        assert_eq!(session.camera(), CameraView::Ball);
        assert_eq!(session.camera_switches, 1);

        session.disable_ball_camera();
        assert_eq!(session.camera(), CameraView::Main);
    }

    #[test]
    fn test_next_level() {
        let mut session = Session::new(0);
        session.next_level();
        assert_eq!(session.current_level(), 1);
    }
}
