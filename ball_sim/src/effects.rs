use ball_core::{AudioPlayer, CameraShake, GameRng, SoundClip};
use rand::seq::SliceRandom;

/// Audio sink that records what it would have played
pub struct SfxLog {
    rng: GameRng,
    pub played: Vec<SoundClip>,
}

impl SfxLog {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
            played: Vec::new(),
        }
    }

    pub fn count_of(&self, clip: &str) -> usize {
        self.played.iter().filter(|c| c.name() == clip).count()
    }
}

impl AudioPlayer for SfxLog {
    fn play_random_one_of(&mut self, clips: &[SoundClip]) {
        if let Some(clip) = clips.choose(&mut self.rng.0) {
            tracing::trace!(clip = clip.name(), "Play sfx");
            self.played.push(clip.clone());
        }
    }
}

/// Camera trauma that decays back to rest
#[derive(Debug, Clone, Copy, Default)]
pub struct ShakeState {
    pub trauma: f32,
    pub shakes: u32,
}

impl ShakeState {
    pub const DECAY_PER_SEC: f32 = 2.0;

    pub fn update(&mut self, dt: f32) {
        self.trauma = (self.trauma - Self::DECAY_PER_SEC * dt).max(0.0);
    }

    pub fn is_shaking(&self) -> bool {
        self.trauma > 0.0
    }
}

impl CameraShake for ShakeState {
    fn shake(&mut self, intensity: f32) {
        self.trauma = (self.trauma + intensity).min(1.0);
        self.shakes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sfx_plays_exactly_one_clip() {
        let mut sfx = SfxLog::new(1);
        let clips = [SoundClip::new("a"), SoundClip::new("b")];
        sfx.play_random_one_of(&clips);
        assert_eq!(sfx.played.len(), 1);
        assert!(clips.contains(&sfx.played[0]));
    }

    #[test]
    fn test_sfx_with_no_clips_is_silent() {
        let mut sfx = SfxLog::new(1);
        sfx.play_random_one_of(&[]);
        assert!(sfx.played.is_empty());
    }

    #[test]
    fn test_shake_saturates_and_decays() {
        let mut shake = ShakeState::default();
        shake.shake(1.0);
        shake.shake(1.0);
        assert_eq!(shake.trauma, 1.0);
        assert_eq!(shake.shakes, 2);

        shake.update(0.25);
        assert_eq!(shake.trauma, 0.5);
        shake.update(1.0);
        assert!(!shake.is_shaking());
    }
}
