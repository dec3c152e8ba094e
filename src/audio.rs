//! Audio playback for the level flow
//!
//! The engine supplies the actual sources; either may be left unset, in which
//! case playback is logged and skipped.

use crate::host::AudioSource;
use crate::settings::AudioSettings;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Level complete jingle (one-shot)
    LevelComplete,
    /// Movement feedback (looping, never restarted while playing)
    Movement,
}

impl SoundEffect {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::LevelComplete => "Win",
            SoundEffect::Movement => "Movement",
        }
    }
}

/// Audio manager for the level
pub struct AudioManager {
    win: Option<Box<dyn AudioSource>>,
    movement: Option<Box<dyn AudioSource>>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    /// Manager with no sources attached
    pub fn new() -> Self {
        Self {
            win: None,
            movement: None,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    pub fn from_settings(settings: &AudioSettings) -> Self {
        let mut audio = Self::new();
        audio.apply_settings(settings);
        audio
    }

    pub fn with_win_source(mut self, source: impl AudioSource + 'static) -> Self {
        self.win = Some(Box::new(source));
        self
    }

    pub fn with_movement_source(mut self, source: impl AudioSource + 'static) -> Self {
        self.movement = Some(Box::new(source));
        self
    }

    pub fn apply_settings(&mut self, settings: &AudioSettings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect. Returns true if playback was started.
    ///
    /// `Movement` is left alone while it is still playing.
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        let vol = self.effective_volume();
        let source = match effect {
            SoundEffect::LevelComplete => self.win.as_deref_mut(),
            SoundEffect::Movement => self.movement.as_deref_mut(),
        };

        let Some(source) = source else {
            log::error!("{} AudioSource is not assigned!", effect.as_str());
            return false;
        };

        if vol <= 0.0 {
            return false;
        }
        if effect == SoundEffect::Movement && source.is_playing() {
            return false;
        }

        source.play(vol);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::SharedAudio;

    #[test]
    fn test_missing_source_is_skipped() {
        let mut audio = AudioManager::new();
        assert!(!audio.play(SoundEffect::LevelComplete));
        assert!(!audio.play(SoundEffect::Movement));
    }

    #[test]
    fn test_movement_not_restarted_while_playing() {
        let movement = SharedAudio::new();
        let mut audio = AudioManager::new().with_movement_source(movement.clone());
        assert!(audio.play(SoundEffect::Movement));
        assert!(!audio.play(SoundEffect::Movement));
        assert_eq!(movement.plays(), 1);

        movement.stop();
        assert!(audio.play(SoundEffect::Movement));
        assert_eq!(movement.plays(), 2);
    }

    #[test]
    fn test_win_sound_plays_every_time() {
        let win = SharedAudio::new();
        let mut audio = AudioManager::new().with_win_source(win.clone());
        audio.play(SoundEffect::LevelComplete);
        audio.play(SoundEffect::LevelComplete);
        assert_eq!(win.plays(), 2);
    }

    #[test]
    fn test_volume_and_mute() {
        let win = SharedAudio::new();
        let mut audio = AudioManager::new().with_win_source(win.clone());
        audio.set_master_volume(0.5);
        audio.set_sfx_volume(2.0);
        assert!(audio.play(SoundEffect::LevelComplete));
        assert_eq!(win.last_volume(), 0.5);

        audio.set_muted(true);
        assert!(!audio.play(SoundEffect::LevelComplete));
        assert_eq!(win.plays(), 1);
    }
}
