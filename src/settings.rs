//! Game settings and tuning
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::input::KeyBindings;

/// Tilt controller tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TiltSettings {
    /// Rotation speed (degrees/second)
    pub rotation_speed: f32,
    /// Tilt per direction (degrees)
    pub tilt_angle: f32,
    /// Angular distance treated as "arrived" (degrees)
    pub snap_threshold: f32,
    /// Bob lift above the rest position
    pub bob_height: f32,
    /// Seconds for each bob half
    pub bob_duration: f32,
}

impl Default for TiltSettings {
    fn default() -> Self {
        Self {
            rotation_speed: ROTATION_SPEED,
            tilt_angle: TILT_ANGLE,
            snap_threshold: SNAP_THRESHOLD,
            bob_height: BOB_HEIGHT,
            bob_duration: BOB_DURATION,
        }
    }
}

/// Level progression tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelSettings {
    /// Seconds the required rings must stay on the post
    pub win_hold_seconds: f32,
    /// Ring spawn anchors; the number of anchors is the number of levels
    pub ring_anchors: Vec<Vec3>,
}

impl Default for LevelSettings {
    fn default() -> Self {
        Self {
            win_hold_seconds: WIN_HOLD_SECONDS,
            ring_anchors: RING_ANCHORS.to_vec(),
        }
    }
}

impl LevelSettings {
    /// Highest authored level
    pub fn last_level(&self) -> u32 {
        self.ring_anchors.len() as u32
    }
}

/// Audio levels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }
}

/// All game settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tilt: TiltSettings,
    pub level: LevelSettings,
    pub audio: AudioSettings,
    pub keys: KeyBindings,
}

impl Settings {
    /// Parse settings from JSON (missing fields use defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::error!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read {}: {} - using default settings", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp out-of-range values back to something playable
    pub fn sanitized(mut self) -> Self {
        let defaults = TiltSettings::default();
        let tilt = &mut self.tilt;
        if !(tilt.rotation_speed > 0.0) {
            log::warn!("rotation_speed must be positive, using {}", defaults.rotation_speed);
            tilt.rotation_speed = defaults.rotation_speed;
        }
        if !(tilt.snap_threshold > 0.0) {
            tilt.snap_threshold = defaults.snap_threshold;
        }
        if !(tilt.bob_duration > 0.0) {
            log::warn!("bob_duration must be positive, using {}", defaults.bob_duration);
            tilt.bob_duration = defaults.bob_duration;
        }
        if !tilt.tilt_angle.is_finite() {
            tilt.tilt_angle = defaults.tilt_angle;
        }
        if !tilt.bob_height.is_finite() {
            tilt.bob_height = defaults.bob_height;
        }

        if !(self.level.win_hold_seconds >= 0.0) {
            log::warn!("win_hold_seconds must not be negative, using {}", WIN_HOLD_SECONDS);
            self.level.win_hold_seconds = WIN_HOLD_SECONDS;
        }
        if self.level.ring_anchors.is_empty() {
            log::warn!("No ring anchors configured, using the default layout");
            self.level.ring_anchors = RING_ANCHORS.to_vec();
        }

        self.audio.master_volume = self.audio.master_volume.clamp(0.0, 1.0);
        self.audio.sfx_volume = self.audio.sfx_volume.clamp(0.0, 1.0);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.tilt.rotation_speed, 720.0);
        assert_eq!(settings.level.win_hold_seconds, 2.0);
        assert_eq!(settings.level.last_level(), 3);
        assert_eq!(settings.keys.continue_key, Key::Space);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "tilt": { "rotation_speed": 90.0 } }"#).unwrap();
        assert_eq!(settings.tilt.rotation_speed, 90.0);
        assert_eq!(settings.tilt.tilt_angle, 45.0);
        assert_eq!(settings.level, LevelSettings::default());
    }

    #[test]
    fn test_anchors_from_json() {
        let settings =
            Settings::from_json(r#"{ "level": { "ring_anchors": [[0.0, 1.0, 2.0]] } }"#).unwrap();
        assert_eq!(settings.level.ring_anchors, vec![Vec3::new(0.0, 1.0, 2.0)]);
        assert_eq!(settings.level.last_level(), 1);
    }

    #[test]
    fn test_sanitize_fixes_bad_values() {
        let json = r#"{
            "tilt": { "rotation_speed": -5.0, "bob_duration": 0.0 },
            "level": { "win_hold_seconds": -1.0, "ring_anchors": [] },
            "audio": { "master_volume": 3.0, "sfx_volume": -1.0 }
        }"#;
        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.tilt.rotation_speed, ROTATION_SPEED);
        assert_eq!(settings.tilt.bob_duration, BOB_DURATION);
        assert_eq!(settings.level.win_hold_seconds, WIN_HOLD_SECONDS);
        assert_eq!(settings.level.last_level(), 3);
        assert_eq!(settings.audio.master_volume, 1.0);
        assert_eq!(settings.audio.sfx_volume, 0.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let settings = Settings::default();
        let json = settings.to_json().unwrap();
        assert_eq!(Settings::from_json(&json).unwrap(), settings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/ring-post.json"));
        assert_eq!(settings, Settings::default());
    }
}
