//! Per-frame scene update
//!
//! The host collects one frame of input into a `TickInput` and calls `tick`.

use super::level::{Hud, LevelManager};
use super::tilt::{TiltController, Transform};
use crate::audio::AudioManager;
use crate::host::RingSpawner;
use crate::input::Key;
use crate::settings::Settings;

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Keys that went down this frame
    pub keys_pressed: Vec<Key>,
    /// Keys that came up this frame
    pub keys_released: Vec<Key>,
    /// Tags of colliders that entered the post trigger
    pub trigger_enters: Vec<String>,
    /// Tags of colliders that left the post trigger
    pub trigger_exits: Vec<String>,
}

impl TickInput {
    pub fn press(key: Key) -> Self {
        Self {
            keys_pressed: vec![key],
            ..Default::default()
        }
    }

    pub fn release(key: Key) -> Self {
        Self {
            keys_released: vec![key],
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys_pressed.is_empty()
            && self.keys_released.is_empty()
            && self.trigger_enters.is_empty()
            && self.trigger_exits.is_empty()
    }
}

/// The level manager and the player controller, updated together
pub struct Scene<S: RingSpawner> {
    pub level: LevelManager<S>,
    pub player: TiltController,
    /// Total simulated time (seconds)
    pub time: f64,
    pub frames: u64,
}

impl<S: RingSpawner> Scene<S> {
    pub fn new(
        settings: &Settings,
        spawner: S,
        hud: Hud,
        audio: AudioManager,
        player_start: Transform,
    ) -> Self {
        Self {
            level: LevelManager::new(
                settings.level.clone(),
                settings.keys.clone(),
                spawner,
                hud,
                audio,
            ),
            player: TiltController::new(settings.tilt.clone(), settings.keys.clone(), player_start),
            time: 0.0,
            frames: 0,
        }
    }

    /// Scene start: set up level 1
    pub fn start(&mut self) {
        self.level.start();
    }
}

/// Advance the scene by one frame.
///
/// Order: trigger events, key presses, component updates, key releases.
pub fn tick<S: RingSpawner>(scene: &mut Scene<S>, input: &TickInput, dt: f32) {
    for tag in &input.trigger_enters {
        scene.level.on_trigger_enter(tag);
    }
    for tag in &input.trigger_exits {
        scene.level.on_trigger_exit(tag);
    }

    for &key in &input.keys_pressed {
        scene.level.on_key_down(key);
        scene.player.on_key_down(key);
    }

    scene.level.tick(dt);
    scene.player.tick(dt);

    for &key in &input.keys_released {
        scene.player.on_key_up(key);
    }

    scene.time += dt as f64;
    scene.frames += 1;
}
