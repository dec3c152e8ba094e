//! Host engine collaborators
//!
//! The engine owns rendering, physics, text, and audio. Components talk to it
//! through these traits. The `Shared*`/`HeadlessScene` types implement them
//! without an engine: clones share state, so a caller can hand one copy to a
//! component and read the other back.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glam::Vec3;

/// A text widget (status message, level indicator)
pub trait TextSurface {
    fn set_text(&mut self, text: &str);
}

/// A widget that can be shown or hidden (the continue prompt)
pub trait Toggle {
    fn set_visible(&mut self, visible: bool);
}

/// A sound the engine can play
pub trait AudioSource {
    /// Start playback at `volume` (0.0 - 1.0)
    fn play(&mut self, volume: f32);
    fn is_playing(&self) -> bool;
}

/// Opaque handle to a spawned ring entity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingHandle(pub u32);

/// Creates and destroys ring entities
pub trait RingSpawner {
    fn spawn_ring(&mut self, position: Vec3) -> RingHandle;
    fn destroy_ring(&mut self, ring: RingHandle);
}

/// Text surface that stores its last value
#[derive(Debug, Clone, Default)]
pub struct SharedText(Rc<RefCell<String>>);

impl SharedText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl TextSurface for SharedText {
    fn set_text(&mut self, text: &str) {
        let mut current = self.0.borrow_mut();
        current.clear();
        current.push_str(text);
    }
}

/// Visibility flag, hidden by default
#[derive(Debug, Clone, Default)]
pub struct SharedToggle(Rc<Cell<bool>>);

impl SharedToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.0.get()
    }
}

impl Toggle for SharedToggle {
    fn set_visible(&mut self, visible: bool) {
        self.0.set(visible);
    }
}

#[derive(Debug, Default)]
struct AudioInner {
    plays: u32,
    playing: bool,
    last_volume: f32,
}

/// Audio source that counts plays. It keeps "playing" until `stop`.
#[derive(Debug, Clone, Default)]
pub struct SharedAudio(Rc<RefCell<AudioInner>>);

impl SharedAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times playback was started
    pub fn plays(&self) -> u32 {
        self.0.borrow().plays
    }

    pub fn last_volume(&self) -> f32 {
        self.0.borrow().last_volume
    }

    /// Finish the current clip
    pub fn stop(&self) {
        self.0.borrow_mut().playing = false;
    }
}

impl AudioSource for SharedAudio {
    fn play(&mut self, volume: f32) {
        let mut inner = self.0.borrow_mut();
        inner.plays += 1;
        inner.playing = true;
        inner.last_volume = volume;
    }

    fn is_playing(&self) -> bool {
        self.0.borrow().playing
    }
}

#[derive(Debug, Default)]
struct SceneInner {
    rings: Vec<(RingHandle, Vec3)>,
    next_id: u32,
    spawned: u32,
    destroyed: u32,
}

/// Ring spawner that keeps live rings in a list
#[derive(Debug, Clone, Default)]
pub struct HeadlessScene(Rc<RefCell<SceneInner>>);

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live rings (sorted by handle)
    pub fn rings(&self) -> Vec<(RingHandle, Vec3)> {
        self.0.borrow().rings.clone()
    }

    pub fn ring_count(&self) -> usize {
        self.0.borrow().rings.len()
    }

    /// Total rings ever spawned
    pub fn spawned(&self) -> u32 {
        self.0.borrow().spawned
    }

    /// Total rings ever destroyed
    pub fn destroyed(&self) -> u32 {
        self.0.borrow().destroyed
    }
}

impl RingSpawner for HeadlessScene {
    fn spawn_ring(&mut self, position: Vec3) -> RingHandle {
        let mut inner = self.0.borrow_mut();
        inner.next_id += 1;
        inner.spawned += 1;
        let handle = RingHandle(inner.next_id);
        inner.rings.push((handle, position));
        log::debug!("Spawned ring {:?} at {}", handle, position);
        handle
    }

    fn destroy_ring(&mut self, ring: RingHandle) {
        let mut inner = self.0.borrow_mut();
        let before = inner.rings.len();
        inner.rings.retain(|(handle, _)| *handle != ring);
        if inner.rings.len() < before {
            inner.destroyed += 1;
            log::debug!("Destroyed ring {:?}", ring);
        } else {
            log::warn!("Tried to destroy unknown ring {:?}", ring);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_handles_see_writes() {
        let text = SharedText::new();
        let mut writer = text.clone();
        writer.set_text("hello");
        assert_eq!(text.text(), "hello");

        let prompt = SharedToggle::new();
        assert!(!prompt.is_visible());
        prompt.clone().set_visible(true);
        assert!(prompt.is_visible());
    }

    #[test]
    fn test_shared_audio_plays_until_stopped() {
        let audio = SharedAudio::new();
        let mut source = audio.clone();
        source.play(0.5);
        assert!(source.is_playing());
        assert_eq!(audio.plays(), 1);
        assert_eq!(audio.last_volume(), 0.5);
        audio.stop();
        assert!(!source.is_playing());
    }

    #[test]
    fn test_headless_scene_tracks_rings() {
        let scene = HeadlessScene::new();
        let mut spawner = scene.clone();
        let a = spawner.spawn_ring(Vec3::X);
        let b = spawner.spawn_ring(Vec3::Y);
        assert_ne!(a, b);
        spawner.destroy_ring(a);
        spawner.destroy_ring(a);
        assert_eq!(scene.rings(), vec![(b, Vec3::Y)]);
        assert_eq!(scene.spawned(), 2);
        assert_eq!(scene.destroyed(), 1);
    }
}
