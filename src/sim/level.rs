//! Level progression
//!
//! `LevelState` holds the rules (ring counting, win timer, level advance) and
//! is pure. `LevelManager` wraps it with the engine side effects: HUD text,
//! the continue prompt, sounds, and ring spawning.

use serde::{Deserialize, Serialize};

use super::win_timer::WinTimer;
use crate::audio::{AudioManager, SoundEffect};
use crate::consts::RING_TAG;
use crate::host::{RingHandle, RingSpawner, TextSurface, Toggle};
use crate::input::{Action, Key, KeyBindings};
use crate::settings::LevelSettings;

/// Status message shown at the start of level 1
pub const START_MESSAGE: &str = "Get the ring on the post!";

/// Result of advancing past a completed level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelAdvance {
    /// Now playing this level
    NextLevel(u32),
    /// Past the last authored level
    GameComplete,
}

/// Progression state for one play-through
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelState {
    /// Current level (1-based)
    pub current_level: u32,
    /// Rings that must be on the post at once
    pub required_rings: u32,
    /// Rings currently on the post
    pub rings_touching: u32,
    pub level_complete: bool,
    /// Set after the last level; waiting for restart
    pub game_complete: bool,
    pub win_timer: WinTimer,
}

impl LevelState {
    pub fn new(win_hold_seconds: f32) -> Self {
        Self {
            current_level: 1,
            required_rings: 1,
            rings_touching: 0,
            level_complete: false,
            game_complete: false,
            win_timer: WinTimer::new(win_hold_seconds),
        }
    }

    /// Seconds the requirement has held so far
    pub fn time_touching_seconds(&self) -> f32 {
        self.win_timer.elapsed()
    }

    pub fn requirement_met(&self) -> bool {
        self.rings_touching >= self.required_rings
    }

    /// A ring touched the post
    pub fn ring_entered(&mut self) {
        self.rings_touching += 1;
        if self.requirement_met() && !self.level_complete && !self.game_complete {
            self.win_timer.start();
        }
    }

    /// A ring left the post. Returns false for an exit with no matching enter.
    pub fn ring_exited(&mut self) -> bool {
        if self.rings_touching == 0 {
            return false;
        }
        self.rings_touching -= 1;
        if !self.requirement_met() {
            self.win_timer.reset();
        }
        true
    }

    /// Advance the win timer. Returns true on the tick the level completes.
    pub fn advance_timer(&mut self, dt: f32) -> bool {
        if self.level_complete || self.game_complete {
            return false;
        }
        let holding = self.requirement_met();
        if self.win_timer.advance(dt, holding) {
            self.level_complete = true;
            return true;
        }
        false
    }

    /// Move to the next level, or finish the game past `last_level`
    pub fn advance_level(&mut self, last_level: u32) -> LevelAdvance {
        self.current_level += 1;
        self.required_rings = self.current_level;
        self.rings_touching = 0;
        self.win_timer.reset();
        self.level_complete = false;

        if self.current_level > last_level {
            self.game_complete = true;
            LevelAdvance::GameComplete
        } else {
            LevelAdvance::NextLevel(self.current_level)
        }
    }

    /// Back to level 1, exactly as at start
    pub fn restart(&mut self) {
        *self = Self::new(self.win_timer.hold());
    }
}

/// Text surfaces and the continue prompt
#[derive(Default)]
pub struct Hud {
    pub status_text: Option<Box<dyn TextSurface>>,
    pub level_text: Option<Box<dyn TextSurface>>,
    pub continue_prompt: Option<Box<dyn Toggle>>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status_text(mut self, text: impl TextSurface + 'static) -> Self {
        self.status_text = Some(Box::new(text));
        self
    }

    pub fn with_level_text(mut self, text: impl TextSurface + 'static) -> Self {
        self.level_text = Some(Box::new(text));
        self
    }

    pub fn with_continue_prompt(mut self, prompt: impl Toggle + 'static) -> Self {
        self.continue_prompt = Some(Box::new(prompt));
        self
    }

    pub fn display_message(&mut self, message: &str) {
        match self.status_text.as_deref_mut() {
            Some(text) => {
                text.set_text(message);
                log::info!("Message displayed: {}", message);
            }
            None => log::error!("Status text is not assigned! Dropped message: {}", message),
        }
    }

    pub fn show_level(&mut self, level: u32) {
        match self.level_text.as_deref_mut() {
            Some(text) => text.set_text(&format!("Level {}", level)),
            None => log::error!("Level text is not assigned!"),
        }
    }

    pub fn set_prompt_visible(&mut self, visible: bool) {
        match self.continue_prompt.as_deref_mut() {
            Some(prompt) => prompt.set_visible(visible),
            None => log::error!("Continue prompt is not assigned!"),
        }
    }
}

/// Drives `LevelState` from engine events and applies its side effects
pub struct LevelManager<S: RingSpawner> {
    state: LevelState,
    settings: LevelSettings,
    keys: KeyBindings,
    spawner: S,
    rings: Vec<RingHandle>,
    hud: Hud,
    audio: AudioManager,
}

impl<S: RingSpawner> LevelManager<S> {
    pub fn new(
        settings: LevelSettings,
        keys: KeyBindings,
        spawner: S,
        hud: Hud,
        audio: AudioManager,
    ) -> Self {
        Self {
            state: LevelState::new(settings.win_hold_seconds),
            settings,
            keys,
            spawner,
            rings: Vec::new(),
            hud,
            audio,
        }
    }

    pub fn state(&self) -> &LevelState {
        &self.state
    }

    /// Rings spawned for the current level
    pub fn rings(&self) -> &[RingHandle] {
        &self.rings
    }

    /// Scene start: show level 1 and spawn its ring
    pub fn start(&mut self) {
        log::info!("Level manager starting ({} levels)", self.settings.last_level());
        self.begin_first_level();
    }

    /// Per-frame update
    pub fn tick(&mut self, dt: f32) {
        if self.state.advance_timer(dt) {
            self.win_level();
        }
    }

    /// Something entered the post's trigger volume
    pub fn on_trigger_enter(&mut self, tag: &str) {
        if tag != RING_TAG {
            return;
        }
        self.state.ring_entered();
        log::debug!(
            "Ring entered ({}/{} touching)",
            self.state.rings_touching,
            self.state.required_rings
        );
    }

    /// Something left the post's trigger volume
    pub fn on_trigger_exit(&mut self, tag: &str) {
        if tag != RING_TAG {
            return;
        }
        if !self.state.ring_exited() {
            log::warn!("Ring exit with no rings touching - ignored");
            return;
        }
        log::debug!(
            "Ring exited ({}/{} touching)",
            self.state.rings_touching,
            self.state.required_rings
        );
    }

    /// Discrete key press
    pub fn on_key_down(&mut self, key: Key) {
        let actions = self.keys.actions(key);
        if actions.iter().any(Action::is_navigation) {
            self.audio.play(SoundEffect::Movement);
        }
        if !actions.contains(&Action::Continue) {
            return;
        }

        if self.state.level_complete {
            self.proceed_to_next_level();
        } else if self.state.game_complete {
            self.restart();
        }
    }

    fn win_level(&mut self) {
        log::info!("Level {} complete", self.state.current_level);
        let message = format!(
            "Level {} Complete! Press {} to Continue.",
            self.state.current_level,
            self.keys.continue_key.as_str()
        );
        self.hud.display_message(&message);
        self.hud.set_prompt_visible(true);
        self.audio.play(SoundEffect::LevelComplete);
    }

    fn proceed_to_next_level(&mut self) {
        match self.state.advance_level(self.settings.last_level()) {
            LevelAdvance::NextLevel(level) => {
                self.hud.show_level(level);
                let message = format!(
                    "Level {} Started! Touch the post with {} ring(s).",
                    level, self.state.required_rings
                );
                self.hud.display_message(&message);
                self.hud.set_prompt_visible(false);
                self.spawn_rings(level);
            }
            LevelAdvance::GameComplete => {
                log::info!("All {} levels complete", self.settings.last_level());
                self.hud.show_level(self.state.current_level);
                let message = format!(
                    "You're the pizza master! Press {} to Restart.",
                    self.keys.continue_key.as_str()
                );
                self.hud.display_message(&message);
                self.hud.set_prompt_visible(true);
            }
        }
    }

    fn restart(&mut self) {
        log::info!("Restarting from level 1");
        self.state.restart();
        self.begin_first_level();
    }

    fn begin_first_level(&mut self) {
        self.hud.show_level(self.state.current_level);
        self.hud.display_message(START_MESSAGE);
        self.hud.set_prompt_visible(false);
        self.spawn_rings(self.state.current_level);
    }

    /// Replace all rings with `min(level, anchors)` fresh ones
    fn spawn_rings(&mut self, level: u32) {
        for ring in self.rings.drain(..) {
            self.spawner.destroy_ring(ring);
        }

        let count = (level as usize).min(self.settings.ring_anchors.len());
        for &anchor in &self.settings.ring_anchors[..count] {
            let ring = self.spawner.spawn_ring(anchor);
            self.rings.push(ring);
        }
    }
}
