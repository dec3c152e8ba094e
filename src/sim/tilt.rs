//! Tilt-and-return player controller
//!
//! A fresh direction press tilts the object toward a target built from the
//! held directions. Once it arrives it swings back to its rest rotation. The
//! bob key hops the object up and back down independently of tilting.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};

use super::bob::BobAnimation;
use crate::input::{Action, Direction, HeldDirections, Key, KeyBindings};
use crate::settings::TiltSettings;
use crate::{angle_degrees, euler_degrees, rotate_towards};

/// Rotation state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationPhase {
    /// At rest
    Idle,
    /// Moving toward the tilt target
    Rotating,
    /// Returning to the rest rotation
    SnappingBack,
}

/// Object placement owned by the controller; the host copies it to the engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Held-direction combinations in priority order, with their (pitch, roll)
/// sign. Diagonals win over single axes.
const TILT_COMBOS: [(&[Direction], f32, f32); 8] = [
    (&[Direction::Up, Direction::Right], 1.0, -1.0),
    (&[Direction::Up, Direction::Left], 1.0, 1.0),
    (&[Direction::Down, Direction::Right], -1.0, -1.0),
    (&[Direction::Down, Direction::Left], -1.0, 1.0),
    (&[Direction::Up], 1.0, 0.0),
    (&[Direction::Down], -1.0, 0.0),
    (&[Direction::Right], 0.0, -1.0),
    (&[Direction::Left], 0.0, 1.0),
];

/// Tilt offset for the held directions, or None when nothing is held
pub fn tilt_offset(held: &HeldDirections, angle: f32) -> Option<Quat> {
    TILT_COMBOS
        .iter()
        .find(|(dirs, _, _)| dirs.iter().all(|&dir| held.is_held(dir)))
        .map(|&(_, pitch, roll)| euler_degrees(pitch * angle, 0.0, roll * angle))
}

pub struct TiltController {
    settings: TiltSettings,
    keys: KeyBindings,
    transform: Transform,
    original_rotation: Quat,
    original_position: Vec3,
    target_rotation: Quat,
    phase: RotationPhase,
    held: HeldDirections,
    bob: Option<BobAnimation>,
}

impl TiltController {
    /// Capture `start` as the rest placement
    pub fn new(settings: TiltSettings, keys: KeyBindings, start: Transform) -> Self {
        Self {
            settings,
            keys,
            transform: start,
            original_rotation: start.rotation,
            original_position: start.position,
            target_rotation: start.rotation,
            phase: RotationPhase::Idle,
            held: HeldDirections::default(),
            bob: None,
        }
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn phase(&self) -> RotationPhase {
        self.phase
    }

    pub fn target_rotation(&self) -> Quat {
        self.target_rotation
    }

    pub fn original_rotation(&self) -> Quat {
        self.original_rotation
    }

    pub fn is_bobbing(&self) -> bool {
        self.bob.is_some()
    }

    pub fn on_key_down(&mut self, key: Key) {
        for action in self.keys.actions(key) {
            match action {
                Action::Tilt(dir) => {
                    if self.held.press(dir) {
                        self.retarget();
                    }
                }
                Action::Bob => self.start_bob(),
                Action::Continue => {}
            }
        }
    }

    pub fn on_key_up(&mut self, key: Key) {
        for action in self.keys.actions(key) {
            if let Action::Tilt(dir) = action {
                self.held.release(dir);
            }
        }
    }

    /// Per-frame update
    pub fn tick(&mut self, dt: f32) {
        let max_step = self.settings.rotation_speed * dt;
        let snap = self.settings.snap_threshold;

        match self.phase {
            RotationPhase::Idle => {}
            RotationPhase::Rotating => {
                let rotation = rotate_towards(self.transform.rotation, self.target_rotation, max_step);
                if angle_degrees(rotation, self.target_rotation) < snap {
                    self.transform.rotation = self.target_rotation;
                    self.phase = RotationPhase::SnappingBack;
                } else {
                    self.transform.rotation = rotation;
                }
            }
            RotationPhase::SnappingBack => {
                let rotation =
                    rotate_towards(self.transform.rotation, self.original_rotation, max_step);
                if angle_degrees(rotation, self.original_rotation) < snap {
                    self.transform.rotation = self.original_rotation;
                    self.phase = RotationPhase::Idle;
                } else {
                    self.transform.rotation = rotation;
                }
            }
        }

        if let Some(bob) = self.bob.as_mut() {
            self.transform.position = bob.advance(dt);
            if bob.is_finished() {
                self.bob = None;
            }
        }
    }

    /// New target from the current (possibly mid-tilt) rotation
    fn retarget(&mut self) {
        let Some(offset) = tilt_offset(&self.held, self.settings.tilt_angle) else {
            return;
        };
        self.target_rotation = (self.transform.rotation * offset).normalize();
        self.phase = RotationPhase::Rotating;
        log::debug!("Tilt target set ({:?})", self.held);
    }

    fn start_bob(&mut self) {
        if self.bob.is_some() {
            log::debug!("Bob already running - ignored");
            return;
        }
        self.bob = Some(BobAnimation::new(
            self.original_position,
            self.settings.bob_height,
            self.settings.bob_duration,
        ));
    }
}
