//! Ring Post - get the rings on the post and keep them there
//!
//! Core modules:
//! - `sim`: Level progression, win timer, tilt controller, scene tick
//! - `host`: Collaborator traits the engine implements, plus headless versions
//! - `input`: Physical keys, game actions, and bindings
//! - `audio`: Win/movement sound playback with volume handling
//! - `settings`: Data-driven tuning loaded from JSON

pub mod audio;
pub mod host;
pub mod input;
pub mod settings;
pub mod sim;

pub use settings::Settings;

use glam::Quat;

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Tag the post's trigger volume filters on
    pub const RING_TAG: &str = "Ring";

    /// Seconds the required rings must stay on the post
    pub const WIN_HOLD_SECONDS: f32 = 2.0;

    /// Ring spawn anchors, one per authored level
    pub const RING_ANCHORS: [Vec3; 3] = [
        Vec3::new(-0.022, 0.154, -0.263),
        Vec3::new(-0.022, 0.154, 0.257),
        Vec3::new(-0.34, 0.154, -0.003),
    ];

    /// Tilt speed (degrees/second)
    pub const ROTATION_SPEED: f32 = 720.0;
    /// Tilt per held direction (degrees)
    pub const TILT_ANGLE: f32 = 45.0;
    /// Rotations closer than this are considered equal (degrees)
    pub const SNAP_THRESHOLD: f32 = 0.01;

    /// Bob lift above the rest position
    pub const BOB_HEIGHT: f32 = 0.2;
    /// Duration of each bob half (up, then down)
    pub const BOB_DURATION: f32 = 0.1;
}

/// Rotation from Euler angles in degrees, applied Z first, then X, then Y
#[inline]
pub fn euler_degrees(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_rotation_y(y.to_radians())
        * Quat::from_rotation_x(x.to_radians())
        * Quat::from_rotation_z(z.to_radians())
}

/// Angle between two rotations (degrees)
#[inline]
pub fn angle_degrees(a: Quat, b: Quat) -> f32 {
    a.angle_between(b).to_degrees()
}

/// Rotate `from` toward `to` by at most `max_degrees`, landing exactly on `to`
/// when it is within reach
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let max_degrees = max_degrees.max(0.0);
    let angle = angle_degrees(from, to);
    if angle <= max_degrees {
        return to;
    }
    if max_degrees == 0.0 {
        return from;
    }
    from.slerp(to, max_degrees / angle).normalize()
}
