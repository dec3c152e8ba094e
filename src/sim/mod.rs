//! Gameplay simulation
//!
//! Everything here is driven by explicit `tick(dt)` calls and event methods;
//! no engine types, no globals. Engine side effects go through `crate::host`.

pub mod bob;
pub mod level;
pub mod tick;
pub mod tilt;
pub mod win_timer;

pub use bob::{BobAnimation, BobPhase};
pub use level::{Hud, LevelAdvance, LevelManager, LevelState, START_MESSAGE};
pub use tick::{Scene, TickInput, tick};
pub use tilt::{RotationPhase, TiltController, Transform, tilt_offset};
pub use win_timer::WinTimer;
