//! Win-condition hold timer
//!
//! Counts how long the required rings have stayed on the post. Only one timer
//! runs per level; it stops (and zeroes) as soon as the requirement breaks.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WinTimer {
    elapsed: f32,
    hold: f32,
    running: bool,
}

impl WinTimer {
    pub fn new(hold_seconds: f32) -> Self {
        Self {
            elapsed: 0.0,
            hold: hold_seconds,
            running: false,
        }
    }

    /// Begin counting from zero. No-op if already running.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.running = true;
        self.elapsed = 0.0;
    }

    /// Stop and zero the timer
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed = 0.0;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds accumulated since the timer started
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn hold(&self) -> f32 {
        self.hold
    }

    /// Advance while `holding`. Returns true on the tick the hold threshold is
    /// reached; the timer stops there.
    pub fn advance(&mut self, dt: f32, holding: bool) -> bool {
        if !self.running {
            return false;
        }
        if !holding {
            self.reset();
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.hold {
            self.running = false;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_timer_does_not_count() {
        let mut t = WinTimer::new(2.0);
        assert!(!t.advance(5.0, true));
        assert_eq!(t.elapsed(), 0.0);
    }

    #[test]
    fn test_fires_once_at_threshold() {
        let mut t = WinTimer::new(2.0);
        t.start();
        assert!(!t.advance(1.5, true));
        assert!(t.advance(0.5, true));
        assert!(!t.is_running());
        assert!(!t.advance(1.0, true));
    }

    #[test]
    fn test_break_resets() {
        let mut t = WinTimer::new(2.0);
        t.start();
        t.advance(1.9, true);
        assert!(!t.advance(0.1, false));
        assert_eq!(t.elapsed(), 0.0);
        assert!(!t.is_running());
    }

    #[test]
    fn test_start_while_running_keeps_progress() {
        let mut t = WinTimer::new(2.0);
        t.start();
        t.advance(1.0, true);
        t.start();
        assert_eq!(t.elapsed(), 1.0);
    }
}
