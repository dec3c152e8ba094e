//! One-shot bob animation: lift from the rest position, then drop back

use glam::Vec3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BobPhase {
    Rising,
    Falling,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BobAnimation {
    rest: Vec3,
    peak: Vec3,
    duration: f32,
    elapsed: f32,
    phase: BobPhase,
}

impl BobAnimation {
    /// Bob `height` units straight up from `rest`, `duration` seconds each way
    pub fn new(rest: Vec3, height: f32, duration: f32) -> Self {
        Self {
            rest,
            peak: rest + Vec3::Y * height,
            duration,
            elapsed: 0.0,
            phase: BobPhase::Rising,
        }
    }

    pub fn phase(&self) -> BobPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BobPhase::Done
    }

    /// Return the position for this frame, then advance by `dt`.
    ///
    /// Each phase's first frame sits at its start point (fraction 0).
    pub fn advance(&mut self, dt: f32) -> Vec3 {
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);

        match self.phase {
            BobPhase::Rising => {
                if t >= 1.0 {
                    // The peak frame is also the first falling frame
                    self.phase = BobPhase::Falling;
                    self.elapsed = dt;
                    self.peak
                } else {
                    self.elapsed += dt;
                    self.rest.lerp(self.peak, t)
                }
            }
            BobPhase::Falling => {
                if t >= 1.0 {
                    self.phase = BobPhase::Done;
                    self.rest
                } else {
                    self.elapsed += dt;
                    self.peak.lerp(self.rest, t)
                }
            }
            BobPhase::Done => self.rest,
        }
    }
}
