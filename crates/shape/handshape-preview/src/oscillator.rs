//! Sweep parameter source for the animated preview.

use std::f32::consts::PI;

/// Produces the interpolation parameter `t = (sin(time * π) + 1) / 2`,
/// oscillating 0.5 → 1 → 0.5 → 0 → 0.5 with period 2 in accumulated time.
#[derive(Clone, Debug, Default)]
pub struct SweepOscillator {
    time: f32,
}

impl SweepOscillator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewind to the start of the sweep (t = 0.5, rising).
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    /// Accumulate scaled time.
    pub fn advance(&mut self, dt: f32) {
        self.time += dt;
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    /// Current sweep parameter in [0, 1].
    #[inline]
    pub fn value(&self) -> f32 {
        ((self.time * PI).sin() + 1.0) * 0.5
    }
}
