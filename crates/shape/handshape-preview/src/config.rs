//! Preview configuration.

use serde::{Deserialize, Serialize};

/// Speed slider range exposed by the preview UI.
pub const MIN_SPEED: f32 = 0.1;
pub const MAX_SPEED: f32 = 3.0;

/// Settings for the preview driver and its camera projection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Whether ticks sweep the shape across its tolerance band.
    pub animating: bool,
    /// Oscillator speed multiplier, clamped to [`MIN_SPEED`]..=[`MAX_SPEED`].
    pub speed: f32,
    /// Camera field of view in degrees.
    pub fov_deg: f32,
    /// Near clip plane; close enough not to clip during zoom-in.
    pub near_clip: f32,
    pub far_clip: f32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            animating: true,
            speed: 1.0,
            fov_deg: 30.0,
            near_clip: 0.01,
            far_clip: 10.0,
        }
    }
}

impl PreviewConfig {
    /// Clamp and set the oscillator speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    }
}
