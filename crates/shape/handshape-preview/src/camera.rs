//! Orbit camera state for the preview viewport.
//!
//! Pure state: input plumbing (mouse deltas, wheel) and painting stay in the
//! host. Drag rotates the model (x inverted), middle-drag pans with speed
//! proportional to zoom, and the wheel zooms within a fixed range.

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 3.0;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrbitCamera {
    /// Accumulated drag in viewport pixels; feeds the model rotation.
    pub drag: [f32; 2],
    /// Pan offset in world units.
    pub pan: [f32; 2],
    pub zoom: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            drag: [0.0, 0.0],
            pan: [0.0, 0.0],
            zoom: 1.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Orbit by a mouse delta; horizontal axis inverted.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.drag[0] -= dx;
        self.drag[1] += dy;
    }

    /// Pan by a mouse delta; speed proportional to zoom.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let speed = 0.01 * self.zoom;
        self.pan[0] += dx * speed;
        self.pan[1] -= dy * speed;
    }

    /// Zoom by a wheel delta (inverted), clamped to the working range.
    pub fn zoom_by(&mut self, delta: f32) {
        self.zoom = (self.zoom - delta * 0.05).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Camera eye position for the preview render.
    pub fn eye_position(&self) -> [f32; 3] {
        [self.pan[0], self.pan[1], -2.0 * self.zoom]
    }

    /// Model rotation Euler degrees `[x, y, z]` derived from the drag.
    pub fn model_rotation_deg(&self) -> [f32; 3] {
        [self.drag[1], self.drag[0], 0.0]
    }

    pub fn reset_view(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zoom_clamps_to_working_range() {
        let mut cam = OrbitCamera::new();
        cam.zoom_by(-100.0);
        assert_eq!(cam.zoom, MAX_ZOOM);
        cam.zoom_by(100.0);
        assert_eq!(cam.zoom, MIN_ZOOM);
    }

    #[test]
    fn rotate_inverts_horizontal_axis() {
        let mut cam = OrbitCamera::new();
        cam.rotate(3.0, 2.0);
        assert_eq!(cam.drag, [-3.0, 2.0]);
        assert_eq!(cam.model_rotation_deg(), [2.0, -3.0, 0.0]);
    }

    #[test]
    fn pan_speed_scales_with_zoom() {
        let mut cam = OrbitCamera::new();
        cam.zoom = 2.0;
        cam.pan(10.0, -5.0);
        assert!((cam.pan[0] - 0.2).abs() < 1e-6);
        assert!((cam.pan[1] - 0.1).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut cam = OrbitCamera::new();
        cam.rotate(5.0, 5.0);
        cam.pan(1.0, 1.0);
        cam.zoom_by(4.0);
        cam.reset_view();
        assert_eq!(cam.eye_position(), [0.0, 0.0, -2.0]);
        assert_eq!(cam.drag, [0.0, 0.0]);
    }
}
