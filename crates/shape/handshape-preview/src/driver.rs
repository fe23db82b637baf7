//! Preview driver: ties a shape resolver to a tick source and view state.
//!
//! The driver owns the resolver and exposes an explicit lifecycle: `attach`
//! binds a skeleton pair and applies the selected shape once, `tick` sweeps
//! the shape across its tolerance band, `detach` restores the rest pose.
//! Hosts call these from their own update loop; nothing here registers
//! global callbacks. Dropping an attached driver detaches it.

use handshape_core::registry::JointNameMap;
use handshape_core::resolver::ShapeResolver;
use handshape_core::shape::HandShape;
use handshape_core::skeleton::Skeleton;

use crate::camera::OrbitCamera;
use crate::config::PreviewConfig;
use crate::oscillator::SweepOscillator;

pub struct PreviewDriver {
    resolver: ShapeResolver,
    oscillator: SweepOscillator,
    camera: OrbitCamera,
    config: PreviewConfig,
    attached: bool,
}

impl PreviewDriver {
    pub fn new(config: PreviewConfig) -> Self {
        Self {
            resolver: ShapeResolver::new(),
            oscillator: SweepOscillator::new(),
            camera: OrbitCamera::new(),
            config,
            attached: false,
        }
    }

    /// Bind the skeleton pair, rebuild lookup tables, and apply the selected
    /// shape once (static pose). Re-attaching replaces the previous pair.
    pub fn attach(&mut self, target: Skeleton, default_pose: Skeleton) {
        self.resolver.set_roots(target, default_pose);
        self.attached = true;
        self.apply_static();
    }

    /// Restore the rest pose and clear the selected shape. Safe to call when
    /// not attached.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.resolver.reset_to_defaults();
        self.resolver.set_shape(None);
        self.attached = false;
    }

    /// Select a shape to preview (or clear the selection). Rewinds the sweep
    /// and applies the static pose once, so interpolated ticks never layer
    /// onto a stale pose.
    pub fn select_shape(&mut self, shape: Option<HandShape>) {
        let cleared = shape.is_none();
        self.resolver.set_shape(shape);
        self.oscillator.reset();
        if cleared {
            self.resolver.reset_to_defaults();
        } else {
            self.apply_static();
        }
    }

    /// Install explicit joint-name bindings (forwarded to the resolver).
    pub fn set_name_map(&mut self, name_map: JointNameMap) {
        self.resolver.set_name_map(name_map);
    }

    /// Toggle band-sweep animation. Turning it off re-applies the static
    /// pose so the view settles on the desired values.
    pub fn set_animating(&mut self, animating: bool) {
        self.config.animating = animating;
        if !animating {
            self.apply_static();
        }
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.config.set_speed(speed);
    }

    /// Advance the preview by `dt` seconds. No-op unless attached, animating,
    /// and a shape is selected.
    pub fn tick(&mut self, dt: f32) {
        if !self.attached || !self.config.animating || self.resolver.shape().is_none() {
            return;
        }
        self.oscillator.advance(dt * self.config.speed);
        let t = self.oscillator.value();
        if let Err(e) = self.resolver.apply_interpolated(t) {
            log::error!("preview tick failed: {e}");
        }
    }

    fn apply_static(&mut self) {
        if !self.attached || self.resolver.shape().is_none() {
            return;
        }
        if let Err(e) = self.resolver.apply() {
            log::error!("shape apply failed: {e}");
        }
    }

    /// The posed skeleton for mesh baking/rendering, when attached.
    pub fn pose(&self) -> Option<&Skeleton> {
        self.resolver.target()
    }

    pub fn resolver(&self) -> &ShapeResolver {
        &self.resolver
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    pub fn config(&self) -> &PreviewConfig {
        &self.config
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Current sweep parameter, for UI display.
    pub fn sweep_value(&self) -> f32 {
        self.oscillator.value()
    }
}

impl Drop for PreviewDriver {
    fn drop(&mut self) {
        self.detach();
    }
}
