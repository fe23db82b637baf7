//! Shape resolvers: reset-then-apply of per-finger conditions onto a target
//! rig.
//!
//! [`ShapeResolver`] owns the working state: the target skeleton (mutated),
//! the default-pose skeleton (read-only rest rotations), both lookup tables,
//! and the selected shape. Tables are rebuilt explicitly via
//! [`ShapeResolver::set_roots`]/[`ShapeResolver::rebind`]; applying against
//! tables not rebuilt after a skeleton swap is a caller-discipline error and
//! is not detected at runtime.

use crate::error::{MissingReferences, ShapeError};
use crate::joints::{FingerId, JointRole};
use crate::registry::{
    self, DefaultRotations, FingerJointSet, JointNameMap, JointRegistry,
};
use crate::rotation::{self, clamp01, lerp_f32, Axis};
use crate::shape::{HandShape, ShapeTarget, ShapeType};
use crate::skeleton::{JointId, Skeleton};

/// How a target's angle is computed during the apply phase.
#[derive(Copy, Clone, Debug)]
enum AngleMode {
    /// `angle = lerp(0, max_angle, desired)` (static pose).
    Desired,
    /// `angle = clamp01(lerp(desired - lower, desired + upper, t)) * max_angle`
    /// (swept across the tolerance band).
    Band { t: f32 },
}

impl AngleMode {
    fn angle_deg(self, target: &ShapeTarget) -> f32 {
        let max_angle = target.shape_type.max_angle_deg();
        match self {
            AngleMode::Desired => lerp_f32(0.0, max_angle, target.desired),
            AngleMode::Band { t } => {
                let (lo, hi) = target.band();
                clamp01(lerp_f32(lo, hi, t)) * max_angle
            }
        }
    }
}

/// Resolves hand shapes onto an owned target skeleton.
#[derive(Debug, Default)]
pub struct ShapeResolver {
    shape: Option<HandShape>,
    target: Option<Skeleton>,
    default_pose: Option<Skeleton>,
    name_map: JointNameMap,
    target_joints: JointRegistry,
    default_rotations: DefaultRotations,
}

impl ShapeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install explicit name bindings (consulted before substring matching)
    /// and rebind against the current roots.
    pub fn set_name_map(&mut self, name_map: JointNameMap) {
        self.name_map = name_map;
        self.rebind();
    }

    /// Supply the skeleton pair and rebuild both lookup tables.
    pub fn set_roots(&mut self, target: Skeleton, default_pose: Skeleton) {
        self.target = Some(target);
        self.default_pose = Some(default_pose);
        self.rebind();
    }

    /// Rebuild the target registry and recapture default rotations. Must run
    /// after any change of skeleton identity; `set_roots` calls it.
    pub fn rebind(&mut self) {
        self.target_joints = match &self.target {
            Some(skeleton) => registry::build_registry_with(skeleton, &self.name_map),
            None => JointRegistry::default(),
        };
        self.default_rotations = match &self.default_pose {
            Some(skeleton) => {
                let defaults = registry::build_registry_with(skeleton, &self.name_map);
                registry::capture_default_rotations(skeleton, &defaults)
            }
            None => DefaultRotations::default(),
        };
    }

    /// Select (or clear) the shape to resolve.
    pub fn set_shape(&mut self, shape: Option<HandShape>) {
        self.shape = shape;
    }

    pub fn shape(&self) -> Option<&HandShape> {
        self.shape.as_ref()
    }

    /// The posed skeleton, for presentation layers.
    pub fn target(&self) -> Option<&Skeleton> {
        self.target.as_ref()
    }

    /// Joints of one finger in the target rig, keyed by role.
    pub fn finger_joints(&self, finger: FingerId) -> FingerJointSet {
        registry::finger_joints(&self.target_joints, finger)
    }

    /// Restore every registered joint that has a captured default rotation.
    /// Joints without a default entry are left untouched.
    pub fn reset_to_defaults(&mut self) {
        let Self {
            target,
            target_joints,
            default_rotations,
            ..
        } = self;
        if let Some(target) = target.as_mut() {
            reset_joints(target, target_joints, default_rotations);
        }
    }

    /// Apply the selected shape: reset to defaults, then layer per-condition
    /// rotations at each target's desired value. Idempotent for a fixed
    /// shape and default table.
    pub fn apply(&mut self) -> Result<(), ShapeError> {
        self.check_references()?;
        let Self {
            shape,
            target,
            target_joints,
            default_rotations,
            ..
        } = self;
        let (Some(shape), Some(target)) = (shape.as_ref(), target.as_mut()) else {
            return Ok(()); // unreachable: check_references passed
        };
        reset_joints(target, target_joints, default_rotations);
        apply_conditions(target, target_joints, shape, AngleMode::Desired);
        Ok(())
    }

    /// Apply the selected shape swept across its tolerance band at
    /// `t ∈ [0, 1]`. Performs no reset; callers must reset (or `apply`) at
    /// least once when the selected shape changes, otherwise axes the
    /// current shape does not touch keep stale values across ticks.
    pub fn apply_interpolated(&mut self, t: f32) -> Result<(), ShapeError> {
        self.check_references()?;
        let Self {
            shape,
            target,
            target_joints,
            ..
        } = self;
        let (Some(shape), Some(target)) = (shape.as_ref(), target.as_mut()) else {
            return Ok(()); // unreachable: check_references passed
        };
        apply_conditions(target, target_joints, shape, AngleMode::Band { t });
        Ok(())
    }

    fn check_references(&self) -> Result<(), ShapeError> {
        let missing = MissingReferences {
            shape: self.shape.is_none(),
            target_root: self.target.is_none(),
            default_root: self.default_pose.is_none(),
        };
        if missing.any() {
            if missing.shape {
                log::error!("hand shape not assigned");
            }
            if missing.target_root {
                log::error!("target skeleton root not assigned");
            }
            if missing.default_root {
                log::error!("default skeleton root not assigned");
            }
            return Err(ShapeError::MissingReferences(missing));
        }
        Ok(())
    }
}

fn reset_joints(
    skeleton: &mut Skeleton,
    registry: &JointRegistry,
    defaults: &DefaultRotations,
) {
    for (name, &id) in registry.iter() {
        if let Some(&rotation) = defaults.get(name) {
            skeleton.set_local_rotation(id, rotation);
        }
    }
}

fn apply_conditions(
    skeleton: &mut Skeleton,
    registry: &JointRegistry,
    shape: &HandShape,
    mode: AngleMode,
) {
    for condition in &shape.finger_shape_conditions {
        let joints = registry::finger_joints(registry, condition.finger_id);
        if joints.is_empty() {
            log::debug!(
                "no joints resolved for {:?}; skipping condition",
                condition.finger_id
            );
            continue;
        }
        // Proximal and Distal are required; Intermediate and Tip are
        // optional (thumb rigs lack an Intermediate).
        let (Some(&proximal), Some(&distal)) = (
            joints.get(&JointRole::Proximal),
            joints.get(&JointRole::Distal),
        ) else {
            log::warn!(
                "{:?} is missing a Proximal or Distal joint; skipping condition",
                condition.finger_id
            );
            continue;
        };
        let intermediate = joints.get(&JointRole::Intermediate).copied();

        for target in &condition.targets {
            let angle = mode.angle_deg(target);
            match target.shape_type {
                // Full-chain bends: proximal, intermediate when present, distal.
                ShapeType::FullCurl | ShapeType::Pinch => {
                    overwrite_axis(skeleton, proximal, Axis::X, angle);
                    if let Some(intermediate) = intermediate {
                        overwrite_axis(skeleton, intermediate, Axis::X, angle);
                    }
                    overwrite_axis(skeleton, distal, Axis::X, angle);
                }
                ShapeType::BaseCurl => overwrite_axis(skeleton, proximal, Axis::X, angle),
                ShapeType::TipCurl => overwrite_axis(skeleton, distal, Axis::X, angle),
                ShapeType::Spread => {
                    // The little finger has no spread degree of freedom.
                    if condition.finger_id != FingerId::Little {
                        overwrite_axis(skeleton, proximal, Axis::Y, angle);
                    }
                }
            }
        }
    }
}

/// Overwrite one Euler component of the joint's local rotation; the other
/// two components are preserved. Same-axis writes overwrite, cross-axis
/// writes compose.
fn overwrite_axis(skeleton: &mut Skeleton, joint: JointId, axis: Axis, angle_deg: f32) {
    let rotated = rotation::with_axis_deg(skeleton.local_rotation(joint), axis, angle_deg);
    skeleton.set_local_rotation(joint, rotated);
}
