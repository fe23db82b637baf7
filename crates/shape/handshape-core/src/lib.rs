//! Hand-shape pose resolution (engine-agnostic).
//!
//! This crate maps a declarative per-finger hand-shape specification onto a
//! skeletal hand rig: joint discovery by canonical name, default-rotation
//! capture from a rest-pose rig, and two resolvers: static (reset then
//! apply at the desired value) and interpolated (swept across each target's
//! tolerance band for preview animation). Presentation concerns (asset IO
//! beyond the stored-shape JSON, camera input, mesh baking) live in
//! adapters; see the `handshape-preview` crate.

pub mod error;
pub mod joints;
pub mod registry;
pub mod resolver;
pub mod rotation;
pub mod shape;
pub mod skeleton;
pub mod stored_shape;

// Re-exports for consumers (adapters)
pub use error::{MissingReferences, ShapeError};
pub use joints::{FingerId, JointRole, JOINT_NAMES};
pub use registry::{
    build_registry, build_registry_with, capture_default_rotations, finger_joints,
    DefaultRotations, FingerJointSet, JointNameMap, JointRegistry,
};
pub use resolver::ShapeResolver;
pub use rotation::Axis;
pub use shape::{FingerShapeCondition, HandShape, ShapeTarget, ShapeType};
pub use skeleton::{Joint, JointId, Skeleton};
pub use stored_shape::{parse_stored_shape_json, validate_shape};
