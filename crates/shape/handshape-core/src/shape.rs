//! Hand-shape input asset model.
//!
//! A [`HandShape`] is an ordered sequence of per-finger conditions, each
//! carrying one or more shape targets. The model is read-only to the
//! resolvers; authoring happens upstream. Wire field names follow the
//! stored-shape JSON format (see `stored_shape`).

use serde::{Deserialize, Serialize};

use crate::joints::FingerId;
use crate::rotation::Axis;

/// The per-finger constraint kinds a target can express.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    FullCurl,
    BaseCurl,
    TipCurl,
    Pinch,
    Spread,
}

impl ShapeType {
    /// Fixed rotation reach in degrees at `desired = 1.0`.
    #[inline]
    pub fn max_angle_deg(self) -> f32 {
        match self {
            ShapeType::FullCurl | ShapeType::BaseCurl | ShapeType::TipCurl => 90.0,
            ShapeType::Pinch => 45.0,
            ShapeType::Spread => 20.0,
        }
    }

    /// Euler axis this shape type writes to.
    #[inline]
    pub fn axis(self) -> Axis {
        match self {
            ShapeType::Spread => Axis::Y,
            _ => Axis::X,
        }
    }
}

/// One constraint: a shape type with a desired value and a tolerance band.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ShapeTarget {
    #[serde(rename = "shapeType")]
    pub shape_type: ShapeType,
    /// Desired value in [0, 1].
    pub desired: f32,
    #[serde(rename = "lowerTolerance", default)]
    pub lower_tolerance: f32,
    #[serde(rename = "upperTolerance", default)]
    pub upper_tolerance: f32,
}

impl ShapeTarget {
    pub fn new(shape_type: ShapeType, desired: f32) -> Self {
        Self {
            shape_type,
            desired,
            lower_tolerance: 0.0,
            upper_tolerance: 0.0,
        }
    }

    pub fn with_tolerance(shape_type: ShapeType, desired: f32, lower: f32, upper: f32) -> Self {
        Self {
            shape_type,
            desired,
            lower_tolerance: lower,
            upper_tolerance: upper,
        }
    }

    /// Tolerance band endpoints `(desired - lower, desired + upper)`.
    /// Endpoints may fall outside [0, 1]; the interpolated resolver clamps
    /// the swept value, not the endpoints.
    #[inline]
    pub fn band(&self) -> (f32, f32) {
        (
            self.desired - self.lower_tolerance,
            self.desired + self.upper_tolerance,
        )
    }
}

/// Targets for a single finger. A finger may appear in more than one
/// condition; later conditions overwrite earlier per-axis values.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct FingerShapeCondition {
    #[serde(rename = "fingerID")]
    pub finger_id: FingerId,
    pub targets: Vec<ShapeTarget>,
}

/// A declarative hand pose: ordered finger conditions.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct HandShape {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "fingerShapeConditions")]
    pub finger_shape_conditions: Vec<FingerShapeCondition>,
}

impl HandShape {
    pub fn new(name: &str, conditions: Vec<FingerShapeCondition>) -> Self {
        Self {
            name: name.to_string(),
            finger_shape_conditions: conditions,
        }
    }
}
