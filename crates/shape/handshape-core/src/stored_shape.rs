//! Stored-shape JSON loading.
//!
//! Public API: parse authoring-tool JSON (see fixtures/shapes/*.json) into
//! the canonical [`HandShape`] model and validate the field contract:
//! `desired` in [0, 1], tolerances non-negative. Tolerance validation
//! happens here so the resolvers can assume well-formed bands.

use crate::error::ShapeError;
use crate::shape::HandShape;

pub fn parse_stored_shape_json(s: &str) -> Result<HandShape, ShapeError> {
    let shape: HandShape = serde_json::from_str(s).map_err(|e| ShapeError::Parse {
        reason: e.to_string(),
    })?;
    validate_shape(&shape)?;
    Ok(shape)
}

/// Basic validation of a deserialized (or hand-built) shape.
pub fn validate_shape(shape: &HandShape) -> Result<(), ShapeError> {
    for condition in &shape.finger_shape_conditions {
        for target in &condition.targets {
            if !(0.0..=1.0).contains(&target.desired) {
                return Err(ShapeError::InvalidTarget {
                    finger: format!("{:?}", condition.finger_id),
                    reason: format!("desired {} outside [0, 1]", target.desired),
                });
            }
            if target.lower_tolerance < 0.0 || target.upper_tolerance < 0.0 {
                return Err(ShapeError::InvalidTarget {
                    finger: format!("{:?}", condition.finger_id),
                    reason: format!(
                        "negative tolerance (lower {}, upper {})",
                        target.lower_tolerance, target.upper_tolerance
                    ),
                });
            }
        }
    }
    Ok(())
}
