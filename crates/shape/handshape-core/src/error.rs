//! Error types for shape resolution.
//!
//! Expected absence (unknown finger joints, optional Intermediate/Tip) is
//! recovered locally inside the resolvers and never surfaces here; only the
//! hard preconditions and loader validation produce errors.

use std::fmt;

/// Which of the three required references were absent when a resolver ran.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct MissingReferences {
    pub shape: bool,
    pub target_root: bool,
    pub default_root: bool,
}

impl MissingReferences {
    #[inline]
    pub fn any(&self) -> bool {
        self.shape || self.target_root || self.default_root
    }
}

impl fmt::Display for MissingReferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        if self.shape {
            parts.push("hand shape not assigned");
        }
        if self.target_root {
            parts.push("target skeleton root not assigned");
        }
        if self.default_root {
            parts.push("default skeleton root not assigned");
        }
        f.write_str(&parts.join("; "))
    }
}

/// Errors produced by the resolver preconditions and the stored-shape loader.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ShapeError {
    /// One or more of shape / target root / default root were unset.
    /// Checked before any mutation; the operation aborts untouched.
    #[error("{0}")]
    MissingReferences(MissingReferences),

    /// Stored-shape JSON failed to deserialize.
    #[error("shape parse error: {reason}")]
    Parse { reason: String },

    /// A shape target failed validation (desired outside [0, 1], negative
    /// tolerance).
    #[error("invalid shape target for {finger}: {reason}")]
    InvalidTarget { finger: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_references_display_lists_each_item() {
        let missing = MissingReferences {
            shape: true,
            target_root: false,
            default_root: true,
        };
        let text = ShapeError::MissingReferences(missing).to_string();
        assert!(text.contains("hand shape not assigned"));
        assert!(text.contains("default skeleton root not assigned"));
        assert!(!text.contains("target skeleton root"));
    }

    #[test]
    fn missing_references_any() {
        assert!(!MissingReferences::default().any());
        assert!(MissingReferences {
            target_root: true,
            ..Default::default()
        }
        .any());
    }
}
