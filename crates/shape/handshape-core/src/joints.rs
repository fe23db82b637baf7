//! Canonical joint naming for hand rigs.
//!
//! Joint discovery is name-based: node names are expected to contain one of
//! the canonical names below as a substring (see `registry`). The thumb has
//! no Intermediate joint, so the table holds 25 entries, not 26.

use serde::{Deserialize, Serialize};

/// The five fingers a shape condition can address.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum FingerId {
    Thumb,
    Index,
    Middle,
    Ring,
    Little,
}

impl FingerId {
    pub const ALL: [FingerId; 5] = [
        FingerId::Thumb,
        FingerId::Index,
        FingerId::Middle,
        FingerId::Ring,
        FingerId::Little,
    ];

    /// Canonical-name prefix for this finger's joints.
    #[inline]
    pub fn prefix(self) -> &'static str {
        match self {
            FingerId::Thumb => "Thumb",
            FingerId::Index => "Index",
            FingerId::Middle => "Middle",
            FingerId::Ring => "Ring",
            FingerId::Little => "Little",
        }
    }
}

/// Anatomical position of a joint within a finger chain.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum JointRole {
    Metacarpal,
    Proximal,
    Intermediate,
    Distal,
    Tip,
}

impl JointRole {
    /// Canonical-name suffix for this role.
    #[inline]
    pub fn suffix(self) -> &'static str {
        match self {
            JointRole::Metacarpal => "Metacarpal",
            JointRole::Proximal => "Proximal",
            JointRole::Intermediate => "Intermediate",
            JointRole::Distal => "Distal",
            JointRole::Tip => "Tip",
        }
    }

    /// Parse a registry-key suffix back into a role.
    pub fn from_suffix(suffix: &str) -> Option<JointRole> {
        match suffix {
            "Metacarpal" => Some(JointRole::Metacarpal),
            "Proximal" => Some(JointRole::Proximal),
            "Intermediate" => Some(JointRole::Intermediate),
            "Distal" => Some(JointRole::Distal),
            "Tip" => Some(JointRole::Tip),
            _ => None,
        }
    }
}

/// The wrist entry of [`JOINT_NAMES`].
pub const WRIST: &str = "Wrist";

/// Canonical joint names checked, in order, against every node name.
/// First name contained in a node's name wins for that node.
pub const JOINT_NAMES: [&str; 25] = [
    "Wrist",
    "ThumbMetacarpal",
    "ThumbProximal",
    "ThumbDistal",
    "ThumbTip",
    "IndexMetacarpal",
    "IndexProximal",
    "IndexIntermediate",
    "IndexDistal",
    "IndexTip",
    "MiddleMetacarpal",
    "MiddleProximal",
    "MiddleIntermediate",
    "MiddleDistal",
    "MiddleTip",
    "RingMetacarpal",
    "RingProximal",
    "RingIntermediate",
    "RingDistal",
    "RingTip",
    "LittleMetacarpal",
    "LittleProximal",
    "LittleIntermediate",
    "LittleDistal",
    "LittleTip",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_round_trip_through_suffixes() {
        for role in [
            JointRole::Metacarpal,
            JointRole::Proximal,
            JointRole::Intermediate,
            JointRole::Distal,
            JointRole::Tip,
        ] {
            assert_eq!(JointRole::from_suffix(role.suffix()), Some(role));
        }
        assert_eq!(JointRole::from_suffix("Knuckle"), None);
    }

    #[test]
    fn canonical_table_covers_every_finger_prefix() {
        for finger in FingerId::ALL {
            let count = JOINT_NAMES
                .iter()
                .filter(|n| n.starts_with(finger.prefix()))
                .count();
            // Thumb has no Intermediate.
            let expected = if finger == FingerId::Thumb { 4 } else { 5 };
            assert_eq!(count, expected, "{finger:?}");
        }
    }
}
