//! Joint discovery: canonical-name registry, default-rotation capture, and
//! per-finger joint sets.
//!
//! Discovery is name-based. By default a depth-first walk matches each node
//! name against [`JOINT_NAMES`] by substring containment (first canonical
//! name in table order wins per node). An integrator can supply a
//! [`JointNameMap`] of exact node-name bindings which is consulted first;
//! substring matching remains the fallback strategy.

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::joints::{FingerId, JointRole, JOINT_NAMES};
use crate::skeleton::{JointId, Skeleton};

/// Canonical joint name -> joint in a specific skeleton. Keys are entries of
/// [`JOINT_NAMES`]; the map may hold fewer than 25 entries.
pub type JointRegistry = HashMap<&'static str, JointId>;

/// Canonical joint name -> local rotation captured from a default-pose rig.
pub type DefaultRotations = HashMap<&'static str, [f32; 4]>;

/// Role -> joint for one finger. Ephemeral; recomputed per condition.
pub type FingerJointSet = HashMap<JointRole, JointId>;

/// Explicit node-name -> canonical-name bindings supplied by an integrator.
/// Entries must name a canonical joint from [`JOINT_NAMES`].
#[derive(Clone, Debug, Default)]
pub struct JointNameMap {
    entries: HashMap<String, &'static str>,
}

impl JointNameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `node_name` to a canonical joint. Returns false (and ignores the
    /// entry) when `canonical` is not one of the 25 canonical names.
    pub fn insert(&mut self, node_name: impl Into<String>, canonical: &str) -> bool {
        match JOINT_NAMES.iter().copied().find(|n| *n == canonical) {
            Some(interned) => {
                self.entries.insert(node_name.into(), interned);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, node_name: &str) -> Option<&'static str> {
        self.entries.get(node_name).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Build a registry from a skeleton with the default (substring) strategy.
pub fn build_registry(skeleton: &Skeleton) -> JointRegistry {
    build_registry_with(skeleton, &JointNameMap::default())
}

/// Build a registry, consulting `name_map` before falling back to substring
/// matching. Missing joints are not an error. When two nodes resolve to the
/// same canonical name, the first in depth-first order stays bound and the
/// later match is reported.
pub fn build_registry_with(skeleton: &Skeleton, name_map: &JointNameMap) -> JointRegistry {
    let mut registry = JointRegistry::default();
    let Some(root) = skeleton.root() else {
        return registry;
    };
    for id in skeleton.descendants(root) {
        let name = skeleton.joint(id).name.as_str();
        let matched = name_map
            .get(name)
            .or_else(|| JOINT_NAMES.iter().copied().find(|c| name.contains(c)));
        if let Some(canonical) = matched {
            match registry.entry(canonical) {
                Entry::Vacant(slot) => {
                    slot.insert(id);
                }
                Entry::Occupied(_) => {
                    log::warn!(
                        "node '{name}' also matches '{canonical}', which is already bound; keeping the first match"
                    );
                }
            }
        }
    }
    registry
}

/// Snapshot each registered joint's local rotation. Call against the
/// default-pose skeleton and its own registry.
pub fn capture_default_rotations(
    skeleton: &Skeleton,
    registry: &JointRegistry,
) -> DefaultRotations {
    registry
        .iter()
        .map(|(name, id)| (*name, skeleton.local_rotation(*id)))
        .collect()
}

/// Joints of one finger, keyed by role. Empty when the registry holds no
/// entries for the finger, which is the caller's signal to skip the
/// condition.
pub fn finger_joints(registry: &JointRegistry, finger: FingerId) -> FingerJointSet {
    let prefix = finger.prefix();
    let mut set = FingerJointSet::default();
    for (name, id) in registry.iter() {
        if let Some(suffix) = name.strip_prefix(prefix) {
            if let Some(role) = JointRole::from_suffix(suffix) {
                set.insert(role, *id);
            }
        }
    }
    set
}
