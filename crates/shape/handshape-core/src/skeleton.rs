//! Skeleton arena: a hierarchical tree of named joints with local rotations.
//!
//! Joints are stored in a flat arena indexed by [`JointId`]; the tree shape
//! lives in parent/children links. Depth-first iteration visits a parent
//! before its children, children in insertion order.

use serde::{Deserialize, Serialize};

use crate::rotation::{self, IDENTITY};

/// Index of a joint within a [`Skeleton`] arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct JointId(pub u32);

/// One node of the skeleton tree.
#[derive(Clone, Debug)]
pub struct Joint {
    pub name: String,
    /// Local rotation quaternion (x, y, z, w).
    pub local_rotation: [f32; 4],
    pub parent: Option<JointId>,
    children: Vec<JointId>,
}

impl Joint {
    pub fn children(&self) -> &[JointId] {
        &self.children
    }
}

/// Arena-backed joint hierarchy.
#[derive(Clone, Debug, Default)]
pub struct Skeleton {
    joints: Vec<Joint>,
}

impl Skeleton {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root joint (no parent). The first root added is the traversal
    /// root returned by [`Skeleton::root`].
    pub fn add_root(&mut self, name: &str) -> JointId {
        self.push(name, None)
    }

    /// Add a child joint under `parent`.
    pub fn add_joint(&mut self, parent: JointId, name: &str) -> JointId {
        let id = self.push(name, Some(parent));
        self.joints[parent.0 as usize].children.push(id);
        id
    }

    fn push(&mut self, name: &str, parent: Option<JointId>) -> JointId {
        let id = JointId(self.joints.len() as u32);
        self.joints.push(Joint {
            name: name.to_string(),
            local_rotation: IDENTITY,
            parent,
            children: Vec::new(),
        });
        id
    }

    /// First parentless joint, if any.
    pub fn root(&self) -> Option<JointId> {
        self.joints
            .iter()
            .position(|j| j.parent.is_none())
            .map(|i| JointId(i as u32))
    }

    pub fn joint(&self, id: JointId) -> &Joint {
        &self.joints[id.0 as usize]
    }

    pub fn joint_mut(&mut self, id: JointId) -> &mut Joint {
        &mut self.joints[id.0 as usize]
    }

    #[inline]
    pub fn local_rotation(&self, id: JointId) -> [f32; 4] {
        self.joints[id.0 as usize].local_rotation
    }

    #[inline]
    pub fn set_local_rotation(&mut self, id: JointId, rotation: [f32; 4]) {
        self.joints[id.0 as usize].local_rotation = rotation;
    }

    /// Local rotation as XYZ Euler degrees; convenience for tests/presentation.
    pub fn local_euler_deg(&self, id: JointId) -> [f32; 3] {
        rotation::euler_deg_from_quat(self.local_rotation(id))
    }

    pub fn len(&self) -> usize {
        self.joints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }

    /// Depth-first order from `root`, parent before children, children in
    /// insertion order. Includes `root` itself.
    pub fn descendants(&self, root: JointId) -> Vec<JointId> {
        let mut order = Vec::with_capacity(self.joints.len());
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            order.push(id);
            // Reverse push so insertion order pops first.
            for &child in self.joint(id).children.iter().rev() {
                stack.push(child);
            }
        }
        order
    }
}
