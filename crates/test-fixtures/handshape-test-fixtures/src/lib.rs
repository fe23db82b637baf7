use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

use handshape_core::joints::{FingerId, JointRole};
use handshape_core::skeleton::Skeleton;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    shapes: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

pub mod shapes {
    use super::*;
    use handshape_core::shape::HandShape;
    use handshape_core::stored_shape::parse_stored_shape_json;

    pub fn keys() -> Vec<String> {
        MANIFEST.shapes.keys().cloned().collect()
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = MANIFEST
            .shapes
            .get(name)
            .ok_or_else(|| anyhow!("unknown shape fixture '{name}'"))?;
        read_to_string(rel)
    }

    pub fn shape(name: &str) -> Result<HandShape> {
        let raw = json(name)?;
        parse_stored_shape_json(&raw).map_err(|e| anyhow!("shape fixture '{name}': {e}"))
    }
}

pub mod rigs {
    use super::*;

    /// Full hand rig whose node names are exactly the canonical joint names.
    pub fn canonical_rig() -> Skeleton {
        named_rig("", "")
    }

    /// Full hand rig with decorated node names ("LeftIndexProximalBone"),
    /// exercising substring matching.
    pub fn decorated_rig() -> Skeleton {
        named_rig("Left", "Bone")
    }

    /// Build a full hand rig with node names `{prefix}{canonical}{suffix}`.
    /// The thumb chain has no Intermediate joint.
    pub fn named_rig(prefix: &str, suffix: &str) -> Skeleton {
        let mut skel = Skeleton::new();
        let wrist = skel.add_root(&format!("{prefix}Wrist{suffix}"));
        for finger in FingerId::ALL {
            let roles: &[JointRole] = if finger == FingerId::Thumb {
                &[
                    JointRole::Metacarpal,
                    JointRole::Proximal,
                    JointRole::Distal,
                    JointRole::Tip,
                ]
            } else {
                &[
                    JointRole::Metacarpal,
                    JointRole::Proximal,
                    JointRole::Intermediate,
                    JointRole::Distal,
                    JointRole::Tip,
                ]
            };
            let mut parent = wrist;
            for role in roles {
                let name = format!("{prefix}{}{}{suffix}", finger.prefix(), role.suffix());
                parent = skel.add_joint(parent, &name);
            }
        }
        skel
    }
}
