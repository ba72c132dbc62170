//! Rigid bone segments

use glam::DVec2;
use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Bone identifier, unique within a skeleton
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(transparent))]
pub struct BoneId(pub u32);

impl BoneId {
    /// Create a new bone ID
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw id value
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for BoneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for BoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single rigid segment in a 2D skeleton.
///
/// Angles are in radians. `rest_angle` is the design-time offset relative to
/// the parent, `current_angle` is the animated rotation layered on top of it.
/// The world fields are outputs of forward or inverse kinematics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Bone {
    pub id: BoneId,
    pub name: String,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub parent_id: Option<BoneId>,
    #[cfg_attr(feature = "serde-support", serde(default = "default_length"))]
    pub length: f64,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub rest_angle: f64,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub current_angle: f64,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub world_x: f64,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub world_y: f64,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub world_angle: f64,
    /// Reserved for weighted blending; not read by the solvers
    #[cfg_attr(feature = "serde-support", serde(default = "default_weight"))]
    pub weight: f64,
}

#[cfg(feature = "serde-support")]
const fn default_length() -> f64 {
    1.0
}

#[cfg(feature = "serde-support")]
const fn default_weight() -> f64 {
    1.0
}

impl Bone {
    /// Create a root bone of unit length with zero angles
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: BoneId(id),
            name: name.into(),
            parent_id: None,
            length: 1.0,
            rest_angle: 0.0,
            current_angle: 0.0,
            world_x: 0.0,
            world_y: 0.0,
            world_angle: 0.0,
            weight: 1.0,
        }
    }

    /// Attach to a parent bone
    pub fn with_parent(mut self, parent: u32) -> Self {
        self.parent_id = Some(BoneId(parent));
        self
    }

    /// Set the segment length (negative values are clamped to zero)
    pub fn with_length(mut self, length: f64) -> Self {
        self.length = length.max(0.0);
        self
    }

    /// Set the rest angle in radians
    pub fn with_rest_angle(mut self, rest_angle: f64) -> Self {
        self.rest_angle = rest_angle;
        self
    }

    /// Set the blend weight
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Check if this bone has no parent
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// World-space start point
    pub fn world_position(&self) -> DVec2 {
        DVec2::new(self.world_x, self.world_y)
    }

    /// World-space end point, derived from position, angle and length
    pub fn tip(&self) -> DVec2 {
        self.world_position() + DVec2::from_angle(self.world_angle) * self.length
    }

    pub fn tip_x(&self) -> f64 {
        self.tip().x
    }

    pub fn tip_y(&self) -> f64 {
        self.tip().y
    }

    /// Overwrite the world transform (FK/IK output)
    pub(crate) fn set_world(&mut self, position: DVec2, angle: f64) {
        self.world_x = position.x;
        self.world_y = position.y;
        self.world_angle = angle;
    }
}
