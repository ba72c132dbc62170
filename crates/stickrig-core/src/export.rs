//! Rounded snapshots of a posed skeleton for renderers and serializers

use crate::animation::PlaybackState;
use crate::bone::{Bone, BoneId};
use crate::skeleton::Skeleton;

#[cfg(feature = "serde-support")]
use serde::Serialize;

/// Round to 4 decimal digits
pub fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

fn round_pair(x: f64, y: f64) -> (f64, f64) {
    (round4(x), round4(y))
}

/// Exported view of a single bone
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct BoneExport {
    pub id: BoneId,
    pub name: String,
    pub parent_id: Option<BoneId>,
    pub length: f64,
    pub rest_angle: f64,
    pub current_angle: f64,
    pub world_x: f64,
    pub world_y: f64,
    pub world_angle: f64,
    pub tip: (f64, f64),
}

impl From<&Bone> for BoneExport {
    fn from(bone: &Bone) -> Self {
        let tip = bone.tip();
        Self {
            id: bone.id,
            name: bone.name.clone(),
            parent_id: bone.parent_id,
            length: round4(bone.length),
            rest_angle: round4(bone.rest_angle),
            current_angle: round4(bone.current_angle),
            world_x: round4(bone.world_x),
            world_y: round4(bone.world_y),
            world_angle: round4(bone.world_angle),
            tip: round_pair(tip.x, tip.y),
        }
    }
}

/// Exported view of a skeleton, bones in ascending id order
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct SkeletonExport {
    pub root: (f64, f64),
    pub bones: Vec<BoneExport>,
}

impl SkeletonExport {
    pub fn bone(&self, id: BoneId) -> Option<&BoneExport> {
        self.bones
            .binary_search_by_key(&id, |b| b.id)
            .ok()
            .map(|index| &self.bones[index])
    }
}

/// Animator state plus the posed skeleton at one instant
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize))]
pub struct FrameExport {
    pub time: f64,
    pub clip: Option<String>,
    pub state: PlaybackState,
    pub blend_alpha: f64,
    pub skeleton: SkeletonExport,
}

impl Skeleton {
    /// Snapshot the current transforms without re-running kinematics
    pub fn export(&self) -> SkeletonExport {
        let mut bones: Vec<BoneExport> = self.bones().map(BoneExport::from).collect();
        bones.sort_by_key(|b| b.id);

        SkeletonExport {
            root: round_pair(self.root_x, self.root_y),
            bones,
        }
    }
}
