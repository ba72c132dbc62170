//! Keyframes: bone angles anchored at a point in time

use super::interpolation::Easing;
use crate::bone::BoneId;
use std::collections::BTreeMap;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Bone angles at a given time.
///
/// `easing` shapes the interval that starts at this keyframe and ends at
/// the next one in the clip.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
pub struct Keyframe {
    /// Time in seconds
    pub time: f64,
    /// Angle per bone; may cover only part of the skeleton
    pub bone_angles: BTreeMap<BoneId, f64>,
    #[cfg_attr(feature = "serde-support", serde(default))]
    pub easing: Easing,
}

impl Keyframe {
    /// Create an empty linear keyframe (negative times are clamped to zero)
    pub fn new(time: f64) -> Self {
        Self {
            time: time.max(0.0),
            bone_angles: BTreeMap::new(),
            easing: Easing::Linear,
        }
    }

    /// Create a keyframe from `(bone, angle)` pairs
    pub fn from_angles(time: f64, angles: impl IntoIterator<Item = (u32, f64)>) -> Self {
        let mut keyframe = Self::new(time);
        keyframe
            .bone_angles
            .extend(angles.into_iter().map(|(id, angle)| (BoneId(id), angle)));
        keyframe
    }

    pub fn with_angle(mut self, bone: u32, angle: f64) -> Self {
        self.bone_angles.insert(BoneId(bone), angle);
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn angle(&self, bone: BoneId) -> Option<f64> {
        self.bone_angles.get(&bone).copied()
    }
}
