//! Sampled bone angles

use super::interpolation::lerp_angle;
use crate::bone::BoneId;
use crate::skeleton::Skeleton;
use std::collections::BTreeMap;

/// A set of bone angles keyed by bone id, ordered by id
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pose {
    angles: BTreeMap<BoneId, f64>,
}

impl Pose {
    /// Create an empty pose
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: BoneId) -> Option<f64> {
        self.angles.get(&id).copied()
    }

    pub fn set(&mut self, id: BoneId, angle: f64) {
        self.angles.insert(id, angle);
    }

    pub fn len(&self) -> usize {
        self.angles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    pub fn contains(&self, id: BoneId) -> bool {
        self.angles.contains_key(&id)
    }

    /// Iterate `(bone, angle)` pairs in ascending bone id order
    pub fn iter(&self) -> impl Iterator<Item = (BoneId, f64)> + '_ {
        self.angles.iter().map(|(&id, &angle)| (id, angle))
    }

    pub fn bone_ids(&self) -> impl Iterator<Item = BoneId> + '_ {
        self.angles.keys().copied()
    }

    /// Interpolate towards `other` by `alpha`.
    ///
    /// The result covers the union of both poses; a bone missing from one
    /// side counts as angle 0.0 there.
    pub fn blend(&self, other: &Self, alpha: f64) -> Self {
        let mut angles = BTreeMap::new();
        for id in self.bone_ids().chain(other.bone_ids()) {
            angles.entry(id).or_insert_with(|| {
                let from = self.get(id).unwrap_or(0.0);
                let to = other.get(id).unwrap_or(0.0);
                lerp_angle(from, to, alpha)
            });
        }
        Self { angles }
    }

    /// Write angles onto matching bones as `current_angle`.
    ///
    /// Bones not named by the pose keep their angle; ids missing from the
    /// skeleton are skipped. Returns the number of bones written.
    pub fn apply_to(&self, skeleton: &mut Skeleton) -> usize {
        let mut applied = 0;
        for (id, angle) in self.iter() {
            if let Some(bone) = skeleton.get_bone_mut(id) {
                bone.current_angle = angle;
                applied += 1;
            }
        }
        applied
    }

    /// Borrow the underlying map
    pub fn angles(&self) -> &BTreeMap<BoneId, f64> {
        &self.angles
    }
}

impl From<BTreeMap<BoneId, f64>> for Pose {
    fn from(angles: BTreeMap<BoneId, f64>) -> Self {
        Self { angles }
    }
}

impl FromIterator<(BoneId, f64)> for Pose {
    fn from_iter<I: IntoIterator<Item = (BoneId, f64)>>(iter: I) -> Self {
        Self {
            angles: iter.into_iter().collect(),
        }
    }
}
