//! Bone hierarchy storage and queries
//!
//! Bones live in a single contiguous store indexed by slot; relations are
//! resolved through their ids on every query, so bones never point back at
//! the skeleton that owns them.

use crate::bone::{Bone, BoneId};
use glam::DVec2;
use std::collections::{HashMap, HashSet};

/// A hierarchy of bones anchored at a world-space root point
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Skeleton {
    /// Bone records in first-insertion order
    bones: Vec<Bone>,
    /// Bone id to slot in `bones`
    slots: HashMap<BoneId, usize>,
    /// World anchor shared by every root bone
    pub root_x: f64,
    pub root_y: f64,
}

impl Skeleton {
    /// Create an empty skeleton anchored at the origin
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a skeleton from a set of bones (later duplicates overwrite earlier ones)
    pub fn from_bones(bones: impl IntoIterator<Item = Bone>) -> Self {
        let mut skeleton = Self::new();
        for bone in bones {
            skeleton.add_bone(bone);
        }
        skeleton
    }

    /// Set the root anchor
    pub fn with_root(mut self, x: f64, y: f64) -> Self {
        self.set_root(DVec2::new(x, y));
        self
    }

    /// Move the root anchor
    pub fn set_root(&mut self, root: DVec2) {
        self.root_x = root.x;
        self.root_y = root.y;
    }

    /// Root anchor as a vector
    pub fn root(&self) -> DVec2 {
        DVec2::new(self.root_x, self.root_y)
    }

    /// Insert a bone, replacing any bone with the same id in place
    pub fn add_bone(&mut self, bone: Bone) {
        if let Some(&slot) = self.slots.get(&bone.id) {
            log::trace!("Replacing bone {} ('{}')", bone.id, bone.name);
            self.bones[slot] = bone;
        } else {
            self.slots.insert(bone.id, self.bones.len());
            self.bones.push(bone);
        }
    }

    /// Get number of bones
    pub fn len(&self) -> usize {
        self.bones.len()
    }

    /// Check if the skeleton has no bones
    pub fn is_empty(&self) -> bool {
        self.bones.is_empty()
    }

    /// Iterate bones in insertion order
    pub fn bones(&self) -> impl Iterator<Item = &Bone> {
        self.bones.iter()
    }

    /// All bone ids in ascending order
    pub fn bone_ids(&self) -> Vec<BoneId> {
        let mut ids: Vec<BoneId> = self.slots.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: BoneId) -> bool {
        self.slots.contains_key(&id)
    }

    pub fn get_bone(&self, id: BoneId) -> Option<&Bone> {
        self.slots.get(&id).map(|&slot| &self.bones[slot])
    }

    pub fn get_bone_mut(&mut self, id: BoneId) -> Option<&mut Bone> {
        let slot = *self.slots.get(&id)?;
        self.bones.get_mut(slot)
    }

    /// First bone with the given name, in insertion order
    pub fn get_bone_by_name(&self, name: &str) -> Option<&Bone> {
        self.bones.iter().find(|b| b.name == name)
    }

    /// All bones whose parent is `parent_id`
    pub fn get_children(&self, parent_id: BoneId) -> Vec<&Bone> {
        self.bones
            .iter()
            .filter(|b| b.parent_id == Some(parent_id))
            .collect()
    }

    /// Bones without a parent
    pub fn root_bones(&self) -> Vec<&Bone> {
        self.bones.iter().filter(|b| b.is_root()).collect()
    }

    /// Chain of bones from a root down to `end_id`, root first
    pub fn get_chain(&self, end_id: BoneId) -> Vec<&Bone> {
        self.chain_ids(end_id)
            .into_iter()
            .filter_map(|id| self.get_bone(id))
            .collect()
    }

    /// Ids of the chain from a root down to `end_id`, root first.
    ///
    /// The walk stops at a missing bone or at the first id seen twice, so
    /// malformed hierarchies yield a truncated chain instead of looping.
    pub fn chain_ids(&self, end_id: BoneId) -> Vec<BoneId> {
        let mut chain = Vec::new();
        let mut visited = HashSet::new();
        let mut current = Some(end_id);

        while let Some(id) = current {
            if !visited.insert(id) {
                log::debug!("Cycle detected in bone hierarchy at bone {id}");
                break;
            }
            let Some(bone) = self.get_bone(id) else {
                break;
            };
            chain.push(id);
            current = bone.parent_id;
        }

        chain.reverse();
        chain
    }

    /// Parent-to-children adjacency by slot, children in insertion order
    pub(crate) fn child_slots(&self) -> HashMap<BoneId, Vec<usize>> {
        let mut children: HashMap<BoneId, Vec<usize>> = HashMap::new();
        for (slot, bone) in self.bones.iter().enumerate() {
            if let Some(parent) = bone.parent_id {
                children.entry(parent).or_default().push(slot);
            }
        }
        children
    }

    pub(crate) fn slot_of(&self, id: BoneId) -> Option<usize> {
        self.slots.get(&id).copied()
    }

    pub(crate) fn bone_at(&self, slot: usize) -> &Bone {
        &self.bones[slot]
    }

    pub(crate) fn bone_at_mut(&mut self, slot: usize) -> &mut Bone {
        &mut self.bones[slot]
    }
}
