//! Forward kinematics: world transforms from local rotations

use crate::skeleton::Skeleton;
use glam::DVec2;

/// Recompute world position and angle for every bone reachable from a root.
///
/// Root bones sit on the skeleton anchor; every other bone starts at its
/// parent's tip and accumulates the parent's world angle plus its own rest
/// and current angles. Traversal is pre-order on an explicit stack, so a
/// bone is never written before its ancestors. Bones whose parent id does
/// not resolve are not visited and keep their previous transforms.
///
/// Returns the number of bones updated.
pub fn forward_kinematics(skeleton: &mut Skeleton) -> usize {
    let children = skeleton.child_slots();
    let root = skeleton.root();

    // (slot, start position, parent world angle)
    let mut stack: Vec<(usize, DVec2, f64)> = (0..skeleton.len())
        .rev()
        .filter(|&slot| skeleton.bone_at(slot).is_root())
        .map(|slot| (slot, root, 0.0))
        .collect();

    let mut visited = 0;
    while let Some((slot, position, parent_angle)) = stack.pop() {
        let bone = skeleton.bone_at_mut(slot);
        let world_angle = parent_angle + bone.rest_angle + bone.current_angle;
        bone.set_world(position, world_angle);
        visited += 1;

        let tip = bone.tip();
        if let Some(kids) = children.get(&bone.id) {
            // Reverse so the first-inserted child is processed first
            stack.extend(kids.iter().rev().map(|&child| (child, tip, world_angle)));
        }
    }

    log::trace!(
        "Forward kinematics updated {visited} of {} bones",
        skeleton.len()
    );
    visited
}
