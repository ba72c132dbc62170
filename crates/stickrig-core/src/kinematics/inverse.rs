//! FABRIK (Forward And Backward Reaching Inverse Kinematics)
//!
//! Solves the chain from a root bone down to an end effector so the end
//! effector's tip reaches a target point, then converts the solved joint
//! positions back into bone-local angles.

use crate::bone::BoneId;
use crate::skeleton::Skeleton;
use glam::DVec2;

/// Denominator substituted for coincident joints
const DEGENERATE_EPSILON: f64 = 1e-9;

/// Configuration for the FABRIK solver
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkConfig {
    /// Maximum number of backward/forward rounds
    pub iterations: u32,
    /// Tip-to-target distance accepted as converged
    pub tolerance: f64,
}

impl IkConfig {
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for IkConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            tolerance: 0.01,
        }
    }
}

/// Outcome of an IK solve.
///
/// `converged` is informational: unreachable targets still leave the chain
/// in a valid, length-preserving pose pointing at the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IkResult {
    /// Whether the tip ended within tolerance of the target
    pub converged: bool,
    /// Final tip-to-target distance
    pub distance: f64,
    /// Solver rounds performed (1 for the stretch pass, 0 for a no-op)
    pub iterations: u32,
}

impl IkResult {
    fn skipped() -> Self {
        Self {
            converged: false,
            distance: f64::INFINITY,
            iterations: 0,
        }
    }
}

/// Move `from` onto the segment towards `toward` so it sits `length` away
fn place_along(from: DVec2, toward: DVec2, length: f64) -> DVec2 {
    let r = from.distance(toward);
    let lambda = length / if r > 0.0 { r } else { DEGENERATE_EPSILON };
    from.lerp(toward, lambda)
}

/// Solve the chain ending at `end_effector` towards `target`.
///
/// Only bones on the chain are modified: their `current_angle` and world
/// transforms are written from the solved positions, and they are not run
/// through forward kinematics again. Chains shorter than two bones are left
/// untouched and reported as not converged.
pub fn solve_fabrik(
    skeleton: &mut Skeleton,
    end_effector: BoneId,
    target: DVec2,
    config: &IkConfig,
) -> IkResult {
    let chain: Vec<usize> = skeleton
        .chain_ids(end_effector)
        .into_iter()
        .filter_map(|id| skeleton.slot_of(id))
        .collect();

    if chain.len() < 2 {
        log::debug!(
            "IK chain for bone {end_effector} has {} bone(s), skipping",
            chain.len()
        );
        return IkResult::skipped();
    }

    // N joints plus the tip of the last bone
    let mut positions: Vec<DVec2> = chain
        .iter()
        .map(|&slot| skeleton.bone_at(slot).world_position())
        .collect();
    let last = chain[chain.len() - 1];
    positions.push(skeleton.bone_at(last).tip());

    let lengths: Vec<f64> = chain
        .iter()
        .map(|&slot| skeleton.bone_at(slot).length)
        .collect();
    let root = positions[0];
    let total_length: f64 = lengths.iter().sum();
    let tip_index = positions.len() - 1;

    let mut iterations = 0;
    if root.distance(target) > total_length {
        // Out of reach: lay the chain straight along the ray towards the target
        for (i, &length) in lengths.iter().enumerate() {
            positions[i + 1] = place_along(positions[i], target, length);
        }
        iterations = 1;
    } else {
        for _ in 0..config.iterations {
            iterations += 1;

            // Backward from the tip
            positions[tip_index] = target;
            for i in (0..tip_index).rev() {
                positions[i] = place_along(positions[i + 1], positions[i], lengths[i]);
            }

            // Forward from the root
            positions[0] = root;
            for i in 0..tip_index {
                positions[i + 1] = place_along(positions[i], positions[i + 1], lengths[i]);
            }

            if positions[tip_index].distance(target) < config.tolerance {
                break;
            }
        }
    }

    apply_positions(skeleton, &chain, &positions);

    let distance = positions[tip_index].distance(target);
    let converged = distance < config.tolerance;
    log::debug!(
        "IK solve for bone {end_effector}: converged={converged} distance={distance:.6} iterations={iterations}"
    );

    IkResult {
        converged,
        distance,
        iterations,
    }
}

/// Convert solved joint positions back into local angles, root first
fn apply_positions(skeleton: &mut Skeleton, chain: &[usize], positions: &[DVec2]) {
    for (i, &slot) in chain.iter().enumerate() {
        let start = positions[i];
        let delta = positions[i + 1] - start;
        let world_angle = delta.y.atan2(delta.x);

        // Parents earlier in the chain were already updated this pass
        let parent_angle = skeleton
            .bone_at(slot)
            .parent_id
            .and_then(|parent| skeleton.get_bone(parent))
            .map_or(0.0, |parent| parent.world_angle);

        let bone = skeleton.bone_at_mut(slot);
        bone.current_angle = world_angle - parent_angle - bone.rest_angle;
        bone.set_world(start, world_angle);
    }
}
