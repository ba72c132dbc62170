//! Common test utilities and fixtures

#![allow(dead_code)]

use stickrig_core::{Bone, BoneId, Clip, DVec2, Easing, Keyframe, Skeleton};

/// Tolerance for float comparisons after trigonometry
pub const EPS: f64 = 1e-9;

/// Straight chain of `lengths.len()` bones along +x, ids 0..n, FK applied
pub fn straight_chain(lengths: &[f64]) -> Skeleton {
    let mut skeleton = Skeleton::from_bones(lengths.iter().enumerate().map(|(i, &length)| {
        let id = i as u32;
        let bone = Bone::new(id, format!("bone_{id}")).with_length(length);
        if id == 0 { bone } else { bone.with_parent(id - 1) }
    }));
    stickrig_core::forward_kinematics(&mut skeleton);
    skeleton
}

/// Two keyframes on bone 0: angle 0 at t=0 and angle 1 at t=1
pub fn ramp_clip(name: &str, easing: Easing) -> Clip {
    Clip::new(name).with_keyframes([
        Keyframe::new(0.0).with_angle(0, 0.0).with_easing(easing),
        Keyframe::new(1.0).with_angle(0, 1.0),
    ])
}

/// Tip of the given bone, panicking if it does not exist
pub fn tip(skeleton: &Skeleton, id: u32) -> DVec2 {
    skeleton.get_bone(BoneId(id)).expect("bone exists").tip()
}

/// Start points of every bone in the chain plus the final tip
pub fn chain_points(skeleton: &Skeleton, end: u32) -> Vec<DVec2> {
    let chain = skeleton.get_chain(BoneId(end));
    let mut points: Vec<DVec2> = chain.iter().map(|b| b.world_position()).collect();
    if let Some(last) = chain.last() {
        points.push(last.tip());
    }
    points
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

pub fn assert_vec_close(actual: DVec2, expected: DVec2, tolerance: f64) {
    assert!(
        actual.distance(expected) <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance})"
    );
}
