//! Ready-made humanoid rig and clips
//!
//! Bone ids used by the clips:
//!
//! | id | bone | parent |
//! |----|------|--------|
//! | 0 | root | - |
//! | 1 | spine | 0 |
//! | 2 | head | 1 |
//! | 3 | l_upper_arm | 1 |
//! | 4 | l_lower_arm | 3 |
//! | 5 | r_upper_arm | 1 |
//! | 6 | r_lower_arm | 5 |
//! | 7 | l_upper_leg | 0 |
//! | 8 | l_lower_leg | 7 |
//! | 9 | r_upper_leg | 0 |
//! | 10 | r_lower_leg | 9 |

use crate::animation::{Clip, Easing, Keyframe, LoopMode};
use crate::bone::Bone;
use crate::kinematics::forward_kinematics;
use crate::skeleton::Skeleton;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Frame rate the preset clips are authored at
const PRESET_FPS: f64 = 24.0;

/// Leg swing amplitude of the walk cycle, in radians
const WALK_AMPLITUDE: f64 = 0.4;

/// Build the 11-bone humanoid with world transforms already computed
pub fn humanoid_skeleton() -> Skeleton {
    let mut skeleton = Skeleton::from_bones([
        Bone::new(0, "root").with_length(0.1),
        Bone::new(1, "spine").with_parent(0).with_length(0.5).with_rest_angle(FRAC_PI_2),
        Bone::new(2, "head").with_parent(1).with_length(0.3).with_rest_angle(FRAC_PI_2),
        Bone::new(3, "l_upper_arm").with_parent(1).with_length(0.4).with_rest_angle(PI),
        Bone::new(4, "l_lower_arm").with_parent(3).with_length(0.35),
        Bone::new(5, "r_upper_arm").with_parent(1).with_length(0.4),
        Bone::new(6, "r_lower_arm").with_parent(5).with_length(0.35),
        Bone::new(7, "l_upper_leg").with_parent(0).with_length(0.45).with_rest_angle(-FRAC_PI_2),
        Bone::new(8, "l_lower_leg").with_parent(7).with_length(0.4),
        Bone::new(9, "r_upper_leg").with_parent(0).with_length(0.45).with_rest_angle(-FRAC_PI_2),
        Bone::new(10, "r_lower_leg").with_parent(9).with_length(0.4),
    ]);
    forward_kinematics(&mut skeleton);
    skeleton
}

/// One-second bipedal walk cycle, sampled every frame
pub fn walk_clip() -> Clip {
    let keyframes = (0..24).map(|frame| {
        let t = f64::from(frame) / PRESET_FPS;
        let phase = TAU * t;
        let swing = phase.sin();

        Keyframe::from_angles(
            t,
            [
                (1, swing * 0.05),
                (7, swing * WALK_AMPLITUDE),
                (8, (-swing).max(0.0) * WALK_AMPLITUDE * 0.5),
                (9, (phase + PI).sin() * WALK_AMPLITUDE),
                (10, swing.max(0.0) * WALK_AMPLITUDE * 0.5),
                (3, (phase + PI).sin() * WALK_AMPLITUDE * 0.5),
                (5, swing * WALK_AMPLITUDE * 0.5),
            ],
        )
        .with_easing(Easing::Cubic)
    });

    Clip::new("walk")
        .with_fps(PRESET_FPS)
        .with_loop_mode(LoopMode::Loop)
        .with_keyframes(keyframes)
}

/// Two-second breathing loop on the spine and head
pub fn idle_clip() -> Clip {
    let keyframes = (0..48).map(|frame| {
        let t = f64::from(frame) / PRESET_FPS;
        let breathe = (TAU * t / 2.0).sin() * 0.03;
        Keyframe::from_angles(t, [(1, breathe), (2, breathe * 0.5)]).with_easing(Easing::Cubic)
    });

    Clip::new("idle").with_fps(PRESET_FPS).with_keyframes(keyframes)
}

/// Crouch, launch, peak, fall, land and stand over one second, played once
pub fn jump_clip() -> Clip {
    const POSES: [(f64, [f64; 5]); 6] = [
        // time, [l_upper_leg, l_lower_leg, r_upper_leg, r_lower_leg, spine]
        (0.0, [-0.6, 1.0, -0.6, 1.0, -0.3]),
        (0.15, [0.3, 0.0, 0.3, 0.0, 0.2]),
        (0.4, [0.5, 0.2, 0.5, 0.2, 0.3]),
        (0.7, [-0.4, 0.8, -0.4, 0.8, -0.1]),
        (0.9, [-0.5, 1.0, -0.5, 1.0, -0.2]),
        (1.0, [0.0, 0.0, 0.0, 0.0, 0.0]),
    ];

    let keyframes = POSES.iter().map(|&(t, [l_upper, l_lower, r_upper, r_lower, spine])| {
        Keyframe::from_angles(
            t,
            [(7, l_upper), (8, l_lower), (9, r_upper), (10, r_lower), (1, spine)],
        )
        .with_easing(Easing::Cubic)
    });

    Clip::new("jump")
        .with_fps(PRESET_FPS)
        .with_looping(false)
        .with_loop_mode(LoopMode::Once)
        .with_keyframes(keyframes)
}

/// The walk, idle and jump clips
pub fn default_clips() -> Vec<Clip> {
    vec![walk_clip(), idle_clip(), jump_clip()]
}
