//! Full humanoid playback using the preset rig and clips

use crate::common::EPS;
use pretty_assertions::assert_eq;
use stickrig_core::{
    Animator, BoneId, DEFAULT_TRANSITION_SECONDS, DVec2, IkConfig, LoopMode, PlaybackState,
    presets,
};

fn humanoid() -> Animator {
    Animator::new(presets::humanoid_skeleton(), presets::default_clips())
}

#[test]
fn test_walk_cycle_moves_the_legs() {
    let mut animator = humanoid();
    animator.play("walk").expect("walk preset");

    let mut knee_xs = Vec::new();
    for _ in 0..24 {
        animator.update(1.0 / 24.0);
        let knee = animator.skeleton().get_bone(BoneId(8)).expect("l_lower_leg");
        knee_xs.push(knee.world_x);
    }

    let min = knee_xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = knee_xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    assert!(max - min > 0.1, "legs barely moved: {min}..{max}");
}

#[test]
fn test_walk_into_jump_holds_landing() {
    let mut animator = humanoid();
    animator.play("walk").expect("walk preset");
    animator.update(0.5);
    animator
        .transition_to("jump", DEFAULT_TRANSITION_SECONDS)
        .expect("jump preset");

    for _ in 0..120 {
        animator.update(1.0 / 60.0);
    }

    assert_eq!(animator.state(), PlaybackState::Playing);
    assert_eq!(animator.current_clip(), Some("jump"));
    assert_eq!(
        animator.clip("jump").map(|c| c.loop_mode),
        Some(LoopMode::Once)
    );

    // Past the end of a once clip every driven bone holds the stand pose
    for id in [1, 7, 8, 9, 10] {
        let bone = animator.skeleton().get_bone(BoneId(id)).expect("bone");
        assert!(bone.current_angle.abs() < EPS, "bone {id} not standing");
    }
}

#[test]
fn test_idle_only_drives_spine_and_head() {
    let mut animator = humanoid();
    animator.play("idle").expect("idle preset");
    animator.update(0.5);

    let pose = animator.current_pose().expect("idle pose");
    let driven: Vec<u32> = pose.bone_ids().map(BoneId::get).collect();
    assert_eq!(driven, [1, 2]);
    assert_eq!(
        animator.skeleton().get_bone(BoneId(3)).map(|b| b.current_angle),
        Some(0.0)
    );
}

#[test]
fn test_reach_with_arm_after_posing() {
    let mut animator = humanoid();
    animator.play("idle").expect("idle preset");
    animator.update(0.25);
    animator.pause();

    let target = DVec2::new(-0.5, 0.4);
    let result = animator.solve_ik(BoneId(4), target, &IkConfig::default().with_iterations(50));
    assert!(result.converged, "{result:?}");

    let hand = animator.skeleton().get_bone(BoneId(4)).expect("l_lower_arm").tip();
    assert!(hand.distance(target) < 0.01);

    // Paused animator does not overwrite the solved pose
    let solved = animator.skeleton().clone();
    animator.update(0.1);
    assert_eq!(animator.skeleton(), &solved);
}
