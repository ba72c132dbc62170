//! Animator playback, blending and crossfades

use crate::common::{EPS, assert_close, ramp_clip};
use pretty_assertions::assert_eq;
use stickrig_core::{
    Animator, Bone, BoneId, Clip, DEFAULT_TRANSITION_SECONDS, DVec2, Easing, IkConfig, Keyframe,
    PlaybackState, RigError, Skeleton,
};
use test_case::test_case;

fn rig() -> Skeleton {
    Skeleton::from_bones([
        Bone::new(0, "hip").with_length(1.0),
        Bone::new(1, "thigh").with_parent(0).with_length(1.0),
        Bone::new(2, "shin").with_parent(1).with_length(1.0),
    ])
}

fn reach() -> Clip {
    Clip::new("reach").with_keyframes([
        Keyframe::from_angles(0.0, [(0, 0.0), (1, 0.2), (2, 0.0)]),
        Keyframe::from_angles(2.0, [(0, 1.0), (1, 0.6), (2, 0.4)]),
    ])
}

fn kick() -> Clip {
    Clip::new("kick").with_keyframes([
        Keyframe::from_angles(0.0, [(0, -0.5), (1, 0.0)]),
        Keyframe::from_angles(2.0, [(0, 0.5), (1, 1.0)]),
    ])
}

fn animator() -> Animator {
    Animator::new(rig(), [reach(), kick()])
}

fn angle(animator: &Animator, id: u32) -> f64 {
    animator
        .skeleton()
        .get_bone(BoneId(id))
        .expect("bone exists")
        .current_angle
}

/// Observable playback state, for checking that rejected calls change nothing
fn snapshot(animator: &Animator) -> (PlaybackState, Option<String>, Option<String>, f64, f64, f64) {
    (
        animator.state(),
        animator.current_clip().map(str::to_string),
        animator.blend_clip().map(str::to_string),
        animator.blend_alpha(),
        animator.time(),
        animator.speed(),
    )
}

#[test_case(0.0, "reach" ; "alpha zero reproduces first clip")]
#[test_case(1.0, "kick" ; "alpha one reproduces second clip")]
fn test_blend_endpoints(alpha: f64, expected: &str) {
    let mut blended = animator();
    blended.blend("reach", "kick", alpha).expect("both clips exist");
    blended.update(0.5);

    let mut pure = animator();
    pure.play(expected).expect("clip exists");
    pure.update(0.5);

    // Bones 0 and 1 are driven by both clips
    for id in [0, 1] {
        assert_eq!(angle(&blended, id), angle(&pure, id));
    }
}

#[test]
fn test_blend_midpoint_averages() {
    let mut animator = animator();
    animator.blend("reach", "kick", 0.5).expect("both clips exist");
    animator.update(1.0);

    // reach bone 0 = 0.5, kick bone 0 = 0.0
    assert_close(angle(&animator, 0), 0.25, EPS);
    // Bone 2 only exists in reach (0.2), counting as 0.0 for kick
    assert_close(angle(&animator, 2), 0.1, EPS);
}

#[test]
fn test_transition_completes_after_duration() {
    let mut animator = animator();
    animator.play("reach").expect("clip exists");
    animator.update(0.1);
    animator
        .transition_to("kick", DEFAULT_TRANSITION_SECONDS)
        .expect("clip exists");

    // Six 50 ms steps cover the 0.3 s crossfade
    for _ in 0..6 {
        assert_eq!(animator.state(), PlaybackState::Blending);
        animator.update(0.05);
    }

    assert_eq!(animator.state(), PlaybackState::Playing);
    assert_eq!(animator.current_clip(), Some("kick"));
    assert_eq!(animator.blend_clip(), None);
    assert_eq!(animator.blend_alpha(), 0.0);
}

#[test]
fn test_transition_with_single_large_step() {
    let mut animator = animator();
    animator.play("reach").expect("clip exists");
    animator.transition_to("kick", 0.5).expect("clip exists");
    animator.update(2.0);

    assert_eq!(animator.state(), PlaybackState::Playing);
    assert_eq!(animator.current_clip(), Some("kick"));
}

#[test]
fn test_transition_alpha_ramps() {
    let mut animator = animator();
    animator.play("reach").expect("clip exists");
    animator.transition_to("kick", 1.0).expect("clip exists");

    animator.update(0.25);
    assert_close(animator.blend_alpha(), 0.25, EPS);
    animator.update(0.25);
    assert_close(animator.blend_alpha(), 0.5, EPS);
}

#[test]
fn test_rejected_calls_leave_animator_unchanged() {
    let mut animator = animator();
    animator.play_with("reach", true, 1.5).expect("clip exists");
    animator.update(0.4);
    let before = snapshot(&animator);
    let pose = animator.skeleton().clone();

    let missing = RigError::ClipNotFound("dance".to_string());
    assert_eq!(animator.play("dance"), Err(missing.clone()));
    assert_eq!(animator.play_with("dance", false, 3.0), Err(missing.clone()));
    assert_eq!(animator.blend("reach", "dance", 0.5), Err(missing.clone()));
    assert_eq!(animator.blend("dance", "kick", 0.5), Err(missing.clone()));
    assert_eq!(animator.transition_to("dance", 0.2), Err(missing));

    assert_eq!(snapshot(&animator), before);
    assert_eq!(animator.skeleton(), &pose);
}

#[test]
fn test_error_message_names_clip() {
    let mut animator = animator();
    let err = animator.play("dance").expect_err("unknown clip");
    assert_eq!(err.to_string(), "Clip not found: 'dance'");
}

#[test]
fn test_stopped_and_paused_do_not_advance() {
    let mut animator = animator();
    animator.update(1.0);
    assert_eq!(animator.time(), 0.0);

    animator.play("reach").expect("clip exists");
    animator.update(0.5);
    let frozen = angle(&animator, 0);
    animator.pause();
    animator.update(1.0);

    assert_eq!(animator.time(), 0.5);
    assert_eq!(angle(&animator, 0), frozen);

    animator.resume();
    animator.update(0.5);
    assert_eq!(animator.time(), 1.0);
}

#[test]
fn test_pause_ignored_while_blending() {
    let mut animator = animator();
    animator.blend("reach", "kick", 0.3).expect("both clips exist");
    animator.pause();
    assert_eq!(animator.state(), PlaybackState::Blending);
}

#[test]
fn test_update_runs_fk() {
    let mut animator = animator();
    animator.play("reach").expect("clip exists");
    animator.update(1.0);

    let shin = animator.skeleton().get_bone(BoneId(2)).expect("shin");
    assert_close(shin.world_angle, 0.5 + 0.4 + 0.2, EPS);
    assert_close(shin.world_y, 0.5_f64.sin() + 0.9_f64.sin(), EPS);
}

#[test]
fn test_negative_speed_runs_backwards() {
    let mut animator = Animator::new(rig(), [ramp_clip("ramp", Easing::Linear)]);
    animator.play_with("ramp", true, -1.0).expect("clip exists");
    animator.update(0.25);

    assert_close(animator.time(), -0.25, EPS);
    // Loop mode wraps the negative clock to the end of the clip
    assert_close(angle(&animator, 0), 0.75, EPS);
}

#[test]
fn test_clip_registry() {
    let mut animator = animator();
    assert!(animator.has_clip("kick"));
    assert_eq!(animator.clip_names(), ["kick", "reach"]);

    animator.add_clip(Clip::new("kick"));
    assert_eq!(animator.clip("kick").map(Clip::is_empty), Some(true));
    assert_eq!(animator.clip_names().len(), 2);
}

#[test]
fn test_solve_ik_on_owned_skeleton() {
    let mut animator = animator();
    stickrig_core::forward_kinematics(animator.skeleton_mut());
    let target = DVec2::new(1.0, 2.0);
    let result = animator.solve_ik(BoneId(2), target, &IkConfig::default().with_iterations(50));

    assert!(result.converged);
    let tip = animator.skeleton().get_bone(BoneId(2)).expect("shin").tip();
    assert!(tip.distance(target) < 0.01);
}

#[test]
fn test_into_skeleton_keeps_pose() {
    let mut animator = animator();
    animator.play("kick").expect("clip exists");
    animator.update(1.0);
    let thigh = angle(&animator, 1);

    let skeleton = animator.into_skeleton();
    assert_eq!(skeleton.get_bone(BoneId(1)).map(|b| b.current_angle), Some(thigh));
}
