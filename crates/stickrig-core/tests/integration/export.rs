//! Frame snapshots

use pretty_assertions::assert_eq;
use stickrig_core::{Animator, BoneId, PlaybackState, presets};

#[test]
fn test_frame_reports_playback_state() {
    let mut animator = Animator::new(presets::humanoid_skeleton(), presets::default_clips());
    animator.play("walk").expect("walk preset");
    animator.transition_to("idle", 0.4).expect("idle preset");
    animator.update(0.1);

    let frame = animator.export_frame();
    assert_eq!(frame.time, 0.1);
    assert_eq!(frame.clip.as_deref(), Some("walk"));
    assert_eq!(frame.state, PlaybackState::Blending);
    assert_eq!(frame.blend_alpha, 0.25);
    assert_eq!(frame.skeleton.bones.len(), 11);
}

#[test]
fn test_bones_ascending_and_rounded() {
    let mut animator = Animator::new(presets::humanoid_skeleton(), presets::default_clips());
    animator.play("walk").expect("walk preset");
    animator.update(0.137);

    let frame = animator.export_frame();
    let ids: Vec<BoneId> = frame.skeleton.bones.iter().map(|b| b.id).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);

    for bone in &frame.skeleton.bones {
        for value in [
            bone.length,
            bone.rest_angle,
            bone.current_angle,
            bone.world_x,
            bone.world_y,
            bone.world_angle,
            bone.tip.0,
            bone.tip.1,
        ] {
            let scaled = value * 10_000.0;
            assert!(
                (scaled - scaled.round()).abs() < 1e-6,
                "{value} on bone {} has more than 4 decimals",
                bone.name
            );
        }
    }
}

#[test]
fn test_tip_matches_child_start() {
    let skeleton = presets::humanoid_skeleton();
    let export = skeleton.export();

    let upper = export.bone(BoneId(3)).expect("l_upper_arm");
    let lower = export.bone(BoneId(4)).expect("l_lower_arm");
    assert_eq!(upper.tip, (lower.world_x, lower.world_y));
    assert_eq!(lower.parent_id, Some(BoneId(3)));
}

#[cfg(feature = "serde-support")]
#[test]
fn test_frame_serializes_to_json() {
    let mut animator = Animator::new(presets::humanoid_skeleton(), presets::default_clips());
    animator.play("jump").expect("jump preset");
    animator.update(0.5);

    let value = serde_json::to_value(animator.export_frame()).expect("serializable frame");
    assert_eq!(value["clip"], "jump");
    assert_eq!(value["state"], "playing");
    assert_eq!(value["skeleton"]["bones"][0]["name"], "root");
    assert_eq!(value["skeleton"]["bones"][1]["parent_id"], 0);
}
