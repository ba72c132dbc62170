//! Clip sampling: boundaries, easing and loop modes

use crate::common::{EPS, assert_close, ramp_clip};
use pretty_assertions::assert_eq;
use stickrig_core::{BoneId, Clip, Easing, Keyframe, LoopMode};
use test_case::test_case;

fn two_bone_clip(mode: LoopMode) -> Clip {
    Clip::new("swing").with_loop_mode(mode).with_keyframes([
        Keyframe::from_angles(0.2, [(0, 0.1), (1, -0.4)]),
        Keyframe::from_angles(0.9, [(0, 0.6), (1, 0.3)]).with_easing(Easing::Cubic),
        Keyframe::from_angles(1.6, [(0, -0.2), (1, 0.8)]),
    ])
}

#[test_case(LoopMode::Once ; "once")]
#[test_case(LoopMode::Loop ; "loop")]
#[test_case(LoopMode::PingPong ; "ping pong")]
fn test_before_first_keyframe_is_exact(mode: LoopMode) {
    let clip = two_bone_clip(mode);
    let first = &clip.keyframes()[0];

    let pose = clip.sample(0.05);
    assert_eq!(pose.angles(), &first.bone_angles);
}

#[test_case(1.6 ; "at the end")]
#[test_case(7.25 ; "far past the end")]
fn test_once_after_last_keyframe_is_exact(time: f64) {
    let clip = two_bone_clip(LoopMode::Once);
    let last = &clip.keyframes()[2];

    assert_eq!(clip.sample(time).angles(), &last.bone_angles);
}

#[test_case(0.3 ; "first span")]
#[test_case(1.1 ; "second span")]
#[test_case(1.55 ; "near the end")]
fn test_loop_period_equals_duration(time: f64) {
    let clip = two_bone_clip(LoopMode::Loop);
    let duration = clip.duration();

    for bone in [0, 1] {
        let a = clip.sample(time).get(BoneId(bone)).expect("angle");
        let b = clip.sample(time + duration).get(BoneId(bone)).expect("angle");
        assert_close(a, b, EPS);
    }
}

#[test_case(0.01 ; "small")]
#[test_case(0.3 ; "medium")]
fn test_ping_pong_reflects_at_duration(epsilon: f64) {
    let clip = ramp_clip("bounce", Easing::Linear).with_loop_mode(LoopMode::PingPong);
    let duration = clip.duration();

    let before = clip.sample(duration - epsilon).get(BoneId(0)).expect("angle");
    let after = clip.sample(duration + epsilon).get(BoneId(0)).expect("angle");
    assert_close(before, after, EPS);
}

#[test]
fn test_linear_and_cubic_midpoints() {
    let linear = ramp_clip("linear", Easing::Linear);
    let cubic = ramp_clip("cubic", Easing::Cubic);

    assert_close(linear.sample(0.5).get(BoneId(0)).expect("angle"), 0.5, EPS);
    assert_close(cubic.sample(0.5).get(BoneId(0)).expect("angle"), 0.5, EPS);
    assert!(cubic.sample(0.25).get(BoneId(0)).expect("angle") < 0.25);
    assert!(cubic.sample(0.75).get(BoneId(0)).expect("angle") > 0.75);
}

#[test]
fn test_easing_belongs_to_interval_start() {
    let clip = two_bone_clip(LoopMode::Once);

    // First span is linear: its midpoint is the arithmetic mean
    assert_close(clip.sample(0.55).get(BoneId(0)).expect("angle"), 0.35, EPS);
    // Second span is cubic: a quarter of the way in sits below the linear value
    let quarter = clip.sample(0.9 + 0.7 / 4.0).get(BoneId(0)).expect("angle");
    let linear_quarter = 0.6 + (-0.8) * 0.25;
    assert!(quarter > linear_quarter, "{quarter} should lag the linear {linear_quarter}");
}

#[test]
fn test_unsorted_insertion_samples_like_sorted() {
    let sorted = two_bone_clip(LoopMode::Once);
    let mut shuffled = Clip::new("swing").with_loop_mode(LoopMode::Once);
    for keyframe in sorted.keyframes().iter().rev() {
        shuffled.add_keyframe(keyframe.clone());
    }

    for time in [0.0, 0.4, 1.0, 1.5, 2.0] {
        assert_eq!(sorted.sample(time), shuffled.sample(time));
    }
}

#[test]
fn test_empty_clip_samples_empty_pose() {
    let clip = Clip::new("nothing");
    assert!(clip.sample(0.5).is_empty());
    assert_eq!(clip.duration(), 0.0);
}

#[cfg(feature = "serde-support")]
#[test]
fn test_clip_json_is_resorted() {
    let json = r#"{
        "name": "wave",
        "keyframes": [
            {"time": 1.0, "bone_angles": {"1": 1.0}},
            {"time": 0.0, "bone_angles": {"1": 0.0}, "easing": "cubic"}
        ],
        "loop_mode": "ping_pong"
    }"#;
    let clip: Clip = serde_json::from_str(json).expect("valid clip json");

    assert_eq!(clip.keyframes()[0].time, 0.0);
    assert_eq!(clip.keyframes()[0].easing, Easing::Cubic);
    assert_eq!(clip.loop_mode, LoopMode::PingPong);
    assert_eq!(clip.fps, 24.0);
    assert!(clip.looping);
}
