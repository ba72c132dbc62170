//! Animation clips: time-ordered keyframes sampled into poses

use super::interpolation::{LoopMode, lerp_angle, span_factor};
use super::keyframe::Keyframe;
use super::pose::Pose;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// A named sequence of keyframes, kept sorted by time
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(from = "ClipData"))]
pub struct Clip {
    pub name: String,
    keyframes: Vec<Keyframe>,
    /// Authoring flag; sampling follows `loop_mode`
    pub looping: bool,
    /// Authoring frame rate; sampling is purely time based
    pub fps: f64,
    pub loop_mode: LoopMode,
}

impl Clip {
    /// Create an empty looping clip at 24 fps
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keyframes: Vec::new(),
            looping: true,
            fps: 24.0,
            loop_mode: LoopMode::Loop,
        }
    }

    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    pub fn with_looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn with_fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }

    /// Add keyframes in any order
    pub fn with_keyframes(mut self, keyframes: impl IntoIterator<Item = Keyframe>) -> Self {
        for keyframe in keyframes {
            self.add_keyframe(keyframe);
        }
        self
    }

    /// Insert a keyframe, keeping the sequence sorted by time.
    ///
    /// A keyframe sharing its time with existing ones is placed after them.
    pub fn add_keyframe(&mut self, keyframe: Keyframe) {
        let index = self.keyframes.partition_point(|k| k.time <= keyframe.time);
        self.keyframes.insert(index, keyframe);
    }

    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Time of the last keyframe, 0 for an empty clip
    pub fn duration(&self) -> f64 {
        self.keyframes.last().map_or(0.0, |k| k.time)
    }

    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    /// Sample bone angles at `time` seconds.
    ///
    /// The time is first normalized by the loop mode. Times at or before the
    /// first keyframe, or at or after the last, return that keyframe's angles
    /// unchanged. In between, the first bracketing pair is interpolated using
    /// the easing of the earlier keyframe; the result covers the bones named
    /// by either keyframe, a missing side counting as 0.0.
    pub fn sample(&self, time: f64) -> Pose {
        let (Some(first), Some(last)) = (self.keyframes.first(), self.keyframes.last()) else {
            return Pose::new();
        };

        let t = self.loop_mode.normalize(time, self.duration());

        if t <= first.time {
            return Pose::from(first.bone_angles.clone());
        }
        if t >= last.time {
            return Pose::from(last.bone_angles.clone());
        }

        let Some((k0, k1)) = self
            .keyframes
            .windows(2)
            .map(|pair| (&pair[0], &pair[1]))
            .find(|(k0, k1)| k0.time <= t && t <= k1.time)
        else {
            return Pose::from(last.bone_angles.clone());
        };

        let alpha = k0.easing.apply(span_factor(k0.time, k1.time, t));

        let mut pose = Pose::new();
        for &id in k0.bone_angles.keys().chain(k1.bone_angles.keys()) {
            if pose.contains(id) {
                continue;
            }
            let from = k0.angle(id).unwrap_or(0.0);
            let to = k1.angle(id).unwrap_or(0.0);
            pose.set(id, lerp_angle(from, to, alpha));
        }
        pose
    }
}

/// Deserialization shape; keyframes are re-sorted on conversion
#[cfg(feature = "serde-support")]
#[derive(Deserialize)]
struct ClipData {
    name: String,
    #[serde(default)]
    keyframes: Vec<Keyframe>,
    #[serde(default = "default_looping")]
    looping: bool,
    #[serde(default = "default_fps")]
    fps: f64,
    #[serde(default)]
    loop_mode: LoopMode,
}

#[cfg(feature = "serde-support")]
const fn default_looping() -> bool {
    true
}

#[cfg(feature = "serde-support")]
const fn default_fps() -> f64 {
    24.0
}

#[cfg(feature = "serde-support")]
impl From<ClipData> for Clip {
    fn from(data: ClipData) -> Self {
        Self::new(data.name)
            .with_looping(data.looping)
            .with_fps(data.fps)
            .with_loop_mode(data.loop_mode)
            .with_keyframes(data.keyframes)
    }
}
