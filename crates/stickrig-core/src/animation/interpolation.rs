//! Easing curves and clip time normalization

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Interpolation applied over the interval starting at a keyframe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "snake_case"))]
pub enum Easing {
    /// Straight linear blend
    #[default]
    Linear,
    /// Hold the starting keyframe until the next one
    Step,
    /// Smoothstep (`3a² - 2a³`)
    Cubic,
}

impl Easing {
    /// Map a linear factor in `[0, 1]` through this easing
    pub fn apply(self, alpha: f64) -> f64 {
        match self {
            Self::Linear => alpha,
            Self::Step => 0.0,
            Self::Cubic => alpha * alpha * (3.0 - 2.0 * alpha),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Step => "step",
            Self::Cubic => "cubic",
        }
    }
}

/// How sampling treats times beyond a clip's duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "snake_case"))]
pub enum LoopMode {
    /// Clamp to the last keyframe
    Once,
    /// Wrap back to the start
    #[default]
    Loop,
    /// Play forwards then backwards
    PingPong,
}

impl LoopMode {
    /// Map an unbounded playback time into `[0, duration]`.
    ///
    /// Non-positive durations leave the time unchanged; the keyframe
    /// boundary checks in sampling handle those clips.
    pub fn normalize(self, time: f64, duration: f64) -> f64 {
        if duration <= 0.0 {
            return time;
        }
        match self {
            Self::Loop => time.rem_euclid(duration),
            Self::PingPong => {
                let cycle = time.rem_euclid(duration * 2.0);
                if cycle <= duration {
                    cycle
                } else {
                    duration * 2.0 - cycle
                }
            }
            Self::Once => time.clamp(0.0, duration),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Once => "once",
            Self::Loop => "loop",
            Self::PingPong => "ping_pong",
        }
    }
}

/// Linear factor of `time` within `[start, end]`, 0 for an empty span
pub fn span_factor(start: f64, end: f64, time: f64) -> f64 {
    let span = end - start;
    if span > 0.0 { (time - start) / span } else { 0.0 }
}

/// Linear blend between two angles, exact at both endpoints
pub fn lerp_angle(from: f64, to: f64, alpha: f64) -> f64 {
    from.mul_add(1.0 - alpha, to * alpha)
}
