//! Playback state tracking for the animator

use std::fmt;

#[cfg(feature = "serde-support")]
use serde::{Deserialize, Serialize};

/// Represents the current playback state of an animator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde-support", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-support", serde(rename_all = "snake_case"))]
pub enum PlaybackState {
    /// No clip active, clock at zero
    #[default]
    Stopped,
    /// Advancing a single clip
    Playing,
    /// Clock frozen, pose retained
    Paused,
    /// Mixing the current clip with a blend target
    Blending,
}

impl PlaybackState {
    /// Check if `update` advances the clock in this state
    pub fn is_active(self) -> bool {
        matches!(self, Self::Playing | Self::Blending)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Playing => "playing",
            Self::Paused => "paused",
            Self::Blending => "blending",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Timed crossfade progress
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct CrossfadeTimer {
    /// Total crossfade length in seconds; zero means no timer is engaged
    pub duration: f64,
    /// Elapsed crossfade time in seconds (not scaled by playback speed)
    pub elapsed: f64,
}

impl CrossfadeTimer {
    pub fn start(duration: f64) -> Self {
        Self {
            duration,
            elapsed: 0.0,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.duration > 0.0
    }

    /// Advance by `dt` and return the new blend alpha in `[0, 1]`
    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt;
        (self.elapsed / self.duration).min(1.0)
    }
}
