//! Playback state machine driving a skeleton from animation clips
//!
//! The Animator owns a skeleton and a set of named clips. Each `update`
//! advances the clock, samples the active clip (mixed with a blend target
//! when one is set), writes the angles onto the skeleton and re-runs
//! forward kinematics.

use super::clip::Clip;
use super::pose::Pose;
use super::state::{CrossfadeTimer, PlaybackState};
use crate::bone::BoneId;
use crate::error::{Result, RigError};
use crate::export::{FrameExport, round4};
use crate::kinematics::{IkConfig, IkResult, forward_kinematics, solve_fabrik};
use crate::skeleton::Skeleton;
use glam::DVec2;
use std::collections::HashMap;

/// Crossfade length used when callers have no preference
pub const DEFAULT_TRANSITION_SECONDS: f64 = 0.3;

/// Clip playback, blending and crossfade controller for one skeleton
#[derive(Debug, Clone)]
pub struct Animator {
    skeleton: Skeleton,
    clips: HashMap<String, Clip>,
    state: PlaybackState,
    current_clip: Option<String>,
    /// Second clip mixed into the current one
    blend_clip: Option<String>,
    /// Weight of `blend_clip` (0.0 = current only, 1.0 = blend target only)
    blend_alpha: f64,
    /// Playback clock in seconds, scaled by `speed`
    time: f64,
    speed: f64,
    crossfade: CrossfadeTimer,
}

impl Animator {
    /// Create a stopped animator over `skeleton` with the given clips
    pub fn new(skeleton: Skeleton, clips: impl IntoIterator<Item = Clip>) -> Self {
        Self {
            skeleton,
            clips: clips.into_iter().map(|c| (c.name.clone(), c)).collect(),
            state: PlaybackState::Stopped,
            current_clip: None,
            blend_clip: None,
            blend_alpha: 0.0,
            time: 0.0,
            speed: 1.0,
            crossfade: CrossfadeTimer::default(),
        }
    }

    /// Register a clip under its name, replacing any clip with that name
    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.insert(clip.name.clone(), clip);
    }

    pub fn clip(&self, name: &str) -> Option<&Clip> {
        self.clips.get(name)
    }

    pub fn has_clip(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    /// Registered clip names in sorted order
    pub fn clip_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.clips.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    fn require_clip(&self, name: &str) -> Result<()> {
        if self.clips.contains_key(name) {
            Ok(())
        } else {
            log::debug!("Rejected request for unknown clip '{name}'");
            Err(RigError::ClipNotFound(name.to_string()))
        }
    }

    /// Play a clip from the start at normal speed
    pub fn play(&mut self, name: &str) -> Result<()> {
        self.play_with(name, true, 1.0)
    }

    /// Play a clip, optionally keeping the clock, at the given speed
    pub fn play_with(&mut self, name: &str, reset_time: bool, speed: f64) -> Result<()> {
        self.require_clip(name)?;

        self.current_clip = Some(name.to_string());
        self.clear_blend();
        self.speed = speed;
        self.state = PlaybackState::Playing;
        if reset_time {
            self.time = 0.0;
        }
        log::debug!("Playing clip '{name}' at speed {speed}");
        Ok(())
    }

    /// Stop playback and reset the clock
    pub fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.time = 0.0;
        self.current_clip = None;
        self.clear_blend();
    }

    /// Freeze a playing clip; no effect in any other state
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Continue a paused clip; no effect in any other state
    pub fn resume(&mut self) {
        if self.state == PlaybackState::Paused {
            self.state = PlaybackState::Playing;
        }
    }

    /// Mix two clips with a fixed weight (0.0 = `from` only, 1.0 = `to` only).
    ///
    /// No crossfade timer runs; the weight stays until changed by another call.
    pub fn blend(&mut self, from: &str, to: &str, alpha: f64) -> Result<()> {
        self.require_clip(from)?;
        self.require_clip(to)?;

        self.current_clip = Some(from.to_string());
        self.blend_clip = Some(to.to_string());
        self.blend_alpha = alpha.clamp(0.0, 1.0);
        self.crossfade = CrossfadeTimer::default();
        self.state = PlaybackState::Blending;
        Ok(())
    }

    /// Crossfade from the current clip to `name` over `duration` seconds.
    ///
    /// Without a current clip this is `play(name)`. A non-positive duration
    /// switches clips immediately, keeping the clock.
    pub fn transition_to(&mut self, name: &str, duration: f64) -> Result<()> {
        self.require_clip(name)?;

        let Some(current) = self.current_clip.as_deref() else {
            return self.play(name);
        };

        if duration <= 0.0 {
            log::debug!("Cutting from '{current}' to '{name}'");
            self.current_clip = Some(name.to_string());
            self.clear_blend();
            self.state = PlaybackState::Playing;
            return Ok(());
        }

        log::debug!("Crossfading from '{current}' to '{name}' over {duration}s");
        self.blend_clip = Some(name.to_string());
        self.blend_alpha = 0.0;
        self.crossfade = CrossfadeTimer::start(duration);
        self.state = PlaybackState::Blending;
        Ok(())
    }

    /// Advance playback by `dt` seconds and pose the skeleton.
    ///
    /// The clock moves by `dt * speed`; a running crossfade moves by the
    /// unscaled `dt`. Bones not driven by the sampled clips keep their angle.
    pub fn update(&mut self, dt: f64) {
        if !self.state.is_active() {
            return;
        }

        self.time += dt * self.speed;

        if self.state == PlaybackState::Blending && self.crossfade.is_engaged() {
            self.blend_alpha = self.crossfade.advance(dt);
            if self.blend_alpha >= 1.0 {
                self.finish_transition();
            }
        }

        if let Some(pose) = self.current_pose() {
            pose.apply_to(&mut self.skeleton);
            forward_kinematics(&mut self.skeleton);
        }
    }

    fn finish_transition(&mut self) {
        if let Some(target) = self.blend_clip.take() {
            log::debug!("Transition to '{target}' complete");
            self.current_clip = Some(target);
        }
        self.clear_blend();
        self.state = PlaybackState::Playing;
    }

    fn clear_blend(&mut self) {
        self.blend_clip = None;
        self.blend_alpha = 0.0;
        self.crossfade = CrossfadeTimer::default();
    }

    /// Pose resolved at the current clock, or `None` without a current clip
    pub fn current_pose(&self) -> Option<Pose> {
        let clip = self.clips.get(self.current_clip.as_deref()?)?;
        let pose = clip.sample(self.time);

        match self.blend_clip.as_deref().and_then(|name| self.clips.get(name)) {
            Some(target) => Some(pose.blend(&target.sample(self.time), self.blend_alpha)),
            None => Some(pose),
        }
    }

    /// Run FABRIK on the owned skeleton.
    ///
    /// Angles written here are overwritten by the next `update` for every
    /// bone the active clips drive.
    pub fn solve_ik(&mut self, end_effector: BoneId, target: DVec2, config: &IkConfig) -> IkResult {
        solve_fabrik(&mut self.skeleton, end_effector, target, config)
    }

    /// Snapshot of playback state and the posed skeleton, rounded for output
    pub fn export_frame(&mut self) -> FrameExport {
        forward_kinematics(&mut self.skeleton);
        FrameExport {
            time: round4(self.time),
            clip: self.current_clip.clone(),
            state: self.state,
            blend_alpha: round4(self.blend_alpha),
            skeleton: self.skeleton.export(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current_clip(&self) -> Option<&str> {
        self.current_clip.as_deref()
    }

    pub fn blend_clip(&self) -> Option<&str> {
        self.blend_clip.as_deref()
    }

    pub fn blend_alpha(&self) -> f64 {
        self.blend_alpha
    }

    /// Playback clock in seconds
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn set_speed(&mut self, speed: f64) {
        self.speed = speed;
    }

    pub fn skeleton(&self) -> &Skeleton {
        &self.skeleton
    }

    pub fn skeleton_mut(&mut self) -> &mut Skeleton {
        &mut self.skeleton
    }

    pub fn into_skeleton(self) -> Skeleton {
        self.skeleton
    }
}
