//! Command implementations
//!
//! Every command works on a rig: the built-in humanoid skeleton and clips,
//! optionally replaced or extended with JSON files.

pub mod animate;
pub mod clip;
pub mod ik;
pub mod skeleton;

use crate::utils::{load_clips, load_skeleton};
use anyhow::{Result, bail};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use stickrig_core::{Animator, BoneId, Clip, LoopMode, Skeleton, presets};

/// Skeleton and clip sources shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct RigArgs {
    /// Skeleton JSON file (defaults to the built-in humanoid)
    #[arg(short, long, value_name = "FILE")]
    pub skeleton: Option<PathBuf>,

    /// Clip JSON file; repeatable, replaces built-in clips of the same name
    #[arg(short = 'c', long = "clips", value_name = "FILE")]
    pub clip_files: Vec<PathBuf>,
}

impl RigArgs {
    pub fn load_skeleton(&self) -> Result<Skeleton> {
        match &self.skeleton {
            Some(path) => load_skeleton(path),
            None => Ok(presets::humanoid_skeleton()),
        }
    }

    /// Built-in clips followed by the clips from each file, in order
    pub fn load_clips(&self) -> Result<Vec<Clip>> {
        let mut clips = presets::default_clips();
        for path in &self.clip_files {
            clips.extend(load_clips(path)?);
        }
        Ok(clips)
    }

    /// Animator over the loaded skeleton; later clips win on name clashes
    pub fn animator(&self) -> Result<Animator> {
        Ok(Animator::new(self.load_skeleton()?, self.load_clips()?))
    }
}

/// Output format for commands that print poses
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Loop mode override for sampling
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopModeArg {
    Once,
    Loop,
    PingPong,
}

impl From<LoopModeArg> for LoopMode {
    fn from(arg: LoopModeArg) -> Self {
        match arg {
            LoopModeArg::Once => Self::Once,
            LoopModeArg::Loop => Self::Loop,
            LoopModeArg::PingPong => Self::PingPong,
        }
    }
}

/// Resolve a bone given as a numeric id or a name
pub fn resolve_bone(skeleton: &Skeleton, spec: &str) -> Result<BoneId> {
    if let Ok(raw) = spec.parse::<u32>() {
        let id = BoneId(raw);
        if skeleton.contains(id) {
            return Ok(id);
        }
    }
    match skeleton.get_bone_by_name(spec) {
        Some(bone) => Ok(bone.id),
        None => bail!("Bone not found: '{spec}'"),
    }
}

/// Frame interval for a playback rate
pub fn frame_step(fps: f64) -> Result<f64> {
    if fps.is_finite() && fps > 0.0 {
        Ok(fps.recip())
    } else {
        bail!("Frame rate must be a positive number, got {fps}")
    }
}
