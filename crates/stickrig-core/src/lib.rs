//! 2D skeletal kinematics and animation playback.
//!
//! This crate provides:
//! - A bone hierarchy ([`Skeleton`]) stored as an index arena
//! - Forward kinematics propagating world transforms root to leaf
//! - FABRIK inverse kinematics for bone chains
//! - Keyframed [`Clip`]s with easing, looping and ping-pong sampling
//! - An [`Animator`] state machine for playback, blending and crossfades
//! - Rounded frame snapshots for renderers ([`FrameExport`])
//!
//! # Example
//!
//! ```rust
//! use stickrig_core::{Animator, presets};
//!
//! let skeleton = presets::humanoid_skeleton();
//! let mut animator = Animator::new(skeleton, presets::default_clips());
//!
//! animator.play("walk")?;
//! animator.update(1.0 / 24.0);
//!
//! let frame = animator.export_frame();
//! assert_eq!(frame.clip.as_deref(), Some("walk"));
//! # Ok::<(), stickrig_core::RigError>(())
//! ```

pub mod animation;
pub mod bone;
pub mod error;
pub mod export;
pub mod kinematics;
pub mod presets;
pub mod skeleton;

pub use animation::{
    Animator, Clip, DEFAULT_TRANSITION_SECONDS, Easing, Keyframe, LoopMode, PlaybackState, Pose,
};
pub use bone::{Bone, BoneId};
pub use error::{Result, RigError};
pub use export::{BoneExport, FrameExport, SkeletonExport};
pub use kinematics::{IkConfig, IkResult, forward_kinematics, solve_fabrik};
pub use skeleton::Skeleton;

/// Re-exported so callers can build IK targets without a direct glam dependency
pub use glam::DVec2;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
