//! Clip playback
//!
//! This module provides keyframe animation for skeletons, including:
//! - Keyframes with per-interval easing (linear, step, cubic)
//! - Clips sampled with once, loop and ping-pong time handling
//! - Poses and per-bone angle blending
//! - The [`Animator`] state machine for playback, static blends and crossfades
//!
//! # Example
//!
//! ```rust
//! use stickrig_core::{Animator, Bone, Clip, Keyframe, Skeleton};
//!
//! let skeleton = Skeleton::from_bones([
//!     Bone::new(0, "root").with_length(1.0),
//!     Bone::new(1, "arm").with_parent(0).with_length(1.0),
//! ]);
//! let wave = Clip::new("wave").with_keyframes([
//!     Keyframe::new(0.0).with_angle(1, 0.0),
//!     Keyframe::new(1.0).with_angle(1, 1.0),
//! ]);
//!
//! let mut animator = Animator::new(skeleton, [wave]);
//! animator.play("wave")?;
//! animator.update(0.5);
//!
//! let pose = animator.current_pose().unwrap_or_default();
//! assert_eq!(pose.len(), 1);
//! # Ok::<(), stickrig_core::RigError>(())
//! ```

mod animator;
mod clip;
mod interpolation;
mod keyframe;
mod pose;
mod state;

pub use animator::{Animator, DEFAULT_TRANSITION_SECONDS};
pub use clip::Clip;
pub use interpolation::{Easing, LoopMode, lerp_angle, span_factor};
pub use keyframe::Keyframe;
pub use pose::Pose;
pub use state::PlaybackState;
