//! Kinematic solvers over a [`Skeleton`](crate::Skeleton)
//!
//! - [`forward_kinematics`] propagates world transforms from the roots down
//! - [`solve_fabrik`] repositions a bone chain so its tip reaches a target

mod forward;
mod inverse;

pub use forward::forward_kinematics;
pub use inverse::{IkConfig, IkResult, solve_fabrik};
