//! Stickrig CLI library
//!
//! Command definitions and output helpers behind the `stickrig` binary.

pub mod cli;
pub mod commands;
pub mod utils;
