//! Level 3: End-to-End Scenario Tests
//!
//! These tests drive full rigs through playback and solving workflows.

pub mod humanoid;
