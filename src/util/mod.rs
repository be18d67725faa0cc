//! Shared utilities for the motion engine.
//!
//! Helpers for easing curves and frame timing.

pub mod easing;
pub mod frame_timing;
