//! Floating surfaces: a continuous per-frame simulation that blends idle
//! drift, pointer-reactive parallax and press tilt into a single
//! transform.
//!
//! # Lifecycle
//!
//! A [`FloatingSimulator`] starts uninitialized. [`mount`] activates it
//! (sampling its [`DriftConfig`] from an injected random source) and arms
//! a [`FloatingLoop`] on a [`FrameDriver`](crate::animation::FrameDriver).
//! Pointer handlers write the target pose between frames; every frame the
//! current pose eases toward it and the result is written to a
//! [`FloatingSurface`]. Cancelling the returned
//! [`LoopHandle`](crate::animation::LoopHandle) stops all further writes.

mod config;
mod pose;
mod simulator;
mod style;

pub use config::{DriftConfig, IdleDrift};
pub use pose::{BlendRates, Pose};
pub use simulator::{mount, Activity, FloatingLoop, FloatingSimulator};
pub use style::{FloatingStyle, FloatingSurface};
