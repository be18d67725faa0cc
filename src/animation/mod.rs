//! Animation building blocks: the interpolation kernel, one-shot tween
//! timelines, and frame loops with owned cancellation handles.

pub mod frame_loop;
pub mod interpolation;
pub mod tween;

pub use frame_loop::{FrameControl, FrameDriver, FrameTask, LoopHandle};
pub use interpolation::{lerp, random_between};
pub use tween::{Tween, TweenPhase, TweenTiming};
