//! Input handling: the pointer gesture surface consumed by the floating
//! simulator.

/// Platform-agnostic pointer events.
pub mod event;

pub use event::{PointerButtons, PointerEvent};
