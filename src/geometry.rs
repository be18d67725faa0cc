//! Layout rectangles and pointer-to-rectangle mapping.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A bounding rectangle snapshot in viewport (client) coordinates.
///
/// Mirrors what a layout engine reports for an element at one instant.
/// Rectangles are plain values: they are captured, consumed and dropped,
/// never updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the viewport top edge.
    pub top: f32,
    /// Distance from the viewport left edge.
    pub left: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Center point as `(x, y)`.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            self.left + self.width * 0.5,
            self.top + self.height * 0.5,
        )
    }

    /// Whether the rectangle has no visible area (not yet laid out).
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Component-wise linear interpolation toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            top: self.top + (other.top - self.top) * t,
            left: self.left + (other.left - self.left) * t,
            width: self.width + (other.width - self.width) * t,
            height: self.height + (other.height - self.height) * t,
        }
    }

    /// Normalize a pointer position to `[-1, 1]` on each axis, measured
    /// from the rectangle's center and clamped at the edges.
    ///
    /// A collapsed axis (zero extent) maps to 0 rather than dividing by
    /// zero.
    #[must_use]
    pub fn pointer_ratio(&self, point: Vec2) -> Vec2 {
        let centered = point - self.center();
        let half = Vec2::new(self.width * 0.5, self.height * 0.5);
        let axis = |offset: f32, half: f32| {
            if half > 0.0 {
                (offset / half).clamp(-1.0, 1.0)
            } else {
                0.0
            }
        };
        Vec2::new(axis(centered.x, half.x), axis(centered.y, half.y))
    }
}

/// Reads the live bounding rectangle of a layout element.
///
/// Returns `None` when the element is not attached (e.g. a ref not yet
/// bound when an effect fires); callers treat that as a no-op frame.
pub trait LayoutProbe {
    /// Current bounding rectangle, if the element exists.
    fn bounding_rect(&self) -> Option<Rect>;
}

impl LayoutProbe for Rect {
    fn bounding_rect(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<P: LayoutProbe + ?Sized> LayoutProbe for &P {
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}

impl<P: LayoutProbe + ?Sized> LayoutProbe for std::rc::Rc<P> {
    fn bounding_rect(&self) -> Option<Rect> {
        (**self).bounding_rect()
    }
}

impl<P: LayoutProbe> LayoutProbe for std::cell::RefCell<P> {
    fn bounding_rect(&self) -> Option<Rect> {
        self.borrow().bounding_rect()
    }
}
