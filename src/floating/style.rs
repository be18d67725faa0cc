//! Render output of a floating surface for one frame.
//!
//! Only compositor-friendly properties are produced (transforms, opacity
//! and a background gradient on an overlay), so applying a style never
//! forces layout.

use super::pose::Pose;

/// Style for the three layers of a floating surface at one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatingStyle {
    /// Blended pose this style was rendered from.
    pub pose: Pose,
    /// Parallax depth of the inner layer (px).
    pub depth: f32,
}

impl FloatingStyle {
    /// Transform for the outer surface.
    #[must_use]
    pub fn outer_transform(&self) -> String {
        let p = &self.pose;
        format!(
            "translate3d({}px, {}px, 0) rotate({}deg) scale({})",
            p.x, p.y, p.rotate, p.scale
        )
    }

    /// Transform for the inner content layer.
    #[must_use]
    pub fn inner_transform(&self) -> String {
        format!(
            "translateZ({}px) rotateX({}deg) rotateY({}deg)",
            self.depth, self.pose.rotate_x, self.pose.rotate_y
        )
    }

    /// Opacity of the press highlight overlay.
    #[must_use]
    pub fn overlay_opacity(&self) -> f32 {
        self.pose.press_opacity
    }

    /// Highlight center as CSS position offsets, in percent from 50%.
    #[must_use]
    pub fn highlight_offset(&self) -> (f32, f32) {
        (self.pose.ratio_x * 50.0, self.pose.ratio_y * 50.0)
    }

    /// Background of the highlight overlay.
    #[must_use]
    pub fn overlay_background(&self) -> String {
        let (dx, dy) = self.highlight_offset();
        format!(
            "radial-gradient(circle at calc(50% + {dx}%) calc(50% + {dy}%), \
             rgba(0, 0, 0, 0.3), transparent 60%)"
        )
    }
}

/// Render target for a floating surface.
///
/// Implementations write the style to whatever they wrap. When the
/// underlying element is gone they do nothing.
pub trait FloatingSurface {
    /// Write one frame's style.
    fn apply(&mut self, style: &FloatingStyle);
}

impl<S: FloatingSurface + ?Sized> FloatingSurface for Box<S> {
    fn apply(&mut self, style: &FloatingStyle) {
        (**self).apply(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_strings() {
        let style = FloatingStyle {
            pose: Pose {
                x: 1.5,
                y: -2.0,
                rotate: 3.0,
                scale: 1.02,
                rotate_x: -4.0,
                rotate_y: 6.0,
                ..Pose::NEUTRAL
            },
            depth: 50.0,
        };
        assert_eq!(
            style.outer_transform(),
            "translate3d(1.5px, -2px, 0) rotate(3deg) scale(1.02)"
        );
        assert_eq!(
            style.inner_transform(),
            "translateZ(50px) rotateX(-4deg) rotateY(6deg)"
        );
    }

    #[test]
    fn test_overlay_background_tracks_ratio() {
        let style = FloatingStyle {
            pose: Pose {
                ratio_x: 0.5,
                ratio_y: -1.0,
                press_opacity: 0.25,
                ..Pose::NEUTRAL
            },
            depth: 50.0,
        };
        assert_eq!(style.overlay_opacity(), 0.25);
        assert_eq!(style.highlight_offset(), (25.0, -50.0));
        assert!(style
            .overlay_background()
            .starts_with("radial-gradient(circle at calc(50% + 25%) calc(50% + -50%)"));
    }
}
