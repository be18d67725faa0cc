//! Blended transform state of a floating surface.

use crate::animation::interpolation::lerp;

/// Transform and highlight state of a floating surface.
///
/// A simulator keeps two of these: the target, set instantly by input,
/// and the current pose, which only ever eases toward the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Horizontal offset (px).
    pub x: f32,
    /// Vertical offset (px).
    pub y: f32,
    /// In-plane rotation (deg).
    pub rotate: f32,
    /// Uniform scale.
    pub scale: f32,
    /// Tilt around the horizontal axis (deg).
    pub rotate_x: f32,
    /// Tilt around the vertical axis (deg).
    pub rotate_y: f32,
    /// Highlight center, horizontal, in `[-1, 1]`.
    pub ratio_x: f32,
    /// Highlight center, vertical, in `[-1, 1]`.
    pub ratio_y: f32,
    /// Press highlight opacity in `[0, 1]`.
    pub press_opacity: f32,
}

/// Per-axis-group blend factors for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendRates {
    /// Offset, rotation and scale.
    pub motion: f32,
    /// Press tilt and press highlight opacity.
    pub press: f32,
    /// Highlight position.
    pub highlight: f32,
}

impl Pose {
    /// At rest: no offset, no rotation, unit scale, highlight off.
    pub const NEUTRAL: Self = Self {
        x: 0.0,
        y: 0.0,
        rotate: 0.0,
        scale: 1.0,
        rotate_x: 0.0,
        rotate_y: 0.0,
        ratio_x: 0.0,
        ratio_y: 0.0,
        press_opacity: 0.0,
    };

    /// Move every axis a fraction of the way toward `target`.
    pub fn blend_toward(&mut self, target: &Self, rates: BlendRates) {
        self.x = lerp(self.x, target.x, rates.motion);
        self.y = lerp(self.y, target.y, rates.motion);
        self.rotate = lerp(self.rotate, target.rotate, rates.motion);
        self.scale = lerp(self.scale, target.scale, rates.motion);
        self.rotate_x = lerp(self.rotate_x, target.rotate_x, rates.press);
        self.rotate_y = lerp(self.rotate_y, target.rotate_y, rates.press);
        self.ratio_x = lerp(self.ratio_x, target.ratio_x, rates.highlight);
        self.ratio_y = lerp(self.ratio_y, target.ratio_y, rates.highlight);
        self.press_opacity =
            lerp(self.press_opacity, target.press_opacity, rates.press);
    }

    /// Largest per-axis absolute difference to `other`.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        [
            self.x - other.x,
            self.y - other.y,
            self.rotate - other.rotate,
            self.scale - other.scale,
            self.rotate_x - other.rotate_x,
            self.rotate_y - other.rotate_y,
            self.ratio_x - other.ratio_x,
            self.ratio_y - other.ratio_y,
            self.press_opacity - other.press_opacity,
        ]
        .into_iter()
        .fold(0.0, |acc, d| acc.max(d.abs()))
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RATES: BlendRates = BlendRates {
        motion: 0.15,
        press: 0.2,
        highlight: 0.1,
    };

    fn target() -> Pose {
        Pose {
            x: 12.0,
            y: -7.0,
            rotate: 3.0,
            scale: 1.02,
            rotate_x: -6.0,
            rotate_y: 9.0,
            ratio_x: 0.5,
            ratio_y: -0.75,
            press_opacity: 1.0,
        }
    }

    #[test]
    fn test_blend_converges_monotonically() {
        let goal = target();
        let mut pose = Pose::NEUTRAL;
        let mut last = pose.distance(&goal);
        for _ in 0..60 {
            pose.blend_toward(&goal, RATES);
            let d = pose.distance(&goal);
            assert!(d < last, "distance must strictly shrink: {d} >= {last}");
            last = d;
        }
    }

    #[test]
    fn test_blend_at_target_stays_put() {
        let goal = target();
        let mut pose = goal;
        pose.blend_toward(&goal, RATES);
        assert_eq!(pose.distance(&goal), 0.0);
    }

    #[test]
    fn test_axis_groups_use_their_own_rate() {
        let goal = Pose {
            x: 10.0,
            rotate_x: 10.0,
            ratio_x: 10.0,
            ..Pose::NEUTRAL
        };
        let mut pose = Pose::NEUTRAL;
        pose.blend_toward(&goal, RATES);
        assert!((pose.x - 1.5).abs() < 1e-5);
        assert!((pose.rotate_x - 2.0).abs() < 1e-5);
        assert!((pose.ratio_x - 1.0).abs() < 1e-5);
    }
}
