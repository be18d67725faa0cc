//! Easing functions for animation interpolation.
//!
//! Transitions use CSS-style `cubic-bezier()` timing curves so that a
//! headless sample matches what a browser would render for the same
//! keyframes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Newton iterations before falling back to bisection.
const NEWTON_ITERATIONS: usize = 8;
/// Bisection iterations for the fallback solve.
const BISECTION_ITERATIONS: usize = 24;
const SOLVE_EPSILON: f32 = 1e-6;

/// Easing function variants for animation curves.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// CSS `cubic-bezier(x1, y1, x2, y2)` with fixed endpoints (0,0) and
    /// (1,1).
    CubicBezier {
        /// First control point, x (time axis, expected in `[0, 1]`).
        x1: f32,
        /// First control point, y (progress axis, may overshoot).
        y1: f32,
        /// Second control point, x.
        x2: f32,
        /// Second control point, y.
        y2: f32,
    },
}

impl EasingFunction {
    /// Natural ease-out used by directional moves:
    /// `cubic-bezier(0.2, 0.8, 0.2, 1)`.
    pub const MOVE: Self = Self::CubicBezier {
        x1: 0.2,
        y1: 0.8,
        x2: 0.2,
        y2: 1.0,
    };

    /// Symmetric-ish standard curve used by fades and the portal proxy:
    /// `cubic-bezier(0.2, 0, 0.2, 1)`.
    pub const STANDARD: Self = Self::CubicBezier {
        x1: 0.2,
        y1: 0.0,
        x2: 0.2,
        y2: 1.0,
    };

    /// CSS `ease-out` keyword: `cubic-bezier(0, 0, 0.58, 1)`.
    pub const EASE_OUT: Self = Self::CubicBezier {
        x1: 0.0,
        y1: 0.0,
        x2: 0.58,
        y2: 1.0,
    };

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Endpoints map exactly to 0.0 and
    /// 1.0.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                if t <= 0.0 {
                    return 0.0;
                }
                if t >= 1.0 {
                    return 1.0;
                }
                let s = solve_curve_x(x1, x2, t);
                bezier_component(y1, y2, s)
            }
        }
    }

    /// CSS timing-function string for this curve.
    #[must_use]
    pub fn css(&self) -> String {
        match *self {
            Self::Linear => "linear".to_owned(),
            Self::QuadraticOut => {
                "cubic-bezier(0.5, 1, 0.89, 1)".to_owned()
            }
            Self::CubicBezier { x1, y1, x2, y2 } => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::STANDARD
    }
}

/// One axis of a cubic bezier with endpoints fixed at 0 and 1.
#[inline]
fn bezier_component(a1: f32, a2: f32, s: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * s * a1 + 3.0 * oms * s * s * a2 + s * s * s
}

#[inline]
fn bezier_slope(a1: f32, a2: f32, s: f32) -> f32 {
    let oms = 1.0 - s;
    3.0 * oms * oms * a1 + 6.0 * oms * s * (a2 - a1) + 3.0 * s * s * (1.0 - a2)
}

/// Find the curve parameter whose x component equals `x`.
fn solve_curve_x(x1: f32, x2: f32, x: f32) -> f32 {
    let mut s = x;
    for _ in 0..NEWTON_ITERATIONS {
        let err = bezier_component(x1, x2, s) - x;
        if err.abs() < SOLVE_EPSILON {
            return s;
        }
        let slope = bezier_slope(x1, x2, s);
        if slope.abs() < SOLVE_EPSILON {
            break;
        }
        s -= err / slope;
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..BISECTION_ITERATIONS {
        let value = bezier_component(x1, x2, s);
        if (value - x).abs() < SOLVE_EPSILON {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_bezier_endpoints_are_exact() {
        for curve in [
            EasingFunction::MOVE,
            EasingFunction::STANDARD,
            EasingFunction::EASE_OUT,
        ] {
            assert_eq!(curve.evaluate(0.0), 0.0);
            assert_eq!(curve.evaluate(1.0), 1.0);
        }
    }

    #[test]
    fn test_bezier_linear_control_points_is_identity() {
        let curve = EasingFunction::CubicBezier {
            x1: 1.0 / 3.0,
            y1: 1.0 / 3.0,
            x2: 2.0 / 3.0,
            y2: 2.0 / 3.0,
        };
        for i in 1..10 {
            let t = i as f32 / 10.0;
            assert!((curve.evaluate(t) - t).abs() < 1e-3, "t={t}");
        }
    }

    #[test]
    fn test_move_curve_is_ease_out() {
        // Fast early movement: well ahead of linear at a quarter
        let v = EasingFunction::MOVE.evaluate(0.25);
        assert!(v > 0.5, "expected ease-out shape, got {v}");
    }

    #[test]
    fn test_bezier_is_monotonic() {
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = EasingFunction::STANDARD.evaluate(i as f32 / 100.0);
            assert!(v >= prev - 1e-5);
            prev = v;
        }
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);
        assert_eq!(EasingFunction::MOVE.evaluate(-1.0), 0.0);
        assert_eq!(EasingFunction::MOVE.evaluate(2.0), 1.0);
    }

    #[test]
    fn test_quadratic_out() {
        let quad_out = EasingFunction::QuadraticOut;
        assert_eq!(quad_out.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_css_string() {
        assert_eq!(
            EasingFunction::MOVE.css(),
            "cubic-bezier(0.2, 0.8, 0.2, 1)"
        );
        assert_eq!(EasingFunction::Linear.css(), "linear");
    }
}
