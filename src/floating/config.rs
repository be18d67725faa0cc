//! Per-surface drift constants, sampled once at activation.

use std::f32::consts::TAU;

use rand::Rng;

use crate::animation::interpolation::{random_between, random_in};
use crate::options::FloatingOptions;

const DEPTH_A_RANGE: [f32; 2] = [-6.0, 6.0];
const DEPTH_B_RANGE: [f32; 2] = [-1.0, 4.0];
/// Idle cycle length in seconds.
const DURATION_RANGE: [f32; 2] = [16.0, 26.0];
/// Phase offset in seconds; negative so surfaces start mid-cycle.
const DELAY_RANGE: [f32; 2] = [-4.0, 0.0];

const DRAG_X_GAIN: f32 = 0.28;
const DRAG_Y_GAIN: f32 = -0.32;
const DRAG_Y_BIAS: f32 = -4.0;
const DRAG_TILT_GAIN: f32 = 0.6;

/// Randomized constants driving one surface's idle drift and hover bias.
///
/// Fixed for the lifetime of the surface. Given the same random source
/// state, sampling always yields the same configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriftConfig {
    /// Horizontal sway amplitude (px).
    pub sway_x: f32,
    /// Vertical sway amplitude (px).
    pub sway_y: f32,
    /// Idle rotation amplitude (deg).
    pub tilt_a: f32,
    /// Hover tilt seed (deg).
    pub tilt_b: f32,
    /// Depth jitter, primary.
    pub depth_a: f32,
    /// Depth jitter, secondary.
    pub depth_b: f32,
    /// Hover horizontal bias (px).
    pub drag_x: f32,
    /// Hover vertical bias (px).
    pub drag_y: f32,
    /// Hover rotation bias (deg).
    pub drag_tilt: f32,
    /// Idle cycle length (s).
    pub duration: f32,
    /// Phase offset (s).
    pub delay: f32,
}

/// Idle oscillation at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IdleDrift {
    /// Horizontal offset (px).
    pub x: f32,
    /// Vertical offset (px).
    pub y: f32,
    /// Rotation (deg).
    pub rotate: f32,
}

impl DriftConfig {
    /// Configuration of a surface that has not been activated: no sway,
    /// no bias.
    pub const NEUTRAL: Self = Self {
        sway_x: 0.0,
        sway_y: 0.0,
        tilt_a: 0.0,
        tilt_b: 0.0,
        depth_a: 0.0,
        depth_b: 0.0,
        drag_x: 0.0,
        drag_y: 0.0,
        drag_tilt: 0.0,
        duration: 20.0,
        delay: 0.0,
    };

    /// Draw a configuration from the option ranges.
    pub fn sample<R: Rng + ?Sized>(
        options: &FloatingOptions,
        rng: &mut R,
    ) -> Self {
        let sway_x = random_in(rng, options.sway_x_range);
        let sway_y = random_in(rng, options.sway_y_range);
        let tilt_a = random_in(rng, options.tilt_a_range);
        let tilt_b = random_in(rng, options.tilt_b_range);
        let depth_a = random_in(rng, DEPTH_A_RANGE);
        let depth_b = random_in(rng, DEPTH_B_RANGE);
        let duration = random_between(rng, DURATION_RANGE[0], DURATION_RANGE[1]);
        let delay = random_between(rng, DELAY_RANGE[0], DELAY_RANGE[1]);
        Self {
            sway_x,
            sway_y,
            tilt_a,
            tilt_b,
            depth_a,
            depth_b,
            drag_x: sway_x * DRAG_X_GAIN,
            drag_y: sway_y * DRAG_Y_GAIN + DRAG_Y_BIAS,
            drag_tilt: tilt_b * DRAG_TILT_GAIN,
            duration,
            delay,
        }
    }

    /// Oscillation phase in radians after `elapsed` seconds.
    ///
    /// Time-based, so the drift is independent of frame rate.
    #[must_use]
    pub fn phase(&self, elapsed: f32) -> f32 {
        (elapsed + self.delay) * TAU / self.duration
    }

    /// Idle offsets after `elapsed` seconds since activation.
    #[must_use]
    pub fn idle_drift(&self, elapsed: f32) -> IdleDrift {
        let phase = self.phase(elapsed);
        IdleDrift {
            x: phase.sin() * self.sway_x,
            y: (phase * 1.5).cos() * self.sway_y,
            rotate: (phase * 0.5).sin() * self.tilt_a,
        }
    }
}

impl Default for DriftConfig {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
