//! Frame clock: a fixed cadence for headless runs, or measured wall time
//! with a smoothed FPS.

use web_time::{Duration, Instant};

/// Display refresh rate assumed when none is configured.
pub const DEFAULT_FPS: u32 = 60;

/// Frame clock for driving frame loops without a display.
///
/// Either replays a fixed cadence (deterministic, used by the headless
/// runner and tests) or measures wall time and keeps a smoothed FPS.
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Time of the first frame.
    origin: Instant,
    /// Fixed duration of one frame; zero means wall-clock mode.
    step: Duration,
    /// Number of frames handed out so far.
    frames: u64,
    /// Last frame timestamp
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// A deterministic clock that advances exactly `1 / fps` per frame.
    #[must_use]
    pub fn fixed(origin: Instant, fps: u32) -> Self {
        let fps = if fps == 0 { DEFAULT_FPS } else { fps };
        Self {
            origin,
            step: Duration::from_secs_f64(1.0 / f64::from(fps)),
            frames: 0,
            last_frame: origin,
            smoothed_fps: fps as f32,
            smoothing: 0.05,
        }
    }

    /// A clock that reports real elapsed time.
    #[must_use]
    pub fn wall() -> Self {
        let now = Instant::now();
        Self {
            origin: now,
            step: Duration::ZERO,
            frames: 0,
            last_frame: now,
            smoothed_fps: DEFAULT_FPS as f32,
            smoothing: 0.05,
        }
    }

    /// Advance to the next frame and return its timestamp.
    pub fn tick(&mut self) -> Instant {
        self.frames += 1;
        let now = if self.step.is_zero() {
            Instant::now()
        } else {
            self.origin + self.step * self.frames as u32
        };

        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.last_frame = now;
        now
    }

    /// Timestamp of the most recent frame (the origin before any tick).
    #[must_use]
    pub fn now(&self) -> Instant {
        self.last_frame
    }

    /// Frames handed out so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock_advances_by_step() {
        let origin = Instant::now();
        let mut clock = FrameClock::fixed(origin, 50);
        let first = clock.tick();
        let second = clock.tick();
        assert_eq!(first - origin, Duration::from_millis(20));
        assert_eq!(second - origin, Duration::from_millis(40));
        assert_eq!(clock.frames(), 2);
        assert_eq!(clock.now(), second);
    }

    #[test]
    fn test_fixed_clock_fps_is_stable() {
        let mut clock = FrameClock::fixed(Instant::now(), 60);
        for _ in 0..30 {
            let _ = clock.tick();
        }
        assert!((clock.fps() - 60.0).abs() < 0.5);
    }

    #[test]
    fn test_zero_fps_falls_back_to_default() {
        let origin = Instant::now();
        let mut clock = FrameClock::fixed(origin, 0);
        let first = clock.tick();
        let expected = Duration::from_secs_f64(1.0 / 60.0);
        assert!(((first - origin).as_secs_f64() - expected.as_secs_f64()).abs() < 1e-6);
    }
}
