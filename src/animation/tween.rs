//! One-shot animation timeline shared by the transition primitives.

use web_time::{Duration, Instant};

use crate::util::easing::EasingFunction;

/// Timing of a single animation run: delay, duration and curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TweenTiming {
    /// Active duration, excluding the delay.
    pub duration: Duration,
    /// Wait before the active phase starts.
    pub delay: Duration,
    /// Easing applied across the whole active phase.
    pub easing: EasingFunction,
}

impl TweenTiming {
    /// Timing with no delay.
    #[must_use]
    pub fn new(duration: Duration, easing: EasingFunction) -> Self {
        Self {
            duration,
            delay: Duration::ZERO,
            easing,
        }
    }

    /// Set the start delay.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Delay plus duration.
    #[must_use]
    pub fn end_offset(&self) -> Duration {
        self.delay + self.duration
    }
}

/// Where a tween is along its timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TweenPhase {
    /// Still inside the start delay.
    Pending,
    /// Active, with raw (un-eased) progress in `[0, 1)`.
    Running(f32),
    /// Reached the end; the end state is held (fill forwards).
    Finished,
}

/// A started animation run.
///
/// Holds only the start instant and timing; callers sample it with the
/// frame timestamp. Keyframe values live with the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// When the run was started (before the delay).
    start_time: Instant,
    timing: TweenTiming,
}

impl Tween {
    /// Start a run at `start_time`.
    #[must_use]
    pub fn new(start_time: Instant, timing: TweenTiming) -> Self {
        Self { start_time, timing }
    }

    /// When the run was started.
    #[must_use]
    pub fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Timing of this run.
    #[must_use]
    pub fn timing(&self) -> &TweenTiming {
        &self.timing
    }

    /// Phase at `now`.
    #[must_use]
    pub fn phase(&self, now: Instant) -> TweenPhase {
        let elapsed = now.saturating_duration_since(self.start_time);
        if elapsed < self.timing.delay {
            return TweenPhase::Pending;
        }
        let active = elapsed - self.timing.delay;
        if active >= self.timing.duration {
            return TweenPhase::Finished;
        }
        TweenPhase::Running(
            active.as_secs_f32() / self.timing.duration.as_secs_f32(),
        )
    }

    /// Normalized raw progress (0.0 to 1.0); 0 during the delay.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.phase(now) {
            TweenPhase::Pending => 0.0,
            TweenPhase::Running(t) => t,
            TweenPhase::Finished => 1.0,
        }
    }

    /// Progress mapped through the easing curve.
    #[inline]
    #[must_use]
    pub fn eased_progress(&self, now: Instant) -> f32 {
        self.timing.easing.evaluate(self.progress(now))
    }

    /// Whether the run has reached its end.
    #[must_use]
    pub fn is_finished(&self, now: Instant) -> bool {
        matches!(self.phase(now), TweenPhase::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn linear(ms: u64) -> TweenTiming {
        TweenTiming::new(Duration::from_millis(ms), EasingFunction::Linear)
    }

    #[test]
    fn test_tween_progress() {
        let start = Instant::now();
        let tween = Tween::new(start, linear(100));

        assert!((tween.progress(start) - 0.0).abs() < 0.01);
        let mid = start + Duration::from_millis(50);
        assert!((tween.progress(mid) - 0.5).abs() < 0.01);
        let end = start + Duration::from_millis(100);
        assert!((tween.progress(end) - 1.0).abs() < 0.01);
        let past = start + Duration::from_millis(200);
        assert!((tween.progress(past) - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_tween_delay_is_pending() {
        let start = Instant::now();
        let tween = Tween::new(
            start,
            linear(100).with_delay(Duration::from_millis(40)),
        );
        assert_eq!(
            tween.phase(start + Duration::from_millis(20)),
            TweenPhase::Pending
        );
        assert!(
            (tween.progress(start + Duration::from_millis(90)) - 0.5).abs()
                < 0.01
        );
        assert!(tween.is_finished(start + Duration::from_millis(140)));
        assert!(!tween.is_finished(start + Duration::from_millis(139)));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let start = Instant::now();
        let tween = Tween::new(start, linear(0));
        assert!(tween.is_finished(start));
        assert_eq!(tween.progress(start), 1.0);
    }

    #[test]
    fn test_sampling_before_start_is_pending_or_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let tween = Tween::new(start, linear(100));
        assert_eq!(tween.progress(Instant::now()), 0.0);
    }

    #[test]
    fn test_end_offset() {
        let timing = linear(300).with_delay(Duration::from_millis(80));
        assert_eq!(timing.end_offset(), Duration::from_millis(380));
    }
}
