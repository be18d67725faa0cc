//! Directional move transition: translate + opacity + blur along one
//! axis, played once per activation.

use glam::Vec2;
use web_time::{Duration, Instant};

use super::direction::MoveDirection;
use crate::animation::interpolation::lerp;
use crate::animation::tween::{Tween, TweenTiming};
use crate::util::easing::EasingFunction;

/// Blur at the offset position (px).
pub const OFFSET_BLUR: f32 = 12.0;

/// Descriptor for one directional run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalConfig {
    /// Direction and enter/leave semantics.
    pub direction: MoveDirection,
    /// Offset distance (px).
    pub distance: f32,
    /// Active duration.
    pub duration: Duration,
    /// Start delay.
    pub delay: Duration,
}

impl Default for DirectionalConfig {
    fn default() -> Self {
        Self {
            direction: MoveDirection::InRight,
            distance: 50.0,
            duration: Duration::from_millis(800),
            delay: Duration::ZERO,
        }
    }
}

impl DirectionalConfig {
    /// Start and end keyframes.
    ///
    /// Entering runs go offset → natural, leaving runs natural → offset.
    #[must_use]
    pub fn keyframes(&self) -> [MoveKeyframe; 2] {
        let displaced = MoveKeyframe {
            translate: self.direction.offset(self.distance),
            opacity: 0.0,
            blur: OFFSET_BLUR,
        };
        if self.direction.is_entering() {
            [displaced, MoveKeyframe::NATURAL]
        } else {
            [MoveKeyframe::NATURAL, displaced]
        }
    }

    /// Timeline of a run with this descriptor.
    #[must_use]
    pub fn timing(&self) -> TweenTiming {
        TweenTiming::new(self.duration, EasingFunction::MOVE)
            .with_delay(self.delay)
    }
}

/// Style of a directionally moving element at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveKeyframe {
    /// Translation from the natural position (px).
    pub translate: Vec2,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Blur radius (px).
    pub blur: f32,
}

impl MoveKeyframe {
    /// Natural position, sharp and opaque.
    pub const NATURAL: Self = Self {
        translate: Vec2::ZERO,
        opacity: 1.0,
        blur: 0.0,
    };

    /// Interpolate toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            translate: self.translate.lerp(other.translate, t),
            opacity: lerp(self.opacity, other.opacity, t),
            blur: lerp(self.blur, other.blur, t),
        }
    }

    /// CSS transform.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!(
            "translate3d({}px, {}px, 0)",
            self.translate.x, self.translate.y
        )
    }

    /// CSS filter.
    #[must_use]
    pub fn filter_css(&self) -> String {
        format!("blur({}px)", self.blur)
    }
}

/// One directional transition instance.
///
/// Plays one run per [`activate`](Self::activate) (mount or re-key). The
/// end state is held after the run, and [`poll`](Self::poll) reports the
/// completion exactly once so callers can sequence follow-up work.
#[derive(Debug, Clone)]
pub struct DirectionalTransition {
    config: DirectionalConfig,
    from: MoveKeyframe,
    to: MoveKeyframe,
    run: Option<Tween>,
    done: bool,
}

impl DirectionalTransition {
    /// Inactive transition for `config`.
    #[must_use]
    pub fn new(config: DirectionalConfig) -> Self {
        let [from, to] = config.keyframes();
        Self {
            config,
            from,
            to,
            run: None,
            done: false,
        }
    }

    /// Descriptor in effect.
    #[must_use]
    pub fn config(&self) -> &DirectionalConfig {
        &self.config
    }

    /// Style before any run starts: in place and sharp, transparent when
    /// entering (no flash of unanimated content), opaque when leaving.
    #[must_use]
    pub fn resting_style(&self) -> MoveKeyframe {
        MoveKeyframe {
            opacity: if self.config.direction.is_entering() {
                0.0
            } else {
                1.0
            },
            ..MoveKeyframe::NATURAL
        }
    }

    /// Start a fresh run from the descriptor's start keyframe.
    pub fn activate(&mut self, now: Instant) {
        let [from, to] = self.config.keyframes();
        self.from = from;
        self.to = to;
        self.done = false;
        self.run = Some(Tween::new(now, self.config.timing()));
    }

    /// Apply a changed descriptor.
    ///
    /// An in-flight (or finished) run is replaced by one that starts from
    /// the currently rendered frame and heads to the new end keyframe, so
    /// nothing jumps. Before activation the descriptor is only stored.
    pub fn reconfigure(&mut self, config: DirectionalConfig, now: Instant) {
        if config == self.config {
            return;
        }
        let current = self.run.as_ref().map(|_| self.sample(now));
        let [from, to] = config.keyframes();
        self.config = config;
        self.to = to;
        self.done = false;
        match current {
            Some(current) => {
                self.from = current;
                self.run = Some(Tween::new(now, config.timing()));
            }
            None => self.from = from,
        }
    }

    /// Rendered style at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> MoveKeyframe {
        match &self.run {
            Some(run) => self.from.lerp(&self.to, run.eased_progress(now)),
            None => self.resting_style(),
        }
    }

    /// Start and end keyframes of the current run.
    #[must_use]
    pub fn keyframes(&self) -> [MoveKeyframe; 2] {
        [self.from, self.to]
    }

    /// Report completion. Returns `true` exactly once per run.
    pub fn poll(&mut self, now: Instant) -> bool {
        match &self.run {
            Some(run) if !self.done && run.is_finished(now) => {
                self.done = true;
                true
            }
            _ => false,
        }
    }

    /// Whether the current run has been reported finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Drop the current run; the element returns to its resting style.
    pub fn cancel(&mut self) {
        self.run = None;
        self.done = false;
    }
}
