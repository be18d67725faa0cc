//! Fade/mask reveal: a gradient mask wipes across the content while a
//! blurred overlay rides the wipe edge. The mask-only variant replaces
//! both with a plain blur-fade.

use web_time::{Duration, Instant};

use super::direction::FadeDirection;
use crate::animation::interpolation::lerp;
use crate::animation::tween::{Tween, TweenTiming};
use crate::util::easing::EasingFunction;

/// Mask image on the content in wipe mode.
pub const CONTENT_MASK: &str =
    "linear-gradient(to right, black 0%, black 40%, transparent 60%, transparent 100%)";
/// Mask image on the overlay in wipe mode.
pub const OVERLAY_MASK: &str =
    "linear-gradient(to right, transparent 30%, black 50%, transparent 70%)";
/// Mask size shared by content and overlay.
pub const MASK_SIZE: &str = "250% 100%";
/// Backdrop filter of the overlay.
pub const OVERLAY_BACKDROP: &str = "blur(6px)";
/// Blur of hidden content in the mask-only variant (px).
pub const FADE_BLUR: f32 = 8.0;

/// Descriptor for one fade run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeConfig {
    /// Reveal or hide.
    pub direction: FadeDirection,
    /// Active duration.
    pub duration: Duration,
    /// Start delay.
    pub delay: Duration,
    /// Blur-fade only; no wipe mask, no overlay.
    pub mask_only: bool,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            direction: FadeDirection::In,
            duration: Duration::from_millis(1000),
            delay: Duration::ZERO,
            mask_only: false,
        }
    }
}

impl FadeConfig {
    /// Start and end keyframes. Content and overlay share them.
    #[must_use]
    pub fn keyframes(&self) -> [FadeKeyframe; 2] {
        let (hidden, shown) = if self.mask_only {
            (
                FadeKeyframe {
                    opacity: 0.0,
                    blur: FADE_BLUR,
                    mask_position: None,
                },
                FadeKeyframe::VISIBLE,
            )
        } else {
            (
                FadeKeyframe {
                    mask_position: Some(100.0),
                    ..FadeKeyframe::VISIBLE
                },
                FadeKeyframe {
                    mask_position: Some(0.0),
                    ..FadeKeyframe::VISIBLE
                },
            )
        };
        match self.direction {
            FadeDirection::In => [hidden, shown],
            FadeDirection::Out => [shown, hidden],
        }
    }

    /// Timeline shared by both tracks.
    #[must_use]
    pub fn timing(&self) -> TweenTiming {
        TweenTiming::new(self.duration, EasingFunction::STANDARD)
            .with_delay(self.delay)
    }
}

/// Style of one fade track at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeKeyframe {
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Blur radius (px).
    pub blur: f32,
    /// Horizontal mask position in percent; `None` when unmasked.
    pub mask_position: Option<f32>,
}

impl FadeKeyframe {
    /// Fully visible, sharp, unmasked.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        blur: 0.0,
        mask_position: None,
    };

    /// Interpolate toward `other`.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            opacity: lerp(self.opacity, other.opacity, t),
            blur: lerp(self.blur, other.blur, t),
            mask_position: match (self.mask_position, other.mask_position) {
                (Some(a), Some(b)) => Some(lerp(a, b, t)),
                (a, b) => b.or(a),
            },
        }
    }

    /// CSS filter.
    #[must_use]
    pub fn filter_css(&self) -> String {
        if self.blur <= 0.0 {
            "none".to_owned()
        } else {
            format!("blur({}px)", self.blur)
        }
    }

    /// CSS `mask-position`, if masked.
    #[must_use]
    pub fn mask_position_css(&self) -> Option<String> {
        self.mask_position.map(|p| format!("{p}% 0"))
    }
}

/// Both tracks at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeFrame {
    /// Content track.
    pub content: FadeKeyframe,
    /// Overlay track; `None` while the overlay is unmounted.
    pub overlay: Option<FadeKeyframe>,
}

/// One fade/mask transition instance.
#[derive(Debug, Clone)]
pub struct FadeTransition {
    config: FadeConfig,
    content: Option<Tween>,
    overlay: Option<Tween>,
    done: bool,
}

impl FadeTransition {
    /// Inactive transition for `config`.
    #[must_use]
    pub fn new(config: FadeConfig) -> Self {
        Self {
            config,
            content: None,
            overlay: None,
            done: false,
        }
    }

    /// Descriptor in effect.
    #[must_use]
    pub fn config(&self) -> &FadeConfig {
        &self.config
    }

    /// Start both tracks from the same instant with identical timing.
    pub fn activate(&mut self, now: Instant) {
        let run = Tween::new(now, self.config.timing());
        self.content = Some(run);
        self.overlay = (!self.config.mask_only).then_some(run);
        self.done = false;
    }

    /// Apply a changed descriptor; an active transition restarts.
    pub fn reconfigure(&mut self, config: FadeConfig, now: Instant) {
        if config == self.config {
            return;
        }
        self.config = config;
        if self.content.is_some() {
            self.activate(now);
        }
    }

    /// Whether the overlay element exists.
    ///
    /// It unmounts after a reveal completes and stays after a hide.
    #[must_use]
    pub fn overlay_mounted(&self) -> bool {
        !self.config.mask_only
            && (!self.done || self.config.direction == FadeDirection::Out)
    }

    /// Content opacity outside a run: hidden until a reveal completes.
    #[must_use]
    pub fn resting_opacity(&self) -> f32 {
        match self.config.direction {
            FadeDirection::In if !self.done => 0.0,
            _ => 1.0,
        }
    }

    /// Rendered frame at `now`.
    #[must_use]
    pub fn sample(&self, now: Instant) -> FadeFrame {
        let [from, to] = self.config.keyframes();
        let content = match &self.content {
            Some(run) => from.lerp(&to, run.eased_progress(now)),
            None => FadeKeyframe {
                opacity: self.resting_opacity(),
                ..FadeKeyframe::VISIBLE
            },
        };
        let overlay = self
            .overlay
            .as_ref()
            .filter(|_| self.overlay_mounted())
            .map(|run| from.lerp(&to, run.eased_progress(now)));
        FadeFrame { content, overlay }
    }

    /// Report completion. Returns `true` exactly once per run, when both
    /// tracks have finished.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.done {
            return false;
        }
        let Some(content) = &self.content else {
            return false;
        };
        let overlay_done =
            self.overlay.as_ref().map_or(true, |run| run.is_finished(now));
        if !content.is_finished(now) || !overlay_done {
            return false;
        }
        self.done = true;
        if !self.overlay_mounted() {
            self.overlay = None;
        }
        true
    }

    /// Whether the run has been reported finished.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Drop both tracks.
    pub fn cancel(&mut self) {
        self.content = None;
        self.overlay = None;
        self.done = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wipe(direction: FadeDirection) -> FadeConfig {
        FadeConfig {
            direction,
            ..FadeConfig::default()
        }
    }

    #[test]
    fn test_wipe_keyframes() {
        let [from, to] = wipe(FadeDirection::In).keyframes();
        assert_eq!(from.mask_position, Some(100.0));
        assert_eq!(to.mask_position, Some(0.0));
        assert_eq!(from.opacity, 1.0);
        assert_eq!(from.mask_position_css().as_deref(), Some("100% 0"));

        let [from, to] = wipe(FadeDirection::Out).keyframes();
        assert_eq!(from.mask_position, Some(0.0));
        assert_eq!(to.mask_position, Some(100.0));
    }

    #[test]
    fn test_mask_only_keyframes() {
        let config = FadeConfig {
            mask_only: true,
            ..FadeConfig::default()
        };
        let [from, to] = config.keyframes();
        assert_eq!(from.opacity, 0.0);
        assert_eq!(from.filter_css(), "blur(8px)");
        assert_eq!(to, FadeKeyframe::VISIBLE);
        assert_eq!(to.filter_css(), "none");
        assert!(to.mask_position_css().is_none());
    }

    #[test]
    fn test_tracks_start_and_finish_together() {
        let mut fade = FadeTransition::new(wipe(FadeDirection::In));
        let start = Instant::now();
        fade.activate(start);
        for ms in [0, 250, 500, 750, 999] {
            let frame = fade.sample(start + Duration::from_millis(ms));
            assert_eq!(frame.overlay, Some(frame.content));
        }
        assert!(!fade.poll(start + Duration::from_millis(999)));
        assert!(fade.poll(start + Duration::from_millis(1000)));
        assert!(!fade.poll(start + Duration::from_millis(1100)));
    }

    #[test]
    fn test_overlay_unmounts_after_reveal() {
        let mut fade = FadeTransition::new(wipe(FadeDirection::In));
        let start = Instant::now();
        assert_eq!(fade.resting_opacity(), 0.0);
        fade.activate(start);
        assert!(fade.overlay_mounted());
        let end = start + Duration::from_secs(1);
        assert!(fade.poll(end));
        assert!(!fade.overlay_mounted());
        assert_eq!(fade.sample(end).overlay, None);
        assert_eq!(fade.resting_opacity(), 1.0);
    }

    #[test]
    fn test_overlay_stays_after_hide() {
        let mut fade = FadeTransition::new(wipe(FadeDirection::Out));
        let start = Instant::now();
        fade.activate(start);
        let end = start + Duration::from_secs(1);
        assert!(fade.poll(end));
        assert!(fade.overlay_mounted());
        let frame = fade.sample(end);
        assert_eq!(frame.overlay.and_then(|o| o.mask_position), Some(100.0));
    }

    #[test]
    fn test_mask_only_has_no_overlay() {
        let mut fade = FadeTransition::new(FadeConfig {
            mask_only: true,
            ..FadeConfig::default()
        });
        let start = Instant::now();
        fade.activate(start);
        assert!(!fade.overlay_mounted());
        let frame = fade.sample(start + Duration::from_millis(500));
        assert!(frame.overlay.is_none());
        assert!(frame.content.opacity > 0.0 && frame.content.opacity < 1.0);
        assert!(fade.poll(start + Duration::from_secs(1)));
    }

    #[test]
    fn test_reconfigure_restarts() {
        let mut fade = FadeTransition::new(wipe(FadeDirection::In));
        let start = Instant::now();
        fade.activate(start);
        let later = start + Duration::from_millis(600);
        fade.reconfigure(wipe(FadeDirection::Out), later);
        assert_eq!(fade.sample(later).content.mask_position, Some(0.0));
        assert!(!fade.poll(later + Duration::from_millis(999)));
        assert!(fade.poll(later + Duration::from_secs(1)));
    }

    #[test]
    fn test_delay_holds_start_frame() {
        let mut fade = FadeTransition::new(FadeConfig {
            delay: Duration::from_millis(200),
            ..wipe(FadeDirection::In)
        });
        let start = Instant::now();
        fade.activate(start);
        let frame = fade.sample(start + Duration::from_millis(100));
        assert_eq!(frame.content.mask_position, Some(100.0));
        assert!(!fade.poll(start + Duration::from_secs(1)));
        assert!(fade.poll(start + Duration::from_millis(1200)));
    }
}
