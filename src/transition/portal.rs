//! Portal (FLIP-style) transition: a small proxy grows from an origin
//! rectangle to the rendered bounds of a target element.
//!
//! The target may move or resize while the proxy is in flight, so the
//! proxy is not a fixed tween. Every frame the loop re-reads the target
//! bounds and recomputes the three keyframes from the stored origin, the
//! last observed target and the eased progress. The final frame therefore
//! always lands on the latest target bounds.

use std::cell::RefCell;
use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::animation::frame_loop::{
    FrameControl, FrameDriver, FrameTask, LoopHandle,
};
use crate::animation::interpolation::lerp;
use crate::animation::tween::{Tween, TweenTiming};
use crate::geometry::{LayoutProbe, Rect};
use crate::util::easing::EasingFunction;

/// Side of the square the proxy starts as (px).
pub const SEED_SIZE: f32 = 4.0;
/// Timeline offset at which the proxy reaches the target's height.
pub const HEIGHT_PHASE_END: f32 = 0.4;
/// Vertical offset of the hidden content (px).
pub const HIDDEN_CONTENT_SHIFT: f32 = -20.0;

const DEFAULT_DURATION: Duration = Duration::from_millis(400);
const DEFAULT_REVEAL: Duration = Duration::from_millis(600);

/// The proxy's starting rectangle: a small square at the origin's left
/// edge, vertically centered.
#[must_use]
pub fn seed_rect(origin: &Rect) -> Rect {
    Rect::new(
        origin.top + origin.height * 0.5 - SEED_SIZE * 0.5,
        origin.left,
        SEED_SIZE,
        SEED_SIZE,
    )
}

/// One proxy keyframe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyKeyframe {
    /// Position along the timeline in `[0, 1]`.
    pub offset: f32,
    /// Proxy bounds at that offset.
    pub rect: Rect,
}

/// Keyframes for a run from `origin` toward `target`: seed square, then a
/// thin bar at the target's top-left with the target's height, then the
/// full target.
#[must_use]
pub fn proxy_keyframes(origin: &Rect, target: &Rect) -> [ProxyKeyframe; 3] {
    [
        ProxyKeyframe {
            offset: 0.0,
            rect: seed_rect(origin),
        },
        ProxyKeyframe {
            offset: HEIGHT_PHASE_END,
            rect: Rect::new(target.top, target.left, SEED_SIZE, target.height),
        },
        ProxyKeyframe {
            offset: 1.0,
            rect: *target,
        },
    ]
}

/// Proxy bounds at eased progress `t` through `keyframes`.
#[must_use]
pub fn sample_keyframes(keyframes: &[ProxyKeyframe; 3], t: f32) -> Rect {
    let [first, middle, last] = keyframes;
    if t >= last.offset {
        return last.rect;
    }
    if t <= first.offset {
        return first.rect;
    }
    let (from, to) = if t <= middle.offset {
        (first, middle)
    } else {
        (middle, last)
    };
    let local = (t - from.offset) / (to.offset - from.offset);
    from.rect.lerp(&to.rect, local)
}

/// Identifies one run of a [`PortalTransition`]. Each start gets a new id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortalRun(u64);

/// Where a portal run is.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PortalState {
    /// Never started.
    Idle,
    /// Proxy in flight.
    Animating {
        /// Which run is in flight.
        run: PortalRun,
        /// When the run started.
        started: Instant,
        /// Most recently observed target bounds.
        last_target: Rect,
    },
    /// Proxy reached the target; content is being revealed.
    Completed {
        /// When completion was reported.
        at: Instant,
    },
    /// Abandoned before completion. No completion is ever reported.
    Cancelled,
}

/// Notification emitted by [`PortalTransition::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortalEvent {
    /// The proxy reached its final frame. Emitted once per run.
    Completed,
}

/// Style of the real content while the proxy is in flight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentStyle {
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Vertical shift (px).
    pub translate_y: f32,
}

impl ContentStyle {
    /// Hidden content, shifted up.
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        translate_y: HIDDEN_CONTENT_SHIFT,
    };
    /// Fully revealed content.
    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        translate_y: 0.0,
    };

    /// CSS transform.
    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("translateY({}px)", self.translate_y)
    }
}

/// State machine for one portal target.
#[derive(Debug, Clone)]
pub struct PortalTransition {
    origin: Option<Rect>,
    timing: TweenTiming,
    reveal: Duration,
    state: PortalState,
    next_run: u64,
    frames: Option<LoopHandle>,
}

impl Default for PortalTransition {
    fn default() -> Self {
        Self::new(DEFAULT_DURATION)
    }
}

impl PortalTransition {
    /// Idle portal whose proxy grows over `duration`.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            origin: None,
            timing: TweenTiming::new(duration, EasingFunction::STANDARD),
            reveal: DEFAULT_REVEAL,
            state: PortalState::Idle,
            next_run: 0,
            frames: None,
        }
    }

    /// Set how long the content reveal takes after completion.
    #[must_use]
    pub fn with_reveal(mut self, reveal: Duration) -> Self {
        self.reveal = reveal;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> PortalState {
        self.state
    }

    /// Origin of the current or last run.
    #[must_use]
    pub fn origin(&self) -> Option<Rect> {
        self.origin
    }

    /// Whether the proxy is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.state, PortalState::Animating { .. })
    }

    /// The run in flight, if any.
    #[must_use]
    pub fn current_run(&self) -> Option<PortalRun> {
        match self.state {
            PortalState::Animating { run, .. } => Some(run),
            _ => None,
        }
    }

    /// Begin a run from `origin` toward `target`. Any in-flight run is
    /// superseded without reporting completion, and the frame loop
    /// attached to it is cancelled.
    pub fn start(&mut self, origin: Rect, target: Rect, now: Instant) {
        if self.is_animating() {
            log::debug!("portal run superseded by new origin");
        }
        self.detach_frames();
        let run = PortalRun(self.next_run);
        self.next_run += 1;
        self.origin = Some(origin);
        self.state = PortalState::Animating {
            run,
            started: now,
            last_target: target,
        };
    }

    fn attach_frames(&mut self, frames: LoopHandle) {
        self.detach_frames();
        self.frames = Some(frames);
    }

    fn detach_frames(&mut self) {
        if let Some(frames) = self.frames.take() {
            frames.cancel();
        }
    }

    /// React to the origin changing.
    ///
    /// `None` cancels an in-flight run. A new origin starts a run, unless
    /// the target is not rendered yet, in which case nothing happens.
    pub fn set_origin(
        &mut self,
        origin: Option<Rect>,
        target: Option<Rect>,
        now: Instant,
    ) {
        match (origin, target) {
            (None, _) => self.cancel(),
            (Some(origin), Some(target)) => self.start(origin, target, now),
            (Some(_), None) => {
                log::debug!("portal target not rendered, skipping run");
            }
        }
    }

    /// Record freshly observed target bounds.
    pub fn track(&mut self, target: Rect) {
        if let PortalState::Animating { last_target, .. } = &mut self.state {
            *last_target = target;
        }
    }

    /// Proxy bounds at `now`, while animating.
    #[must_use]
    pub fn proxy_rect(&self, now: Instant) -> Option<Rect> {
        let PortalState::Animating {
            started,
            last_target,
            ..
        } = self.state
        else {
            return None;
        };
        let origin = self.origin?;
        let t = Tween::new(started, self.timing).eased_progress(now);
        Some(sample_keyframes(&proxy_keyframes(&origin, &last_target), t))
    }

    /// Move to `Completed` once the run has ended. Returns the completion
    /// event exactly once per run.
    pub fn advance(&mut self, now: Instant) -> Option<PortalEvent> {
        let PortalState::Animating { started, .. } = self.state else {
            return None;
        };
        if !Tween::new(started, self.timing).is_finished(now) {
            return None;
        }
        self.state = PortalState::Completed { at: now };
        log::debug!("portal run completed");
        Some(PortalEvent::Completed)
    }

    /// Abandon an in-flight run. Idempotent; never reports completion.
    pub fn cancel(&mut self) {
        self.detach_frames();
        if self.is_animating() {
            self.state = PortalState::Cancelled;
            log::debug!("portal run cancelled");
        }
    }

    /// Abandon `run` if it is still the one in flight. A superseded run is
    /// left alone.
    pub fn cancel_run(&mut self, run: PortalRun) {
        if self.current_run() == Some(run) {
            self.cancel();
        }
    }

    /// Style of the real content at `now`: hidden while the proxy is in
    /// flight, then eased into place.
    #[must_use]
    pub fn content_style(&self, now: Instant) -> ContentStyle {
        match self.state {
            PortalState::Animating { .. } => ContentStyle::HIDDEN,
            PortalState::Completed { at } => {
                let reveal = Tween::new(
                    at,
                    TweenTiming::new(self.reveal, EasingFunction::EASE_OUT),
                );
                let t = reveal.eased_progress(now);
                ContentStyle {
                    opacity: lerp(0.0, 1.0, t),
                    translate_y: lerp(HIDDEN_CONTENT_SHIFT, 0.0, t),
                }
            }
            PortalState::Idle | PortalState::Cancelled => ContentStyle::VISIBLE,
        }
    }

    /// Whether the content is at least partly visible.
    #[must_use]
    pub fn content_visible(&self, now: Instant) -> bool {
        self.content_style(now).opacity > 0.0
    }
}

/// Render target for the proxy element.
pub trait ProxySurface {
    /// Position and size the proxy.
    fn place(&mut self, rect: &Rect);
    /// Remove the proxy.
    fn remove(&mut self);
}

impl<S: ProxySurface + ?Sized> ProxySurface for Box<S> {
    fn place(&mut self, rect: &Rect) {
        (**self).place(rect);
    }

    fn remove(&mut self) {
        (**self).remove();
    }
}

/// Per-frame loop for one portal run.
///
/// Dropping the loop (completion or cancellation) removes the proxy.
pub struct PortalLoop<P, S: ProxySurface> {
    portal: Rc<RefCell<PortalTransition>>,
    run: Option<PortalRun>,
    target: P,
    proxy: S,
    placed: bool,
}

impl<P: LayoutProbe, S: ProxySurface> PortalLoop<P, S> {
    /// Loop over the run currently in flight on `portal`, measuring
    /// `target` and drawing into `proxy`. The loop ends as soon as that run
    /// is no longer the one in flight.
    pub fn new(portal: Rc<RefCell<PortalTransition>>, target: P, proxy: S) -> Self {
        let run = portal.borrow().current_run();
        Self {
            portal,
            run,
            target,
            proxy,
            placed: false,
        }
    }

    fn place(&mut self, rect: &Rect) {
        self.proxy.place(rect);
        self.placed = true;
    }

    fn remove(&mut self) {
        if self.placed {
            self.proxy.remove();
            self.placed = false;
        }
    }
}

impl<P: LayoutProbe, S: ProxySurface> FrameTask for PortalLoop<P, S> {
    fn frame(&mut self, now: Instant) -> FrameControl {
        let (rect, event) = {
            let mut portal = self.portal.borrow_mut();
            if self.run.is_none() || portal.current_run() != self.run {
                drop(portal);
                self.remove();
                return FrameControl::Finish;
            }
            if let Some(target) = self.target.bounding_rect() {
                portal.track(target);
            }
            (portal.proxy_rect(now), portal.advance(now))
        };
        if let Some(rect) = rect {
            self.place(&rect);
        }
        if event.is_some() {
            self.remove();
            return FrameControl::Finish;
        }
        FrameControl::Continue
    }
}

impl<P, S: ProxySurface> Drop for PortalLoop<P, S> {
    fn drop(&mut self) {
        if self.placed {
            self.proxy.remove();
        }
    }
}

/// Cancels both the frame loop and the portal run it was launched for.
#[derive(Debug, Clone)]
pub struct PortalHandle {
    frames: LoopHandle,
    portal: Rc<RefCell<PortalTransition>>,
    run: PortalRun,
}

impl PortalHandle {
    /// Stop the run. Idempotent; no completion is reported afterwards.
    /// A run that was already superseded by a later launch is not touched.
    pub fn cancel(&self) {
        self.frames.cancel();
        self.portal.borrow_mut().cancel_run(self.run);
    }

    /// The run this handle controls.
    #[must_use]
    pub fn run(&self) -> PortalRun {
        self.run
    }

    /// Whether the proxy loop is still armed.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.frames.is_active()
    }
}

/// Start a portal run toward `target` and arm its frame loop.
///
/// The proxy's starting frame is placed immediately and any loop still
/// running for an earlier run of `portal` is cancelled. Returns `None`
/// without doing anything when the target is not rendered.
pub fn launch<P, S>(
    driver: &mut FrameDriver,
    portal: &Rc<RefCell<PortalTransition>>,
    origin: Rect,
    target: P,
    proxy: S,
    now: Instant,
) -> Option<PortalHandle>
where
    P: LayoutProbe + 'static,
    S: ProxySurface + 'static,
{
    let Some(target_rect) = target.bounding_rect() else {
        log::debug!("portal target not rendered, skipping run");
        return None;
    };
    let run = {
        let mut portal = portal.borrow_mut();
        portal.start(origin, target_rect, now);
        portal.current_run()?
    };
    let mut frames = PortalLoop::new(Rc::clone(portal), target, proxy);
    frames.place(&seed_rect(&origin));
    let handle = driver.start(frames);
    portal.borrow_mut().attach_frames(handle.clone());
    Some(PortalHandle {
        frames: handle,
        portal: Rc::clone(portal),
        run,
    })
}
