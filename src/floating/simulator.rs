//! Floating interaction simulator: idle drift, hover parallax and press
//! tilt blended into one pose per frame.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;
use rand::Rng;
use web_time::Instant;

use super::config::DriftConfig;
use super::pose::{BlendRates, Pose};
use super::style::{FloatingStyle, FloatingSurface};
use crate::animation::frame_loop::{
    FrameControl, FrameDriver, FrameTask, LoopHandle,
};
use crate::geometry::{LayoutProbe, Rect};
use crate::input::{PointerButtons, PointerEvent};
use crate::options::FloatingOptions;

/// Hover multiplier cap for the horizontal drag offset (px).
const DRAG_X_REACH_CAP: f32 = 12.0;
/// Extra horizontal reach on top of the drag bias (px).
const DRAG_X_REACH_BIAS: f32 = 4.0;
/// Vertical reach while hovered (px).
const DRAG_Y_REACH: f32 = 4.0;
/// Rotation reach while hovered (deg).
const DRAG_TILT_REACH: f32 = 3.0;

/// Pointer relationship of a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// Not mounted yet; no drift sampled, no frames produced.
    Uninitialized,
    /// Mounted, pointer outside.
    Idle,
    /// Pointer inside the surface bounds.
    Hovering,
}

/// Simulation state of one floating surface.
///
/// Input handlers only ever write the target pose; [`step`](Self::step)
/// is the only place the current pose changes. Handlers that fire between
/// frames are simply observed on the next frame.
#[derive(Debug, Clone)]
pub struct FloatingSimulator {
    options: FloatingOptions,
    config: DriftConfig,
    activity: Activity,
    pressed: bool,
    activated_at: Option<Instant>,
    /// Bounds captured on enter, reused until leave.
    bounds: Option<Rect>,
    current: Pose,
    target: Pose,
}

impl FloatingSimulator {
    /// Unmounted simulator with the neutral drift configuration.
    #[must_use]
    pub fn new(options: FloatingOptions) -> Self {
        Self {
            options,
            config: DriftConfig::NEUTRAL,
            activity: Activity::Uninitialized,
            pressed: false,
            activated_at: None,
            bounds: None,
            current: Pose::NEUTRAL,
            target: Pose::NEUTRAL,
        }
    }

    /// Mount: sample the drift configuration and start the idle clock.
    ///
    /// Only the first activation samples; later calls are ignored.
    pub fn activate<R: Rng + ?Sized>(&mut self, now: Instant, rng: &mut R) {
        if self.activity != Activity::Uninitialized {
            return;
        }
        self.config = DriftConfig::sample(&self.options, rng);
        self.activity = Activity::Idle;
        self.activated_at = Some(now);
        log::debug!(
            "floating surface activated: cycle {:.1}s, phase offset {:.2}s",
            self.config.duration,
            self.config.delay
        );
    }

    /// Dispatch a pointer event. `probe` is read only when the bounds are
    /// not already cached.
    pub fn handle_pointer<P: LayoutProbe + ?Sized>(
        &mut self,
        event: PointerEvent,
        probe: &P,
    ) {
        match event {
            PointerEvent::Enter => self.pointer_enter(probe.bounding_rect()),
            PointerEvent::Move { position, buttons } => {
                self.pointer_move(position, buttons, probe);
            }
            PointerEvent::Down { position } => {
                self.pointer_down(position, probe);
            }
            PointerEvent::Up => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    /// Pointer entered: start hovering and cache the bounds.
    pub fn pointer_enter(&mut self, bounds: Option<Rect>) {
        if self.activity == Activity::Uninitialized {
            return;
        }
        self.activity = Activity::Hovering;
        self.bounds = bounds;
        self.target.scale = self.options.hover_scale;
        log::trace!("floating surface hover enter");
    }

    /// Pointer moved: retarget the hover offset, and the press tilt while
    /// the primary button is held.
    pub fn pointer_move<P: LayoutProbe + ?Sized>(
        &mut self,
        position: Vec2,
        buttons: PointerButtons,
        probe: &P,
    ) {
        if self.activity == Activity::Uninitialized {
            return;
        }
        let Some(ratio) = self.pointer_ratio(position, probe) else {
            return;
        };

        let reach_x = DRAG_X_REACH_CAP
            .min(self.config.drag_x.abs() + DRAG_X_REACH_BIAS);
        self.target.x = self.config.drag_x + ratio.x * reach_x;
        self.target.y = self.config.drag_y + ratio.y * DRAG_Y_REACH;
        self.target.rotate = self.config.drag_tilt + ratio.x * DRAG_TILT_REACH;
        self.target.scale = self.options.hover_scale;
        self.target.ratio_x = ratio.x;
        self.target.ratio_y = ratio.y;

        if buttons.is_primary() {
            self.set_press_tilt(ratio);
        }
    }

    /// Button down: enter the pressed state and aim the tilt at the press
    /// position.
    pub fn pointer_down<P: LayoutProbe + ?Sized>(
        &mut self,
        position: Vec2,
        probe: &P,
    ) {
        if self.activity == Activity::Uninitialized {
            return;
        }
        self.pressed = true;
        if let Some(ratio) = self.pointer_ratio(position, probe) {
            self.set_press_tilt(ratio);
        }
    }

    /// Button up: leave the pressed state; tilt eases back to flat.
    pub fn pointer_up(&mut self) {
        self.pressed = false;
        self.target.rotate_x = 0.0;
        self.target.rotate_y = 0.0;
    }

    /// Pointer left: drop hover and press, forget the bounds and reset the
    /// target to neutral. The current pose eases back on its own.
    pub fn pointer_leave(&mut self) {
        if self.activity == Activity::Uninitialized {
            return;
        }
        self.activity = Activity::Idle;
        self.pressed = false;
        self.bounds = None;
        self.target = Pose::NEUTRAL;
        log::trace!("floating surface hover leave");
    }

    /// Pose the surface is heading toward at `now`: idle drift plus hover
    /// and press contributions. `None` before activation.
    #[must_use]
    pub fn target_pose(&self, now: Instant) -> Option<Pose> {
        let activated_at = self.activated_at?;
        let elapsed = now.saturating_duration_since(activated_at).as_secs_f32();
        let drift = self.config.idle_drift(elapsed);

        let mut goal = Pose {
            x: drift.x,
            y: drift.y,
            rotate: drift.rotate,
            ratio_x: self.target.ratio_x,
            ratio_y: self.target.ratio_y,
            ..Pose::NEUTRAL
        };
        if self.is_hovering() {
            goal.x += self.target.x;
            goal.y += self.target.y;
            goal.rotate += self.target.rotate;
            goal.scale = self.target.scale;
        }
        if self.pressed {
            goal.rotate_x = self.target.rotate_x;
            goal.rotate_y = self.target.rotate_y;
            goal.press_opacity = 1.0;
        }
        Some(goal)
    }

    /// Advance one frame: blend the current pose toward the target pose.
    ///
    /// Returns the style to render, or `None` before activation.
    pub fn step(&mut self, now: Instant) -> Option<FloatingStyle> {
        let goal = self.target_pose(now)?;
        let rates = self.blend_rates();
        self.current.blend_toward(&goal, rates);
        Some(FloatingStyle {
            pose: self.current,
            depth: self.options.depth,
        })
    }

    /// Blend factors for the current interaction state.
    #[must_use]
    pub fn blend_rates(&self) -> BlendRates {
        BlendRates {
            motion: if self.is_hovering() {
                self.options.hover_blend
            } else {
                self.options.idle_blend
            },
            press: self.options.press_blend,
            highlight: self.options.highlight_blend,
        }
    }

    /// Current pointer relationship.
    #[must_use]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    /// Whether the pointer is inside.
    #[must_use]
    pub fn is_hovering(&self) -> bool {
        self.activity == Activity::Hovering
    }

    /// Whether a press is in progress.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Smoothed, render-authoritative pose.
    #[must_use]
    pub fn current(&self) -> &Pose {
        &self.current
    }

    /// Input-driven target (without drift).
    #[must_use]
    pub fn target(&self) -> &Pose {
        &self.target
    }

    /// Drift constants in effect.
    #[must_use]
    pub fn config(&self) -> &DriftConfig {
        &self.config
    }

    /// Cached bounds, if hovering.
    #[must_use]
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn pointer_ratio<P: LayoutProbe + ?Sized>(
        &mut self,
        position: Vec2,
        probe: &P,
    ) -> Option<Vec2> {
        if self.bounds.is_none() {
            self.bounds = probe.bounding_rect();
        }
        self.bounds.map(|bounds| bounds.pointer_ratio(position))
    }

    fn set_press_tilt(&mut self, ratio: Vec2) {
        self.target.rotate_x = -ratio.y * self.options.max_tilt;
        self.target.rotate_y = ratio.x * self.options.max_tilt;
    }
}

/// Frame task rendering a shared simulator onto a surface.
#[derive(Debug)]
pub struct FloatingLoop<S> {
    simulator: Rc<RefCell<FloatingSimulator>>,
    surface: S,
}

impl<S: FloatingSurface> FloatingLoop<S> {
    /// Loop over `simulator` writing to `surface`.
    pub fn new(simulator: Rc<RefCell<FloatingSimulator>>, surface: S) -> Self {
        Self { simulator, surface }
    }
}

impl<S: FloatingSurface> FrameTask for FloatingLoop<S> {
    fn frame(&mut self, now: Instant) -> FrameControl {
        let style = self.simulator.borrow_mut().step(now);
        if let Some(style) = style {
            self.surface.apply(&style);
        }
        FrameControl::Continue
    }
}

/// Activate `simulator` and start its frame loop on `driver`.
///
/// The loop runs every frame until the returned handle is cancelled.
pub fn mount<S, R>(
    driver: &mut FrameDriver,
    simulator: &Rc<RefCell<FloatingSimulator>>,
    surface: S,
    now: Instant,
    rng: &mut R,
) -> LoopHandle
where
    S: FloatingSurface + 'static,
    R: Rng + ?Sized,
{
    simulator.borrow_mut().activate(now, rng);
    driver.start(FloatingLoop::new(Rc::clone(simulator), surface))
}
