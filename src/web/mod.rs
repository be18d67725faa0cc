//! Browser bindings: DOM-backed surfaces and probes, and a
//! `requestAnimationFrame` pump for the [`FrameDriver`].

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;
use web_time::Instant;

use crate::animation::FrameDriver;
use crate::error::DriftError;
use crate::floating::{FloatingStyle, FloatingSurface};
use crate::geometry::{LayoutProbe, Rect};
use crate::transition::{
    ContentStyle, FadeFrame, FadeKeyframe, MoveKeyframe, ProxySurface,
    CONTENT_MASK, MASK_SIZE, OVERLAY_BACKDROP, OVERLAY_MASK,
};

/// Install the panic hook and route `log` to the browser console.
pub fn init_logging(level: log::Level) {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(level).is_err() {
        log::debug!("console logger already installed");
    }
}

fn set_style(
    element: &web::HtmlElement,
    property: &str,
    value: &str,
) -> Result<(), DriftError> {
    element
        .style()
        .set_property(property, value)
        .map_err(|e| DriftError::Surface(format!("{property}: {e:?}")))
}

fn apply_all(element: &web::HtmlElement, properties: &[(&str, &str)]) {
    for (property, value) in properties {
        if let Err(e) = set_style(element, property, value) {
            log::warn!("style write failed: {e}");
        }
    }
}

/// Write a directional frame to `element`.
pub fn apply_move(element: &web::HtmlElement, frame: &MoveKeyframe) {
    apply_all(
        element,
        &[
            ("transform", frame.transform_css().as_str()),
            ("opacity", frame.opacity.to_string().as_str()),
            ("filter", frame.filter_css().as_str()),
        ],
    );
}

fn apply_fade_track(
    element: &web::HtmlElement,
    track: &FadeKeyframe,
    mask: &str,
) {
    apply_all(
        element,
        &[
            ("opacity", track.opacity.to_string().as_str()),
            ("filter", track.filter_css().as_str()),
        ],
    );
    if let Some(position) = track.mask_position_css() {
        apply_all(
            element,
            &[
                ("mask-image", mask),
                ("mask-size", MASK_SIZE),
                ("mask-position", position.as_str()),
            ],
        );
    }
}

/// Write a fade frame to the content element and, while mounted, the
/// overlay element.
pub fn apply_fade(
    content: &web::HtmlElement,
    overlay: Option<&web::HtmlElement>,
    frame: &FadeFrame,
) {
    apply_fade_track(content, &frame.content, CONTENT_MASK);
    match (overlay, &frame.overlay) {
        (Some(element), Some(track)) => {
            apply_fade_track(element, track, OVERLAY_MASK);
            apply_all(
                element,
                &[
                    ("backdrop-filter", OVERLAY_BACKDROP),
                    ("display", "block"),
                ],
            );
        }
        (Some(element), None) => apply_all(element, &[("display", "none")]),
        (None, _) => {}
    }
}

/// Write the portal content style to `element`.
pub fn apply_content(element: &web::HtmlElement, style: &ContentStyle) {
    apply_all(
        element,
        &[
            ("opacity", style.opacity.to_string().as_str()),
            ("transform", style.transform_css().as_str()),
        ],
    );
}

/// The three layers of a floating element.
#[derive(Debug, Clone)]
pub struct DomFloatingSurface {
    outer: web::HtmlElement,
    inner: web::HtmlElement,
    overlay: Option<web::HtmlElement>,
}

impl DomFloatingSurface {
    /// Surface over existing elements.
    #[must_use]
    pub fn new(
        outer: web::HtmlElement,
        inner: web::HtmlElement,
        overlay: Option<web::HtmlElement>,
    ) -> Self {
        Self {
            outer,
            inner,
            overlay,
        }
    }
}

impl FloatingSurface for DomFloatingSurface {
    fn apply(&mut self, style: &FloatingStyle) {
        apply_all(&self.outer, &[("transform", style.outer_transform().as_str())]);
        apply_all(&self.inner, &[("transform", style.inner_transform().as_str())]);
        if let Some(overlay) = &self.overlay {
            apply_all(
                overlay,
                &[
                    ("opacity", style.overlay_opacity().to_string().as_str()),
                    ("background", style.overlay_background().as_str()),
                ],
            );
        }
    }
}

/// Measures an element, if attached.
#[derive(Debug, Clone, Default)]
pub struct DomProbe(pub Option<web::Element>);

impl LayoutProbe for DomProbe {
    fn bounding_rect(&self) -> Option<Rect> {
        let rect = self.0.as_ref()?.get_bounding_client_rect();
        Some(Rect::new(
            rect.top() as f32,
            rect.left() as f32,
            rect.width() as f32,
            rect.height() as f32,
        ))
    }
}

/// Fixed-position proxy element for portal runs.
#[derive(Debug, Clone)]
pub struct DomProxySurface {
    element: web::HtmlElement,
}

impl DomProxySurface {
    /// Proxy drawn with `element`.
    #[must_use]
    pub fn new(element: web::HtmlElement) -> Self {
        Self { element }
    }
}

impl ProxySurface for DomProxySurface {
    fn place(&mut self, rect: &Rect) {
        apply_all(
            &self.element,
            &[
                ("position", "fixed"),
                ("top", format!("{}px", rect.top).as_str()),
                ("left", format!("{}px", rect.left).as_str()),
                ("width", format!("{}px", rect.width).as_str()),
                ("height", format!("{}px", rect.height).as_str()),
            ],
        );
    }

    fn remove(&mut self) {
        self.element.remove();
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(callback: &FrameCallback) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let slot = callback.borrow();
    let Some(closure) = slot.as_ref() else {
        return false;
    };
    window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
}

/// Pumps a [`FrameDriver`] from `requestAnimationFrame`.
///
/// The pump stops re-arming once the driver is idle; call
/// [`wake`](Self::wake) after starting new loops.
pub struct AnimationFramePump {
    driver: Rc<RefCell<FrameDriver>>,
    callback: FrameCallback,
    armed: Rc<Cell<bool>>,
}

impl AnimationFramePump {
    /// Pump for `driver`. Nothing runs until [`wake`](Self::wake).
    #[must_use]
    pub fn new(driver: Rc<RefCell<FrameDriver>>) -> Self {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let armed = Rc::new(Cell::new(false));

        let tick_driver = Rc::clone(&driver);
        let tick_callback = Rc::clone(&callback);
        let tick_armed = Rc::clone(&armed);
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            tick_armed.set(false);
            let idle = {
                let mut driver = tick_driver.borrow_mut();
                let _ = driver.tick(Instant::now());
                driver.is_idle()
            };
            if !idle {
                tick_armed.set(request_frame(&tick_callback));
            }
        }) as Box<dyn FnMut()>));

        Self {
            driver,
            callback,
            armed,
        }
    }

    /// Shared driver.
    #[must_use]
    pub fn driver(&self) -> &Rc<RefCell<FrameDriver>> {
        &self.driver
    }

    /// Arm the next frame unless one is already pending.
    pub fn wake(&self) {
        if !self.armed.get() {
            self.armed.set(request_frame(&self.callback));
        }
    }
}
