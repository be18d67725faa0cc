//! One-shot transition primitives.
//!
//! - [`DirectionalTransition`]: translate/opacity/blur move in one of
//!   eight directions.
//! - [`FadeTransition`]: gradient-mask wipe with a blurred overlay, or a
//!   plain blur-fade.
//! - [`PortalTransition`]: a proxy that grows from an origin rectangle
//!   toward a target that may move while it is in flight.
//!
//! Each primitive is sampled with the frame timestamp and reports its
//! completion once through `poll`/`advance`.

mod direction;
mod directional;
mod fade;
mod portal;

pub use direction::{FadeDirection, MoveDirection};
pub use directional::{
    DirectionalConfig, DirectionalTransition, MoveKeyframe, OFFSET_BLUR,
};
pub use fade::{
    FadeConfig, FadeFrame, FadeKeyframe, FadeTransition, CONTENT_MASK,
    FADE_BLUR, MASK_SIZE, OVERLAY_BACKDROP, OVERLAY_MASK,
};
pub use portal::{
    launch, proxy_keyframes, sample_keyframes, seed_rect, ContentStyle,
    PortalEvent, PortalHandle, PortalLoop, PortalRun, PortalState,
    PortalTransition, ProxyKeyframe, ProxySurface, HEIGHT_PHASE_END,
    HIDDEN_CONTENT_SHIFT, SEED_SIZE,
};
