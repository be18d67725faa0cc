use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::transition::{
    DirectionalConfig, FadeConfig, FadeDirection, MoveDirection,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Directional", inline)]
#[serde(default)]
/// Defaults for directional move transitions.
pub struct DirectionalOptions {
    /// Compass direction and enter/leave semantics.
    #[schemars(title = "Direction")]
    pub direction: MoveDirection,
    /// Offset distance in px.
    #[schemars(title = "Distance", range(min = 0.0, max = 400.0), extend("step" = 1.0))]
    pub distance: f32,
    /// Animation duration in milliseconds.
    #[schemars(title = "Duration (ms)")]
    pub duration_ms: u64,
    /// Start delay in milliseconds.
    #[schemars(title = "Delay (ms)")]
    pub delay_ms: u64,
}

impl Default for DirectionalOptions {
    fn default() -> Self {
        Self {
            direction: MoveDirection::InRight,
            distance: 50.0,
            duration_ms: 800,
            delay_ms: 0,
        }
    }
}

impl DirectionalOptions {
    /// Transition descriptor for these defaults.
    #[must_use]
    pub fn to_config(&self) -> DirectionalConfig {
        DirectionalConfig {
            direction: self.direction,
            distance: self.distance,
            duration: Duration::from_millis(self.duration_ms),
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Fade", inline)]
#[serde(default)]
/// Defaults for fade/mask transitions.
pub struct FadeOptions {
    /// Reveal or hide.
    #[schemars(title = "Direction")]
    pub direction: FadeDirection,
    /// Animation duration in milliseconds.
    #[schemars(title = "Duration (ms)")]
    pub duration_ms: u64,
    /// Start delay in milliseconds.
    #[schemars(title = "Delay (ms)")]
    pub delay_ms: u64,
    /// Blur-fade only, without the wipe mask and overlay.
    #[schemars(title = "Mask Only")]
    pub mask_only: bool,
}

impl Default for FadeOptions {
    fn default() -> Self {
        Self {
            direction: FadeDirection::In,
            duration_ms: 1000,
            delay_ms: 0,
            mask_only: false,
        }
    }
}

impl FadeOptions {
    /// Transition descriptor for these defaults.
    #[must_use]
    pub fn to_config(&self) -> FadeConfig {
        FadeConfig {
            direction: self.direction,
            duration: Duration::from_millis(self.duration_ms),
            delay: Duration::from_millis(self.delay_ms),
            mask_only: self.mask_only,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Transitions", inline)]
#[serde(default)]
/// Transition primitive defaults.
pub struct TransitionOptions {
    /// Portal proxy growth duration in milliseconds.
    #[schemars(title = "Portal Duration (ms)")]
    pub portal_duration_ms: u64,
    /// Content reveal duration after the portal completes, in milliseconds.
    #[schemars(skip)]
    pub reveal_duration_ms: u64,
    /// Directional move defaults.
    pub directional: DirectionalOptions,
    /// Fade/mask defaults.
    pub fade: FadeOptions,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            portal_duration_ms: 400,
            reveal_duration_ms: 600,
            directional: DirectionalOptions::default(),
            fade: FadeOptions::default(),
        }
    }
}

impl TransitionOptions {
    /// Portal growth duration.
    #[must_use]
    pub fn portal_duration(&self) -> Duration {
        Duration::from_millis(self.portal_duration_ms)
    }

    /// Content reveal duration.
    #[must_use]
    pub fn reveal_duration(&self) -> Duration {
        Duration::from_millis(self.reveal_duration_ms)
    }
}
