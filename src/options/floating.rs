use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Floating", inline)]
#[serde(default)]
/// Idle drift ranges and blend rates for floating surfaces.
pub struct FloatingOptions {
    /// Horizontal sway amplitude range in px, sampled once per surface.
    #[schemars(title = "Sway X")]
    pub sway_x_range: [f32; 2],
    /// Vertical sway amplitude range in px.
    #[schemars(title = "Sway Y")]
    pub sway_y_range: [f32; 2],
    /// Idle rotation amplitude range in degrees.
    #[schemars(title = "Tilt A")]
    pub tilt_a_range: [f32; 2],
    /// Hover tilt bias range in degrees.
    #[schemars(title = "Tilt B")]
    pub tilt_b_range: [f32; 2],
    /// Per-frame blend toward the target pose while hovered.
    #[schemars(title = "Hover Blend", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub hover_blend: f32,
    /// Per-frame blend toward the target pose while idle.
    #[schemars(title = "Idle Blend", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub idle_blend: f32,
    /// Per-frame blend for the press tilt axes and highlight opacity.
    #[schemars(title = "Press Blend", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub press_blend: f32,
    /// Per-frame blend for the highlight position.
    #[schemars(title = "Highlight Blend", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub highlight_blend: f32,
    /// Maximum press tilt in degrees.
    #[schemars(title = "Max Tilt", range(min = 0.0, max = 45.0), extend("step" = 1.0))]
    pub max_tilt: f32,
    /// Scale applied while hovered.
    #[schemars(skip)]
    pub hover_scale: f32,
    /// Parallax depth of the inner content layer in px.
    #[schemars(skip)]
    pub depth: f32,
}

impl Default for FloatingOptions {
    fn default() -> Self {
        Self {
            sway_x_range: [-8.0, 8.0],
            sway_y_range: [-3.0, 3.0],
            tilt_a_range: [-2.0, 2.0],
            tilt_b_range: [1.0, 2.0],
            hover_blend: 0.15,
            idle_blend: 0.05,
            press_blend: 0.2,
            highlight_blend: 0.1,
            max_tilt: 12.0,
            hover_scale: 1.02,
            depth: 50.0,
        }
    }
}
