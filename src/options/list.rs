use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::transition::MoveDirection;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "List", inline)]
#[serde(default)]
/// Enter/exit policy for reconciled lists.
pub struct ListOptions {
    /// How long an exiting item stays rendered, in milliseconds.
    #[schemars(title = "Grace (ms)")]
    pub grace_ms: u64,
    /// Per-index entrance delay in milliseconds.
    #[schemars(title = "Stagger (ms)")]
    pub stagger_ms: u64,
    /// Duration of each item's enter/exit animation in milliseconds.
    #[schemars(title = "Item Duration (ms)")]
    pub item_duration_ms: u64,
    /// Offset distance for item animations in px.
    #[schemars(skip)]
    pub distance: f32,
    /// Direction used for entering items.
    #[schemars(skip)]
    pub enter_direction: MoveDirection,
    /// Direction used for exiting items.
    #[schemars(skip)]
    pub exit_direction: MoveDirection,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            grace_ms: 300,
            stagger_ms: 40,
            item_duration_ms: 300,
            distance: 50.0,
            enter_direction: MoveDirection::InUp,
            exit_direction: MoveDirection::OutDown,
        }
    }
}

impl ListOptions {
    /// Grace duration before exiting items are purged.
    #[must_use]
    pub fn grace(&self) -> Duration {
        Duration::from_millis(self.grace_ms)
    }

    /// Entrance delay for the item at `index`.
    #[must_use]
    pub fn stagger_for(&self, index: usize) -> Duration {
        Duration::from_millis(self.stagger_ms.saturating_mul(index as u64))
    }

    /// Item animation duration.
    #[must_use]
    pub fn item_duration(&self) -> Duration {
        Duration::from_millis(self.item_duration_ms)
    }
}
