use glam::Vec2;

/// Pointer button bitmask as reported by the gesture surface
/// (`1` primary, `2` secondary, `4` auxiliary, combined by OR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerButtons(pub u16);

impl PointerButtons {
    /// No buttons held.
    pub const NONE: Self = Self(0);
    /// Only the primary button held.
    pub const PRIMARY: Self = Self(1);

    /// Whether exactly the primary button is held.
    ///
    /// A chord (primary plus another button) does not count, matching how
    /// the surface reports a plain primary drag as the value `1`.
    #[must_use]
    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

/// Platform-agnostic pointer events.
///
/// These are fed into a
/// [`FloatingSimulator`](crate::floating::FloatingSimulator) between
/// frames. Positions are in client (viewport) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer entered the surface bounds.
    Enter,
    /// Pointer moved while over the surface.
    Move {
        /// Client position.
        position: Vec2,
        /// Buttons held during the move.
        buttons: PointerButtons,
    },
    /// A button went down over the surface.
    Down {
        /// Client position.
        position: Vec2,
    },
    /// A button was released.
    Up,
    /// Pointer left the surface bounds.
    Leave,
}
