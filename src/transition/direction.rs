//! Transition directions and their enter/leave semantics.

use std::fmt;
use std::str::FromStr;

use glam::Vec2;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::DriftError;

/// Compass direction of a directional move, split into entering
/// (offset → natural) and leaving (natural → offset) variants.
///
/// The compass part names where the offset position lies: `in-up` starts
/// above its natural position, `out-down` ends below it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "kebab-case")]
pub enum MoveDirection {
    /// Enter from the left.
    InLeft,
    /// Enter from the right.
    #[default]
    InRight,
    /// Enter from above.
    InUp,
    /// Enter from below.
    InDown,
    /// Leave toward the left.
    OutLeft,
    /// Leave toward the right.
    OutRight,
    /// Leave upward.
    OutUp,
    /// Leave downward.
    OutDown,
}

impl MoveDirection {
    /// Every direction, entering variants first.
    pub const ALL: [Self; 8] = [
        Self::InLeft,
        Self::InRight,
        Self::InUp,
        Self::InDown,
        Self::OutLeft,
        Self::OutRight,
        Self::OutUp,
        Self::OutDown,
    ];

    /// Whether the element animates from the offset into place.
    #[must_use]
    pub fn is_entering(self) -> bool {
        matches!(
            self,
            Self::InLeft | Self::InRight | Self::InUp | Self::InDown
        )
    }

    /// Offset position relative to the natural position, in px.
    #[must_use]
    pub fn offset(self, distance: f32) -> Vec2 {
        match self {
            Self::InLeft | Self::OutLeft => Vec2::new(-distance, 0.0),
            Self::InRight | Self::OutRight => Vec2::new(distance, 0.0),
            Self::InUp | Self::OutUp => Vec2::new(0.0, -distance),
            Self::InDown | Self::OutDown => Vec2::new(0.0, distance),
        }
    }

    /// Kebab-case name, e.g. `"in-up"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::InLeft => "in-left",
            Self::InRight => "in-right",
            Self::InUp => "in-up",
            Self::InDown => "in-down",
            Self::OutLeft => "out-left",
            Self::OutRight => "out-right",
            Self::OutUp => "out-up",
            Self::OutDown => "out-down",
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveDirection {
    type Err = DriftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DriftError::UnknownDirection(s.to_owned()))
    }
}

/// Reveal or hide for fade/mask transitions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum FadeDirection {
    /// Transparent/masked to visible.
    #[default]
    In,
    /// Visible to transparent/masked.
    Out,
}

impl fmt::Display for FadeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::In => "in",
            Self::Out => "out",
        })
    }
}

impl FromStr for FadeDirection {
    type Err = DriftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(DriftError::UnknownDirection(other.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for dir in MoveDirection::ALL {
            assert_eq!(dir.to_string().parse::<MoveDirection>().unwrap(), dir);
        }
        assert_eq!("out".parse::<FadeDirection>().unwrap(), FadeDirection::Out);
    }

    #[test]
    fn test_unknown_direction() {
        assert!(matches!(
            "in-diagonal".parse::<MoveDirection>(),
            Err(DriftError::UnknownDirection(_))
        ));
        assert!("sideways".parse::<FadeDirection>().is_err());
    }

    #[test]
    fn test_offsets() {
        assert_eq!(MoveDirection::InUp.offset(50.0), Vec2::new(0.0, -50.0));
        assert_eq!(MoveDirection::OutDown.offset(50.0), Vec2::new(0.0, 50.0));
        assert_eq!(MoveDirection::InLeft.offset(10.0), Vec2::new(-10.0, 0.0));
        assert_eq!(MoveDirection::OutRight.offset(10.0), Vec2::new(10.0, 0.0));
    }

    #[test]
    fn test_entering_split() {
        let entering = MoveDirection::ALL
            .into_iter()
            .filter(|d| d.is_entering())
            .count();
        assert_eq!(entering, 4);
        assert!(!MoveDirection::OutUp.is_entering());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&MoveDirection::OutDown).unwrap();
        assert_eq!(json, "\"out-down\"");
    }

    #[test]
    fn test_defaults() {
        assert_eq!(MoveDirection::default(), MoveDirection::InRight);
        assert_eq!(FadeDirection::default(), FadeDirection::In);
    }
}
