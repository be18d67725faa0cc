//! Crate-level error types.

use std::fmt;

/// Errors produced by the drift crate.
///
/// Motion code itself never fails: a missing surface or a degenerate
/// rectangle degrades to a no-op frame. Errors only surface at the
/// configuration and parsing boundary.
#[derive(Debug)]
pub enum DriftError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A transition direction string did not name a known direction.
    UnknownDirection(String),
    /// A DOM surface could not be written or located.
    Surface(String),
}

impl fmt::Display for DriftError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownDirection(name) => {
                write!(f, "unknown transition direction: {name:?}")
            }
            Self::Surface(msg) => write!(f, "surface error: {msg}"),
        }
    }
}

impl std::error::Error for DriftError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DriftError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
