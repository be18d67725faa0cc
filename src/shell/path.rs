//! Location strings rooted at the home directory `~`.

use std::fmt;

/// Home location.
pub const HOME: &str = "~";

/// Why a path could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// Absolute paths outside home are not browsable.
    RootDenied,
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RootDenied => f.write_str("bash: cd: /: Permission denied"),
        }
    }
}

impl std::error::Error for PathError {}

/// Resolve `target` against `current`.
///
/// `~`-prefixed targets are taken as-is, `/`-prefixed ones are rejected,
/// anything else is walked segment by segment (`..` pops, `.` is skipped).
/// `..` at home stays at home.
pub fn resolve(current: &str, target: &str) -> Result<String, PathError> {
    if target.is_empty() {
        return Ok(current.to_owned());
    }
    if target.starts_with(HOME) {
        return Ok(target.to_owned());
    }
    if target.starts_with('/') {
        return Err(PathError::RootDenied);
    }

    let base = if current == HOME {
        ""
    } else {
        current.strip_prefix("~/").unwrap_or(current)
    };
    let mut parts: Vec<&str> =
        base.split('/').filter(|p| !p.is_empty()).collect();
    for part in target.split('/').filter(|p| !p.is_empty()) {
        match part {
            ".." => {
                let _ = parts.pop();
            }
            "." => {}
            _ => parts.push(part),
        }
    }

    if parts.is_empty() {
        Ok(HOME.to_owned())
    } else {
        Ok(format!("~/{}", parts.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_walk() {
        assert_eq!(resolve("~", "docs").unwrap(), "~/docs");
        assert_eq!(resolve("~/docs", "notes/./2024").unwrap(), "~/docs/notes/2024");
        assert_eq!(resolve("~/docs/notes", "../img").unwrap(), "~/docs/img");
    }

    #[test]
    fn test_parent_of_home_is_home() {
        assert_eq!(resolve("~", "..").unwrap(), "~");
        assert_eq!(resolve("~/a", "../../..").unwrap(), "~");
    }

    #[test]
    fn test_home_prefixed_is_absolute() {
        assert_eq!(resolve("~/deep/down", "~").unwrap(), "~");
        assert_eq!(resolve("~/deep/down", "~/other").unwrap(), "~/other");
    }

    #[test]
    fn test_root_denied() {
        let err = resolve("~", "/etc").unwrap_err();
        assert_eq!(err.to_string(), "bash: cd: /: Permission denied");
    }

    #[test]
    fn test_empty_target_stays() {
        assert_eq!(resolve("~/a", "").unwrap(), "~/a");
    }
}
