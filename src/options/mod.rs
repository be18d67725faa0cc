//! Centralized motion options with TOML preset support.
//!
//! All tweakable settings (floating drift, transition defaults, list
//! policy) are consolidated here. Options serialize to/from TOML so a
//! preset can be swapped without touching code.

mod floating;
mod list;
mod transitions;

use std::path::Path;

pub use floating::FloatingOptions;
pub use list::ListOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use transitions::{DirectionalOptions, FadeOptions, TransitionOptions};

use crate::error::DriftError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[floating]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Floating surface drift and blend rates.
    pub floating: FloatingOptions,
    /// Transition primitive defaults.
    pub transitions: TransitionOptions,
    /// List reconciliation policy.
    pub list: ListOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    pub fn from_toml(content: &str) -> Result<Self, DriftError> {
        toml::from_str(content)
            .map_err(|e| DriftError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, DriftError> {
        let content = std::fs::read_to_string(path).map_err(DriftError::Io)?;
        Self::from_toml(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), DriftError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DriftError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(DriftError::Io)?;
        }
        std::fs::write(path, content).map_err(DriftError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transition::{FadeDirection, MoveDirection};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r#"
[floating]
max_tilt = 20.0

[transitions.directional]
direction = "out-left"
"#;
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.floating.max_tilt, 20.0);
        assert_eq!(opts.floating.hover_blend, 0.15);
        assert_eq!(
            opts.transitions.directional.direction,
            MoveDirection::OutLeft
        );
        assert_eq!(opts.transitions.directional.distance, 50.0);
        assert_eq!(opts.transitions.fade.direction, FadeDirection::In);
        assert_eq!(opts.list.grace_ms, 300);
    }

    #[test]
    fn bad_direction_is_a_parse_error() {
        let err = Options::from_toml(
            "[transitions.directional]\ndirection = \"sideways\"\n",
        )
        .unwrap_err();
        assert!(matches!(err, DriftError::OptionsParse(_)));
    }

    #[test]
    fn save_and_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("drift-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.list.stagger_ms = 25;
        opts.save(&dir.join("calm.toml")).unwrap();

        let loaded = Options::load(&dir.join("calm.toml")).unwrap();
        assert_eq!(loaded, opts);
        assert_eq!(Options::list_presets(&dir), vec!["calm".to_owned()]);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("floating"));
        assert!(props.contains_key("transitions"));
        assert!(props.contains_key("list"));

        let floating = &props["floating"]["properties"];
        assert!(floating.get("max_tilt").is_some());
        assert!(floating.get("hover_blend").is_some());
        assert!(floating.get("depth").is_none());
        assert!(floating.get("hover_scale").is_none());
    }
}
