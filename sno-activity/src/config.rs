//! Toggle configuration.
//!
//! Every field has a default, so `{}` is a valid config:
//!
//! ```json
//! { "marker_class": "loading", "root": { "kind": "body" } }
//! ```

use crate::error::{ActivityError, Result};
use serde::{Deserialize, Serialize};

/// Marker class used when none is configured.
pub const DEFAULT_MARKER_CLASS: &str = "loading";

/// Which container carries the marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MarkerRoot {
    /// The document body
    #[default]
    Body,
    /// An element looked up by DOM id
    Element { id: String },
}

/// Toggle configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Class added to the root while requests are outstanding
    pub marker_class: String,
    /// Container that receives the class
    pub root: MarkerRoot,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            marker_class: DEFAULT_MARKER_CLASS.to_string(),
            root: MarkerRoot::default(),
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ToggleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values can be applied to a DOM element.
    pub fn validate(&self) -> Result<()> {
        if self.marker_class.is_empty() {
            return Err(ActivityError::EmptyMarkerClass);
        }
        if self.marker_class.chars().any(|c| c.is_ascii_whitespace()) {
            return Err(ActivityError::InvalidMarkerClass(self.marker_class.clone()));
        }
        if let MarkerRoot::Element { id } = &self.root {
            if id.trim().is_empty() {
                return Err(ActivityError::EmptyRootId);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = ToggleConfig::from_json("{}").unwrap();
        assert_eq!(config, ToggleConfig::default());
        assert_eq!(config.marker_class, "loading");
        assert_eq!(config.root, MarkerRoot::Body);
    }

    #[test]
    fn test_element_root() {
        let json = r#"{"marker_class":"busy","root":{"kind":"element","id":"app"}}"#;
        let config = ToggleConfig::from_json(json).unwrap();
        assert_eq!(config.marker_class, "busy");
        assert_eq!(config.root, MarkerRoot::Element { id: "app".to_string() });
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            ToggleConfig::from_json("{\"marker_class\": 3}"),
            Err(ActivityError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_rejects_bad_marker_class() {
        assert!(matches!(
            ToggleConfig::from_json(r#"{"marker_class":""}"#),
            Err(ActivityError::EmptyMarkerClass)
        ));
        assert!(matches!(
            ToggleConfig::from_json(r#"{"marker_class":"is loading"}"#),
            Err(ActivityError::InvalidMarkerClass(_))
        ));
    }

    #[test]
    fn test_rejects_blank_root_id() {
        let config = ToggleConfig {
            root: MarkerRoot::Element { id: " ".to_string() },
            ..ToggleConfig::default()
        };
        assert!(matches!(config.validate(), Err(ActivityError::EmptyRootId)));
    }
}
