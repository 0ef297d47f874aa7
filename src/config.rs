//! Toggle configuration
//!
//! Every field falls back to the matching constant in [`crate::consts`], so
//! an empty object (or no config at all) yields the stock setup.

use serde::Deserialize;

use crate::consts::{DARK_MODE_CLASS, STORAGE_KEY, TOGGLE_TEST_ID};
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToggleConfig {
    /// Key the preference is stored under
    pub storage_key: String,
    /// Class toggled on the presentation root
    pub marker_class: String,
    /// `data-testid` of the toggle button
    pub test_id: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: STORAGE_KEY.to_string(),
            marker_class: DARK_MODE_CLASS.to_string(),
            test_id: TOGGLE_TEST_ID.to_string(),
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a JSON config object
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `json` if given, logging and falling back to defaults on error
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(config)) => {
                log::info!("Loaded toggle config: {:?}", config);
                config
            }
            Some(Err(e)) => {
                log::warn!("Ignoring toggle config: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::InvalidField("storage_key"));
        }
        // DomTokenList rejects empty tokens and tokens with whitespace
        if self.marker_class.is_empty() || self.marker_class.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidField("marker_class"));
        }
        if self.test_id.is_empty() {
            return Err(ConfigError::InvalidField("test_id"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = ToggleConfig::from_json("{}").unwrap();
        assert_eq!(config, ToggleConfig::default());
        assert_eq!(config.storage_key, "darkMode");
        assert_eq!(config.marker_class, "dark-mode");
    }

    #[test]
    fn test_partial_override() {
        let config = ToggleConfig::from_json(r#"{"storage_key": "theme"}"#).unwrap();
        assert_eq!(config.storage_key, "theme");
        assert_eq!(config.test_id, "dark-mode-toggle");
    }

    #[test]
    fn test_rejects_empty_and_whitespace_fields() {
        assert!(matches!(
            ToggleConfig::from_json(r#"{"storage_key": ""}"#),
            Err(ConfigError::InvalidField("storage_key"))
        ));
        assert!(matches!(
            ToggleConfig::from_json(r#"{"marker_class": "dark mode"}"#),
            Err(ConfigError::InvalidField("marker_class"))
        ));
    }

    #[test]
    fn test_invalid_json_falls_back() {
        assert!(matches!(
            ToggleConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
        assert_eq!(
            ToggleConfig::from_json_or_default(Some("not json")),
            ToggleConfig::default()
        );
        assert_eq!(ToggleConfig::from_json_or_default(None), ToggleConfig::default());
    }
}
