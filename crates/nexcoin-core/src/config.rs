//! Generator configuration

use std::fs;
use std::path::Path;

use nexcoin_address::DEFAULT_SALT;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Salt must not be empty")]
    EmptySalt,
}

/// Address generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Appended to every seed. Changing it changes every displayed address.
    pub salt: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            salt: DEFAULT_SALT.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Config with a custom salt
    pub fn with_salt(salt: impl Into<String>) -> Result<Self, ConfigError> {
        let config = Self { salt: salt.into() };
        config.validate()?;
        Ok(config)
    }

    /// Parse from JSON text; missing fields take their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.salt.is_empty() {
            return Err(ConfigError::EmptySalt);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_salt() {
        assert_eq!(GeneratorConfig::default().salt, "ethertron-wallet");
    }

    #[test]
    fn test_from_json() {
        let config = GeneratorConfig::from_json(r#"{"salt": "staging"}"#).unwrap();
        assert_eq!(config.salt, "staging");
    }

    #[test]
    fn test_missing_fields_default() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_empty_salt_rejected() {
        assert!(matches!(
            GeneratorConfig::from_json(r#"{"salt": ""}"#),
            Err(ConfigError::EmptySalt)
        ));
        assert!(matches!(
            GeneratorConfig::with_salt(""),
            Err(ConfigError::EmptySalt)
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            GeneratorConfig::from_json("{salt"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            GeneratorConfig::from_json_file("/nonexistent/nexcoin.json"),
            Err(ConfigError::Io(_))
        ));
    }
}
