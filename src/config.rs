use serde::{Deserialize, Serialize};

use crate::DEFAULT_TARGET;

/// Error type for stamper configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Display target id must not be empty")]
    EmptyTarget,
}

/// Where the stamp is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStamperConfig")]
pub struct StamperConfig {
    target: String,
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStamperConfig {
    target: String,
}

impl Default for RawStamperConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
        }
    }
}

impl TryFrom<RawStamperConfig> for StamperConfig {
    type Error = ConfigError;

    fn try_from(raw: RawStamperConfig) -> Result<Self, Self::Error> {
        Self::new(raw.target)
    }
}

impl StamperConfig {
    /// Creates a config writing into the element with id `target`.
    ///
    /// # Errors
    /// Returns `ConfigError::EmptyTarget` if `target` is empty or whitespace.
    pub fn new(target: impl Into<String>) -> Result<Self, ConfigError> {
        let target = target.into();
        if target.trim().is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        Ok(Self { target })
    }

    /// Id of the display target
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for StamperConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        assert_eq!(StamperConfig::default().target(), "currentDate");
    }

    #[test]
    fn test_new_rejects_empty_target() {
        assert_eq!(StamperConfig::new(""), Err(ConfigError::EmptyTarget));
        assert_eq!(StamperConfig::new("   "), Err(ConfigError::EmptyTarget));
        assert_eq!(
            StamperConfig::new("today").map(|c| c.target().to_owned()),
            Ok("today".to_owned())
        );
    }

    #[test]
    fn test_deserialize_defaults_missing_target() {
        let config: StamperConfig = serde_json::from_str("{}").expect("empty object is a valid config");
        assert_eq!(config, StamperConfig::default());
    }

    #[test]
    fn test_deserialize_custom_target() {
        let config: StamperConfig =
            serde_json::from_str(r#"{"target":"footerDate"}"#).expect("failed to deserialize config");
        assert_eq!(config.target(), "footerDate");
    }

    #[test]
    fn test_deserialize_rejects_bad_input() {
        assert!(serde_json::from_str::<StamperConfig>(r#"{"target":""}"#).is_err());
        assert!(serde_json::from_str::<StamperConfig>(r#"{"tagret":"x"}"#).is_err());
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&StamperConfig::default()).expect("failed to serialize config");
        assert_eq!(json, r#"{"target":"currentDate"}"#);
    }
}
