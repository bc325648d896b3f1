//! Calculator configuration.

use crate::core::InputPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("max_entry_len must be at least 1")]
    ZeroEntryLimit,

    #[error("log_capacity must be at least 1")]
    ZeroLogCapacity,
}

/// Runtime options for a [`Calculator`](crate::shell::Calculator).
///
/// Every field has a default, so an empty JSON object is a valid
/// configuration.
///
/// # Example
///
/// ```rust
/// use reckon::config::CalculatorConfig;
///
/// let config = CalculatorConfig::from_json(r#"{ "max_entry_len": 16 }"#).unwrap();
/// assert_eq!(config.max_entry_len, Some(16));
/// assert!(!config.record_transitions);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Longest text reachable by typing; unlimited when `None`.
    pub max_entry_len: Option<usize>,
    /// Keep a [`TransitionLog`](crate::core::TransitionLog) of dispatched actions.
    pub record_transitions: bool,
    /// Bound on the transition log; unbounded when `None`.
    pub log_capacity: Option<usize>,
}

impl CalculatorConfig {
    /// Parse and validate a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entry_len == Some(0) {
            return Err(ConfigError::ZeroEntryLimit);
        }
        if self.log_capacity == Some(0) {
            return Err(ConfigError::ZeroLogCapacity);
        }
        Ok(())
    }

    pub fn input_policy(&self) -> InputPolicy {
        InputPolicy {
            max_entry_len: self.max_entry_len,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = CalculatorConfig::from_json("{}").unwrap();
        assert_eq!(config, CalculatorConfig::default());
        assert_eq!(config.input_policy(), InputPolicy::default());
    }

    #[test]
    fn all_fields_load() {
        let config = CalculatorConfig::from_json(
            r#"{ "max_entry_len": 12, "record_transitions": true, "log_capacity": 64 }"#,
        )
        .unwrap();
        assert_eq!(config.max_entry_len, Some(12));
        assert!(config.record_transitions);
        assert_eq!(config.log_capacity, Some(64));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = CalculatorConfig::from_json(r#"{ "precision": 4 }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn zero_limits_are_rejected() {
        assert!(matches!(
            CalculatorConfig::from_json(r#"{ "max_entry_len": 0 }"#),
            Err(ConfigError::ZeroEntryLimit)
        ));
        assert!(matches!(
            CalculatorConfig::from_json(r#"{ "log_capacity": 0 }"#),
            Err(ConfigError::ZeroLogCapacity)
        ));
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = CalculatorConfig {
            max_entry_len: Some(20),
            record_transitions: true,
            log_capacity: None,
        };
        let json = config.to_json().unwrap();
        assert_eq!(CalculatorConfig::from_json(&json).unwrap(), config);
    }
}
