use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::constants::DEFAULT_HISTORY_SIZE;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("history_size must be a positive integer, got {0:?}")]
    InvalidHistorySize(String),
}

/// Engine configuration, read once at initialization.
///
/// `history_size` is the number of *prior* frames averaged together with
/// each incoming frame, so the window holds up to `history_size + 1`
/// frames. `reset_always` selects the resize policy: the legacy engine
/// only checked for a frame-size change while the window was still
/// filling; setting this flag checks on every frame instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlurConfig {
    pub history_size: usize,
    pub reset_always: bool,
}

impl Default for BlurConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            reset_always: false,
        }
    }
}

impl BlurConfig {
    pub fn new(history_size: usize) -> Result<Self, ConfigError> {
        let config = Self {
            history_size,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn with_reset_always(mut self, reset_always: bool) -> Self {
        self.reset_always = reset_always;
        self
    }

    /// Deserialized configurations can carry any value, so the engine
    /// validates again at construction time.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_size == 0 {
            return Err(ConfigError::InvalidHistorySize(
                self.history_size.to_string(),
            ));
        }
        Ok(())
    }

    /// Maximum number of frames held in the window at averaging time.
    pub fn window_capacity(&self) -> usize {
        self.history_size + 1
    }

    /// Parses the raw string form supplied by an external configuration
    /// source. Rejects anything that is not a positive integer; the caller
    /// decides whether to abort or fall back to a default.
    pub fn parse_history_size(raw: &str) -> Result<usize, ConfigError> {
        let value: usize = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidHistorySize(raw.to_string()))?;
        if value == 0 {
            return Err(ConfigError::InvalidHistorySize(raw.to_string()));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_config() {
        let config = BlurConfig::default();
        assert_eq!(config.history_size, 1);
        assert!(!config.reset_always);
        assert_eq!(config.window_capacity(), 2);
    }

    #[test]
    fn test_new_rejects_zero_history() {
        assert!(BlurConfig::new(0).is_err());
    }

    #[test]
    fn test_new_accepts_positive_history() {
        let config = BlurConfig::new(4).unwrap();
        assert_eq!(config.history_size, 4);
        assert_eq!(config.window_capacity(), 5);
    }

    #[test]
    fn test_with_reset_always() {
        let config = BlurConfig::new(2).unwrap().with_reset_always(true);
        assert!(config.reset_always);
    }

    #[rstest]
    #[case("1", 1)]
    #[case("12", 12)]
    #[case("  3  ", 3)]
    fn test_parse_history_size_valid(#[case] raw: &str, #[case] expected: usize) {
        assert_eq!(BlurConfig::parse_history_size(raw).unwrap(), expected);
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("two")]
    #[case("")]
    #[case("1.5")]
    fn test_parse_history_size_invalid(#[case] raw: &str) {
        let err = BlurConfig::parse_history_size(raw).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let config: BlurConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.history_size, 1);
        assert!(!config.reset_always);
    }

    #[test]
    fn test_deserialize_explicit_fields() {
        let config: BlurConfig =
            serde_json::from_str(r#"{"history_size": 5, "reset_always": true}"#).unwrap();
        assert_eq!(config.history_size, 5);
        assert!(config.reset_always);
    }

    #[test]
    fn test_deserialized_zero_fails_validation() {
        let config: BlurConfig = serde_json::from_str(r#"{"history_size": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
