//! Configuration for bakso-core
//!
//! Mining thresholds and the cut-offs used when presenting mining results.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default minimum support for frequent itemsets
pub const DEFAULT_MIN_SUPPORT: f64 = 0.3;

/// Default minimum confidence for association rules
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.6;

/// Application-wide configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BaksoConfig {
    /// Apriori analysis parameters
    pub mining: MiningConfig,
    /// Presentation cut-offs
    pub display: DisplayConfig,
}

/// Apriori analysis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum fraction of transactions an itemset must appear in
    pub min_support: f64,
    /// Minimum confidence an association rule must reach
    pub min_confidence: f64,
    /// Collapse 3-itemsets reachable through several level-2 joins into one
    pub deduplicate_triples: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
            deduplicate_triples: false,
        }
    }
}

/// Presentation cut-offs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Support at or above this is shown as high
    pub high_support: f64,
    /// Support at or above this is shown as medium
    pub medium_support: f64,
    /// Confidence at or above this is shown as strong
    pub strong_confidence: f64,
    /// Number of ingredients shown in the cost breakdown
    pub top_cost_items: usize,
    /// Number of ingredients shown in the frequency breakdown
    pub top_frequency_items: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            high_support: 0.7,
            medium_support: 0.5,
            strong_confidence: 0.8,
            top_cost_items: 10,
            top_frequency_items: 5,
        }
    }
}

impl BaksoConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_fraction("mining.min_support", self.mining.min_support)?;
        check_fraction("mining.min_confidence", self.mining.min_confidence)?;
        check_fraction("display.high_support", self.display.high_support)?;
        check_fraction("display.medium_support", self.display.medium_support)?;
        check_fraction("display.strong_confidence", self.display.strong_confidence)?;

        if self.display.medium_support > self.display.high_support {
            return Err(ConfigError::OutOfRange(
                "display.medium_support must not exceed display.high_support".to_string(),
            ));
        }

        Ok(())
    }
}

/// Check that a threshold lies in [0, 1].
pub fn check_fraction(name: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange(format!(
            "{} must be between 0.0 and 1.0, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BaksoConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mining.min_support, 0.3);
        assert_eq!(config.mining.min_confidence, 0.6);
        assert!(!config.mining.deduplicate_triples);
    }

    #[test]
    fn test_json_serialization() {
        let config = BaksoConfig::default();
        let json = config.to_json().unwrap();
        let parsed = BaksoConfig::from_json(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = BaksoConfig::from_toml("[mining]\nmin_support = 0.5\n").unwrap();
        assert_eq!(config.mining.min_support, 0.5);
        assert_eq!(config.mining.min_confidence, 0.6);
        assert_eq!(config.display, DisplayConfig::default());
    }

    #[test]
    fn test_out_of_range() {
        let mut config = BaksoConfig::default();
        config.mining.min_confidence = 1.5;
        assert!(matches!(config.validate(), Err(ConfigError::OutOfRange(_))));

        let mut config = BaksoConfig::default();
        config.mining.min_support = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_inverted_support_bands() {
        let mut config = BaksoConfig::default();
        config.display.medium_support = 0.9;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_toml() {
        assert!(matches!(
            BaksoConfig::from_toml("mining = 3"),
            Err(ConfigError::Parse(_))
        ));
    }
}
