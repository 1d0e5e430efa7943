//! Calculator configuration
//!
//! Supports hierarchical configuration loading on native targets:
//! 1. Default values in code (the game's own option sets)
//! 2. Configuration file `config/<environment>` (toml, json, yaml, ...)
//! 3. Environment variable overrides with GARDEN__ prefix
//!
//! In the browser the same structure is supplied as JSON.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::history::{DEFAULT_HISTORY_CAPACITY, DEFAULT_HISTORY_KEY};
use crate::models::{default_quality_tiers, default_season_modifiers, find_multiplier, OptionTier};
use crate::validation::validate_option_tiers;

/// Calculator configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Quality tier options
    pub quality_tiers: Vec<OptionTier>,

    /// Season modifier options
    pub season_modifiers: Vec<OptionTier>,

    /// Key the history log is stored under
    pub history_key: String,

    /// Maximum number of history entries kept
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            quality_tiers: default_quality_tiers(),
            season_modifiers: default_season_modifiers(),
            history_key: DEFAULT_HISTORY_KEY.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Load configuration from files and environment variables
    #[cfg(feature = "env-config")]
    pub fn load() -> Result<Self, ConfigError> {
        use config::{Environment, File};

        let environment =
            std::env::var("GARDEN_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let settings = config::Config::builder()
            .set_default("history_key", DEFAULT_HISTORY_KEY)?
            .set_default("history_capacity", DEFAULT_HISTORY_CAPACITY as i64)?
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            .add_source(
                Environment::with_prefix("GARDEN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(%environment, "calculator configuration loaded");
        Ok(config)
    }

    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_option_tiers(&self.quality_tiers)
            .map_err(|e| ConfigError::Invalid(format!("quality_tiers: {}", e)))?;
        validate_option_tiers(&self.season_modifiers)
            .map_err(|e| ConfigError::Invalid(format!("season_modifiers: {}", e)))?;
        if self.history_key.is_empty() {
            return Err(ConfigError::Invalid("history_key cannot be empty".to_string()));
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "history_capacity must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn quality_multiplier(&self, code: &str) -> Option<Decimal> {
        find_multiplier(&self.quality_tiers, code)
    }

    pub fn season_multiplier(&self, code: &str) -> Option<Decimal> {
        find_multiplier(&self.season_modifiers, code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_multipliers() {
        let config = CalculatorConfig::default();
        assert_eq!(config.quality_multiplier("normal"), Some(Decimal::ONE));
        assert_eq!(config.quality_multiplier("excellent"), Some(Decimal::new(15, 1)));
        assert_eq!(config.quality_multiplier("perfect"), Some(Decimal::TWO));
        assert_eq!(config.season_multiplier("off_season"), Some(Decimal::new(8, 1)));
        assert_eq!(config.season_multiplier("peak"), Some(Decimal::new(13, 1)));
        assert_eq!(config.season_multiplier("monsoon"), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = CalculatorConfig::from_json(r#"{"history_capacity": 5}"#).unwrap();
        assert_eq!(config.history_capacity, 5);
        assert_eq!(config.history_key, DEFAULT_HISTORY_KEY);
        assert_eq!(config.quality_tiers, default_quality_tiers());
    }

    #[test]
    fn test_from_json_custom_tiers() {
        let json = r#"{
            "quality_tiers": [
                {"code": "iron", "label": "铁", "multiplier": 1.1},
                {"code": "gold", "label": "金", "multiplier": "1.75"}
            ]
        }"#;
        let config = CalculatorConfig::from_json(json).unwrap();
        assert_eq!(config.quality_multiplier("iron"), Some(Decimal::new(11, 1)));
        assert_eq!(config.quality_multiplier("gold"), Some(Decimal::new(175, 2)));
        assert_eq!(config.quality_multiplier("normal"), None);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            CalculatorConfig::from_json(r#"{"history_capacity": 0}"#),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CalculatorConfig::from_json(
                r#"{"season_modifiers": [{"code": "drought", "label": "旱", "multiplier": -0.5}]}"#
            ),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            CalculatorConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[cfg(feature = "env-config")]
    #[test]
    fn test_load_without_sources_uses_defaults() {
        let config = CalculatorConfig::load().unwrap();
        assert_eq!(config.history_key, DEFAULT_HISTORY_KEY);
        assert_eq!(config.history_capacity, DEFAULT_HISTORY_CAPACITY);
        assert_eq!(config.quality_tiers, default_quality_tiers());
    }
}
