//! Validation utilities for catalog records and calculator options

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::CatalogError;
use crate::models::{OptionTier, PlantRecord};

// ============================================================================
// Catalog Validations
// ============================================================================

/// Validate the invariants every plant record must hold
pub fn validate_plant(plant: &PlantRecord) -> Result<(), CatalogError> {
    let invalid = |reason| CatalogError::InvalidPlant {
        id: plant.id,
        reason,
    };

    if plant.id == 0 {
        return Err(invalid("id must be positive"));
    }
    if plant.base_value == 0 {
        return Err(invalid("base value must be positive"));
    }
    if plant.seed_cost == 0 {
        return Err(invalid("seed cost must be positive"));
    }
    if plant.growth_time == 0 {
        return Err(invalid("growth time must be positive"));
    }
    if plant.seasons.is_empty() {
        return Err(invalid("at least one season is required"));
    }
    Ok(())
}

// ============================================================================
// Option Validations
// ============================================================================

/// Validate a multiplier is usable (non-negative)
pub fn validate_multiplier(multiplier: Decimal) -> Result<(), &'static str> {
    if multiplier < Decimal::ZERO {
        return Err("Multiplier cannot be negative");
    }
    Ok(())
}

/// Validate an option set: non-empty, unique codes, usable multipliers
pub fn validate_option_tiers(options: &[OptionTier]) -> Result<(), &'static str> {
    if options.is_empty() {
        return Err("At least one option is required");
    }
    let mut codes = HashSet::with_capacity(options.len());
    for option in options {
        if option.code.is_empty() {
            return Err("Option code cannot be empty");
        }
        if !codes.insert(option.code.as_str()) {
            return Err("Option codes must be unique");
        }
        validate_multiplier(option.multiplier)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{default_quality_tiers, default_season_modifiers};
    use crate::types::{Category, Season};

    fn rose() -> PlantRecord {
        PlantRecord {
            id: 8,
            name: "玫瑰".to_string(),
            category: Category::Flowers,
            emoji: "🌹".to_string(),
            base_value: 300,
            seed_cost: 100,
            growth_time: 7,
            seasons: vec![Season::Spring, Season::Summer],
            description: "高价值花卉，适合送礼".to_string(),
        }
    }

    #[test]
    fn test_validate_plant_valid() {
        assert!(validate_plant(&rose()).is_ok());
    }

    #[test]
    fn test_validate_plant_invalid() {
        let mut plant = rose();
        plant.seed_cost = 0;
        assert!(validate_plant(&plant).is_err());

        let mut plant = rose();
        plant.base_value = 0;
        assert!(validate_plant(&plant).is_err());

        let mut plant = rose();
        plant.seasons.clear();
        assert_eq!(
            validate_plant(&plant),
            Err(CatalogError::InvalidPlant {
                id: 8,
                reason: "at least one season is required"
            })
        );

        let mut plant = rose();
        plant.id = 0;
        assert!(validate_plant(&plant).is_err());
    }

    #[test]
    fn test_validate_multiplier() {
        assert!(validate_multiplier(Decimal::ZERO).is_ok());
        assert!(validate_multiplier(Decimal::TWO).is_ok());
        assert!(validate_multiplier(Decimal::NEGATIVE_ONE).is_err());
    }

    #[test]
    fn test_default_options_are_valid() {
        assert!(validate_option_tiers(&default_quality_tiers()).is_ok());
        assert!(validate_option_tiers(&default_season_modifiers()).is_ok());
    }

    #[test]
    fn test_validate_option_tiers_invalid() {
        assert!(validate_option_tiers(&[]).is_err());

        let duplicated = vec![
            OptionTier::new("normal", "普通", Decimal::ONE),
            OptionTier::new("normal", "普通", Decimal::TWO),
        ];
        assert_eq!(
            validate_option_tiers(&duplicated),
            Err("Option codes must be unique")
        );

        let negative = vec![OptionTier::new("cursed", "诅咒", Decimal::NEGATIVE_ONE)];
        assert!(validate_option_tiers(&negative).is_err());
    }
}
