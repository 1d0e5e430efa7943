//! Quality tier and season modifier options

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named multiplier option, used for both quality tiers and season modifiers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionTier {
    pub code: String,
    pub label: String,
    #[serde(serialize_with = "rust_decimal::serde::float::serialize")]
    pub multiplier: Decimal,
}

impl OptionTier {
    pub fn new(code: &str, label: &str, multiplier: Decimal) -> Self {
        Self {
            code: code.to_string(),
            label: label.to_string(),
            multiplier,
        }
    }
}

/// Find the multiplier for an option code
pub fn find_multiplier(options: &[OptionTier], code: &str) -> Option<Decimal> {
    options
        .iter()
        .find(|option| option.code == code)
        .map(|option| option.multiplier)
}

/// Quality tiers offered by the game
pub fn default_quality_tiers() -> Vec<OptionTier> {
    vec![
        OptionTier::new("normal", "普通", Decimal::ONE),
        OptionTier::new("good", "优质", Decimal::new(125, 2)),
        OptionTier::new("excellent", "精品", Decimal::new(15, 1)),
        OptionTier::new("perfect", "完美", Decimal::TWO),
    ]
}

/// Season modifiers offered by the game
pub fn default_season_modifiers() -> Vec<OptionTier> {
    vec![
        OptionTier::new("off_season", "非当季", Decimal::new(8, 1)),
        OptionTier::new("in_season", "当季", Decimal::ONE),
        OptionTier::new("peak", "旺季", Decimal::new(13, 1)),
    ]
}
