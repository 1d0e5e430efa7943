//! Plant catalog models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{Category, Season};
use crate::validation::validate_plant;
use crate::valuation::round_half_up;

/// A plant in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Unique across the catalog
    pub id: u32,
    /// Display name, not unique
    pub name: String,
    pub category: Category,
    pub emoji: String,
    /// Market value per unit at neutral quality and season
    pub base_value: u32,
    /// Cost per unit to plant
    pub seed_cost: u32,
    /// Days to maturity
    pub growth_time: u32,
    /// Never empty; order is display order
    pub seasons: Vec<Season>,
    pub description: String,
}

impl PlantRecord {
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate_plant(self)
    }

    /// Text for the plant selector, e.g. `🥕 萝卜 (50金币)`
    pub fn option_label(&self) -> String {
        format!("{} {} ({}金币)", self.emoji, self.name, self.base_value)
    }

    /// Season labels joined in stored order
    pub fn seasons_label(&self) -> String {
        self.seasons
            .iter()
            .map(Season::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn grows_in(&self, season: Season) -> bool {
        self.seasons.contains(&season)
    }

    /// Per-unit profit margin in whole percent at neutral modifiers
    pub fn unit_profit_margin(&self) -> i64 {
        if self.seed_cost == 0 {
            return 0;
        }
        let margin = Decimal::from(i64::from(self.base_value) - i64::from(self.seed_cost))
            * Decimal::ONE_HUNDRED
            / Decimal::from(self.seed_cost);
        i64::try_from(round_half_up(margin)).unwrap_or_default()
    }

    pub fn card(&self) -> PlantCard {
        PlantCard {
            id: self.id,
            emoji: self.emoji.clone(),
            name: self.name.clone(),
            category_label: self.category.label().to_string(),
            seasons_label: self.seasons_label(),
            base_value: self.base_value,
            seed_cost: self.seed_cost,
            growth_time: self.growth_time,
            profit_margin: self.unit_profit_margin(),
            description: self.description.clone(),
        }
    }
}

/// Display projection of a plant for the catalog grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlantCard {
    pub id: u32,
    pub emoji: String,
    pub name: String,
    pub category_label: String,
    pub seasons_label: String,
    pub base_value: u32,
    pub seed_cost: u32,
    pub growth_time: u32,
    /// Whole percent
    pub profit_margin: i64,
    pub description: String,
}

/// Entry in the plant selector
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantOption {
    pub id: u32,
    pub label: String,
}

impl From<&PlantRecord> for PlantOption {
    fn from(plant: &PlantRecord) -> Self {
        Self {
            id: plant.id,
            label: plant.option_label(),
        }
    }
}
