//! Valuation result and history entry models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::PlantRecord;

/// Result of valuing a harvest
///
/// Bonuses, total value, net profit and margin are rounded to whole coins
/// (whole percent for the margin). The all-zero value is the reset state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(with = "rust_decimal::serde::float")]
    pub base_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub quality_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub season_bonus: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_seed_cost: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub net_profit: Decimal,
    /// Whole percent
    #[serde(with = "rust_decimal::serde::float")]
    pub profit_margin: Decimal,
}

impl CalculationResult {
    /// No valid selection
    pub fn reset() -> Self {
        Self::default()
    }

    pub fn is_reset(&self) -> bool {
        *self == Self::reset()
    }

    pub fn is_profitable(&self) -> bool {
        self.net_profit >= Decimal::ZERO
    }
}

/// A past valuation in the history log
///
/// Serialized with the keys the browser tool has always stored:
/// `plantName, quantity, quality, season, totalValue, timestamp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub plant_name: String,
    pub quantity: i64,
    #[serde(rename = "quality")]
    pub quality_code: String,
    #[serde(rename = "season")]
    pub season_code: String,
    /// Rounded displayed total
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(
        plant: &PlantRecord,
        quantity: i64,
        quality_code: &str,
        season_code: &str,
        result: &CalculationResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            plant_name: plant.name.clone(),
            quantity,
            quality_code: quality_code.to_string(),
            season_code: season_code.to_string(),
            total_value: result.total_value,
            timestamp,
        }
    }
}
