//! Calculator session: catalog, options and history wired together

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::CalculatorConfig;
use crate::filter::PlantQuery;
use crate::history::{HistoryLog, KeyValueStore};
use crate::models::{find_multiplier, CalculationResult, HistoryEntry, OptionTier, PlantRecord};
use crate::valuation::{calculate, coerce_plant_id, coerce_quantity};

/// A valuation as selected in the calculator form
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValuationRequest {
    pub plant_id: Option<u32>,
    pub quantity: i64,
    pub quality_code: String,
    pub season_code: String,
}

impl ValuationRequest {
    pub fn new(plant_id: u32, quantity: i64, quality_code: &str, season_code: &str) -> Self {
        Self {
            plant_id: Some(plant_id),
            quantity,
            quality_code: quality_code.to_string(),
            season_code: season_code.to_string(),
        }
    }

    /// Build a request from raw form values
    pub fn from_form(plant_id: &str, quantity: &str, quality_code: &str, season_code: &str) -> Self {
        Self {
            plant_id: coerce_plant_id(plant_id),
            quantity: coerce_quantity(quantity),
            quality_code: quality_code.to_string(),
            season_code: season_code.to_string(),
        }
    }
}

/// Owns the catalog, the option sets and the history log
pub struct Calculator<S> {
    catalog: Catalog,
    config: CalculatorConfig,
    history: HistoryLog<S>,
}

impl<S: KeyValueStore> Calculator<S> {
    pub fn new(catalog: Catalog, config: CalculatorConfig, store: S) -> Self {
        let history = HistoryLog::with_settings(store, &config.history_key, config.history_capacity);
        Self {
            catalog,
            config,
            history,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryLog<S> {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut HistoryLog<S> {
        &mut self.history
    }

    /// Swap the configuration, keeping the catalog and the store
    pub fn reconfigure(&mut self, config: CalculatorConfig) {
        self.history
            .reconfigure(&config.history_key, config.history_capacity);
        self.config = config;
    }

    pub fn search(&self, query: &PlantQuery) -> Vec<&PlantRecord> {
        self.catalog.filter(query)
    }

    /// Value the request without touching the history
    pub fn quote(&self, request: &ValuationRequest) -> CalculationResult {
        let plant = request.plant_id.and_then(|id| self.catalog.find(id));
        let quality = option_multiplier(&self.config.quality_tiers, &request.quality_code, "quality");
        let season = option_multiplier(&self.config.season_modifiers, &request.season_code, "season");

        calculate(plant, request.quantity, quality, season)
    }

    /// Value the request and, when it is a real valuation, record it
    pub fn evaluate(&mut self, request: &ValuationRequest, at: DateTime<Utc>) -> CalculationResult {
        let result = self.quote(request);
        let plant = request.plant_id.and_then(|id| self.catalog.find(id));

        if let Some(plant) = plant.filter(|_| !result.is_reset()) {
            let entry = HistoryEntry::new(
                plant,
                request.quantity,
                &request.quality_code,
                &request.season_code,
                &result,
                at,
            );
            self.history.record(entry);
        }
        result
    }

    pub fn recent(&self) -> Vec<HistoryEntry> {
        self.history.list()
    }
}

fn option_multiplier(options: &[OptionTier], code: &str, kind: &str) -> Decimal {
    find_multiplier(options, code).unwrap_or_else(|| {
        tracing::warn!(kind, code, "unknown option code, using neutral multiplier");
        Decimal::ONE
    })
}
