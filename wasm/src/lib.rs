//! WebAssembly module for the Garden Value Calculator
//!
//! Provides client-side computation for:
//! - Plant selector and catalog grid contents
//! - Catalog search by text and category
//! - Harvest valuation with quality and season modifiers
//! - Calculation history kept in `localStorage`
//!
//! Structured values cross the boundary as JSON strings.

use std::cell::RefCell;

use chrono::{DateTime, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript glue
pub use shared::models::*;
pub use shared::types::*;

use shared::{Calculator, CalculatorConfig, Catalog, PlantQuery, ValuationRequest};

mod storage;

pub use storage::LocalStorageStore;

thread_local! {
    static CALCULATOR: RefCell<Calculator<LocalStorageStore>> = RefCell::new(Calculator::new(
        Catalog::builtin(),
        CalculatorConfig::default(),
        LocalStorageStore::new(),
    ));
}

fn with_calculator<R>(f: impl FnOnce(&mut Calculator<LocalStorageStore>) -> R) -> R {
    CALCULATOR.with(|calculator| f(&mut calculator.borrow_mut()))
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization failed: {}", e)))
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    let plants = with_calculator(|calculator| calculator.catalog().len());
    web_sys::console::debug_1(&JsValue::from_str(&format!(
        "garden calculator ready ({} plants)",
        plants
    )));
}

/// Replace the option sets and history settings with a JSON configuration
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config = CalculatorConfig::from_json(config_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid configuration: {}", e)))?;
    with_calculator(|calculator| calculator.reconfigure(config));
    Ok(())
}

/// Plant selector entries as JSON `[{id, label}]`
#[wasm_bindgen]
pub fn plant_options() -> Result<String, JsValue> {
    with_calculator(|calculator| to_json(&calculator.catalog().options()))
}

/// Quality tier options as JSON `[{code, label, multiplier}]`
#[wasm_bindgen]
pub fn quality_options() -> Result<String, JsValue> {
    with_calculator(|calculator| to_json(&calculator.config().quality_tiers))
}

/// Season modifier options as JSON `[{code, label, multiplier}]`
#[wasm_bindgen]
pub fn season_options() -> Result<String, JsValue> {
    with_calculator(|calculator| to_json(&calculator.config().season_modifiers))
}

/// Catalog cards matching the search text and category code (empty = any)
#[wasm_bindgen]
pub fn search_plants(query: &str, category: &str) -> Result<String, JsValue> {
    let query = PlantQuery::new(query, Some(category));
    with_calculator(|calculator| {
        let cards: Vec<PlantCard> = calculator
            .search(&query)
            .into_iter()
            .map(PlantRecord::card)
            .collect();
        to_json(&cards)
    })
}

/// Value a selection without recording it
#[wasm_bindgen]
pub fn preview_value(
    plant_id: &str,
    quantity: &str,
    quality_code: &str,
    season_code: &str,
) -> Result<String, JsValue> {
    let request = ValuationRequest::from_form(plant_id, quantity, quality_code, season_code);
    with_calculator(|calculator| to_json(&calculator.quote(&request)))
}

/// Value a selection and record it in the history when valid
#[wasm_bindgen]
pub fn calculate_value(
    plant_id: &str,
    quantity: &str,
    quality_code: &str,
    season_code: &str,
) -> Result<String, JsValue> {
    let request = ValuationRequest::from_form(plant_id, quantity, quality_code, season_code);
    let at = now();
    with_calculator(|calculator| to_json(&calculator.evaluate(&request, at)))
}

/// Recorded valuations, newest first
#[wasm_bindgen]
pub fn calculation_history() -> Result<String, JsValue> {
    with_calculator(|calculator| to_json(&calculator.recent()))
}

#[wasm_bindgen]
pub fn clear_history() -> Result<(), JsValue> {
    with_calculator(|calculator| calculator.history_mut().clear())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Label for a season code (unknown codes are echoed back)
#[wasm_bindgen]
pub fn season_label(code: &str) -> String {
    shared::season_label(code).to_string()
}

/// Label for a category code (unknown codes are echoed back)
#[wasm_bindgen]
pub fn category_label(code: &str) -> String {
    shared::category_label(code).to_string()
}
