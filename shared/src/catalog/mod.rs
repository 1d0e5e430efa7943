//! Plant catalog and code-to-label lookups
//!
//! The catalog is immutable once built. Every record is validated on the way
//! in and ids must be unique.

mod data;

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::filter::{filter_plants, PlantQuery};
use crate::models::{PlantCard, PlantOption, PlantRecord};
use crate::types::{Category, Season};

/// The set of plants a calculator works over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    plants: Vec<PlantRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting invalid records and duplicate ids
    pub fn new(plants: Vec<PlantRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(plants.len());
        for plant in &plants {
            plant.validate()?;
            if !seen.insert(plant.id) {
                return Err(CatalogError::DuplicateId(plant.id));
            }
        }
        Ok(Self { plants })
    }

    /// The game's own plant table
    pub fn builtin() -> Self {
        Self {
            plants: data::builtin_plants(),
        }
    }

    /// Parse a JSON array of plant records
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let plants: Vec<PlantRecord> =
            serde_json::from_str(json).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::new(plants)
    }

    pub fn plants(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&PlantRecord> {
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Plants matching the query, in catalog order
    pub fn filter(&self, query: &PlantQuery) -> Vec<&PlantRecord> {
        filter_plants(&self.plants, &query.text, query.category.as_deref())
    }

    pub fn options(&self) -> Vec<PlantOption> {
        self.plants.iter().map(PlantOption::from).collect()
    }

    pub fn cards(&self) -> Vec<PlantCard> {
        self.plants.iter().map(PlantRecord::card).collect()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Label for a season code; unknown codes are returned unchanged
pub fn season_label(code: &str) -> &str {
    code.parse::<Season>().map(|season| season.label()).unwrap_or(code)
}

/// Label for a category code; unknown codes are returned unchanged
pub fn category_label(code: &str) -> &str {
    code.parse::<Category>()
        .map(|category| category.label())
        .unwrap_or(code)
}
