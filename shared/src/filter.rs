//! Catalog search

use serde::{Deserialize, Serialize};

use crate::models::PlantRecord;

/// Search text plus optional category code
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantQuery {
    pub text: String,
    pub category: Option<String>,
}

impl PlantQuery {
    pub fn new(text: &str, category: Option<&str>) -> Self {
        Self {
            text: text.to_string(),
            category: category.map(str::to_string),
        }
    }
}

/// Plants whose name or description contains `query` (case-insensitive) and
/// whose category code equals `category` when one is given.
///
/// An empty query matches everything, an empty category is no constraint.
/// Input order is preserved.
pub fn filter_plants<'a, I>(plants: I, query: &str, category: Option<&str>) -> Vec<&'a PlantRecord>
where
    I: IntoIterator<Item = &'a PlantRecord>,
{
    let needle = query.to_lowercase();
    let category = category.filter(|code| !code.is_empty());

    plants
        .into_iter()
        .filter(|plant| matches_text(plant, &needle))
        .filter(|plant| category.map_or(true, |code| plant.category.code() == code))
        .collect()
}

fn matches_text(plant: &PlantRecord, needle: &str) -> bool {
    plant.name.to_lowercase().contains(needle) || plant.description.to_lowercase().contains(needle)
}
