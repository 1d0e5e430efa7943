//! Catalog search tests
//!
//! Search is a stable, case-insensitive substring filter on name and
//! description combined with an exact category match.

use proptest::prelude::*;
use shared::{filter_plants, Catalog, Category, PlantQuery, PlantRecord};

fn ids(plants: &[&PlantRecord]) -> Vec<u32> {
    plants.iter().map(|p| p.id).collect()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_berry_search_in_catalog_order() {
        let catalog = Catalog::builtin();
        let hits = filter_plants(catalog.plants(), "莓", None);
        let names: Vec<&str> = hits.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["草莓", "蓝莓"]);
        assert_eq!(ids(&hits), vec![4, 5]);
    }

    #[test]
    fn test_description_only_match() {
        // "专属" appears only in the blueberry description
        let catalog = Catalog::builtin();
        assert_eq!(ids(&filter_plants(catalog.plants(), "专属", None)), vec![5]);
    }

    #[test]
    fn test_text_and_category_combined() {
        let catalog = Catalog::builtin();
        let medicinal = filter_plants(catalog.plants(), "药用", None);
        assert_eq!(ids(&medicinal), vec![15, 18, 53, 54, 90, 92, 94, 100]);

        let medicinal_herbs = filter_plants(catalog.plants(), "药用", Some("herbs"));
        assert_eq!(ids(&medicinal_herbs), vec![15, 53, 54, 92, 94, 100]);
    }

    #[test]
    fn test_substring_of_name() {
        let catalog = Catalog::builtin();
        assert_eq!(ids(&catalog.filter(&PlantQuery::new("萝卜", None))), vec![1, 16, 63]);
    }

    #[test]
    fn test_category_counts() {
        let catalog = Catalog::builtin();
        let counts: Vec<usize> = Category::ALL
            .iter()
            .map(|c| filter_plants(catalog.plants(), "", Some(c.code())).len())
            .collect();
        assert_eq!(counts, vec![30, 34, 13, 23]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let catalog = Catalog::builtin();
        assert!(filter_plants(catalog.plants(), "", Some("trees")).is_empty());
    }

    #[test]
    fn test_no_match() {
        let catalog = Catalog::builtin();
        assert!(catalog.filter(&PlantQuery::new("pineapple", None)).is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// Queries drawn from fragments that occur in the catalog plus noise
    fn query_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            Just("莓".to_string()),
            Just("药用".to_string()),
            Just("夏季".to_string()),
            Just("高价值".to_string()),
            Just("萝卜".to_string()),
            "[a-z]{0,2}",
        ]
    }

    fn category_strategy() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some(String::new())),
            proptest::sample::select(Category::ALL.to_vec()).prop_map(|c| Some(c.code().to_string())),
            Just(Some("trees".to_string())),
        ]
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Filtering twice is the same as filtering once
        #[test]
        fn prop_filter_is_idempotent(
            query in query_strategy(),
            category in category_strategy()
        ) {
            let catalog = Catalog::builtin();
            let once = filter_plants(catalog.plants(), &query, category.as_deref());
            let twice = filter_plants(once.iter().copied(), &query, category.as_deref());
            prop_assert_eq!(ids(&once), ids(&twice));
        }

        /// Every record is included exactly when it satisfies both conditions
        #[test]
        fn prop_filter_is_exact(
            query in query_strategy(),
            category in category_strategy()
        ) {
            let catalog = Catalog::builtin();
            let hits = ids(&filter_plants(catalog.plants(), &query, category.as_deref()));
            let needle = query.to_lowercase();

            for plant in catalog.plants() {
                let text_ok = plant.name.to_lowercase().contains(&needle)
                    || plant.description.to_lowercase().contains(&needle);
                let category_ok = match category.as_deref() {
                    None | Some("") => true,
                    Some(code) => plant.category.code() == code,
                };
                prop_assert_eq!(hits.contains(&plant.id), text_ok && category_ok);
            }
        }

        /// Results keep the catalog's relative order
        #[test]
        fn prop_filter_preserves_order(
            query in query_strategy(),
            category in category_strategy()
        ) {
            let catalog = Catalog::builtin();
            let hits = ids(&filter_plants(catalog.plants(), &query, category.as_deref()));
            let positions: Vec<usize> = hits
                .iter()
                .filter_map(|id| catalog.plants().iter().position(|p| p.id == *id))
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
