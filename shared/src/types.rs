//! Common enumerations used across the calculator

use serde::{Deserialize, Serialize};

use crate::error::UnknownCode;

/// Growing season
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn code(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        }
    }

    /// Display label shown in the catalog
    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "春季",
            Season::Summer => "夏季",
            Season::Fall => "秋季",
            Season::Winter => "冬季",
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Season {
    type Err = UnknownCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Season::ALL
            .into_iter()
            .find(|season| season.code() == code)
            .ok_or_else(|| UnknownCode::new("season", code))
    }
}

/// Plant category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Vegetables,
    Fruits,
    Flowers,
    Herbs,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Vegetables,
        Category::Fruits,
        Category::Flowers,
        Category::Herbs,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Category::Vegetables => "vegetables",
            Category::Fruits => "fruits",
            Category::Flowers => "flowers",
            Category::Herbs => "herbs",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Vegetables => "蔬菜",
            Category::Fruits => "水果",
            Category::Flowers => "花卉",
            Category::Herbs => "草药",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = UnknownCode;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or_else(|| UnknownCode::new("category", code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_codes_round_trip_through_from_str() {
        for season in Season::ALL {
            assert_eq!(season.code().parse::<Season>(), Ok(season));
        }
    }

    #[test]
    fn test_category_serde_uses_codes() {
        let json = serde_json::to_string(&Category::Herbs).unwrap();
        assert_eq!(json, "\"herbs\"");
        let parsed: Category = serde_json::from_str("\"fruits\"").unwrap();
        assert_eq!(parsed, Category::Fruits);
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert!("autumn".parse::<Season>().is_err());
        assert!("Vegetables".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Season::Winter.to_string(), "冬季");
        assert_eq!(Category::Flowers.to_string(), "花卉");
    }
}
