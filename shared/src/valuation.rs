//! Harvest valuation
//!
//! Pure functions: the caller decides whether a result is worth recording
//! in the history log.

use rust_decimal::Decimal;

use crate::models::{CalculationResult, PlantRecord};

/// Round to the nearest whole number, halves toward positive infinity
pub fn round_half_up(value: Decimal) -> Decimal {
    value
        .checked_add(Decimal::new(5, 1))
        .map_or_else(|| value.round(), |shifted| shifted.floor())
}

/// Value `quantity` units of `plant` under the given multipliers
///
/// A missing plant or non-positive quantity yields the reset result, as does
/// arithmetic that would overflow the decimal range.
pub fn calculate(
    plant: Option<&PlantRecord>,
    quantity: i64,
    quality_multiplier: Decimal,
    season_multiplier: Decimal,
) -> CalculationResult {
    let Some(plant) = plant else {
        return CalculationResult::reset();
    };
    if quantity <= 0 {
        return CalculationResult::reset();
    }

    compute(plant, quantity, quality_multiplier, season_multiplier).unwrap_or_else(|| {
        tracing::debug!(plant_id = plant.id, quantity, "valuation overflowed, resetting");
        CalculationResult::reset()
    })
}

/// [`calculate`] for multipliers read from a form; non-finite values reset
pub fn calculate_f64(
    plant: Option<&PlantRecord>,
    quantity: i64,
    quality_multiplier: f64,
    season_multiplier: f64,
) -> CalculationResult {
    match (
        Decimal::try_from(quality_multiplier),
        Decimal::try_from(season_multiplier),
    ) {
        (Ok(quality), Ok(season)) => calculate(plant, quantity, quality, season),
        _ => CalculationResult::reset(),
    }
}

fn compute(
    plant: &PlantRecord,
    quantity: i64,
    quality_multiplier: Decimal,
    season_multiplier: Decimal,
) -> Option<CalculationResult> {
    let quantity = Decimal::from(quantity);

    let base_value = Decimal::from(plant.base_value).checked_mul(quantity)?;
    let quality_bonus = base_value.checked_mul(quality_multiplier.checked_sub(Decimal::ONE)?)?;
    let season_bonus = base_value.checked_mul(season_multiplier.checked_sub(Decimal::ONE)?)?;
    let total_value = base_value
        .checked_add(quality_bonus)?
        .checked_add(season_bonus)?;

    let total_seed_cost = Decimal::from(plant.seed_cost).checked_mul(quantity)?;
    let net_profit = total_value.checked_sub(total_seed_cost)?;
    let profit_margin = if total_seed_cost > Decimal::ZERO {
        net_profit
            .checked_div(total_seed_cost)?
            .checked_mul(Decimal::ONE_HUNDRED)?
    } else {
        Decimal::ZERO
    };

    Some(CalculationResult {
        base_value,
        quality_bonus: round_half_up(quality_bonus),
        season_bonus: round_half_up(season_bonus),
        total_value: round_half_up(total_value),
        total_seed_cost,
        net_profit: round_half_up(net_profit),
        profit_margin: round_half_up(profit_margin),
    })
}

/// Read a typed quantity the way a browser form does
///
/// Leading whitespace and a sign are accepted, parsing stops at the first
/// non-digit. Anything without a leading integer becomes 0.
pub fn coerce_quantity(raw: &str) -> i64 {
    parse_leading_integer(raw).unwrap_or(0)
}

/// Read a selected plant id; empty, non-positive or unparsable selections are `None`
pub fn coerce_plant_id(raw: &str) -> Option<u32> {
    parse_leading_integer(raw)
        .and_then(|id| u32::try_from(id).ok())
        .filter(|id| *id > 0)
}

fn parse_leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];
    if digits.is_empty() {
        return None;
    }

    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Season};

    fn carrot() -> PlantRecord {
        PlantRecord {
            id: 1,
            name: "萝卜".to_string(),
            category: Category::Vegetables,
            emoji: "🥕".to_string(),
            base_value: 50,
            seed_cost: 10,
            growth_time: 4,
            seasons: vec![Season::Spring, Season::Fall],
            description: "基础蔬菜，生长快速，适合新手".to_string(),
        }
    }

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(dec("2.5")), dec("3"));
        assert_eq!(round_half_up(dec("2.49")), dec("2"));
        assert_eq!(round_half_up(dec("-2.5")), dec("-2"));
        assert_eq!(round_half_up(dec("-2.51")), dec("-3"));
        assert_eq!(round_half_up(dec("7")), dec("7"));
    }

    #[test]
    fn test_calculate_excellent_quality() {
        let result = calculate(Some(&carrot()), 3, dec("1.5"), Decimal::ONE);
        assert_eq!(result.base_value, dec("150"));
        assert_eq!(result.quality_bonus, dec("75"));
        assert_eq!(result.season_bonus, Decimal::ZERO);
        assert_eq!(result.total_value, dec("225"));
        assert_eq!(result.total_seed_cost, dec("30"));
        assert_eq!(result.net_profit, dec("195"));
        assert_eq!(result.profit_margin, dec("650"));
    }

    #[test]
    fn test_calculate_off_season_rounds_bonus() {
        // 50 * 1 * (0.8 - 1) = -10, good quality adds 12.5 -> 13
        let result = calculate(Some(&carrot()), 1, dec("1.25"), dec("0.8"));
        assert_eq!(result.quality_bonus, dec("13"));
        assert_eq!(result.season_bonus, dec("-10"));
        assert_eq!(result.total_value, dec("53"));
        assert_eq!(result.net_profit, dec("43"));
        assert_eq!(result.profit_margin, dec("425"));
    }

    #[test]
    fn test_calculate_resets_without_selection() {
        assert!(calculate(None, 3, Decimal::ONE, Decimal::ONE).is_reset());
        assert!(calculate(Some(&carrot()), 0, Decimal::ONE, Decimal::ONE).is_reset());
        assert!(calculate(Some(&carrot()), -4, Decimal::ONE, Decimal::ONE).is_reset());
    }

    #[test]
    fn test_calculate_f64_rejects_non_finite() {
        assert!(calculate_f64(Some(&carrot()), 3, f64::NAN, 1.0).is_reset());
        assert!(calculate_f64(Some(&carrot()), 3, 1.0, f64::INFINITY).is_reset());
        let result = calculate_f64(Some(&carrot()), 3, 1.5, 1.0);
        assert_eq!(result.total_value, dec("225"));
    }

    #[test]
    fn test_calculate_overflow_resets() {
        let result = calculate(Some(&carrot()), i64::MAX, Decimal::MAX, Decimal::ONE);
        assert!(result.is_reset());
    }

    #[test]
    fn test_negative_net_profit_is_not_profitable() {
        let mut plant = carrot();
        plant.seed_cost = 60;
        let result = calculate(Some(&plant), 2, Decimal::ONE, Decimal::ONE);
        assert_eq!(result.net_profit, dec("-20"));
        assert_eq!(result.profit_margin, dec("-17"));
        assert!(!result.is_profitable());
    }

    #[test]
    fn test_coerce_quantity() {
        assert_eq!(coerce_quantity("12"), 12);
        assert_eq!(coerce_quantity("  7"), 7);
        assert_eq!(coerce_quantity("3.9"), 3);
        assert_eq!(coerce_quantity("12abc"), 12);
        assert_eq!(coerce_quantity("-2"), -2);
        assert_eq!(coerce_quantity("+5"), 5);
        assert_eq!(coerce_quantity(""), 0);
        assert_eq!(coerce_quantity("abc"), 0);
        assert_eq!(coerce_quantity("-"), 0);
        assert_eq!(coerce_quantity("99999999999999999999"), 0);
    }

    #[test]
    fn test_coerce_plant_id() {
        assert_eq!(coerce_plant_id("4"), Some(4));
        assert_eq!(coerce_plant_id(""), None);
        assert_eq!(coerce_plant_id("0"), None);
        assert_eq!(coerce_plant_id("-1"), None);
    }
}
