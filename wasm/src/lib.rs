//! WebAssembly module for farm economics
//!
//! Provides client-side computation for:
//! - Plant, batch and farm yield
//! - Batch cost, revenue and profit
//! - Farm reports
//!
//! Inputs are JSON strings in the same shape the CLI reads. An environment
//! argument may be empty or `null` to skip environmental adjustment.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

use shared::{
    farm_report, Calculator, CalculatorOptions, CropBatch, EnvironmentFactors, Farm, Level,
    MissingFactorPolicy, Plant,
};

// Re-export shared types for Rust consumers of the rlib
pub use shared::models::*;
pub use shared::types::*;

fn parse<T: DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn parse_environment(json: &str) -> Result<Option<EnvironmentFactors>, String> {
    if json.trim().is_empty() {
        return Ok(None);
    }
    parse(json, "environment")
}

fn to_f64(value: Decimal) -> Result<f64, String> {
    value
        .to_f64()
        .ok_or_else(|| format!("Result {} cannot be represented as a number", value))
}

fn calculator(neutral_missing_factors: bool) -> Calculator {
    let missing_factor = if neutral_missing_factors {
        MissingFactorPolicy::Neutral
    } else {
        MissingFactorPolicy::Zero
    };
    Calculator::new(CalculatorOptions { missing_factor })
}

fn compute_plant_yield(plant_json: &str, environment_json: &str) -> Result<Decimal, String> {
    let plant: Plant = parse(plant_json, "plant")?;
    let env = parse_environment(environment_json)?;
    calculator(false)
        .adjusted_plant_yield(&plant, env.as_ref())
        .map_err(|e| e.to_string())
}

fn compute_batch<F>(batch_json: &str, environment_json: &str, f: F) -> Result<Decimal, String>
where
    F: FnOnce(&Calculator, &CropBatch, Option<&EnvironmentFactors>) -> shared::CalcResult<Decimal>,
{
    let batch: CropBatch = parse(batch_json, "batch")?;
    let env = parse_environment(environment_json)?;
    f(&calculator(false), &batch, env.as_ref()).map_err(|e| e.to_string())
}

fn compute_farm<F>(farm_json: &str, environment_json: &str, f: F) -> Result<Decimal, String>
where
    F: FnOnce(&Calculator, &Farm, Option<&EnvironmentFactors>) -> shared::CalcResult<Decimal>,
{
    let farm: Farm = parse(farm_json, "farm")?;
    let env = parse_environment(environment_json)?;
    f(&calculator(false), &farm, env.as_ref()).map_err(|e| e.to_string())
}

fn compute_report(
    farm_json: &str,
    environment_json: &str,
    neutral_missing_factors: bool,
) -> Result<String, String> {
    let farm: Farm = parse(farm_json, "farm")?;
    let env = parse_environment(environment_json)?;
    let report = farm_report(&farm, env.as_ref(), calculator(neutral_missing_factors).options())
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&report).map_err(|e| format!("Report serialization error: {}", e))
}

fn into_js(result: Result<Decimal, String>) -> Result<f64, JsValue> {
    result.and_then(to_f64).map_err(|e| JsValue::from_str(&e))
}

/// Calculate the adjusted yield of a single plant
#[wasm_bindgen]
pub fn plant_yield(plant_json: &str, environment_json: &str) -> Result<f64, JsValue> {
    into_js(compute_plant_yield(plant_json, environment_json))
}

/// Calculate the yield of a crop batch
#[wasm_bindgen]
pub fn batch_yield(batch_json: &str, environment_json: &str) -> Result<f64, JsValue> {
    into_js(compute_batch(batch_json, environment_json, |c, b, e| {
        c.yield_for_batch(b, e)
    }))
}

/// Calculate the total yield of a farm
#[wasm_bindgen]
pub fn farm_total_yield(farm_json: &str, environment_json: &str) -> Result<f64, JsValue> {
    into_js(compute_farm(farm_json, environment_json, |c, f, e| {
        c.total_yield(f, e)
    }))
}

/// Calculate the cost of a crop batch
#[wasm_bindgen]
pub fn batch_cost(batch_json: &str) -> Result<f64, JsValue> {
    into_js(compute_batch(batch_json, "", |c, b, _| c.cost_for_batch(b)))
}

#[wasm_bindgen]
pub fn batch_revenue(batch_json: &str, environment_json: &str) -> Result<f64, JsValue> {
    into_js(compute_batch(batch_json, environment_json, |c, b, e| {
        c.revenue_for_batch(b, e)
    }))
}

#[wasm_bindgen]
pub fn batch_profit(batch_json: &str, environment_json: &str) -> Result<f64, JsValue> {
    into_js(compute_batch(batch_json, environment_json, |c, b, e| {
        c.profit_for_batch(b, e)
    }))
}

/// Calculate the total profit of a farm
#[wasm_bindgen]
pub fn farm_total_profit(farm_json: &str, environment_json: &str) -> Result<f64, JsValue> {
    into_js(compute_farm(farm_json, environment_json, |c, f, e| {
        c.total_profit(f, e)
    }))
}

/// Build a per-batch farm report, returned as JSON
#[wasm_bindgen]
pub fn farm_report_json(
    farm_json: &str,
    environment_json: &str,
    neutral_missing_factors: bool,
) -> Result<String, JsValue> {
    compute_report(farm_json, environment_json, neutral_missing_factors)
        .map_err(|e| JsValue::from_str(&e))
}

/// Check a level name is one of low, medium, high
#[wasm_bindgen]
pub fn is_valid_level(level: &str) -> bool {
    level.parse::<Level>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORN: &str = r#"{
        "name": "corn",
        "yield": 30,
        "costs": 1,
        "salePrice": 2,
        "factors": {
            "sun": { "low": -50, "medium": 0, "high": 50 },
            "wind": { "low": -5, "medium": -10, "high": -20 }
        }
    }"#;

    fn corn_batch(num_crops: u32) -> String {
        format!(r#"{{ "crop": {}, "numCrops": {} }}"#, CORN, num_crops)
    }

    #[test]
    fn test_plant_yield() {
        assert_eq!(compute_plant_yield(CORN, ""), Ok(Decimal::from(30)));
        assert_eq!(compute_plant_yield(CORN, "null"), Ok(Decimal::from(30)));
        assert_eq!(
            compute_plant_yield(CORN, r#"{"sun": "low", "wind": "high"}"#),
            Ok(Decimal::from(12))
        );
    }

    #[test]
    fn test_batch_profit() {
        let batch = corn_batch(20);
        let profit = compute_batch(&batch, "", |c, b, e| c.profit_for_batch(b, e)).unwrap();
        assert_eq!(profit, Decimal::from(1180));
        assert!((to_f64(profit).unwrap() - 1180.0).abs() < 0.001);
    }

    #[test]
    fn test_invalid_input_messages() {
        let err = compute_plant_yield("{", "").unwrap_err();
        assert!(err.starts_with("Invalid plant JSON"));

        let err = compute_plant_yield(CORN, r#"{"sun": "scorching"}"#).unwrap_err();
        assert!(err.starts_with("Invalid environment JSON"));

        let unpriced = r#"{ "crop": { "name": "bean", "yield": 2 }, "numCrops": 5 }"#;
        let err = compute_batch(unpriced, "", |c, b, _| c.cost_for_batch(b)).unwrap_err();
        assert!(err.contains("costs"));
    }

    #[test]
    fn test_overflow_is_reported_not_zero() {
        let huge = r#"{ "crop": { "yield": 1000000000000000 }, "numCrops": 1000000000000000 }"#;
        let err = compute_batch(huge, "", |c, b, e| c.yield_for_batch(b, e)).unwrap_err();
        assert!(err.contains("overflow"));

        let farm = format!(r#"{{ "crops": [{}] }}"#, huge);
        let err = compute_report(&farm, "", false).unwrap_err();
        assert!(err.contains("overflow"));
    }

    #[test]
    fn test_largest_decimal_converts() {
        let value = to_f64(Decimal::MAX).unwrap();
        assert!(value > 7.9e28);
        assert!((to_f64(Decimal::new(-224, 2)).unwrap() + 2.24).abs() < 1e-9);
    }

    #[test]
    fn test_report_json() {
        let farm = format!(r#"{{ "crops": [{}] }}"#, corn_batch(10));
        let json = compute_report(&farm, r#"{"sun": "high", "wind": "medium"}"#, false).unwrap();
        let report: shared::FarmReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.total_yield, Decimal::from(405));
        assert_eq!(report.batches[0].name, "corn");
    }

    #[test]
    fn test_report_neutral_policy() {
        let farm = r#"{ "crops": [{ "crop": { "name": "bean", "yield": 2 }, "numCrops": 5 }] }"#;
        let env = r#"{"sun": "high"}"#;

        let zero: shared::FarmReport =
            serde_json::from_str(&compute_report(farm, env, false).unwrap()).unwrap();
        assert_eq!(zero.total_yield, Decimal::ZERO);

        let neutral: shared::FarmReport =
            serde_json::from_str(&compute_report(farm, env, true).unwrap()).unwrap();
        assert_eq!(neutral.total_yield, Decimal::from(10));
    }

    #[test]
    fn test_is_valid_level() {
        assert!(is_valid_level("low"));
        assert!(is_valid_level("High"));
        assert!(!is_valid_level("extreme"));
    }
}
