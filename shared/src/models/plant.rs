//! Plant (crop species) models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::types::Level;

/// A crop species template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    #[serde(default)]
    pub name: String,
    /// Base yield per plant before any environmental adjustment
    #[serde(rename = "yield")]
    pub base_yield: Decimal,
    /// Cost per plant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub costs: Option<Decimal>,
    /// Sale price per unit of yield
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub factors: Option<PlantFactors>,
}

impl Plant {
    pub fn new(name: impl Into<String>, base_yield: Decimal) -> Self {
        Self {
            name: name.into(),
            base_yield,
            costs: None,
            sale_price: None,
            factors: None,
        }
    }

    pub fn with_costs(mut self, costs: Decimal) -> Self {
        self.costs = Some(costs);
        self
    }

    pub fn with_sale_price(mut self, sale_price: Decimal) -> Self {
        self.sale_price = Some(sale_price);
        self
    }

    pub fn with_factors(mut self, factors: PlantFactors) -> Self {
        self.factors = Some(factors);
        self
    }

    /// Sun sensitivity table, if the plant has one
    pub fn sun_factor(&self) -> Option<&FactorTable> {
        self.factors.as_ref().and_then(|f| f.sun.as_ref())
    }

    /// Wind sensitivity table, if the plant has one
    pub fn wind_factor(&self) -> Option<&FactorTable> {
        self.factors.as_ref().and_then(|f| f.wind.as_ref())
    }

    /// Cost per plant, or `MissingField` when absent
    pub fn require_costs(&self) -> CalcResult<Decimal> {
        self.costs.ok_or_else(|| CalcError::MissingField {
            plant: self.name.clone(),
            field: "costs",
        })
    }

    /// Sale price per unit, or `MissingField` when absent
    pub fn require_sale_price(&self) -> CalcResult<Decimal> {
        self.sale_price.ok_or_else(|| CalcError::MissingField {
            plant: self.name.clone(),
            field: "salePrice",
        })
    }
}

/// Environmental sensitivity of a plant, per axis
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PlantFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<FactorTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<FactorTable>,
}

impl PlantFactors {
    pub fn new(sun: Option<FactorTable>, wind: Option<FactorTable>) -> Self {
        Self { sun, wind }
    }
}

/// Percentage yield deltas per level (-50 means the yield halves)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FactorTable {
    pub low: Decimal,
    pub medium: Decimal,
    pub high: Decimal,
}

impl FactorTable {
    pub fn new(low: Decimal, medium: Decimal, high: Decimal) -> Self {
        Self { low, medium, high }
    }

    pub fn delta(&self, level: Level) -> Decimal {
        match level {
            Level::Low => self.low,
            Level::Medium => self.medium,
            Level::High => self.high,
        }
    }

    /// Yield multiplier for a level: `(100 + delta) / 100`
    pub fn multiplier(&self, level: Level) -> CalcResult<Decimal> {
        Decimal::ONE_HUNDRED
            .checked_add(self.delta(level))
            .and_then(|shifted| shifted.checked_div(Decimal::ONE_HUNDRED))
            .ok_or(CalcError::Overflow("factor multiplier"))
    }
}
