//! Yield, cost, revenue and profit calculations
//!
//! Every operation is a pure function of its inputs. The free functions use
//! [`CalculatorOptions::default`]; build a [`Calculator`] to pick another
//! policy for unresolved environment multipliers.
//!
//! Arithmetic is checked: a result outside the range of [`Decimal`] is
//! reported as [`CalcError::Overflow`] instead of panicking.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::models::{CropBatch, EnvironmentFactors, FactorTable, Farm, Plant};
use crate::types::Level;

/// How an axis resolves when the plant has no table for it or the
/// environment names no level for it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum MissingFactorPolicy {
    /// The whole adjusted yield collapses to zero
    #[default]
    Zero,
    /// The axis contributes a multiplier of one
    Neutral,
}

impl MissingFactorPolicy {
    fn resolve(&self, multiplier: Option<Decimal>) -> Decimal {
        match (multiplier, self) {
            (Some(m), _) => m,
            (None, MissingFactorPolicy::Zero) => Decimal::ZERO,
            (None, MissingFactorPolicy::Neutral) => Decimal::ONE,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CalculatorOptions {
    #[serde(default)]
    pub missing_factor: MissingFactorPolicy,
}

/// Crop economics calculator
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator {
    options: CalculatorOptions,
}

impl Calculator {
    pub fn new(options: CalculatorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> CalculatorOptions {
        self.options
    }

    /// Yield of a single plant, adjusted by sun and wind levels
    ///
    /// Without an environment the base yield is returned unchanged.
    pub fn adjusted_plant_yield(
        &self,
        plant: &Plant,
        environment: Option<&EnvironmentFactors>,
    ) -> CalcResult<Decimal> {
        let Some(env) = environment else {
            return Ok(plant.base_yield);
        };

        let policy = self.options.missing_factor;
        let sun = policy.resolve(axis_multiplier(plant.sun_factor(), env.sun)?);
        let wind = policy.resolve(axis_multiplier(plant.wind_factor(), env.wind)?);

        mul(mul(plant.base_yield, sun, "plant yield")?, wind, "plant yield")
    }

    pub fn yield_for_batch(
        &self,
        batch: &CropBatch,
        environment: Option<&EnvironmentFactors>,
    ) -> CalcResult<Decimal> {
        let plant_yield = self.adjusted_plant_yield(&batch.crop, environment)?;
        mul(batch.num_crops, plant_yield, "batch yield")
    }

    /// Sum of batch yields; an empty farm yields zero
    pub fn total_yield(
        &self,
        farm: &Farm,
        environment: Option<&EnvironmentFactors>,
    ) -> CalcResult<Decimal> {
        farm.crops.iter().try_fold(Decimal::ZERO, |acc, batch| {
            add(acc, self.yield_for_batch(batch, environment)?, "total yield")
        })
    }

    pub fn cost_for_batch(&self, batch: &CropBatch) -> CalcResult<Decimal> {
        mul(batch.crop.require_costs()?, batch.num_crops, "batch cost")
    }

    pub fn revenue_for_batch(
        &self,
        batch: &CropBatch,
        environment: Option<&EnvironmentFactors>,
    ) -> CalcResult<Decimal> {
        let sale_price = batch.crop.require_sale_price()?;
        let batch_yield = self.yield_for_batch(batch, environment)?;
        mul(batch_yield, sale_price, "batch revenue")
    }

    pub fn profit_for_batch(
        &self,
        batch: &CropBatch,
        environment: Option<&EnvironmentFactors>,
    ) -> CalcResult<Decimal> {
        let revenue = self.revenue_for_batch(batch, environment)?;
        sub(revenue, self.cost_for_batch(batch)?, "batch profit")
    }

    /// Sum of batch profits; stops at the first batch missing a price or cost
    pub fn total_profit(
        &self,
        farm: &Farm,
        environment: Option<&EnvironmentFactors>,
    ) -> CalcResult<Decimal> {
        farm.crops.iter().try_fold(Decimal::ZERO, |acc, batch| {
            add(acc, self.profit_for_batch(batch, environment)?, "total profit")
        })
    }
}

fn axis_multiplier(
    table: Option<&FactorTable>,
    level: Option<Level>,
) -> CalcResult<Option<Decimal>> {
    match (table, level) {
        (Some(table), Some(level)) => table.multiplier(level).map(Some),
        _ => Ok(None),
    }
}

pub(crate) fn mul(lhs: Decimal, rhs: Decimal, what: &'static str) -> CalcResult<Decimal> {
    lhs.checked_mul(rhs).ok_or(CalcError::Overflow(what))
}

pub(crate) fn add(lhs: Decimal, rhs: Decimal, what: &'static str) -> CalcResult<Decimal> {
    lhs.checked_add(rhs).ok_or(CalcError::Overflow(what))
}

pub(crate) fn sub(lhs: Decimal, rhs: Decimal, what: &'static str) -> CalcResult<Decimal> {
    lhs.checked_sub(rhs).ok_or(CalcError::Overflow(what))
}

// ============================================================================
// Default-policy entry points
// ============================================================================

pub fn adjusted_plant_yield(
    plant: &Plant,
    environment: Option<&EnvironmentFactors>,
) -> CalcResult<Decimal> {
    Calculator::default().adjusted_plant_yield(plant, environment)
}

pub fn yield_for_batch(
    batch: &CropBatch,
    environment: Option<&EnvironmentFactors>,
) -> CalcResult<Decimal> {
    Calculator::default().yield_for_batch(batch, environment)
}

pub fn total_yield(farm: &Farm, environment: Option<&EnvironmentFactors>) -> CalcResult<Decimal> {
    Calculator::default().total_yield(farm, environment)
}

pub fn cost_for_batch(batch: &CropBatch) -> CalcResult<Decimal> {
    Calculator::default().cost_for_batch(batch)
}

pub fn revenue_for_batch(
    batch: &CropBatch,
    environment: Option<&EnvironmentFactors>,
) -> CalcResult<Decimal> {
    Calculator::default().revenue_for_batch(batch, environment)
}

pub fn profit_for_batch(
    batch: &CropBatch,
    environment: Option<&EnvironmentFactors>,
) -> CalcResult<Decimal> {
    Calculator::default().profit_for_batch(batch, environment)
}

pub fn total_profit(farm: &Farm, environment: Option<&EnvironmentFactors>) -> CalcResult<Decimal> {
    Calculator::default().total_profit(farm, environment)
}
