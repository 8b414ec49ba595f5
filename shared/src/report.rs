//! Farm report: per-batch breakdown of yield and economics

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::{add, sub, Calculator, CalculatorOptions};
use crate::error::{CalcError, CalcResult};
use crate::models::{CropBatch, EnvironmentFactors, Farm};

/// Figures for one crop batch
///
/// Cost, revenue and profit are `None` when the plant lacks the
/// `costs` or `salePrice` they depend on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BatchBreakdown {
    pub name: String,
    pub num_crops: Decimal,
    pub plant_yield: Decimal,
    pub batch_yield: Decimal,
    pub cost: Option<Decimal>,
    pub revenue: Option<Decimal>,
    pub profit: Option<Decimal>,
}

/// Farm-wide report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmReport {
    pub environment: Option<EnvironmentFactors>,
    pub batches: Vec<BatchBreakdown>,
    pub total_yield: Decimal,
    /// `None` if any batch could not be priced
    pub total_profit: Option<Decimal>,
}

impl FarmReport {
    /// Batches whose profit could not be computed
    pub fn unpriced_batches(&self) -> impl Iterator<Item = &BatchBreakdown> {
        self.batches.iter().filter(|b| b.profit.is_none())
    }
}

/// `None` when the plant lacks `costs` or `salePrice`; other errors propagate
fn optional(result: CalcResult<Decimal>) -> CalcResult<Option<Decimal>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(CalcError::MissingField { .. }) => Ok(None),
        Err(err) => Err(err),
    }
}

fn breakdown(
    calculator: &Calculator,
    batch: &CropBatch,
    environment: Option<&EnvironmentFactors>,
) -> CalcResult<BatchBreakdown> {
    let cost = optional(calculator.cost_for_batch(batch))?;
    let revenue = optional(calculator.revenue_for_batch(batch, environment))?;
    let profit = revenue
        .zip(cost)
        .map(|(r, c)| sub(r, c, "batch profit"))
        .transpose()?;

    Ok(BatchBreakdown {
        name: batch.crop.name.clone(),
        num_crops: batch.num_crops,
        plant_yield: calculator.adjusted_plant_yield(&batch.crop, environment)?,
        batch_yield: calculator.yield_for_batch(batch, environment)?,
        cost,
        revenue,
        profit,
    })
}

/// Build the per-batch breakdown and farm totals
///
/// Fails only when a figure overflows; unpriced batches are reported with
/// empty economics instead.
pub fn farm_report(
    farm: &Farm,
    environment: Option<&EnvironmentFactors>,
    options: CalculatorOptions,
) -> CalcResult<FarmReport> {
    let calculator = Calculator::new(options);

    let batches = farm
        .crops
        .iter()
        .map(|batch| {
            let row = breakdown(&calculator, batch, environment)?;
            tracing::debug!(
                crop = %row.name,
                batch_yield = %row.batch_yield,
                profit = ?row.profit,
                "Evaluated crop batch"
            );
            Ok(row)
        })
        .collect::<CalcResult<Vec<BatchBreakdown>>>()?;

    let total_yield = batches.iter().try_fold(Decimal::ZERO, |acc, b| {
        add(acc, b.batch_yield, "total yield")
    })?;
    let total_profit = batches
        .iter()
        .try_fold(Some(Decimal::ZERO), |acc, b| match (acc, b.profit) {
            (Some(acc), Some(profit)) => add(acc, profit, "total profit").map(Some),
            _ => Ok(None),
        })?;

    Ok(FarmReport {
        environment: environment.copied(),
        batches,
        total_yield,
        total_profit,
    })
}
