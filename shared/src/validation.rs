//! Validation utilities for crop records
//!
//! The calculator never validates its inputs. These checks are for callers
//! that want to flag suspicious records before evaluating them.

use rust_decimal::Decimal;

use crate::models::{CropBatch, FactorTable, Farm, Plant};
use crate::types::Level;

/// Lowest factor delta that keeps an adjusted yield non-negative
pub const MIN_FACTOR_DELTA: i64 = -100;

// ============================================================================
// Record Validations
// ============================================================================

/// Validate a batch quantity is not negative
pub fn validate_num_crops(num_crops: Decimal) -> Result<(), &'static str> {
    if num_crops < Decimal::ZERO {
        return Err("Number of crops cannot be negative");
    }
    Ok(())
}

/// Validate every delta in a factor table is at least -100%
pub fn validate_factor_table(table: &FactorTable) -> Result<(), &'static str> {
    let min = Decimal::from(MIN_FACTOR_DELTA);
    if Level::ALL.iter().any(|level| table.delta(*level) < min) {
        return Err("Factor deltas cannot be below -100%");
    }
    Ok(())
}

/// Validate a plant's numeric fields and factor tables
pub fn validate_plant(plant: &Plant) -> Result<(), &'static str> {
    if plant.base_yield < Decimal::ZERO {
        return Err("Yield cannot be negative");
    }
    if plant.costs.is_some_and(|c| c < Decimal::ZERO) {
        return Err("Costs cannot be negative");
    }
    if plant.sale_price.is_some_and(|p| p < Decimal::ZERO) {
        return Err("Sale price cannot be negative");
    }
    for table in [plant.sun_factor(), plant.wind_factor()].into_iter().flatten() {
        validate_factor_table(table)?;
    }
    Ok(())
}

pub fn validate_batch(batch: &CropBatch) -> Result<(), &'static str> {
    validate_num_crops(batch.num_crops)?;
    validate_plant(&batch.crop)
}

/// Validate all batches, returning the index of the first invalid one
pub fn validate_farm(farm: &Farm) -> Result<(), (usize, &'static str)> {
    for (index, batch) in farm.crops.iter().enumerate() {
        validate_batch(batch).map_err(|e| (index, e))?;
    }
    Ok(())
}

/// Check whether a plant can be priced (has both costs and sale price)
pub fn is_priced(plant: &Plant) -> bool {
    plant.costs.is_some() && plant.sale_price.is_some()
}
