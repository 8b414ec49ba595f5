//! Farm report CLI library
//!
//! Loads a farm description, evaluates it under the configured environment
//! and renders the resulting report.

use std::path::Path;

use shared::{farm_report, is_priced, validate_farm, Farm, FarmReport};

pub mod config;
pub mod error;
pub mod output;

pub use crate::config::{Cli, Config};
pub use crate::error::{AppError, AppResult};
pub use crate::output::{render, OutputFormat};

/// Read and parse a farm JSON file
pub fn load_farm(path: &Path) -> AppResult<Farm> {
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| AppError::InvalidInput {
        path: path.to_path_buf(),
        source,
    })
}

/// Evaluate a farm under the configured environment and policy
pub fn evaluate(farm: &Farm, config: &Config) -> AppResult<FarmReport> {
    if let Err((index, reason)) = validate_farm(farm) {
        tracing::warn!(batch = index, "Suspicious crop record: {}", reason);
    }

    for batch in farm.crops.iter().filter(|b| !is_priced(&b.crop)) {
        tracing::warn!(crop = %batch.crop.name, "Batch lacks costs or salePrice; profit not computed");
    }

    let environment = config.environment();
    farm_report(farm, environment.as_ref(), config.calculation).map_err(AppError::from)
}

/// Load, evaluate and render according to configuration
pub fn run(config: &Config) -> AppResult<String> {
    let farm = load_farm(&config.input.path)?;
    tracing::info!(
        path = %config.input.path.display(),
        batches = farm.crops.len(),
        "Loaded farm"
    );

    let report = evaluate(&farm, config)?;
    tracing::info!(total_yield = %report.total_yield, "Evaluated farm");

    render(&report, config.output.format)
}
