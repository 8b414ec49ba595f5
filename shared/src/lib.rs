//! Shared types and calculations for farm economics
//!
//! This crate contains the crop data model and the yield, cost, revenue and
//! profit calculations used by the command-line reporter and the WASM module.

pub mod calculator;
pub mod error;
pub mod models;
pub mod report;
pub mod types;
pub mod validation;

pub use calculator::*;
pub use error::*;
pub use models::*;
pub use report::*;
pub use types::*;
pub use validation::*;
