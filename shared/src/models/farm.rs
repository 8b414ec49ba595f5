//! Crop batch and farm models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Plant;

/// A quantity of one plant under cultivation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropBatch {
    pub crop: Plant,
    pub num_crops: Decimal,
}

impl CropBatch {
    pub fn new(crop: Plant, num_crops: Decimal) -> Self {
        Self { crop, num_crops }
    }
}

/// A farm: an ordered collection of crop batches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Farm {
    #[serde(default)]
    pub crops: Vec<CropBatch>,
}

impl Farm {
    pub fn new(crops: Vec<CropBatch>) -> Self {
        Self { crops }
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}
