//! Environment models

use serde::{Deserialize, Serialize};

use crate::types::Level;

/// Sun and wind levels applied uniformly to a calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct EnvironmentFactors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sun: Option<Level>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wind: Option<Level>,
}

impl EnvironmentFactors {
    pub fn new(sun: Level, wind: Level) -> Self {
        Self {
            sun: Some(sun),
            wind: Some(wind),
        }
    }

    pub fn sun_only(sun: Level) -> Self {
        Self {
            sun: Some(sun),
            wind: None,
        }
    }

    pub fn wind_only(wind: Level) -> Self {
        Self {
            sun: None,
            wind: Some(wind),
        }
    }
}
