//! Error types for crop economics calculations

use thiserror::Error;

/// Calculation error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A cost, revenue or profit path needs a field the plant does not carry
    #[error("Plant '{plant}' is missing required field '{field}'")]
    MissingField { plant: String, field: &'static str },

    #[error("Unrecognized level '{0}' (expected low, medium or high)")]
    InvalidLevel(String),

    /// A result exceeded the range of the decimal type
    #[error("Arithmetic overflow while computing {0}")]
    Overflow(&'static str),
}

/// Result type alias for calculations
pub type CalcResult<T> = Result<T, CalcError>;
