use super::config::ConfigError;
use crate::core::environment::EnvironmentError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Unknown electrode material '{material}': not present in the reduction potential table")]
    UnknownMaterial { material: String },

    #[error("Invalid {quantity}: {value} (must be a positive, finite number)")]
    InvalidMagnitude { quantity: &'static str, value: f64 },

    #[error("Invalid simulation parameters: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

impl From<EnvironmentError> for EngineError {
    fn from(err: EnvironmentError) -> Self {
        match err {
            EnvironmentError::InvalidPressure(value) => EngineError::InvalidMagnitude {
                quantity: "pressure",
                value,
            },
            EnvironmentError::InvalidTemperature(value) => EngineError::InvalidMagnitude {
                quantity: "temperature",
                value,
            },
        }
    }
}

/// Fails with [`EngineError::InvalidMagnitude`] unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(quantity: &'static str, value: f64) -> Result<f64, EngineError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EngineError::InvalidMagnitude { quantity, value })
    }
}
