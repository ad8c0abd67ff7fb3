//! Error types for the option-dash CLI.

use pricer_core::types::PricingError;
use pricer_models::analytical::AnalyticalError;
use pricer_volatility::VolatilityError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Engine rejected the request
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Quote file could not be interpreted
    #[error("Quote file error: {0}")]
    Quotes(String),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// CSV reader error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a quote file error
    pub fn quotes(msg: impl Into<String>) -> Self {
        Self::Quotes(msg.into())
    }
}

impl From<AnalyticalError> for CliError {
    fn from(err: AnalyticalError) -> Self {
        Self::Pricing(err.into())
    }
}

impl From<VolatilityError> for CliError {
    fn from(err: VolatilityError) -> Self {
        Self::Pricing(err.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
