//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Input validation failures of the grid pricer

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant describes an out-of-domain input and maps onto
/// [`PricingError::InvalidArgument`]. Zero maturity and zero volatility are
/// valid inputs with defined limits, so neither appears here.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Spot price not strictly positive.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Strike price not strictly positive.
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Negative volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Negative time to maturity.
    #[error("Invalid time to maturity: T = {days} days")]
    InvalidMaturity {
        /// The invalid maturity in days
        days: f64,
    },

    /// Option type string is neither a call nor a put.
    #[error("Unknown option type: '{value}' (expected Call or Put)")]
    UnknownOptionType {
        /// The unrecognised input
        value: String,
    },

    /// Volatility vector not aligned with the spot axis.
    #[error("Volatility has {got} values but the spot axis has {expected}")]
    VolatilityShapeMismatch {
        /// Length of the spot axis
        expected: usize,
        /// Length of the volatility vector
        got: usize,
    },

    /// An axis given as a sequence was empty.
    #[error("The {axis} axis is empty")]
    EmptyAxis {
        /// Name of the empty axis
        axis: &'static str,
    },

    /// Gamma convention name not recognised.
    #[error("Unknown gamma convention: '{value}' (expected black_scholes or simplified)")]
    UnknownGammaConvention {
        /// The unrecognised input
        value: String,
    },

    /// Metric name not produced by the engine.
    #[error("Unsupported metric: '{name}' (supported: price, delta, gamma, rho)")]
    UnsupportedMetric {
        /// The requested metric name
        name: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ErrorKind;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_unknown_option_type_display() {
        let err = AnalyticalError::UnknownOptionType {
            value: "straddle".to_string(),
        };
        assert_eq!(
            format!("{}", err),
            "Unknown option type: 'straddle' (expected Call or Put)"
        );
    }

    #[test]
    fn test_shape_mismatch_display() {
        let err = AnalyticalError::VolatilityShapeMismatch {
            expected: 20,
            got: 3,
        };
        assert_eq!(
            format!("{}", err),
            "Volatility has 3 values but the spot axis has 20"
        );
    }

    #[test]
    fn test_every_variant_is_invalid_argument() {
        let errors = [
            AnalyticalError::InvalidSpot { spot: 0.0 },
            AnalyticalError::InvalidStrike { strike: -1.0 },
            AnalyticalError::InvalidVolatility { volatility: -0.1 },
            AnalyticalError::InvalidMaturity { days: -1.0 },
            AnalyticalError::UnknownOptionType {
                value: "x".to_string(),
            },
            AnalyticalError::VolatilityShapeMismatch {
                expected: 2,
                got: 1,
            },
            AnalyticalError::EmptyAxis { axis: "strike" },
            AnalyticalError::UnknownGammaConvention {
                value: "cubic".to_string(),
            },
            AnalyticalError::UnsupportedMetric {
                name: "vega".to_string(),
            },
        ];
        for err in errors {
            let message = err.to_string();
            let pricing_err: PricingError = err.into();
            assert_eq!(pricing_err.kind(), ErrorKind::InvalidArgument);
            assert!(pricing_err.to_string().contains(&message));
        }
    }
}
