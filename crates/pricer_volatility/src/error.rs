//! Error types for volatility analytics.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Volatility analytics errors.
///
/// # Examples
/// ```
/// use pricer_core::types::{ErrorKind, PricingError};
/// use pricer_volatility::VolatilityError;
///
/// let err = VolatilityError::WindowTooLong { window: 20, len: 5 };
/// let pricing: PricingError = err.into();
/// assert_eq!(pricing.kind(), ErrorKind::InsufficientData);
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum VolatilityError {
    /// Fewer than two prices, so no return can be formed.
    #[error("At least 2 prices are required to compute returns, got {len}")]
    TooFewPrices {
        /// Number of prices supplied
        len: usize,
    },

    /// Rolling window longer than the return series.
    #[error("Window of {window} does not fit in {len} returns")]
    WindowTooLong {
        /// Requested window
        window: usize,
        /// Number of returns available
        len: usize,
    },

    /// Window too short for a Bessel-corrected standard deviation.
    #[error("Invalid window: {window} (must be at least 2)")]
    InvalidWindow {
        /// Requested window
        window: usize,
    },

    /// Rank reference series without values.
    #[error("Reference series is empty")]
    EmptyReference,

    /// Rank reference series whose minimum equals its maximum.
    #[error("Reference series has zero range: min = max = {value}")]
    DegenerateRange {
        /// The common min/max value
        value: f64,
    },

    /// Dates and values of a series differ in length.
    #[error("Series has {dates} dates but {values} values")]
    LengthMismatch {
        /// Number of dates
        dates: usize,
        /// Number of values
        values: usize,
    },
}

impl From<VolatilityError> for PricingError {
    fn from(err: VolatilityError) -> Self {
        let message = err.to_string();
        match err {
            VolatilityError::TooFewPrices { .. }
            | VolatilityError::WindowTooLong { .. }
            | VolatilityError::EmptyReference => PricingError::InsufficientData(message),
            VolatilityError::DegenerateRange { .. } => PricingError::DegenerateRange(message),
            VolatilityError::InvalidWindow { .. } | VolatilityError::LengthMismatch { .. } => {
                PricingError::InvalidArgument(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_core::types::ErrorKind;

    #[test]
    fn test_display() {
        assert_eq!(
            VolatilityError::TooFewPrices { len: 1 }.to_string(),
            "At least 2 prices are required to compute returns, got 1"
        );
        assert_eq!(
            VolatilityError::DegenerateRange { value: 0.2 }.to_string(),
            "Reference series has zero range: min = max = 0.2"
        );
    }

    #[test]
    fn test_kind_mapping() {
        let cases = [
            (VolatilityError::TooFewPrices { len: 0 }, ErrorKind::InsufficientData),
            (
                VolatilityError::WindowTooLong { window: 3, len: 2 },
                ErrorKind::InsufficientData,
            ),
            (VolatilityError::EmptyReference, ErrorKind::InsufficientData),
            (
                VolatilityError::DegenerateRange { value: 1.0 },
                ErrorKind::DegenerateRange,
            ),
            (VolatilityError::InvalidWindow { window: 1 }, ErrorKind::InvalidArgument),
            (
                VolatilityError::LengthMismatch { dates: 2, values: 3 },
                ErrorKind::InvalidArgument,
            ),
        ];
        for (err, kind) in cases {
            let pricing: PricingError = err.into();
            assert_eq!(pricing.kind(), kind);
        }
    }
}
