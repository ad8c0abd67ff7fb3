//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The shared error taxonomy surfaced by every engine
//! - `ErrorKind`: Category tag for callers that only branch on the failure class
//! - `DateError`: Errors from date construction and parsing

use std::fmt;

/// Categorised analytics errors.
///
/// Every engine in the workspace reports failures through one of these
/// three categories. Module-specific errors (`AnalyticalError`,
/// `VolatilityError`) convert into this type via `From`.
///
/// # Variants
/// - `InvalidArgument`: Malformed or out-of-domain scalar input
/// - `InsufficientData`: Series too short for the requested operation
/// - `DegenerateRange`: Rank conversion against a flat reference series
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Malformed or out-of-domain input
    InvalidArgument(String),

    /// Series too short for the requested window or differencing
    InsufficientData(String),

    /// Reference series has no spread (min == max)
    DegenerateRange(String),
}

/// Failure category of a [`PricingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PricingError::InvalidArgument`]
    InvalidArgument,
    /// See [`PricingError::InsufficientData`]
    InsufficientData,
    /// See [`PricingError::DegenerateRange`]
    DegenerateRange,
}

impl PricingError {
    /// Returns the category of this error.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::{ErrorKind, PricingError};
    ///
    /// let err = PricingError::DegenerateRange("flat".to_string());
    /// assert_eq!(err.kind(), ErrorKind::DegenerateRange);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            PricingError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            PricingError::InsufficientData(_) => ErrorKind::InsufficientData,
            PricingError::DegenerateRange(_) => ErrorKind::DegenerateRange,
        }
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            PricingError::InsufficientData(msg) => write!(f, "Insufficient data: {}", msg),
            PricingError::DegenerateRange(msg) => write!(f, "Degenerate range: {}", msg),
        }
    }
}

impl std::error::Error for PricingError {}

/// Date-related errors.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
///
/// # Examples
/// ```
/// use pricer_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    ParseError(String),
}

impl fmt::Display for DateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateError::InvalidDate { year, month, day } => {
                write!(f, "Invalid date: {}-{}-{}", year, month, day)
            }
            DateError::ParseError(msg) => write!(f, "Date parse error: {}", msg),
        }
    }
}

impl std::error::Error for DateError {}

impl From<DateError> for PricingError {
    fn from(err: DateError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}
