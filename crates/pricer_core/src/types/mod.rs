//! Core time and error types.
//!
//! This module provides:
//! - `time`: `Date` and `DayCountConvention` for maturities and quote dates
//! - `error`: The shared `PricingError` taxonomy and `DateError`
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`], [`DayCountConvention`] from `time`
//! - [`PricingError`], [`ErrorKind`], [`DateError`] from `error`

pub mod error;
pub mod time;

// Re-export commonly used types at module level
pub use error::{DateError, ErrorKind, PricingError};
pub use time::{Date, DayCountConvention};
