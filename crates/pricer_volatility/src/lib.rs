//! # Pricer Volatility (L2: Volatility Analytics)
//!
//! Historical (realised) volatility from a daily price series.
//!
//! This crate provides:
//! - [`log_returns`]: reversed-lag log returns `ln(P[i] / P[i + 1])`
//! - [`rolling_volatility`]: left-aligned, Bessel-corrected rolling standard
//!   deviation
//! - [`daily_historical_volatility`]: the two composed
//! - [`to_rank`] / [`from_rank`] / [`HvRank`]: linear mapping between a
//!   volatility and its position in a reference range
//! - Dated series wrappers ([`PriceSeries`], [`ReturnSeries`],
//!   [`VolatilitySeries`])
//!
//! Input order is trusted and never changed. Failures convert into
//! [`pricer_core::types::PricingError`].
//!
//! ## Example
//!
//! ```
//! use pricer_volatility::{daily_historical_volatility, from_rank, to_rank};
//!
//! let closes = [150.0, 151.2, 149.8, 152.3, 151.0, 150.4, 153.1, 152.2];
//! let hv = daily_historical_volatility(&closes, 3).unwrap();
//! assert_eq!(hv.len(), closes.len() - 1 - 3 + 1);
//!
//! let rank = to_rank(hv[0], &hv).unwrap();
//! assert!((from_rank(rank, &hv) - hv[0]).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod rank;
pub mod returns;
pub mod rolling;
pub mod series;

pub use error::VolatilityError;
pub use rank::{from_rank, to_rank, HvRank};
pub use returns::log_returns;
pub use rolling::{daily_historical_volatility, rolling_volatility};
pub use series::{PriceSeries, ReturnSeries, VolatilitySeries};
