//! Analytical pricing of European options over spot × strike grids.
//!
//! This module provides:
//! - [`black_scholes`]: the vectorised Black-Scholes-Merton pricer
//! - [`PricingResult`] / [`Metric`]: price, delta, gamma and rho grids
//! - [`distributions`]: standard normal CDF and PDF
//! - [`AnalyticalError`]: input validation failures

pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod result;

pub use black_scholes::{price, price_at_expiry, price_change_surface, GammaConvention};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use result::{Metric, PricingResult};
