//! # Pricer Models (L2: Pricing Engine)
//!
//! Vectorised Black-Scholes-Merton pricing of European options.
//!
//! This crate provides:
//! - Option inputs ([`instruments::OptionSpec`], [`instruments::OptionType`],
//!   [`instruments::GridAxis`])
//! - The grid pricer ([`analytical::price`]) returning price, delta, gamma
//!   and rho for every spot × strike pair
//! - The spot-change surface ([`analytical::price_change_surface`])
//!
//! ## Design Principles
//!
//! - **Outer-product grids**: spot and strike axes broadcast against each
//!   other; scalar inputs collapse their axis in the output
//! - **Defined limits**: zero maturity and zero volatility price to the
//!   deterministic forward limit instead of NaN
//! - **No silent defaults**: unknown option types and metrics are errors
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{price, Metric};
//! use pricer_models::instruments::{OptionSpec, OptionType};
//!
//! let spec = OptionSpec::builder(OptionType::Put)
//!     .spot(vec![140.0, 150.0, 160.0])
//!     .strike(vec![145.0, 150.0])
//!     .maturity_days(5.0)
//!     .rate(0.03)
//!     .volatility(0.05)
//!     .build()
//!     .unwrap();
//!
//! let result = price(&spec).unwrap();
//! assert_eq!(result.shape(), &[3, 2]);
//! assert!(result.get(Metric::Delta).iter().all(|&d| d <= 0.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
