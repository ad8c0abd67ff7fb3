//! # pricer_core: Foundation Layer for the Option Analytics Engines
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer shared by the pricing and volatility
//! engines, providing:
//! - The error taxonomy: `PricingError`, `ErrorKind`, `DateError` (`types::error`)
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Sample statistics and axis helpers (`math`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic and parsing
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::{linspace, sample_std_dev};
//! use pricer_core::types::{Date, DayCountConvention};
//!
//! let spots = linspace(112.5, 187.5, 20);
//! assert_eq!(spots.len(), 20);
//!
//! let sd = sample_std_dev(&[0.01_f64, -0.02, 0.015]);
//! assert!(sd > 0.0);
//!
//! let quote_date = Date::parse_quote("07-Jul-17").unwrap();
//! assert_eq!(quote_date.year(), 2017);
//! assert_eq!(DayCountConvention::ActualActual365.year_fraction_days(73.0), 0.2);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for Date and DayCountConvention

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
