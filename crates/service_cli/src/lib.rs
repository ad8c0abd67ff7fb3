//! # option-dash
//!
//! Command-line front end for the option pricing and historical-volatility
//! engines.
//!
//! ## Commands
//!
//! - `option-dash price` - spot curve at one strike, today and at expiry
//! - `option-dash surface` - spot × strike grid, or its change for a spot shift
//! - `option-dash hv --quotes <file>` - rolling historical volatility and its rank
//!
//! ## Architecture
//!
//! As the service layer, this crate owns configuration, input files and
//! output formatting. All numerics live in `pricer_models` and
//! `pricer_volatility`, which never log; logging happens here.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod quotes;

pub use config::{build_config, CliArgs, ConfigError, DashboardConfig, LogLevel};
pub use error::{CliError, Result};
pub use output::OutputFormat;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
