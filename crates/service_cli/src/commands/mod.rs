//! CLI command implementations
//!
//! Each submodule implements one `option-dash` subcommand. Commands take the
//! resolved [`DashboardConfig`] and write their report to `out`.

pub mod hv;
pub mod price;
pub mod surface;

use clap::Args;
use pricer_models::analytical::Metric;
use pricer_models::instruments::OptionType;

use crate::config::DashboardConfig;
use crate::Result;

/// Per-invocation overrides of the configured pricing inputs
#[derive(Debug, Clone, Default, Args)]
pub struct PricingArgs {
    /// Option type (call or put)
    #[arg(short = 't', long)]
    pub option_type: Option<OptionType>,

    /// Strike price for single-strike curves
    #[arg(short = 'k', long)]
    pub strike: Option<f64>,

    /// Time to maturity in days
    #[arg(short, long)]
    pub maturity: Option<f64>,

    /// Annualised volatility
    #[arg(short, long)]
    pub volatility: Option<f64>,
}

impl PricingArgs {
    /// Applies the overrides to `config` and re-validates it.
    pub fn apply(&self, config: &mut DashboardConfig) -> Result<()> {
        if let Some(option_type) = self.option_type {
            config.option_type = option_type;
        }
        if let Some(strike) = self.strike {
            config.strike = Some(strike);
        }
        if let Some(maturity) = self.maturity {
            config.maturity_days = maturity;
        }
        if let Some(volatility) = self.volatility {
            config.volatility = volatility;
        }
        config.validate()?;
        Ok(())
    }
}

/// Metrics selected by an optional `--metric` name; every metric when absent.
pub fn selected_metrics(name: Option<&str>) -> Result<Vec<Metric>> {
    match name {
        Some(name) => Ok(vec![name.parse::<Metric>()?]),
        None => Ok(Metric::ALL.to_vec()),
    }
}
