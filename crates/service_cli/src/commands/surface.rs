//! Surface command implementation
//!
//! Prices the full spot × strike grid, or the change in every metric when the
//! spot axis is shifted by `--change`.

use std::io::Write;

use clap::Args;
use pricer_models::analytical::{price, price_change_surface, Metric, PricingResult};
use pricer_models::instruments::OptionType;
use serde::Serialize;
use tracing::info;

use super::{selected_metrics, PricingArgs};
use crate::config::DashboardConfig;
use crate::output::{format_value, write_json, OutputFormat, Table};
use crate::{CliError, Result};

/// Arguments of `option-dash surface`
#[derive(Debug, Clone, Default, Args)]
pub struct SurfaceArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Report `metric(spot + change) - metric(spot)` instead of levels
    #[arg(long, allow_hyphen_values = true)]
    pub change: Option<f64>,

    /// Report a single metric (price, delta, gamma or rho)
    #[arg(long)]
    pub metric: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// One metric over the grid, rows indexed by spot
#[derive(Debug, Clone, Serialize)]
pub struct MetricGrid {
    pub metric: Metric,
    pub values: Vec<Vec<f64>>,
}

/// Result of the surface command
#[derive(Debug, Clone, Serialize)]
pub struct SurfaceReport {
    pub ticker: String,
    pub option_type: OptionType,
    pub maturity_days: f64,
    pub volatility: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    pub spot: Vec<f64>,
    pub strike: Vec<f64>,
    pub grids: Vec<MetricGrid>,
}

/// Builds the report without writing it.
pub fn build_report(config: &DashboardConfig, args: &SurfaceArgs) -> Result<SurfaceReport> {
    if let Some(change) = args.change.filter(|c| !c.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "--change must be a finite number, got {}",
            change
        )));
    }
    let metrics = selected_metrics(args.metric.as_deref())?;
    let spec = config.option_spec(config.strike_index());
    spec.validate()?;

    let result = match args.change {
        Some(change) => price_change_surface(&spec, change)?,
        None => price(&spec)?,
    };

    Ok(SurfaceReport {
        ticker: config.ticker.clone(),
        option_type: spec.option_type,
        maturity_days: spec.maturity_days,
        volatility: config.volatility,
        change: args.change,
        spot: spec.spot.values().to_vec(),
        strike: spec.strike.values().to_vec(),
        grids: metrics
            .into_iter()
            .map(|metric| MetricGrid {
                metric,
                values: rows(&result, metric),
            })
            .collect(),
    })
}

fn rows(result: &PricingResult, metric: Metric) -> Vec<Vec<f64>> {
    result
        .get(metric)
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

/// Run the surface command
pub fn run<W: Write>(mut config: DashboardConfig, args: &SurfaceArgs, out: &mut W) -> Result<()> {
    args.pricing.apply(&mut config)?;
    let report = build_report(&config, args)?;
    info!(
        ticker = %report.ticker,
        spots = report.spot.len(),
        strikes = report.strike.len(),
        change = ?report.change,
        "Priced surface"
    );

    match args.format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Table => render_tables(&report, out),
    }
}

/// One table per metric: strikes down the side, spots across.
fn render_tables<W: Write>(report: &SurfaceReport, out: &mut W) -> Result<()> {
    for grid in &report.grids {
        match report.change {
            Some(change) => writeln!(out, "{} change for spot {:+}", grid.metric, change)?,
            None => writeln!(out, "{}", grid.metric)?,
        }

        let headers = std::iter::once("strike".to_string())
            .chain(report.spot.iter().map(|s| format_value(*s, 2)));
        let mut table = Table::new(headers);
        for (j, strike) in report.strike.iter().enumerate() {
            let mut row = vec![format_value(*strike, 2)];
            row.extend(grid.values.iter().map(|spot_row| format_value(spot_row[j], 4)));
            table.push_row(row);
        }
        table.render(out)?;
    }
    Ok(())
}
