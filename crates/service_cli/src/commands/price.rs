//! Price command implementation
//!
//! Prices the configured option over the spot axis at a single strike and
//! reports each metric twice: at the configured maturity and at expiry.

use std::io::Write;

use clap::Args;
use pricer_models::analytical::{price, price_at_expiry, Metric, PricingResult};
use pricer_models::instruments::OptionType;
use serde::Serialize;
use tracing::{debug, info};

use super::{selected_metrics, PricingArgs};
use crate::config::DashboardConfig;
use crate::output::{format_value, write_json, OutputFormat, Table};
use crate::Result;

/// Arguments of `option-dash price`
#[derive(Debug, Clone, Default, Args)]
pub struct PriceArgs {
    #[command(flatten)]
    pub pricing: PricingArgs,

    /// Report a single metric (price, delta, gamma or rho)
    #[arg(long)]
    pub metric: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Today and expiry values of one metric along the spot axis
#[derive(Debug, Clone, Serialize)]
pub struct MetricCurve {
    pub metric: Metric,
    pub today: Vec<f64>,
    pub expiry: Vec<f64>,
}

/// Result of the price command
#[derive(Debug, Clone, Serialize)]
pub struct PriceReport {
    pub ticker: String,
    pub option_type: OptionType,
    pub strike: f64,
    pub maturity_days: f64,
    pub volatility: f64,
    pub rate: f64,
    pub spot: Vec<f64>,
    pub curves: Vec<MetricCurve>,
}

/// Builds the report without writing it.
pub fn build_report(config: &DashboardConfig, args: &PriceArgs) -> Result<PriceReport> {
    let metrics = selected_metrics(args.metric.as_deref())?;
    let strike = config.default_strike();
    let spec = config.option_spec(strike);
    spec.validate()?;

    debug!(
        option_type = %spec.option_type,
        strike,
        maturity_days = spec.maturity_days,
        volatility = config.volatility,
        "Pricing spot curve"
    );
    let today = price(&spec)?;
    let expiry = price_at_expiry(&spec)?;

    Ok(PriceReport {
        ticker: config.ticker.clone(),
        option_type: spec.option_type,
        strike,
        maturity_days: spec.maturity_days,
        volatility: config.volatility,
        rate: spec.rate,
        spot: spec.spot.values().to_vec(),
        curves: metrics
            .into_iter()
            .map(|metric| MetricCurve {
                metric,
                today: curve(&today, metric),
                expiry: curve(&expiry, metric),
            })
            .collect(),
    })
}

fn curve(result: &PricingResult, metric: Metric) -> Vec<f64> {
    result.get(metric).iter().copied().collect()
}

/// Run the price command
pub fn run<W: Write>(mut config: DashboardConfig, args: &PriceArgs, out: &mut W) -> Result<()> {
    args.pricing.apply(&mut config)?;
    let report = build_report(&config, args)?;
    info!(
        ticker = %report.ticker,
        points = report.spot.len(),
        metrics = report.curves.len(),
        "Priced spot curve"
    );

    match args.format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Table => render_table(&report, out),
    }
}

fn render_table<W: Write>(report: &PriceReport, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{} {} K={} T={}d vol={} r={}",
        report.ticker,
        report.option_type,
        format_value(report.strike, 2),
        report.maturity_days,
        report.volatility,
        report.rate
    )?;

    let mut headers = vec!["spot".to_string()];
    for c in &report.curves {
        headers.push(c.metric.to_string());
        headers.push(format!("{}@expiry", c.metric));
    }
    let mut table = Table::new(headers);
    for (i, spot) in report.spot.iter().enumerate() {
        let mut row = vec![format_value(*spot, 2)];
        for c in &report.curves {
            row.push(format_value(c.today[i], 4));
            row.push(format_value(c.expiry[i], 4));
        }
        table.push_row(row);
    }
    table.render(out)
}
