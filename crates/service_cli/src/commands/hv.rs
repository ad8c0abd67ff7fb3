//! Historical-volatility command implementation
//!
//! Loads a quote CSV, computes reversed-lag log returns and their rolling
//! standard deviation, and ranks the latest value within the series.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use pricer_core::types::Date;
use pricer_volatility::{HvRank, PriceSeries};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::DashboardConfig;
use crate::output::{format_value, write_json, OutputFormat, Table};
use crate::quotes::load_quotes;
use crate::{CliError, Result};

/// Arguments of `option-dash hv`
#[derive(Debug, Clone, Args)]
pub struct HvArgs {
    /// Quote CSV with `Date` and `Close` columns
    #[arg(short, long)]
    pub quotes: PathBuf,

    /// Rolling window in returns (defaults to the configured window)
    #[arg(short, long)]
    pub window: Option<usize>,

    /// Also report the volatility sitting at this rank (0-100)
    #[arg(short, long)]
    pub rank: Option<f64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// One dated value of a series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub date: String,
    pub value: f64,
}

/// Result of the hv command
#[derive(Debug, Clone, Serialize)]
pub struct HvReport {
    pub ticker: String,
    pub window: usize,
    pub latest_date: String,
    pub current_hv: f64,
    pub low: f64,
    pub high: f64,
    pub current_rank: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_rank: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_volatility: Option<f64>,
    pub returns: Vec<Point>,
    pub volatility: Vec<Point>,
}

fn points(dates: &[Date], values: &[f64]) -> Vec<Point> {
    dates
        .iter()
        .zip(values)
        .map(|(date, value)| Point {
            date: date.to_string(),
            value: *value,
        })
        .collect()
}

/// Computes the report for an already loaded quote series.
pub fn build_report(
    config: &DashboardConfig,
    series: &PriceSeries,
    window: usize,
    target_rank: Option<f64>,
) -> Result<HvReport> {
    if let Some(rank) = target_rank.filter(|r| !r.is_finite()) {
        return Err(CliError::InvalidArgument(format!(
            "--rank must be a finite number, got {}",
            rank
        )));
    }
    let returns = series.log_returns()?;
    let volatility = returns.rolling_volatility(window)?;
    debug!(
        prices = series.len(),
        returns = returns.len(),
        volatilities = volatility.len(),
        window,
        "Computed historical volatility"
    );

    let (latest_date, current_hv) = volatility
        .latest()
        .ok_or_else(|| CliError::quotes("no volatility values"))?;
    let ranking: HvRank = volatility.hv_rank()?;

    Ok(HvReport {
        ticker: config.ticker.clone(),
        window,
        latest_date: latest_date.to_string(),
        current_hv,
        low: ranking.low(),
        high: ranking.high(),
        current_rank: ranking.rank(current_hv),
        target_rank,
        target_volatility: target_rank.map(|r| ranking.volatility(r)),
        returns: points(returns.dates(), returns.values()),
        volatility: points(volatility.dates(), volatility.values()),
    })
}

/// Run the hv command
pub fn run<W: Write>(config: DashboardConfig, args: &HvArgs, out: &mut W) -> Result<()> {
    let window = args.window.unwrap_or(config.hv_window);
    let series = load_quotes(&args.quotes)?;
    let report = build_report(&config, &series, window, args.rank)?;
    info!(
        ticker = %report.ticker,
        window,
        current_hv = report.current_hv,
        current_rank = report.current_rank,
        "Ranked historical volatility"
    );

    match args.format {
        OutputFormat::Json => write_json(out, &report),
        OutputFormat::Table => render_table(&report, out),
    }
}

fn render_table<W: Write>(report: &HvReport, out: &mut W) -> Result<()> {
    let mut summary = Table::new(["ticker", "date", "window", "hv", "low", "high", "rank"]);
    summary.push_row(vec![
        report.ticker.clone(),
        report.latest_date.clone(),
        report.window.to_string(),
        format_value(report.current_hv, 6),
        format_value(report.low, 6),
        format_value(report.high, 6),
        format_value(report.current_rank, 2),
    ]);
    summary.render(out)?;

    if let (Some(rank), Some(vol)) = (report.target_rank, report.target_volatility) {
        writeln!(out, "volatility at rank {}: {}", rank, format_value(vol, 6))?;
    }

    let mut series = Table::new(["date", "return", "hv"]);
    for (i, ret) in report.returns.iter().enumerate() {
        let hv = report
            .volatility
            .get(i)
            .map(|p| format_value(p.value, 6))
            .unwrap_or_default();
        series.push_row(vec![ret.date.clone(), format_value(ret.value, 6), hv]);
    }
    series.render(out)
}
