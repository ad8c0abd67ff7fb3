//! Dashboard configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use pricer_core::math::{arange, linspace};
use pricer_core::types::DayCountConvention;
use pricer_models::analytical::GammaConvention;
use pricer_models::instruments::{GridAxis, OptionSpec, OptionType};
use serde::Deserialize;
use thiserror::Error;

/// Prefix of every environment variable read by [`DashboardConfig::apply_env`].
pub const ENV_PREFIX: &str = "OPTION_DASH_";

/// Largest number of points accepted on the spot or strike axis.
pub const MAX_AXIS_POINTS: usize = 10_000;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

impl ConfigError {
    fn invalid(field: &'static str, value: impl ToString) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
        }
    }
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Everything the dashboard needs to build pricing and volatility requests.
///
/// Replaces process-wide defaults: one value is built at startup and passed
/// to each command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Ticker shown in output headers
    pub ticker: String,
    /// Reference price of the underlying; anchors the spot and strike axes
    pub reference_price: f64,
    /// Number of points on the spot axis
    pub spot_resolution: usize,
    /// Half-width of the spot axis as a fraction of the reference price
    pub spot_span: f64,
    /// Annualised risk-free rate
    pub rate: f64,
    /// Annualised dividend yield
    pub dividend_yield: f64,
    /// Default option type
    pub option_type: OptionType,
    /// Lowest strike as a fraction of the reference price
    pub strike_min_ratio: f64,
    /// Upper strike bound (exclusive) as a fraction of the reference price
    pub strike_max_ratio: f64,
    /// Spacing of the strike axis
    pub strike_step: f64,
    /// Strike for single-strike curves; the middle of the strike range if unset
    pub strike: Option<f64>,
    /// Default time to maturity in days
    pub maturity_days: f64,
    /// Largest accepted maturity in days
    pub maturity_max_days: f64,
    /// Default volatility
    pub volatility: f64,
    /// Smallest accepted volatility
    pub volatility_min: f64,
    /// Largest accepted volatility
    pub volatility_max: f64,
    /// Rolling window for historical volatility, in returns
    pub hv_window: usize,
    /// Maturity day count basis
    pub day_count: DayCountConvention,
    /// Gamma formula
    pub gamma_convention: GammaConvention,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            ticker: "AAPL".to_string(),
            reference_price: 150.0,
            spot_resolution: 20,
            spot_span: 0.25,
            rate: 0.03,
            dividend_yield: 0.0,
            option_type: OptionType::Put,
            strike_min_ratio: 0.5,
            strike_max_ratio: 1.5,
            strike_step: 0.5,
            strike: None,
            maturity_days: 5.0,
            maturity_max_days: 365.0,
            volatility: 0.05,
            volatility_min: 0.01,
            volatility_max: 1.0,
            hv_window: 20,
            day_count: DayCountConvention::default(),
            gamma_convention: GammaConvention::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl DashboardConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `OPTION_DASH_*` variables found by `lookup`.
    ///
    /// `lookup` receives the full variable name; `std::env::var(..).ok()` in
    /// production, a map in tests.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(ticker) = var("TICKER") {
            self.ticker = ticker;
        }
        if let Some(price) = var("PRICE") {
            self.reference_price = parse_env("PRICE", &price)?;
        }
        if let Some(rate) = var("RATE") {
            self.rate = parse_env("RATE", &rate)?;
        }
        if let Some(q) = var("DIVIDEND_YIELD") {
            self.dividend_yield = parse_env("DIVIDEND_YIELD", &q)?;
        }
        if let Some(option_type) = var("OPTION_TYPE") {
            self.option_type = option_type
                .parse()
                .map_err(|e| ConfigError::EnvError(format!("{}OPTION_TYPE: {}", ENV_PREFIX, e)))?;
        }
        if let Some(days) = var("MATURITY_DAYS") {
            self.maturity_days = parse_env("MATURITY_DAYS", &days)?;
        }
        if let Some(vol) = var("VOLATILITY") {
            self.volatility = parse_env("VOLATILITY", &vol)?;
        }
        if let Some(window) = var("HV_WINDOW") {
            self.hv_window = parse_env("HV_WINDOW", &window)?;
        }
        if let Some(level) = var("LOG_LEVEL") {
            self.log_level = LogLevel::from_str(&level)?;
        }
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.reference_price > 0.0) {
            return Err(ConfigError::invalid("reference_price", self.reference_price));
        }
        if !(2..=MAX_AXIS_POINTS).contains(&self.spot_resolution) {
            return Err(ConfigError::invalid("spot_resolution", self.spot_resolution));
        }
        if !(0.0..1.0).contains(&self.spot_span) {
            return Err(ConfigError::invalid("spot_span", self.spot_span));
        }
        if !(self.strike_min_ratio > 0.0 && self.strike_min_ratio < self.strike_max_ratio) {
            return Err(ConfigError::invalid(
                "strike_min_ratio",
                format!("{} (max {})", self.strike_min_ratio, self.strike_max_ratio),
            ));
        }
        if !(self.strike_step > 0.0) {
            return Err(ConfigError::invalid("strike_step", self.strike_step));
        }
        let strike_points = self.reference_price
            * (self.strike_max_ratio - self.strike_min_ratio)
            / self.strike_step;
        if !(strike_points <= MAX_AXIS_POINTS as f64) {
            return Err(ConfigError::invalid(
                "strike_step",
                format!(
                    "{} ({} strikes, max {})",
                    self.strike_step,
                    strike_points.ceil(),
                    MAX_AXIS_POINTS
                ),
            ));
        }
        if let Some(strike) = self.strike {
            if !(strike > 0.0) {
                return Err(ConfigError::invalid("strike", strike));
            }
        }
        if !(0.0..=self.maturity_max_days).contains(&self.maturity_days) {
            return Err(ConfigError::invalid("maturity_days", self.maturity_days));
        }
        if !(self.volatility_min > 0.0 && self.volatility_min <= self.volatility_max) {
            return Err(ConfigError::invalid("volatility_min", self.volatility_min));
        }
        if !(self.volatility_min..=self.volatility_max).contains(&self.volatility) {
            return Err(ConfigError::invalid("volatility", self.volatility));
        }
        if self.hv_window < 2 {
            return Err(ConfigError::invalid("hv_window", self.hv_window));
        }
        if !self.rate.is_finite() {
            return Err(ConfigError::invalid("rate", self.rate));
        }
        if !self.dividend_yield.is_finite() {
            return Err(ConfigError::invalid("dividend_yield", self.dividend_yield));
        }
        Ok(())
    }

    /// Spot axis: `spot_resolution` points over reference ± `spot_span`.
    pub fn spot_index(&self) -> Vec<f64> {
        linspace(
            self.reference_price * (1.0 - self.spot_span),
            self.reference_price * (1.0 + self.spot_span),
            self.spot_resolution,
        )
    }

    /// Strike axis from `strike_min_ratio` up to (excluding) `strike_max_ratio`.
    pub fn strike_index(&self) -> Vec<f64> {
        arange(
            self.reference_price * self.strike_min_ratio,
            self.reference_price * self.strike_max_ratio,
            self.strike_step,
        )
    }

    /// Configured strike, or the middle of the strike range.
    pub fn default_strike(&self) -> f64 {
        self.strike.unwrap_or(
            self.reference_price * (self.strike_min_ratio + self.strike_max_ratio) / 2.0,
        )
    }

    /// Pricing request over the spot axis for the given strike axis.
    pub fn option_spec(&self, strike: impl Into<GridAxis>) -> OptionSpec {
        OptionSpec {
            option_type: self.option_type,
            spot: self.spot_index().into(),
            strike: strike.into(),
            maturity_days: self.maturity_days,
            rate: self.rate,
            dividend_yield: self.dividend_yield,
            volatility: self.volatility.into(),
            day_count: self.day_count,
            gamma_convention: self.gamma_convention,
        }
    }
}

fn parse_env<T: FromStr>(name: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvError(format!("{}{} has invalid value '{}'", ENV_PREFIX, name, value))
    })
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<DashboardConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<DashboardConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => DashboardConfig::from_file(path)?,
        None => DashboardConfig::default(),
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;
    config.validate()?;

    Ok(config)
}
