//! End-to-end runs of the commands against files on disk.

use std::fs;
use std::path::PathBuf;

use service_cli::commands::hv::{self, HvArgs};
use service_cli::commands::price::{self, PriceArgs};
use service_cli::commands::surface::{self, SurfaceArgs};
use service_cli::config::build_config_with_env;
use service_cli::{CliArgs, OutputFormat};

const QUOTES: &str = "Date,Open,High,Low,Close,Volume
14-Jul-17,147.97,149.33,147.33,149.04,20132061
13-Jul-17,145.50,148.49,145.44,147.77,25199373
12-Jul-17,145.87,146.18,144.82,145.74,24884478
11-Jul-17,144.73,145.85,144.38,145.53,19781836
10-Jul-17,144.11,145.95,143.37,145.06,21090636
7-Jul-17,142.90,144.75,142.90,144.18,19201712
6-Jul-17,143.02,143.50,142.41,142.73,24128782
5-Jul-17,143.69,144.79,142.72,144.09,21569557
3-Jul-17,144.88,145.30,143.10,143.50,14277848
30-Jun-17,144.45,144.96,143.78,144.02,23024107
29-Jun-17,144.71,145.13,142.28,143.68,31499368
28-Jun-17,144.49,146.11,143.16,145.83,22082432
";

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("option-dash-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn no_env(_: &str) -> Option<String> {
    None
}

#[test]
fn test_hv_json_from_quote_file() {
    let quotes = temp_file("quotes.csv", QUOTES);
    let config = build_config_with_env(&CliArgs::default(), no_env).unwrap();
    let args = HvArgs {
        quotes,
        window: Some(5),
        rank: Some(50.0),
        format: OutputFormat::Json,
    };

    let mut out = Vec::new();
    hv::run(config, &args, &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(report["returns"].as_array().unwrap().len(), 11);
    assert_eq!(report["volatility"].as_array().unwrap().len(), 7);
    assert_eq!(report["latest_date"], "2017-07-14");

    let low = report["low"].as_f64().unwrap();
    let high = report["high"].as_f64().unwrap();
    let target = report["target_volatility"].as_f64().unwrap();
    assert!((target - (low + high) / 2.0).abs() < 1e-12);

    let rank = report["current_rank"].as_f64().unwrap();
    assert!((0.0..=100.0).contains(&rank));
}

#[test]
fn test_hv_missing_file() {
    let config = build_config_with_env(&CliArgs::default(), no_env).unwrap();
    let args = HvArgs {
        quotes: PathBuf::from("/nonexistent/quotes.csv"),
        window: None,
        rank: None,
        format: OutputFormat::Table,
    };
    let err = hv::run(config, &args, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().contains("Failed to open"));
}

#[test]
fn test_hv_default_window_too_long_for_short_file() {
    let quotes = temp_file("short.csv", QUOTES);
    let config = build_config_with_env(&CliArgs::default(), no_env).unwrap();
    let args = HvArgs {
        quotes,
        window: None,
        rank: None,
        format: OutputFormat::Table,
    };
    let err = hv::run(config, &args, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("Insufficient data"));
}

#[test]
fn test_config_file_drives_price_command() {
    let path = temp_file(
        "dash.toml",
        r#"
ticker = "MSFT"
reference_price = 100.0
spot_resolution = 5
option_type = "call"
maturity_days = 30.0
volatility = 0.2
"#,
    );
    let cli = CliArgs {
        config_file: Some(path),
        log_level: None,
    };
    let config = build_config_with_env(&cli, no_env).unwrap();
    let args = PriceArgs {
        format: OutputFormat::Json,
        ..Default::default()
    };

    let mut out = Vec::new();
    price::run(config, &args, &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(report["ticker"], "MSFT");
    assert_eq!(report["option_type"], "Call");
    assert_eq!(report["strike"], 100.0);
    let spot = report["spot"].as_array().unwrap();
    assert_eq!(spot.len(), 5);

    let today = report["curves"][0]["today"].as_array().unwrap();
    let expiry = report["curves"][0]["expiry"].as_array().unwrap();
    for (t, e) in today.iter().zip(expiry) {
        assert!(t.as_f64().unwrap() >= e.as_f64().unwrap() - 1e-9);
    }
}

#[test]
fn test_env_overrides_file_for_surface() {
    let path = temp_file("surface.toml", "ticker = \"FILE\"\nspot_resolution = 4\n");
    let cli = CliArgs {
        config_file: Some(path),
        log_level: None,
    };
    let config = build_config_with_env(&cli, |key| match key {
        "OPTION_DASH_TICKER" => Some("ENV".to_string()),
        _ => None,
    })
    .unwrap();
    assert_eq!(config.ticker, "ENV");

    let args = SurfaceArgs {
        change: Some(-1.0),
        metric: Some("delta".into()),
        format: OutputFormat::Json,
        ..Default::default()
    };
    let mut out = Vec::new();
    surface::run(config, &args, &mut out).unwrap();
    let report: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(report["change"], -1.0);
    assert_eq!(report["grids"][0]["metric"], "delta");
    let rows = report["grids"][0]["values"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].as_array().unwrap().len(), 300);
}

#[test]
fn test_unsupported_metric_is_rejected() {
    let config = build_config_with_env(&CliArgs::default(), no_env).unwrap();
    let args = PriceArgs {
        metric: Some("vega".into()),
        ..Default::default()
    };
    let err = price::run(config, &args, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("Invalid argument"));
}
