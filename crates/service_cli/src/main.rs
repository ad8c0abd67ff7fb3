//! option-dash - option pricing and historical volatility from the command line
//!
//! Configuration is resolved once at startup (CLI > `OPTION_DASH_*` >
//! TOML file > defaults) and handed to the selected command. Reports go to
//! stdout; logs go to stderr.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use service_cli::commands::{hv, price, surface};
use service_cli::{build_config, CliArgs};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Option pricing dashboard CLI
#[derive(Parser)]
#[command(name = "option-dash")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "OPTION_DASH_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price the option over the spot axis, today and at expiry
    Price(price::PriceArgs),

    /// Price the spot × strike surface, or its change for a spot shift
    Surface(surface::SurfaceArgs),

    /// Historical volatility and HV rank from a quote file
    Hv(hv::HvArgs),
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        Self {
            config_file: cli.config.clone(),
            log_level: cli.log_level.clone(),
        }
    }
}

/// Initialise tracing; `RUST_LOG` takes precedence over the configured level.
fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = service_cli::VERSION,
        ticker = %config.ticker,
        reference_price = config.reference_price,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &cli.command {
        Commands::Price(args) => price::run(config, args, &mut out)?,
        Commands::Surface(args) => surface::run(config, args, &mut out)?,
        Commands::Hv(args) => hv::run(config, args, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
