//! Farm report - command-line crop economics calculator
//!
//! Reads a farm description and prints yield, cost, revenue and profit per
//! crop batch, optionally adjusted for sun and wind levels.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use farm_economics_cli::{run, Cli, Config};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_economics_cli=info,shared=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_cli(&cli);

    tracing::debug!(?config, "Configuration loaded");

    let output = run(&config)?;
    println!("{}", output);

    Ok(())
}
