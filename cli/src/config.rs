//! Configuration management for the farm report CLI
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration file (config/farm-report.toml, or the --config path)
//! 3. Environment variable overrides with FARM__ prefix
//! 4. Command-line arguments

use std::path::{Path, PathBuf};

use clap::Parser;
use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::{CalculatorOptions, EnvironmentFactors, Level, MissingFactorPolicy};

use crate::output::OutputFormat;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "config/farm-report";

/// Command-line arguments
#[derive(Parser, Debug, Default)]
#[command(name = "farm-report")]
#[command(about = "Compute yield, cost, revenue and profit for a farm")]
pub struct Cli {
    /// Farm JSON file to evaluate
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Configuration file (defaults to config/farm-report.toml if present)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sun level: low, medium or high
    #[arg(long)]
    pub sun: Option<Level>,

    /// Wind level: low, medium or high
    #[arg(long)]
    pub wind: Option<Level>,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Treat a missing factor table or level as no adjustment instead of zero yield
    #[arg(long)]
    pub neutral_missing_factors: bool,
}

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub input: InputConfig,

    /// Sun and wind levels applied to every batch
    #[serde(default)]
    pub conditions: ConditionsConfig,

    #[serde(default)]
    pub calculation: CalculatorOptions,

    pub output: OutputConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// Path to the farm JSON file
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct ConditionsConfig {
    pub sun: Option<Level>,
    pub wind: Option<Level>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Load configuration from files and environment variables
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            // Start with default values
            .set_default("input.path", "farm.json")?
            .set_default("output.format", "text")?
            .set_default("calculation.missing_factor", "zero")?
            .add_source(file)
            // Override with environment variables (FARM__ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Apply command-line overrides on top of loaded configuration
    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(input) = &cli.input {
            self.input.path = input.clone();
        }
        if cli.sun.is_some() {
            self.conditions.sun = cli.sun;
        }
        if cli.wind.is_some() {
            self.conditions.wind = cli.wind;
        }
        if let Some(format) = cli.format {
            self.output.format = format;
        }
        if cli.neutral_missing_factors {
            self.calculation.missing_factor = MissingFactorPolicy::Neutral;
        }
    }

    /// Environment to evaluate under, `None` when no level is configured
    pub fn environment(&self) -> Option<EnvironmentFactors> {
        match (self.conditions.sun, self.conditions.wind) {
            (None, None) => None,
            (sun, wind) => Some(EnvironmentFactors { sun, wind }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::load(None).unwrap();
        assert_eq!(config.input.path, PathBuf::from("farm.json"));
        assert_eq!(config.output.format, OutputFormat::Text);
        assert_eq!(config.calculation.missing_factor, MissingFactorPolicy::Zero);
        assert_eq!(config.environment(), None);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = Config::load(None).unwrap();
        let cli = Cli {
            input: Some(PathBuf::from("data/farm.json")),
            sun: Some(Level::Medium),
            format: Some(OutputFormat::Csv),
            neutral_missing_factors: true,
            ..Default::default()
        };
        config.apply_cli(&cli);

        assert_eq!(config.input.path, PathBuf::from("data/farm.json"));
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.calculation.missing_factor, MissingFactorPolicy::Neutral);
        assert_eq!(
            config.environment(),
            Some(EnvironmentFactors::sun_only(Level::Medium))
        );
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::parse_from([
            "farm-report",
            "--input",
            "farm.json",
            "--sun",
            "medium",
            "--wind",
            "LOW",
            "--format",
            "json",
        ]);
        assert_eq!(cli.sun, Some(Level::Medium));
        assert_eq!(cli.wind, Some(Level::Low));
        assert_eq!(cli.format, Some(OutputFormat::Json));
        assert!(!cli.neutral_missing_factors);
    }

    #[test]
    fn test_parse_args_rejects_unknown_level() {
        assert!(Cli::try_parse_from(["farm-report", "--sun", "scorching"]).is_err());
    }
}
