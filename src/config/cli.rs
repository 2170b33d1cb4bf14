use crate::config::toml_config::{TomlConfig, MAX_SQUARE_DELAY_MS};
use crate::domain::model::LogFormat;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "small-toolkit")]
#[command(about = "A small toolkit of text, collection, calendar and async helpers")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the square delay from the config, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Log output format: compact or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Upper- or lowercase a string
    Format {
        text: String,
        #[arg(long)]
        upper: bool,
    },
    /// Keep items rated 4 or higher, e.g. '[{"title":"a","rating":4.5}]'
    FilterRatings { json: String },
    /// Flatten a JSON array of arrays, e.g. '[[1,2],[3]]'
    Concat { json: String },
    /// Describe a vehicle, and the car model when given
    Describe {
        #[arg(long)]
        make: String,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        model: Option<String>,
    },
    /// Length of text, or double a number
    Process {
        value: String,
        /// Treat the value as text even if it looks like a number
        #[arg(long)]
        text: bool,
    },
    /// Pick the most expensive product, e.g. '[{"name":"A","price":10}]'
    MostExpensive { json: String },
    /// Classify a day as Weekday or Weekend
    DayType { day: String },
    /// Square a number after the configured delay (Ctrl+C cancels)
    Square {
        #[arg(allow_negative_numbers = true)]
        n: f64,
    },
}

impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides on top.
    pub fn resolve(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path.display());
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        if let Some(delay_ms) = self.delay_ms {
            config.set_square_delay_ms(delay_ms);
            tracing::debug!("🔧 Square delay overridden to {}ms", delay_ms);
        }
        if let Some(format) = self.log_format {
            config.set_log_format(format);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(delay_ms) = self.delay_ms {
            validate_range("delay_ms", delay_ms, 0, MAX_SQUARE_DELAY_MS)?;
        }
        Ok(())
    }
}
