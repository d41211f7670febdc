#[cfg(feature = "cli")]
pub mod cli;
pub mod pricing;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::{Parser, ValueEnum};
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "quote-calc")]
#[command(about = "Monthly price estimates for graphic design and video editing retainers")]
pub struct CliConfig {
    /// TOML file overriding the built-in pricing table
    #[arg(long)]
    pub pricing: Option<String>,

    /// Raw form answers as JSON (reads stdin when neither input is given)
    #[arg(long, conflicts_with = "request")]
    pub answers: Option<String>,

    /// A normalized quote request as JSON
    #[arg(long)]
    pub request: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Print the effective pricing table as TOML and exit
    #[arg(long)]
    pub show_pricing: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}
