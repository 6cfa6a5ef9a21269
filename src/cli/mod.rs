//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Sample Extract using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Sample Extract - export record collections as CSV files
#[derive(Parser, Debug)]
#[command(name = "sample-extract")]
#[command(version, about, long_about = None)]
#[command(author = "Sample Extract Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(
        short,
        long,
        default_value = "sample-extract.toml",
        env = "SAMPLE_EXTRACT_CONFIG"
    )]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "SAMPLE_EXTRACT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export the selected collections as CSV files
    Export(commands::export::ExportArgs),

    /// List the collections offered by the record source
    List(commands::list::ListArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
