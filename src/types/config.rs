//! Configuration structures for the elevator usage analyzer
//!
//! This module contains the report configuration structure and validation
//! logic, plus the command line argument definitions for the binary.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "elevator-usage-analyzer",
    version = "0.1.0",
    about = "Elevator Usage Analyzer - Generates a usage statistics report from recorded elevator calls",
    long_about = "Reads a JSON file of elevator usage records (floor, elevator, time-of-day period) and \
prints descriptive statistics: least-used floors, most and least frequented elevators with their peak \
and trough periods, the busiest period of the whole elevator bank, and per-elevator usage percentages.

EXAMPLES:
    # Analyze the default input file
    elevator-usage-analyzer

    # Analyze a specific file
    elevator-usage-analyzer --input data/usage.json

    # Emit the report as JSON to a file
    elevator-usage-analyzer --input usage.json --output-format json --output report.json

    # Generate a configuration template
    elevator-usage-analyzer --print-config > my-config.json

    # Validate configuration without running
    elevator-usage-analyzer --config my-config.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Input file with usage records
    #[arg(
        short,
        long,
        help = "Input JSON file of usage records",
        long_help = "Path to the JSON array of usage records to analyze. Default: input.json"
    )]
    pub input: Option<String>,

    /// Output format for the report (text or json)
    #[arg(long, help = "Report output format: text or json")]
    pub output_format: Option<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long, help = "Write the report to a file instead of stdout")]
    pub output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose (INFO level) logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(long, help = "Enable debug (DEBUG level) logging")]
    pub debug: bool,

    /// Validate configuration and input without producing a report
    #[arg(long, help = "Validate configuration without generating the report")]
    pub dry_run: bool,

    /// Print the default configuration as JSON and exit
    #[arg(long, help = "Print default configuration as JSON and exit")]
    pub print_config: bool,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the report configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Input path is empty
    #[error("Input path must not be empty")]
    EmptyInputPath,

    /// Output format string does not name a known format
    #[error("Unknown output format: {0} (supported: text, json)")]
    UnknownOutputFormat(String),
}

/// Partial configuration as read from a config file
///
/// Every field is optional so a file only needs to name the settings it
/// overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ConfigFile {
    input_path: Option<String>,
    output_format: Option<String>,
    output_path: Option<String>,
}

/// Configuration for a report run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Path to the JSON input file of usage records
    pub input_path: String,

    /// Output format for the report ("text" or "json")
    pub output_format: String,

    /// Optional output file path; `None` writes to stdout
    pub output_path: Option<String>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input_path: "input.json".to_string(),
            output_format: "text".to_string(),
            output_path: None,
        }
    }
}

impl ReportConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        // Start with default configuration
        let mut config = Self::default();

        // Load from config file if specified
        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // Override with command line arguments (CLI takes precedence)
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            input_path: config_file.input_path.unwrap_or(defaults.input_path),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            output_path: config_file.output_path.or(defaults.output_path),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.input {
            config.input_path = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.output {
            config.output_path = Some(value);
        }
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.input_path.trim().is_empty() {
            return Err(ConfigValidationError::EmptyInputPath);
        }

        self.parsed_output_format()?;

        Ok(())
    }

    /// Parse the configured output format string
    pub fn parsed_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse::<OutputFormat>()
            .map_err(|_| ConfigValidationError::UnknownOutputFormat(self.output_format.clone()))
    }
}
