// Elevator Usage Analyzer - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/elevator-usage-analyzer --input input.json
// ```

use amzn_elevator_usage_analytics_rust::analyzer::UsageAnalyzer;
use amzn_elevator_usage_analytics_rust::error::{AnalyticsError, AnalyticsResult};
use amzn_elevator_usage_analytics_rust::loader::load_usage_data;
use amzn_elevator_usage_analytics_rust::logging::LoggingConfig;
use amzn_elevator_usage_analytics_rust::report::UsageReporter;
use amzn_elevator_usage_analytics_rust::types::{CliArgs, OutputFormat, ReportConfig};
use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use tracing::{error, info};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    // Handle special CLI flags that don't require full initialization
    if args.print_config {
        let default_config = ReportConfig::default();
        match default_config.print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    // Initialize logging based on CLI flags
    let logging_result = if args.debug {
        LoggingConfig::init_debug()
    } else if args.verbose {
        LoggingConfig::init_verbose()
    } else {
        // Default: minimal logging for normal users
        LoggingConfig::new().init()
    };

    if let Err(e) = logging_result {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Elevator Usage Analyzer");

    // Load configuration from CLI arguments and optional config file
    let config = match ReportConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    info!("Configuration loaded and validated successfully");

    // Handle dry run mode
    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - the report will not be generated.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run_report(&config) {
        error!("Report generation failed ({}): {}", e.category(), e);
        process::exit(1);
    }

    info!("Elevator Usage Analyzer completed successfully");
}

/// Load the dataset, run the analysis, and render the report
fn run_report(config: &ReportConfig) -> AnalyticsResult<()> {
    let records = load_usage_data(&config.input_path)?;
    info!("Loaded {} usage records from {}", records.len(), config.input_path);

    let analyzer = UsageAnalyzer::new(records);
    let reporter = UsageReporter::new(&analyzer);

    let format = config
        .parsed_output_format()
        .map_err(|e| AnalyticsError::invalid_configuration(e.to_string()))?;

    match &config.output_path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create report output file '{}'", path))?;
            let mut writer = BufWriter::new(file);
            render(&reporter, format, &mut writer)?;
            writer
                .flush()
                .with_context(|| format!("Failed to flush report output file '{}'", path))?;
            info!("Report written to {}", path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            render(&reporter, format, &mut handle)?;
        }
    }

    Ok(())
}

fn render<W: Write>(
    reporter: &UsageReporter<'_>,
    format: OutputFormat,
    writer: &mut W,
) -> AnalyticsResult<()> {
    match format {
        OutputFormat::Text => reporter.render_text(writer),
        OutputFormat::Json => reporter.render_json(writer),
    }
}

/// Print configuration summary
fn print_configuration_summary(config: &ReportConfig) {
    eprintln!("Configuration:");
    eprintln!("  Input Path: {}", config.input_path);
    eprintln!("  Output Format: {}", config.output_format);
    match &config.output_path {
        Some(path) => eprintln!("  Output Path: {}", path),
        None => eprintln!("  Output Path: (stdout)"),
    }
}
