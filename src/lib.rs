//! Elevator Usage Analytics
//!
//! A one-shot batch report generator that turns a flat list of elevator
//! usage records (floor requested, elevator used, time-of-day period)
//! into descriptive statistics.
//!
//! # Overview
//!
//! This library computes, over a fixed dataset of recorded elevator
//! calls:
//!
//! - **Least-used floor(s)** across the building's full floor range
//! - **Most and least frequented elevator(s)** of the bank
//! - **Peak and trough usage periods** for those elevators
//! - **The busiest period** for the elevator bank as a whole
//! - **Per-elevator usage percentages**
//!
//! Every "most/least" query keeps all tied members rather than breaking
//! ties arbitrarily, and queries for a minimum treat members absent from
//! the data as having zero usages rather than as missing.
//!
//! ## Quick Start
//!
//! ```rust
//! use amzn_elevator_usage_analytics_rust::analyzer::UsageAnalyzer;
//! use amzn_elevator_usage_analytics_rust::loader::parse_usage_data;
//!
//! let records = parse_usage_data(
//!     r#"[{"floor": 3, "elevator": "B", "period": "M"}]"#,
//! )?;
//! let analyzer = UsageAnalyzer::new(records);
//! assert_eq!(analyzer.usage_percentage(
//!     amzn_elevator_usage_analytics_rust::types::Elevator::B), 100.0);
//! # Ok::<(), amzn_elevator_usage_analytics_rust::error::AnalyticsError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Floors, elevators, periods, records, and configuration
//! - [`loader`]: JSON input loading with code defaulting
//! - [`analyzer`]: The statistical queries (the core of the crate)
//! - [`report`]: Text and JSON report rendering
//! - [`error`]: Error types for the loading and reporting boundaries
//! - [`logging`]: Tracing subscriber configuration for the binary
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod analyzer;
pub mod error;
pub mod loader;
pub mod logging;
pub mod report;
pub mod types;

// Re-export the types most callers need
pub use analyzer::UsageAnalyzer;
pub use error::{AnalyticsError, AnalyticsResult};
pub use loader::{load_usage_data, parse_usage_data};
pub use report::{UsageReport, UsageReporter};
pub use types::{
    CliArgs, Elevator, Floor, OutputFormat, Period, RawUsageRecord, ReportConfig, UsageRecord,
    FLOOR_COUNT,
};
