//! Report rendering
//!
//! The reporter consumes the analyzer's queries and renders them for
//! humans or machines. It never re-derives or re-aggregates: every
//! number and list in the output comes straight from a single analyzer
//! query, and rounding of percentages to two decimals happens only here.

use crate::analyzer::UsageAnalyzer;
use crate::error::AnalyticsResult;
use crate::types::{Elevator, Period};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::Write;

/// Machine-readable summary of a complete analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UsageReport {
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// Number of usage records analyzed
    pub record_count: usize,
    /// Floors tied for the fewest calls
    pub least_used_floors: Vec<u8>,
    /// Elevators tied for the most calls
    pub most_frequented_elevators: Vec<Elevator>,
    /// Union of peak periods across the most frequented elevators
    pub peak_periods_of_most_frequented: Vec<Period>,
    /// Elevators tied for the fewest calls
    pub least_frequented_elevators: Vec<Elevator>,
    /// Union of trough periods across the least frequented elevators
    pub trough_periods_of_least_frequented: Vec<Period>,
    /// Periods in which the whole bank is busiest
    pub fleet_peak_periods: Vec<Period>,
    /// Usage percentage per elevator, unrounded
    pub usage_percentages: BTreeMap<Elevator, f64>,
}

impl UsageReport {
    /// Build a report summary by running every analyzer query once
    pub fn from_analyzer(analyzer: &UsageAnalyzer) -> Self {
        Self {
            generated_at: Utc::now(),
            record_count: analyzer.record_count(),
            least_used_floors: analyzer
                .least_used_floors()
                .iter()
                .map(|f| f.value())
                .collect(),
            most_frequented_elevators: analyzer.most_frequented_elevators(),
            peak_periods_of_most_frequented: analyzer
                .peak_periods_of_most_frequented_elevators(),
            least_frequented_elevators: analyzer.least_frequented_elevators(),
            trough_periods_of_least_frequented: analyzer
                .trough_periods_of_least_frequented_elevators(),
            fleet_peak_periods: analyzer.fleet_peak_periods(),
            usage_percentages: Elevator::ALL
                .iter()
                .map(|&e| (e, analyzer.usage_percentage(e)))
                .collect(),
        }
    }
}

/// Renders analyzer results as text or JSON
#[derive(Debug)]
pub struct UsageReporter<'a> {
    analyzer: &'a UsageAnalyzer,
}

impl<'a> UsageReporter<'a> {
    /// Create a reporter over the given analyzer
    pub fn new(analyzer: &'a UsageAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Render the human-readable text report
    pub fn render_text<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        writeln!(writer, "--- Usage Analysis Results ---")?;
        writeln!(writer)?;
        writeln!(writer, "{} usage records analyzed.", self.analyzer.record_count())?;
        writeln!(writer)?;

        self.render_least_used_floors(writer)?;
        self.render_most_frequented(writer)?;
        self.render_least_frequented(writer)?;
        self.render_fleet_peak(writer)?;
        self.render_usage_percentages(writer)?;

        writeln!(writer)?;
        writeln!(writer, "--- Analysis Complete ---")?;
        Ok(())
    }

    /// Render the JSON report document
    pub fn render_json<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let report = UsageReport::from_analyzer(self.analyzer);
        serde_json::to_writer_pretty(&mut *writer, &report)?;
        writeln!(writer)?;
        Ok(())
    }

    fn render_least_used_floors<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let floors = self.analyzer.least_used_floors();
        writeln!(writer, "a) Least used floor(s): {}", join(&floors))?;
        writeln!(writer)?;
        Ok(())
    }

    fn render_most_frequented<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let elevators = self.analyzer.most_frequented_elevators();
        if elevators.is_empty() {
            writeln!(
                writer,
                "b) No records available to determine the most frequented elevator."
            )?;
        } else {
            let periods = self.analyzer.peak_periods_of_most_frequented_elevators();
            writeln!(writer, "b) Most frequented elevator(s): {}", join(&elevators))?;
            writeln!(
                writer,
                "   Peak period(s) of the most frequented elevator(s): {}",
                join(&periods)
            )?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn render_least_frequented<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let elevators = self.analyzer.least_frequented_elevators();
        let periods = self.analyzer.trough_periods_of_least_frequented_elevators();
        writeln!(writer, "c) Least frequented elevator(s): {}", join(&elevators))?;
        writeln!(
            writer,
            "   Trough period(s) of the least frequented elevator(s): {}",
            join(&periods)
        )?;
        writeln!(writer)?;
        Ok(())
    }

    fn render_fleet_peak<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        let periods = self.analyzer.fleet_peak_periods();
        if periods.is_empty() {
            writeln!(writer, "d) No records available to determine the busiest period.")?;
        } else {
            writeln!(writer, "d) Busiest period(s) for the elevator bank: {}", join(&periods))?;
        }
        writeln!(writer)?;
        Ok(())
    }

    fn render_usage_percentages<W: Write>(&self, writer: &mut W) -> AnalyticsResult<()> {
        writeln!(writer, "e) Usage percentage per elevator:")?;
        for elevator in Elevator::ALL {
            writeln!(
                writer,
                "   - Elevator {}: {:.2}%",
                elevator,
                self.analyzer.usage_percentage(elevator)
            )?;
        }
        Ok(())
    }
}

/// Join displayable values with ", "
fn join<T: Display>(values: &[T]) -> String {
    values.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ")
}
