//! Usage analysis queries
//!
//! The [`UsageAnalyzer`] owns an immutable list of usage records and
//! answers the statistical queries of the report. Every query follows
//! the same shape: build per-member counts, find the extremum of
//! interest, keep **all** members tied at that extremum, and return them
//! sorted for deterministic output.
//!
//! Two counting disciplines are in play and the difference is
//! deliberate. Queries for a *minimum* zero-seed the full closed set
//! first, so a member with no records is a valid (and often winning)
//! candidate — "least used" meaningfully includes "never used". Queries
//! for a *maximum* count only what was observed — an elevator or period
//! absent from the data cannot be "most frequented".

use crate::types::{Elevator, Floor, Period, UsageRecord};
use std::collections::BTreeMap;

/// Answers statistical queries over a fixed set of usage records
///
/// All queries are pure reads over the dataset handed to [`new`]; they
/// may be called in any order, repeatedly, with identical results.
///
/// [`new`]: UsageAnalyzer::new
#[derive(Debug, Clone)]
pub struct UsageAnalyzer {
    records: Vec<UsageRecord>,
}

impl UsageAnalyzer {
    /// Create an analyzer over the given usage records
    pub fn new(records: Vec<UsageRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the dataset
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The floor(s) with the fewest recorded calls, ascending
    ///
    /// Every floor of the building participates, seeded at zero, so a
    /// floor nobody traveled to still competes for the minimum. An empty
    /// dataset therefore returns all sixteen floors.
    pub fn least_used_floors(&self) -> Vec<Floor> {
        let mut counts: BTreeMap<Floor, usize> = Floor::all().map(|f| (f, 0)).collect();
        for record in &self.records {
            *counts.entry(record.floor).or_insert(0) += 1;
        }
        keep_minimum(&counts)
    }

    /// The elevator(s) with the most recorded calls, alphabetical
    ///
    /// Counts only elevators observed in the data. An elevator with no
    /// records cannot be "most frequented", and an empty dataset yields
    /// an empty result.
    pub fn most_frequented_elevators(&self) -> Vec<Elevator> {
        let mut counts: BTreeMap<Elevator, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.elevator).or_insert(0) += 1;
        }
        keep_maximum(&counts)
    }

    /// Peak period(s) of the most frequented elevator(s)
    ///
    /// For each elevator returned by [`most_frequented_elevators`], the
    /// period(s) with that elevator's highest call count are collected;
    /// the result is the deduplicated union across all tied elevators,
    /// sorted alphabetically by period code.
    ///
    /// [`most_frequented_elevators`]: UsageAnalyzer::most_frequented_elevators
    pub fn peak_periods_of_most_frequented_elevators(&self) -> Vec<Period> {
        let mut peaks: Vec<Period> = Vec::new();
        for elevator in self.most_frequented_elevators() {
            let mut counts: BTreeMap<Period, usize> = BTreeMap::new();
            for record in self.records.iter().filter(|r| r.elevator == elevator) {
                *counts.entry(record.period).or_insert(0) += 1;
            }
            // A most-frequented elevator always has records, but the
            // guard keeps the query total.
            if counts.is_empty() {
                continue;
            }
            peaks.extend(keep_maximum(&counts));
        }
        sort_and_dedup_periods(peaks)
    }

    /// The elevator(s) with the fewest recorded calls, alphabetical
    ///
    /// The whole bank participates, seeded at zero: an elevator that was
    /// never used is a valid candidate for "least frequented". An empty
    /// dataset returns all five elevators.
    pub fn least_frequented_elevators(&self) -> Vec<Elevator> {
        let mut counts: BTreeMap<Elevator, usize> =
            Elevator::ALL.iter().map(|&e| (e, 0)).collect();
        for record in &self.records {
            *counts.entry(record.elevator).or_insert(0) += 1;
        }
        keep_minimum(&counts)
    }

    /// Trough period(s) of the least frequented elevator(s)
    ///
    /// For each elevator returned by [`least_frequented_elevators`], all
    /// three periods are seeded at zero and the period(s) with that
    /// elevator's lowest call count are collected. An elevator with no
    /// records at all contributes every period, tied at zero. The result
    /// is the deduplicated union, sorted alphabetically by period code.
    ///
    /// [`least_frequented_elevators`]: UsageAnalyzer::least_frequented_elevators
    pub fn trough_periods_of_least_frequented_elevators(&self) -> Vec<Period> {
        let mut troughs: Vec<Period> = Vec::new();
        for elevator in self.least_frequented_elevators() {
            let mut counts: BTreeMap<Period, usize> =
                Period::ALL.iter().map(|&p| (p, 0)).collect();
            for record in self.records.iter().filter(|r| r.elevator == elevator) {
                *counts.entry(record.period).or_insert(0) += 1;
            }
            troughs.extend(keep_minimum(&counts));
        }
        sort_and_dedup_periods(troughs)
    }

    /// The period(s) in which the whole elevator bank is busiest
    ///
    /// Counts only periods observed in the data, across every elevator.
    /// An empty dataset yields an empty result.
    pub fn fleet_peak_periods(&self) -> Vec<Period> {
        let mut counts: BTreeMap<Period, usize> = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.period).or_insert(0) += 1;
        }
        sort_and_dedup_periods(keep_maximum(&counts))
    }

    /// The share of all recorded calls served by the given elevator
    ///
    /// Returns a percentage in [0, 100], unrounded; formatting is the
    /// reporter's concern. An empty dataset yields 0 for every elevator.
    pub fn usage_percentage(&self, elevator: Elevator) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let count = self.records.iter().filter(|r| r.elevator == elevator).count();
        count as f64 / self.records.len() as f64 * 100.0
    }
}

/// All keys tied at the minimum count, in key order
fn keep_minimum<K: Copy + Ord>(counts: &BTreeMap<K, usize>) -> Vec<K> {
    match counts.values().min().copied() {
        Some(min) => counts.iter().filter(|(_, &c)| c == min).map(|(&k, _)| k).collect(),
        None => Vec::new(),
    }
}

/// All keys tied at the maximum count, in key order
fn keep_maximum<K: Copy + Ord>(counts: &BTreeMap<K, usize>) -> Vec<K> {
    match counts.values().max().copied() {
        Some(max) => counts.iter().filter(|(_, &c)| c == max).map(|(&k, _)| k).collect(),
        None => Vec::new(),
    }
}

/// Sort periods alphabetically by code letter (M, N, V) and drop duplicates
///
/// The report always presented periods by their code letters in
/// alphabetical order, which differs from the enum's chronological
/// declaration order.
fn sort_and_dedup_periods(mut periods: Vec<Period>) -> Vec<Period> {
    periods.sort_by_key(|p| p.code());
    periods.dedup();
    periods
}
