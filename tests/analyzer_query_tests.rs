//! Tests for the usage analyzer's statistical queries
//!
//! These tests exercise the tie-keep-all selection policy, the
//! zero-seeding rules for minimum queries, and the empty-dataset
//! behavior of every query.

use amzn_elevator_usage_analytics_rust::analyzer::UsageAnalyzer;
use amzn_elevator_usage_analytics_rust::types::{Elevator, Floor, Period, UsageRecord};

fn record(floor: u8, elevator: Elevator, period: Period) -> UsageRecord {
    UsageRecord::new(Floor::new(floor).unwrap(), elevator, period)
}

/// The worked example: [(0,A,M),(1,A,M),(1,B,V),(2,C,N)]
fn worked_example() -> UsageAnalyzer {
    UsageAnalyzer::new(vec![
        record(0, Elevator::A, Period::Morning),
        record(1, Elevator::A, Period::Morning),
        record(1, Elevator::B, Period::Afternoon),
        record(2, Elevator::C, Period::Night),
    ])
}

#[test]
fn test_worked_example_most_frequented() {
    let analyzer = worked_example();
    assert_eq!(analyzer.most_frequented_elevators(), vec![Elevator::A]);
    assert_eq!(
        analyzer.peak_periods_of_most_frequented_elevators(),
        vec![Period::Morning]
    );
}

#[test]
fn test_worked_example_least_used_floors() {
    let analyzer = worked_example();
    // Floors 0 and 2 each have one call, floor 1 has two; floors 3-15
    // are absent and tie at zero.
    let result = analyzer.least_used_floors();
    assert_eq!(result, (3..16).map(|f| Floor::new(f).unwrap()).collect::<Vec<_>>());
}

#[test]
fn test_worked_example_least_frequented_and_fleet_peak() {
    let analyzer = worked_example();
    assert_eq!(analyzer.least_frequented_elevators(), vec![Elevator::D, Elevator::E]);
    assert_eq!(analyzer.fleet_peak_periods(), vec![Period::Morning]);
}

#[test]
fn test_empty_dataset_least_used_floors_returns_whole_building() {
    let analyzer = UsageAnalyzer::new(Vec::new());
    let floors = analyzer.least_used_floors();
    assert_eq!(floors.len(), 16);
    assert_eq!(floors, Floor::all().collect::<Vec<_>>());
}

#[test]
fn test_empty_dataset_elevator_extrema() {
    let analyzer = UsageAnalyzer::new(Vec::new());
    assert!(analyzer.most_frequented_elevators().is_empty());
    assert_eq!(analyzer.least_frequented_elevators(), Elevator::ALL.to_vec());
}

#[test]
fn test_empty_dataset_period_queries() {
    let analyzer = UsageAnalyzer::new(Vec::new());
    assert!(analyzer.peak_periods_of_most_frequented_elevators().is_empty());
    assert!(analyzer.fleet_peak_periods().is_empty());
    // Each record-less elevator contributes all three periods, so the
    // union is the full period set, sorted by code letter (M, N, V).
    assert_eq!(
        analyzer.trough_periods_of_least_frequented_elevators(),
        vec![Period::Morning, Period::Night, Period::Afternoon]
    );
}

#[test]
fn test_tied_maximum_keeps_both_elevators_sorted() {
    let analyzer = UsageAnalyzer::new(vec![
        record(0, Elevator::B, Period::Morning),
        record(1, Elevator::B, Period::Morning),
        record(2, Elevator::A, Period::Afternoon),
        record(3, Elevator::A, Period::Night),
        record(4, Elevator::C, Period::Morning),
    ]);
    assert_eq!(analyzer.most_frequented_elevators(), vec![Elevator::A, Elevator::B]);
}

#[test]
fn test_peak_period_union_is_deduplicated_and_sorted() {
    // A and B tie at the maximum; A peaks at night, B peaks in both the
    // morning and at night.
    let analyzer = UsageAnalyzer::new(vec![
        record(0, Elevator::A, Period::Night),
        record(1, Elevator::A, Period::Night),
        record(2, Elevator::A, Period::Morning),
        record(3, Elevator::B, Period::Morning),
        record(4, Elevator::B, Period::Night),
        record(5, Elevator::B, Period::Afternoon),
    ]);
    assert_eq!(
        analyzer.most_frequented_elevators(),
        vec![Elevator::A, Elevator::B]
    );
    // A's peak: N. B's peaks: M, V, N (all tied at one). Union sorted by
    // code: M, N, V.
    assert_eq!(
        analyzer.peak_periods_of_most_frequented_elevators(),
        vec![Period::Morning, Period::Night, Period::Afternoon]
    );
}

#[test]
fn test_trough_periods_zero_seed_periods_per_elevator() {
    // Single least-frequented elevator with calls in only one period.
    let mut records = vec![record(1, Elevator::E, Period::Morning)];
    for &e in &[Elevator::A, Elevator::B, Elevator::C, Elevator::D] {
        records.push(record(2, e, Period::Morning));
        records.push(record(3, e, Period::Afternoon));
    }
    let analyzer = UsageAnalyzer::new(records);
    assert_eq!(analyzer.least_frequented_elevators(), vec![Elevator::E]);
    // E: M=1, V=0, N=0. Troughs are V and N, sorted by code: N, V.
    assert_eq!(
        analyzer.trough_periods_of_least_frequented_elevators(),
        vec![Period::Night, Period::Afternoon]
    );
}

#[test]
fn test_usage_percentages_sum_to_hundred() {
    let analyzer = UsageAnalyzer::new(vec![
        record(0, Elevator::A, Period::Morning),
        record(1, Elevator::A, Period::Afternoon),
        record(2, Elevator::B, Period::Night),
        record(3, Elevator::C, Period::Morning),
        record(4, Elevator::D, Period::Afternoon),
        record(5, Elevator::E, Period::Night),
        record(6, Elevator::E, Period::Morning),
    ]);
    let total: f64 = Elevator::ALL.iter().map(|&e| analyzer.usage_percentage(e)).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn test_usage_percentage_known_values() {
    // 2 of 3 calls on A.
    let analyzer = UsageAnalyzer::new(vec![
        record(1, Elevator::A, Period::Morning),
        record(2, Elevator::A, Period::Afternoon),
        record(3, Elevator::B, Period::Night),
    ]);
    assert!((analyzer.usage_percentage(Elevator::A) - 200.0 / 3.0).abs() < 1e-9);

    // Single call: 100%.
    let analyzer = UsageAnalyzer::new(vec![record(1, Elevator::A, Period::Morning)]);
    assert_eq!(analyzer.usage_percentage(Elevator::A), 100.0);
}

#[test]
fn test_usage_percentage_monotonic_in_own_records() {
    let mut records = vec![
        record(0, Elevator::A, Period::Morning),
        record(1, Elevator::B, Period::Afternoon),
        record(2, Elevator::C, Period::Night),
    ];
    let mut previous = UsageAnalyzer::new(records.clone()).usage_percentage(Elevator::B);
    // Adding more records for B without adding records elsewhere never
    // decreases B's percentage.
    for floor in 3..10 {
        records.push(record(floor, Elevator::B, Period::Morning));
        let current = UsageAnalyzer::new(records.clone()).usage_percentage(Elevator::B);
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_absent_floors_win_when_minimum_is_zero() {
    let analyzer = UsageAnalyzer::new(vec![
        record(0, Elevator::A, Period::Morning),
        record(15, Elevator::B, Period::Night),
    ]);
    let result = analyzer.least_used_floors();
    // Every floor from 1 to 14 is absent and ties at zero.
    assert_eq!(result, (1..15).map(|f| Floor::new(f).unwrap()).collect::<Vec<_>>());
}
