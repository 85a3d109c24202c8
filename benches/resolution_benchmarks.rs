//! Performance benchmarks for the Staff Schedule Resolution Engine.
//!
//! This benchmark suite verifies that schedule resolution stays cheap enough
//! to recompute on every view change:
//! - Single (person, date) resolution: well under 10μs mean
//! - Day view over a 25-person roster: < 1ms mean
//! - Week view over a 25-person roster: < 5ms mean
//! - Month view over a 25-person roster: < 20ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tokio::runtime::Runtime;

use chrono::NaiveDate;

use schedule_engine::config::EngineConfig;
use schedule_engine::engine::ScheduleEngine;
use schedule_engine::models::{
    DailyOverrideEntry, DayScheduleDocument, Frequency, Person, RecurringRule,
};
use schedule_engine::providers::{MemoryOverrideStore, MemoryRoster, MemoryRuleStore};
use schedule_engine::resolution::{OverrideSnapshot, resolve_day_status};
use schedule_engine::schedule::{day_schedule, month_schedule, week_schedule};

fn make_date(date_str: &str) -> NaiveDate {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
}

/// Creates a roster of the given size.
fn make_roster(size: usize) -> Vec<Person> {
    (0..size)
        .map(|index| Person {
            id: format!("tech_{:03}", index),
            name: format!("Technician {:03}", index),
            zone_name: if index % 2 == 0 { "North" } else { "South" }.to_string(),
        })
        .collect()
}

/// Creates a mixed rule set: a weekly pattern for every other person and a
/// biweekly Friday rule for every fourth.
fn make_rules(roster: &[Person]) -> Vec<RecurringRule> {
    let mut rules = Vec::new();
    for (index, person) in roster.iter().enumerate() {
        if index % 2 == 0 {
            rules.push(RecurringRule {
                technician_id: person.id.clone(),
                days: vec![1, 3, 5],
                frequency: Frequency::Weekly,
                start_date: Some(make_date("2024-01-01")),
                end_date: Some(make_date("2024-12-31")),
                status: Some("Off".to_string()),
                ..Default::default()
            });
        }
        if index % 4 == 0 {
            rules.push(RecurringRule {
                technician_id: person.id.clone(),
                days: vec![5],
                frequency: Frequency::EveryOtherWeek,
                week_anchor: 0,
                status: Some("Off".to_string()),
                ..Default::default()
            });
        }
    }
    rules
}

/// Creates an override document covering a third of the roster.
fn make_document(roster: &[Person], date_str: &str) -> DayScheduleDocument {
    DayScheduleDocument {
        date: make_date(date_str),
        notes: "Benchmark overrides".to_string(),
        staff_list: roster
            .iter()
            .step_by(3)
            .map(|person| DailyOverrideEntry {
                technician_id: person.id.clone(),
                status: Some("Vacation".to_string()),
                hours: None,
            })
            .collect(),
    }
}

fn bench_single_resolution(c: &mut Criterion) {
    let roster = make_roster(25);
    let rules = make_rules(&roster);
    let snapshot = OverrideSnapshot::new(vec![make_document(&roster, "2024-02-07")]);
    let config = EngineConfig::default();
    let date = make_date("2024-02-07");

    c.bench_function("resolve_single_person_day", |b| {
        b.iter(|| {
            resolve_day_status(
                black_box(&roster[0]),
                black_box(date),
                black_box(&rules),
                black_box(&snapshot),
                black_box(&config),
            )
        })
    });
}

fn bench_day_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("day_view");
    for size in [5, 25, 100] {
        let roster = make_roster(size);
        let rules = make_rules(&roster);
        let snapshot = OverrideSnapshot::new(vec![make_document(&roster, "2024-02-07")]);
        let config = EngineConfig::default();
        let date = make_date("2024-02-07");

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                day_schedule(
                    black_box(&roster),
                    black_box(date),
                    black_box(&rules),
                    black_box(&snapshot),
                    black_box(&config),
                )
            })
        });
    }
    group.finish();
}

fn bench_week_and_month_views(c: &mut Criterion) {
    let roster = make_roster(25);
    let rules = make_rules(&roster);
    let snapshot = OverrideSnapshot::new(vec![
        make_document(&roster, "2024-02-05"),
        make_document(&roster, "2024-02-07"),
        make_document(&roster, "2024-02-09"),
    ]);
    let config = EngineConfig::default();
    let date = make_date("2024-02-07");

    c.bench_function("week_view_25_people", |b| {
        b.iter(|| {
            week_schedule(
                black_box(&roster),
                black_box(date),
                black_box(&rules),
                black_box(&snapshot),
                black_box(&config),
            )
        })
    });

    c.bench_function("month_view_25_people", |b| {
        b.iter(|| {
            month_schedule(
                black_box(&roster),
                black_box(date),
                black_box(&rules),
                black_box(&snapshot),
                black_box(&config),
            )
        })
    });
}

fn bench_engine_day_schedule(c: &mut Criterion) {
    let runtime = Runtime::new().expect("Failed to create tokio runtime");
    let roster = make_roster(25);
    let rules = make_rules(&roster);
    let document = make_document(&roster, "2024-02-07");
    let engine = ScheduleEngine::new(
        MemoryRoster::new(roster),
        MemoryRuleStore::new(rules),
        MemoryOverrideStore::new(vec![document]),
        EngineConfig::default(),
    );
    let date = make_date("2024-02-07");

    c.bench_function("engine_day_schedule_25_people", |b| {
        b.to_async(&runtime)
            .iter(|| async { engine.day_schedule(black_box(date)).await })
    });
}

criterion_group!(
    benches,
    bench_single_resolution,
    bench_day_view,
    bench_week_and_month_views,
    bench_engine_day_schedule
);
criterion_main!(benches);
