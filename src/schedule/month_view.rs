//! Month aggregation.

use chrono::NaiveDate;

use crate::calendar::{day_index, end_of_month, start_of_month};
use crate::config::EngineConfig;
use crate::models::{MonthSchedule, Person, RecurringRule};
use crate::resolution::OverrideSnapshot;

use super::day_view::day_schedule;

/// Resolves the whole roster for every day of the month containing
/// `any_date`.
///
/// `leading_blank_days` is the weekday index (0 = Sunday) of the first of
/// the month, i.e. the number of empty cells a week-aligned calendar grid
/// needs before day 1. The engine exposes the count only and computes no
/// layout.
pub fn month_schedule(
    roster: &[Person],
    any_date: NaiveDate,
    rules: &[RecurringRule],
    overrides: &OverrideSnapshot,
    config: &EngineConfig,
) -> MonthSchedule {
    let first = start_of_month(any_date);
    let last = end_of_month(any_date);

    let days = first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| day_schedule(roster, date, rules, overrides, config))
        .collect();

    MonthSchedule {
        leading_blank_days: day_index(first) as u32,
        days,
    }
}
