//! Week aggregation.

use chrono::{Duration, NaiveDate};

use crate::calendar::start_of_week;
use crate::config::EngineConfig;
use crate::models::{DaySchedule, Person, RecurringRule};
use crate::resolution::OverrideSnapshot;

use super::day_view::day_schedule;

/// Resolves the whole roster for the week containing `any_date`.
///
/// Returns exactly 7 day schedules, Sunday through Saturday.
pub fn week_schedule(
    roster: &[Person],
    any_date: NaiveDate,
    rules: &[RecurringRule],
    overrides: &OverrideSnapshot,
    config: &EngineConfig,
) -> Vec<DaySchedule> {
    let start = start_of_week(any_date);
    (0..7)
        .map(|offset| day_schedule(roster, start + Duration::days(offset), rules, overrides, config))
        .collect()
}
