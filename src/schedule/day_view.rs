//! Single-day aggregation.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::models::{DaySchedule, Person, RecurringRule};
use crate::resolution::{OverrideSnapshot, resolve_day_status};

/// Resolves the whole roster for one date.
///
/// The staff list is sorted by name ascending, ignoring case, and the day's
/// supervisor notes are attached from the override document (empty string
/// when the date has none).
///
/// # Example
///
/// ```
/// use schedule_engine::config::EngineConfig;
/// use schedule_engine::models::Person;
/// use schedule_engine::resolution::OverrideSnapshot;
/// use schedule_engine::schedule::day_schedule;
/// use chrono::NaiveDate;
///
/// let roster = vec![
///     Person { id: "p2".into(), name: "zoe".into(), zone_name: String::new() },
///     Person { id: "p1".into(), name: "Amir".into(), zone_name: String::new() },
/// ];
/// let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// let schedule = day_schedule(&roster, date, &[], &OverrideSnapshot::empty(), &EngineConfig::default());
/// assert_eq!(schedule.staff[0].name, "Amir");
/// assert_eq!(schedule.staff[1].name, "zoe");
/// ```
pub fn day_schedule(
    roster: &[Person],
    date: NaiveDate,
    rules: &[RecurringRule],
    overrides: &OverrideSnapshot,
    config: &EngineConfig,
) -> DaySchedule {
    let mut staff: Vec<_> = roster
        .iter()
        .map(|person| resolve_day_status(person, date, rules, overrides, config))
        .collect();
    staff.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    DaySchedule {
        date,
        notes: overrides.notes_for(date).to_string(),
        staff,
    }
}
