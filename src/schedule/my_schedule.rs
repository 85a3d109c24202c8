//! Single-person week view.

use chrono::{Duration, NaiveDate};

use crate::calendar::start_of_week;
use crate::config::EngineConfig;
use crate::models::{DaySchedule, Person, RecurringRule, ResolvedDayStatus};
use crate::resolution::{OverrideSnapshot, resolve_day_status};

/// Resolves one person's week, Sunday through Saturday.
///
/// Always returns exactly 7 entries, each carrying a single resolved status.
/// When the person is absent from the roster every entry is a
/// "Not Scheduled" placeholder so the view never comes back short.
pub fn my_schedule(
    roster: &[Person],
    person_id: &str,
    any_date: NaiveDate,
    rules: &[RecurringRule],
    overrides: &OverrideSnapshot,
    config: &EngineConfig,
) -> Vec<DaySchedule> {
    let start = start_of_week(any_date);
    let member = roster.iter().find(|person| person.id == person_id);

    (0..7)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let staff = match member {
                Some(person) => vec![resolve_day_status(person, date, rules, overrides, config)],
                None => vec![placeholder(person_id, config)],
            };
            DaySchedule {
                date,
                notes: overrides.notes_for(date).to_string(),
                staff,
            }
        })
        .collect()
}

fn placeholder(person_id: &str, config: &EngineConfig) -> ResolvedDayStatus {
    ResolvedDayStatus {
        person_id: person_id.to_string(),
        name: String::new(),
        zone_name: String::new(),
        status: config.statuses.not_scheduled.clone(),
        hours: String::new(),
    }
}
