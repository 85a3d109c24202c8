//! Recurring-rule matching.
//!
//! Selects the recurring rule that governs a (person, date) pair. Matching is
//! first-match-wins over the rule list in its stored order: the engine does
//! not rank overlapping rules by specificity, narrowest date range, or most
//! recent creation. That ordering dependence is an explicit policy of this
//! module — callers relying on it should not be silently "fixed" by a
//! smarter ranking here.

use chrono::NaiveDate;

use crate::calendar::{day_index, iso_week_number};
use crate::models::{Frequency, RecurringRule};

/// Returns the first rule in stored order that applies to the person on the
/// date, or `None` when no rule matches.
///
/// Later candidates are not consulted once a rule matches, even if they are
/// more specific or more recent. Rules with an empty `technician_id` or an
/// empty day set are malformed and never match.
///
/// # Example
///
/// ```
/// use schedule_engine::models::RecurringRule;
/// use schedule_engine::resolution::pick_first_match;
/// use chrono::NaiveDate;
///
/// let rule = RecurringRule {
///     technician_id: "tech_001".to_string(),
///     days: vec![1, 3, 5],
///     status: Some("Off".to_string()),
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
///     ..Default::default()
/// };
///
/// // 2024-02-07 is a Wednesday (day index 3) inside the window
/// let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// assert!(pick_first_match(std::slice::from_ref(&rule), "tech_001", date).is_some());
///
/// // 2024-02-08 is a Thursday (day index 4), not in the rule's day set
/// let thursday = NaiveDate::from_ymd_opt(2024, 2, 8).unwrap();
/// assert!(pick_first_match(std::slice::from_ref(&rule), "tech_001", thursday).is_none());
/// ```
pub fn pick_first_match<'a>(
    rules: &'a [RecurringRule],
    person_id: &str,
    date: NaiveDate,
) -> Option<&'a RecurringRule> {
    if person_id.is_empty() {
        return None;
    }
    rules
        .iter()
        .filter(|rule| rule.technician_id == person_id)
        .find(|rule| rule_applies_on(rule, date))
}

/// Returns true if a rule's validity window, day set, and cadence all cover
/// the date.
///
/// The validity window is inclusive on both bounds; an absent bound is
/// unbounded in that direction.
pub fn rule_applies_on(rule: &RecurringRule, date: NaiveDate) -> bool {
    in_validity_window(rule, date) && on_listed_day(rule, date) && cadence_matches(rule, date)
}

fn in_validity_window(rule: &RecurringRule, date: NaiveDate) -> bool {
    rule.start_date.is_none_or(|start| date >= start)
        && rule.end_date.is_none_or(|end| date <= end)
}

fn on_listed_day(rule: &RecurringRule, date: NaiveDate) -> bool {
    rule.days.contains(&day_index(date))
}

fn cadence_matches(rule: &RecurringRule, date: NaiveDate) -> bool {
    match rule.frequency {
        Frequency::Weekly => true,
        Frequency::EveryOtherWeek => iso_week_number(date) % 2 == rule.week_anchor % 2,
    }
}
