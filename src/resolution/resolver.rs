//! Layered status resolution.
//!
//! Composes the default policy, recurring-rule matching, and day-override
//! lookup into one effective status per (person, date) pair. Override
//! strictly dominates rule, rule strictly dominates default; a missing or
//! empty field in a higher-precedence layer falls back to the lower layer's
//! value instead of blanking it out.

use chrono::NaiveDate;

use crate::config::EngineConfig;
use crate::models::{Person, RecurringRule, ResolvedDayStatus};

use super::default_status::{StatusFields, default_for};
use super::override_lookup::OverrideSnapshot;
use super::rule_matcher::pick_first_match;

/// Resolves the effective status for one person on one date.
///
/// Pure and deterministic: the same inputs always produce the same output,
/// and nothing is mutated or cached between calls.
///
/// # Example
///
/// ```
/// use schedule_engine::config::EngineConfig;
/// use schedule_engine::models::Person;
/// use schedule_engine::resolution::{OverrideSnapshot, resolve_day_status};
/// use chrono::NaiveDate;
///
/// let person = Person {
///     id: "tech_001".to_string(),
///     name: "Alex Moreno".to_string(),
///     zone_name: "North".to_string(),
/// };
/// let config = EngineConfig::default();
///
/// // No rules, no overrides: a Wednesday falls back to the default policy
/// let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// let resolved = resolve_day_status(&person, date, &[], &OverrideSnapshot::empty(), &config);
/// assert_eq!(resolved.status, "Scheduled");
/// assert_eq!(resolved.hours, "");
/// ```
pub fn resolve_day_status(
    person: &Person,
    date: NaiveDate,
    rules: &[RecurringRule],
    overrides: &OverrideSnapshot,
    config: &EngineConfig,
) -> ResolvedDayStatus {
    let mut fields = default_for(date, config);

    if let Some(rule) = pick_first_match(rules, &person.id, date) {
        apply_layer(&mut fields, rule.status.as_deref(), rule.hours.as_deref());
    }

    if let Some(entry) = overrides.entry_for(date, &person.id) {
        apply_layer(&mut fields, entry.status.as_deref(), entry.hours.as_deref());
    }

    ResolvedDayStatus {
        person_id: person.id.clone(),
        name: person.name.clone(),
        zone_name: person.zone_name.clone(),
        status: fields.status,
        hours: fields.hours,
    }
}

/// Folds one precedence layer into the accumulated fields.
///
/// A `None` or empty value leaves the lower layer's field intact.
fn apply_layer(fields: &mut StatusFields, status: Option<&str>, hours: Option<&str>) {
    if let Some(status) = status.filter(|s| !s.is_empty()) {
        fields.status = status.to_string();
    }
    if let Some(hours) = hours.filter(|h| !h.is_empty()) {
        fields.hours = hours.to_string();
    }
}
