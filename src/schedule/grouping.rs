//! Primary/secondary staff grouping.
//!
//! Day and week views surface the exceptions to the expected working
//! pattern ahead of the routine majority: on a weekend the unusually
//! *working* people lead, on a weekday the unusually *absent* people lead.

use chrono::NaiveDate;

use crate::calendar::is_weekend;
use crate::config::EngineConfig;
use crate::models::{ResolvedDayStatus, StaffGroups};

/// Partitions a day's resolved staff list into primary and secondary groups.
///
/// On a weekend day the primary group is everyone resolved "scheduled" or
/// carrying a non-empty hours note; the secondary group is everyone with an
/// off-status and no hours. On a weekday the lists invert: primary is
/// off-status people and custom-hours entries, secondary is the normal
/// "scheduled" majority. Status comparisons ignore case. An entry matching
/// neither predicate (a custom status outside the off set) lands in neither
/// group; it remains visible in the full staff list.
///
/// # Example
///
/// ```
/// use schedule_engine::config::EngineConfig;
/// use schedule_engine::models::ResolvedDayStatus;
/// use schedule_engine::schedule::split_staff;
/// use chrono::NaiveDate;
///
/// let staff = vec![ResolvedDayStatus {
///     person_id: "p1".into(),
///     name: "Alex".into(),
///     zone_name: String::new(),
///     status: "Scheduled".into(),
///     hours: String::new(),
/// }];
///
/// // 2024-02-10 is a Saturday: a scheduled person is the exception
/// let saturday = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// let groups = split_staff(&staff, saturday, &EngineConfig::default());
/// assert_eq!(groups.primary.len(), 1);
/// assert!(groups.secondary.is_empty());
/// ```
pub fn split_staff(
    staff: &[ResolvedDayStatus],
    date: NaiveDate,
    config: &EngineConfig,
) -> StaffGroups {
    let weekend = is_weekend(date);
    let mut primary = Vec::new();
    let mut secondary = Vec::new();

    for member in staff {
        let scheduled = config.is_scheduled_status(&member.status);
        let off = config.is_off_status(&member.status);
        let has_hours = !member.hours.is_empty();

        let (is_primary, is_secondary) = if weekend {
            (scheduled || has_hours, off && !has_hours)
        } else {
            (off || has_hours, scheduled && !has_hours)
        };

        if is_primary {
            primary.push(member.clone());
        } else if is_secondary {
            secondary.push(member.clone());
        }
    }

    StaffGroups { primary, secondary }
}
