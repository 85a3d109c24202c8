//! View-ready output models.
//!
//! These are the engine's only output entities. Each is created fresh per
//! aggregation pass, never persisted, and never mutated after construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The effective work status of one person on one date.
///
/// Exactly one of {override, matched rule, default policy} determines the
/// `status` and `hours` fields, applied in that precedence order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedDayStatus {
    /// The id of the person this status belongs to.
    pub person_id: String,
    /// Display name copied from the roster entry.
    pub name: String,
    /// Zone copied from the roster entry.
    pub zone_name: String,
    /// The resolved status label (e.g., "Scheduled", "Off", "Vacation").
    pub status: String,
    /// The resolved working-hours note; empty when no layer supplied one.
    pub hours: String,
}

/// The resolved schedule for the whole roster on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    /// The date this schedule covers.
    pub date: NaiveDate,
    /// Supervisor notes from the day's override document, empty if none.
    pub notes: String,
    /// One resolved status per roster member, sorted by name ascending.
    pub staff: Vec<ResolvedDayStatus>,
}

/// A month of day schedules plus the leading-blank count for grid rendering.
///
/// `leading_blank_days` is the weekday index (0 = Sunday) of the first of the
/// month — the number of empty cells a calendar grid needs before day 1. The
/// engine exposes the count only; layout stays in the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSchedule {
    /// Number of blank grid cells before the first day of the month.
    pub leading_blank_days: u32,
    /// One schedule per calendar day of the month, in date order.
    pub days: Vec<DaySchedule>,
}

/// The weekday/weekend-aware partition of a day's staff list.
///
/// The primary group surfaces the exceptions to the expected working pattern
/// (people working a weekend, people absent on a weekday); the secondary
/// group holds the routine majority. Statuses matching neither predicate
/// remain in the full staff list but appear in neither group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffGroups {
    /// The exceptional subset, surfaced first in day and week views.
    pub primary: Vec<ResolvedDayStatus>,
    /// The routine majority.
    pub secondary: Vec<ResolvedDayStatus>,
}
