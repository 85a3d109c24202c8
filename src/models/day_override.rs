//! Day-specific override models.
//!
//! One [`DayScheduleDocument`] exists per calendar date with explicit edits;
//! most dates have none. An entry inside a document takes precedence over any
//! recurring rule or default for its person on that date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day-specific status entry for one person.
///
/// Older documents carried the person id under a legacy `id` field; the serde
/// alias normalizes both spellings into `technician_id` at the store-read
/// boundary so the resolver only ever sees the canonical name.
///
/// # Example
///
/// ```
/// use schedule_engine::models::DailyOverrideEntry;
///
/// let entry: DailyOverrideEntry =
///     serde_json::from_str(r#"{"id": "tech_001", "status": "Vacation"}"#).unwrap();
/// assert_eq!(entry.technician_id, "tech_001");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyOverrideEntry {
    /// The id of the person this entry applies to.
    #[serde(default, alias = "id")]
    pub technician_id: String,
    /// Status to apply on this date (e.g., "Vacation", "Sick").
    #[serde(default)]
    pub status: Option<String>,
    /// Optional working-hours note for this date.
    #[serde(default)]
    pub hours: Option<String>,
}

/// The override document for a single calendar date.
///
/// Sparse by design: absence of a document and an empty `staff_list` are both
/// normal, non-error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayScheduleDocument {
    /// The date this document covers.
    pub date: NaiveDate,
    /// Free-form supervisor notes for the day.
    #[serde(default)]
    pub notes: String,
    /// Per-person override entries for the day.
    #[serde(default)]
    pub staff_list: Vec<DailyOverrideEntry>,
}
