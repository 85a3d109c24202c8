//! Recurring availability rule model.
//!
//! A recurring rule is a standing weekly or biweekly pattern for one person,
//! optionally bounded by an inclusive date range. Rules are owned by an
//! external rule store and immutable once loaded for a resolution pass.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The cadence of a recurring rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frequency {
    /// The rule applies every week.
    #[default]
    Weekly,
    /// The rule applies on alternating weeks, selected by week-anchor parity.
    EveryOtherWeek,
}

/// A standing weekly or biweekly availability pattern for one person.
///
/// Every field that the matcher depends on carries a serde default so that a
/// malformed store record deserializes into a rule that can never match
/// (empty `technician_id`, empty `days`) instead of failing the whole
/// collection.
///
/// # Example
///
/// ```
/// use schedule_engine::models::{Frequency, RecurringRule};
/// use chrono::NaiveDate;
///
/// // Monday/Wednesday/Friday off for the first quarter of 2024
/// let rule = RecurringRule {
///     technician_id: "tech_001".to_string(),
///     days: vec![1, 3, 5],
///     frequency: Frequency::Weekly,
///     start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 31),
///     status: Some("Off".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(rule.frequency, Frequency::Weekly);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecurringRule {
    /// The id of the person this rule applies to.
    #[serde(default)]
    pub technician_id: String,
    /// Weekday indexes the rule applies to, 0 = Sunday through 6 = Saturday.
    #[serde(default)]
    pub days: Vec<u8>,
    /// Weekly or every-other-week cadence.
    #[serde(default)]
    pub frequency: Frequency,
    /// Reference week number whose parity selects the active biweekly week.
    #[serde(default)]
    pub week_anchor: u32,
    /// First date the rule is valid (inclusive); `None` means unbounded.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// Last date the rule is valid (inclusive); `None` means unbounded.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    /// Status to apply on matching dates (e.g., "Off", "Vacation").
    #[serde(default)]
    pub status: Option<String>,
    /// Optional working-hours note to apply on matching dates.
    #[serde(default)]
    pub hours: Option<String>,
}
