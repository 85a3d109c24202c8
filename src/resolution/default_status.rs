//! Baseline status policy.
//!
//! The default policy is the floor every other precedence layer can
//! override: weekends are off, weekdays are scheduled, hours are empty.

use chrono::NaiveDate;

use crate::calendar::is_weekend;
use crate::config::EngineConfig;

/// The mutable status/hours pair the resolver folds each layer into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusFields {
    /// The status label accumulated so far.
    pub status: String,
    /// The working-hours note accumulated so far.
    pub hours: String,
}

/// Returns the baseline status for a date when no rule or override applies.
///
/// # Example
///
/// ```
/// use schedule_engine::config::EngineConfig;
/// use schedule_engine::resolution::default_for;
/// use chrono::NaiveDate;
///
/// let config = EngineConfig::default();
///
/// // 2024-02-07 is a Wednesday
/// let weekday = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// assert_eq!(default_for(weekday, &config).status, "Scheduled");
///
/// // 2024-02-10 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(default_for(saturday, &config).status, "Off");
/// ```
pub fn default_for(date: NaiveDate, config: &EngineConfig) -> StatusFields {
    let status = if is_weekend(date) {
        config.statuses.off.clone()
    } else {
        config.statuses.scheduled.clone()
    };
    StatusFields {
        status,
        hours: String::new(),
    }
}
