//! Pure calendar arithmetic shared by the resolution and aggregation layers.
//!
//! This module provides ISO-style week numbering, week/month boundary
//! calculations, and the `YYYY-MM-DD` date-key normalization used as the
//! sole lookup key into the override snapshot. All functions are pure and
//! referentially transparent; the reference date is always an explicit
//! argument so callers never depend on the wall clock.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Computes the ISO 8601 week number for a date.
///
/// Uses the Thursday-anchored convention: the date is shifted to the
/// Thursday of its week, then weeks are counted from January 1st of that
/// Thursday's year. A date in the last days of December can therefore
/// belong to week 1 of the following year, and a date in early January can
/// belong to week 52 or 53 of the previous year.
///
/// This value is used only for the every-other-week cadence parity test,
/// never for calendar display.
///
/// # Example
///
/// ```
/// use schedule_engine::calendar::iso_week_number;
/// use chrono::NaiveDate;
///
/// // 2024-02-09 is a Friday in ISO week 6
/// let date = NaiveDate::from_ymd_opt(2024, 2, 9).unwrap();
/// assert_eq!(iso_week_number(date), 6);
///
/// // 2023-01-01 is a Sunday and still belongs to week 52 of 2022
/// let rollover = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
/// assert_eq!(iso_week_number(rollover), 52);
/// ```
pub fn iso_week_number(date: NaiveDate) -> u32 {
    let offset = date.weekday().num_days_from_monday() as i64;
    let thursday = date + Duration::days(3 - offset);
    let jan_first = NaiveDate::from_ymd_opt(thursday.year(), 1, 1)
        .expect("January 1st is always a valid date");
    let days_since = (thursday - jan_first).num_days() as u32;
    days_since / 7 + 1
}

/// Returns the Sunday that starts the week containing `date`.
///
/// # Example
///
/// ```
/// use schedule_engine::calendar::start_of_week;
/// use chrono::NaiveDate;
///
/// // 2024-02-07 is a Wednesday; its week starts Sunday 2024-02-04
/// let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// assert_eq!(start_of_week(date), NaiveDate::from_ymd_opt(2024, 2, 4).unwrap());
/// ```
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Returns the Saturday that ends the week containing `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// Returns the first day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .expect("The first of an existing month is always a valid date")
}

/// Returns the last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .expect("The first of an existing month is always a valid date")
        .pred_opt()
        .expect("The day before the first of a month is always a valid date")
}

/// Formats a date as its `YYYY-MM-DD` lookup key.
///
/// This is the sole key format for the override snapshot and the equality
/// key for "is today" checks in the view layer.
///
/// # Example
///
/// ```
/// use schedule_engine::calendar::date_key;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// assert_eq!(date_key(date), "2024-02-07");
/// ```
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a `YYYY-MM-DD` date key back into a date.
///
/// Returns `None` for any value that does not match the key format.
pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Returns the weekday index of a date, 0 = Sunday through 6 = Saturday.
///
/// This is the convention used by recurring-rule day sets.
pub fn day_index(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

/// Returns true if the date falls on a Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    // ==========================================================================
    // ISO week numbering
    // ==========================================================================
    #[test]
    fn test_week_number_mid_year() {
        // 2024-02-07 is a Wednesday in ISO week 6
        assert_eq!(iso_week_number(make_date("2024-02-07")), 6);
    }

    #[test]
    fn test_week_number_first_week() {
        // 2026-01-01 is a Thursday, so week 1 of 2026
        assert_eq!(iso_week_number(make_date("2026-01-01")), 1);
    }

    #[test]
    fn test_week_number_january_belongs_to_previous_year() {
        // 2023-01-01 is a Sunday; its week's Thursday is 2022-12-29,
        // so the date belongs to week 52 of 2022
        assert_eq!(iso_week_number(make_date("2023-01-01")), 52);
    }

    #[test]
    fn test_week_number_week_53() {
        // 2020 is a long ISO year: 2020-12-31 (Thursday) is in week 53
        assert_eq!(iso_week_number(make_date("2020-12-31")), 53);
        // and 2021-01-01 (Friday) still belongs to that week
        assert_eq!(iso_week_number(make_date("2021-01-01")), 53);
    }

    #[test]
    fn test_week_number_december_belongs_to_next_year() {
        // 2024-12-30 is a Monday; its week's Thursday is 2025-01-02,
        // so the date belongs to week 1 of 2025
        assert_eq!(iso_week_number(make_date("2024-12-30")), 1);
    }

    #[test]
    fn test_week_number_matches_chrono_iso_week() {
        // Sweep two full years and compare against chrono's ISO week
        let mut date = make_date("2023-01-01");
        let end = make_date("2024-12-31");
        while date <= end {
            assert_eq!(
                iso_week_number(date),
                date.iso_week().week(),
                "week number mismatch on {}",
                date
            );
            date = date.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_week_number_advances_by_one_after_seven_days() {
        let date = make_date("2024-02-07");
        let next_week = date + Duration::days(7);
        assert_eq!(iso_week_number(next_week), iso_week_number(date) + 1);
    }

    // ==========================================================================
    // Week boundaries (Sunday through Saturday)
    // ==========================================================================
    #[test]
    fn test_start_of_week_from_wednesday() {
        assert_eq!(start_of_week(make_date("2024-02-07")), make_date("2024-02-04"));
    }

    #[test]
    fn test_start_of_week_on_sunday_is_identity() {
        assert_eq!(start_of_week(make_date("2024-02-04")), make_date("2024-02-04"));
    }

    #[test]
    fn test_end_of_week_from_wednesday() {
        assert_eq!(end_of_week(make_date("2024-02-07")), make_date("2024-02-10"));
    }

    #[test]
    fn test_end_of_week_on_saturday_is_identity() {
        assert_eq!(end_of_week(make_date("2024-02-10")), make_date("2024-02-10"));
    }

    #[test]
    fn test_week_boundaries_span_month_edges() {
        // 2024-03-01 is a Friday; its week starts Sunday 2024-02-25
        assert_eq!(start_of_week(make_date("2024-03-01")), make_date("2024-02-25"));
        assert_eq!(end_of_week(make_date("2024-02-25")), make_date("2024-03-02"));
    }

    // ==========================================================================
    // Month boundaries
    // ==========================================================================
    #[test]
    fn test_start_of_month() {
        assert_eq!(start_of_month(make_date("2024-02-15")), make_date("2024-02-01"));
    }

    #[test]
    fn test_end_of_month_leap_february() {
        assert_eq!(end_of_month(make_date("2024-02-15")), make_date("2024-02-29"));
    }

    #[test]
    fn test_end_of_month_non_leap_february() {
        assert_eq!(end_of_month(make_date("2023-02-15")), make_date("2023-02-28"));
    }

    #[test]
    fn test_end_of_month_december() {
        assert_eq!(end_of_month(make_date("2024-12-03")), make_date("2024-12-31"));
    }

    #[test]
    fn test_end_of_month_thirty_day_month() {
        assert_eq!(end_of_month(make_date("2024-04-30")), make_date("2024-04-30"));
    }

    // ==========================================================================
    // Date keys
    // ==========================================================================
    #[test]
    fn test_date_key_zero_pads() {
        assert_eq!(date_key(make_date("2024-02-07")), "2024-02-07");
    }

    #[test]
    fn test_parse_date_key_round_trip() {
        let date = make_date("2024-02-07");
        assert_eq!(parse_date_key(&date_key(date)), Some(date));
    }

    #[test]
    fn test_parse_date_key_rejects_other_formats() {
        assert_eq!(parse_date_key("02/07/2024"), None);
        assert_eq!(parse_date_key("2024-2-7x"), None);
        assert_eq!(parse_date_key(""), None);
    }

    #[test]
    fn test_parse_date_key_rejects_impossible_dates() {
        assert_eq!(parse_date_key("2023-02-29"), None);
        assert_eq!(parse_date_key("2024-13-01"), None);
    }

    // ==========================================================================
    // Weekday indexing
    // ==========================================================================
    #[test]
    fn test_day_index_sunday_is_zero() {
        assert_eq!(day_index(make_date("2024-02-04")), 0);
    }

    #[test]
    fn test_day_index_saturday_is_six() {
        assert_eq!(day_index(make_date("2024-02-10")), 6);
    }

    #[test]
    fn test_day_index_wednesday_is_three() {
        assert_eq!(day_index(make_date("2024-02-07")), 3);
    }

    #[test]
    fn test_is_weekend() {
        assert!(is_weekend(make_date("2024-02-10"))); // Saturday
        assert!(is_weekend(make_date("2024-02-11"))); // Sunday
        assert!(!is_weekend(make_date("2024-02-07"))); // Wednesday
        assert!(!is_weekend(make_date("2024-02-09"))); // Friday
    }
}
