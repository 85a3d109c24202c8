//! Day-override lookup.
//!
//! An [`OverrideSnapshot`] is the immutable per-pass view of the override
//! store: every document fetched for the active date range, keyed by the
//! `YYYY-MM-DD` date key. Document absence and empty staff lists are normal
//! conditions, not errors.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::calendar::date_key;
use crate::models::{DailyOverrideEntry, DayScheduleDocument};

/// An immutable snapshot of override documents for one resolution pass.
///
/// # Example
///
/// ```
/// use schedule_engine::models::{DailyOverrideEntry, DayScheduleDocument};
/// use schedule_engine::resolution::OverrideSnapshot;
/// use chrono::NaiveDate;
///
/// let date = NaiveDate::from_ymd_opt(2024, 2, 7).unwrap();
/// let snapshot = OverrideSnapshot::new(vec![DayScheduleDocument {
///     date,
///     notes: "Bridge closure on route 9".to_string(),
///     staff_list: vec![DailyOverrideEntry {
///         technician_id: "tech_001".to_string(),
///         status: Some("Vacation".to_string()),
///         hours: None,
///     }],
/// }]);
///
/// assert!(snapshot.entry_for(date, "tech_001").is_some());
/// assert_eq!(snapshot.notes_for(date), "Bridge closure on route 9");
/// ```
#[derive(Debug, Clone, Default)]
pub struct OverrideSnapshot {
    documents: HashMap<String, DayScheduleDocument>,
}

impl OverrideSnapshot {
    /// Builds a snapshot from fetched documents, keyed by date.
    ///
    /// When the store hands back more than one document for the same date,
    /// the later one replaces the earlier.
    pub fn new(documents: Vec<DayScheduleDocument>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (date_key(doc.date), doc))
            .collect();
        Self { documents }
    }

    /// An empty snapshot: no overrides apply anywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the override document for a date, if one exists.
    pub fn document_for(&self, date: NaiveDate) -> Option<&DayScheduleDocument> {
        self.documents.get(&date_key(date))
    }

    /// Finds the override entry for a person on a date.
    ///
    /// Returns `None` when the date has no document, when the document lists
    /// no entry for the person, or when the only candidates are malformed
    /// entries with an empty person id.
    pub fn entry_for(&self, date: NaiveDate, person_id: &str) -> Option<&DailyOverrideEntry> {
        if person_id.is_empty() {
            return None;
        }
        self.document_for(date)?
            .staff_list
            .iter()
            .find(|entry| entry.technician_id == person_id)
    }

    /// Returns the supervisor notes for a date, empty when no document exists.
    pub fn notes_for(&self, date: NaiveDate) -> &str {
        self.document_for(date).map_or("", |doc| doc.notes.as_str())
    }

    /// The number of dates carrying an override document.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true when the snapshot holds no documents at all.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn entry(person_id: &str, status: &str) -> DailyOverrideEntry {
        DailyOverrideEntry {
            technician_id: person_id.to_string(),
            status: Some(status.to_string()),
            hours: None,
        }
    }

    fn doc(date_str: &str, notes: &str, staff_list: Vec<DailyOverrideEntry>) -> DayScheduleDocument {
        DayScheduleDocument {
            date: make_date(date_str),
            notes: notes.to_string(),
            staff_list,
        }
    }

    #[test]
    fn test_entry_found_for_person_and_date() {
        let snapshot = OverrideSnapshot::new(vec![doc(
            "2024-02-07",
            "",
            vec![entry("p1", "Vacation"), entry("p2", "Sick")],
        )]);
        let found = snapshot.entry_for(make_date("2024-02-07"), "p2").unwrap();
        assert_eq!(found.status.as_deref(), Some("Sick"));
    }

    #[test]
    fn test_missing_document_is_not_an_error() {
        let snapshot = OverrideSnapshot::new(vec![doc("2024-02-07", "", vec![entry("p1", "Off")])]);
        assert!(snapshot.entry_for(make_date("2024-02-08"), "p1").is_none());
        assert!(snapshot.document_for(make_date("2024-02-08")).is_none());
    }

    #[test]
    fn test_empty_staff_list_is_not_an_error() {
        let snapshot = OverrideSnapshot::new(vec![doc("2024-02-07", "Yard closed", vec![])]);
        assert!(snapshot.entry_for(make_date("2024-02-07"), "p1").is_none());
        assert_eq!(snapshot.notes_for(make_date("2024-02-07")), "Yard closed");
    }

    #[test]
    fn test_person_absent_from_staff_list() {
        let snapshot = OverrideSnapshot::new(vec![doc("2024-02-07", "", vec![entry("p1", "Off")])]);
        assert!(snapshot.entry_for(make_date("2024-02-07"), "p3").is_none());
    }

    #[test]
    fn test_malformed_entry_with_empty_id_is_skipped() {
        let snapshot = OverrideSnapshot::new(vec![doc(
            "2024-02-07",
            "",
            vec![entry("", "Off"), entry("p1", "Vacation")],
        )]);
        // The empty-id entry never matches anyone, including an empty query
        assert!(snapshot.entry_for(make_date("2024-02-07"), "").is_none());
        let found = snapshot.entry_for(make_date("2024-02-07"), "p1").unwrap();
        assert_eq!(found.status.as_deref(), Some("Vacation"));
    }

    #[test]
    fn test_notes_default_to_empty() {
        let snapshot = OverrideSnapshot::empty();
        assert_eq!(snapshot.notes_for(make_date("2024-02-07")), "");
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_duplicate_dates_keep_the_later_document() {
        let snapshot = OverrideSnapshot::new(vec![
            doc("2024-02-07", "first", vec![]),
            doc("2024-02-07", "second", vec![]),
        ]);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.notes_for(make_date("2024-02-07")), "second");
    }
}
