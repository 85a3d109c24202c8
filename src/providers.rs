//! External data-provider interfaces and in-memory implementations.
//!
//! The engine consumes three read-only collaborators: the roster, the
//! recurring-rule store, and the day-override store. Writes never happen
//! here; callers own the write path for creating and editing rules and
//! overrides. The in-memory implementations back tests, benchmarks, and the
//! live-view demo, and double as the reference for how a real store adapter
//! should behave.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, RwLock};

use chrono::NaiveDate;
use tokio::sync::watch;

use crate::calendar::date_key;
use crate::error::EngineResult;
use crate::models::{DayScheduleDocument, Person, RecurringRule};

/// Source of the roster of people.
pub trait RosterProvider {
    /// Fetches every person on the roster.
    fn get_all(&self) -> impl Future<Output = EngineResult<Vec<Person>>> + Send;
}

/// Source of recurring availability rules.
pub trait RuleStore {
    /// Fetches every rule belonging to any of the given people, in the
    /// store's insertion order. The order is load-bearing: rule matching is
    /// first-match-wins over this exact sequence.
    fn get_all_for_roster(
        &self,
        person_ids: &[String],
    ) -> impl Future<Output = EngineResult<Vec<RecurringRule>>> + Send;
}

/// Source of day-override documents.
pub trait OverrideStore {
    /// Fetches the override documents whose dates fall inside the inclusive
    /// range.
    fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> impl Future<Output = EngineResult<Vec<DayScheduleDocument>>> + Send;

    /// Subscribes to change notifications relevant to the inclusive range.
    ///
    /// The receiver yields a monotonically increasing revision; any change
    /// observed there means a fresh `get_range` may return different data.
    fn subscribe_range(&self, start: NaiveDate, end: NaiveDate) -> watch::Receiver<u64>;
}

/// An in-memory roster.
#[derive(Debug, Clone, Default)]
pub struct MemoryRoster {
    people: Vec<Person>,
}

impl MemoryRoster {
    /// Creates a roster holding the given people.
    pub fn new(people: Vec<Person>) -> Self {
        Self { people }
    }
}

impl RosterProvider for MemoryRoster {
    async fn get_all(&self) -> EngineResult<Vec<Person>> {
        Ok(self.people.clone())
    }
}

/// An in-memory recurring-rule store.
///
/// Preserves the insertion order of rules, which the matcher's
/// first-match-wins policy depends on.
#[derive(Debug, Clone, Default)]
pub struct MemoryRuleStore {
    rules: Vec<RecurringRule>,
}

impl MemoryRuleStore {
    /// Creates a store holding the given rules, in order.
    pub fn new(rules: Vec<RecurringRule>) -> Self {
        Self { rules }
    }
}

impl RuleStore for MemoryRuleStore {
    async fn get_all_for_roster(&self, person_ids: &[String]) -> EngineResult<Vec<RecurringRule>> {
        Ok(self
            .rules
            .iter()
            .filter(|rule| person_ids.iter().any(|id| *id == rule.technician_id))
            .cloned()
            .collect())
    }
}

/// An in-memory day-override store with change notifications.
///
/// Every mutation bumps a store-wide revision that all range subscriptions
/// observe; subscribers re-fetch their own range on any signal. Clones share
/// the same underlying documents and revision channel, so a test or demo can
/// keep a writing handle while the engine holds its own.
#[derive(Debug, Clone)]
pub struct MemoryOverrideStore {
    documents: Arc<RwLock<HashMap<String, DayScheduleDocument>>>,
    revision: watch::Sender<u64>,
}

impl Default for MemoryOverrideStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MemoryOverrideStore {
    /// Creates a store holding the given documents.
    pub fn new(documents: Vec<DayScheduleDocument>) -> Self {
        let documents = documents
            .into_iter()
            .map(|doc| (date_key(doc.date), doc))
            .collect();
        let (revision, _) = watch::channel(0);
        Self {
            documents: Arc::new(RwLock::new(documents)),
            revision,
        }
    }

    /// Inserts or replaces the document for its date and notifies
    /// subscribers.
    pub fn upsert(&self, document: DayScheduleDocument) {
        self.documents
            .write()
            .expect("override store lock poisoned")
            .insert(date_key(document.date), document);
        self.revision.send_modify(|rev| *rev += 1);
    }

    /// Removes the document for a date, if present, and notifies
    /// subscribers.
    pub fn remove(&self, date: NaiveDate) -> bool {
        let removed = self
            .documents
            .write()
            .expect("override store lock poisoned")
            .remove(&date_key(date))
            .is_some();
        if removed {
            self.revision.send_modify(|rev| *rev += 1);
        }
        removed
    }
}

impl OverrideStore for MemoryOverrideStore {
    async fn get_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<DayScheduleDocument>> {
        let documents = self
            .documents
            .read()
            .expect("override store lock poisoned");
        let mut in_range: Vec<_> = documents
            .values()
            .filter(|doc| doc.date >= start && doc.date <= end)
            .cloned()
            .collect();
        in_range.sort_by_key(|doc| doc.date);
        Ok(in_range)
    }

    fn subscribe_range(&self, _start: NaiveDate, _end: NaiveDate) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}
