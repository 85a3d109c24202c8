//! The schedule engine facade.
//!
//! Assembles an immutable per-pass snapshot from the three data providers
//! and runs the pure aggregation over it. The roster and override fetches
//! are issued concurrently; the rule fetch follows because it needs the
//! roster's person ids. A provider failure degrades that layer to an empty
//! collection (empty rules mean every date uses the default policy, an empty
//! override set means no overrides apply) so a view is always produced.

use chrono::NaiveDate;
use tokio::sync::watch;
use tracing::warn;

use crate::calendar::{end_of_month, end_of_week, start_of_month, start_of_week};
use crate::config::EngineConfig;
use crate::models::{DaySchedule, MonthSchedule, Person, RecurringRule, StaffGroups};
use crate::providers::{OverrideStore, RosterProvider, RuleStore};
use crate::resolution::OverrideSnapshot;
use crate::schedule::{day_schedule, month_schedule, my_schedule, split_staff, week_schedule};

/// One resolution pass's worth of immutable input data.
struct ResolutionContext {
    roster: Vec<Person>,
    rules: Vec<RecurringRule>,
    overrides: OverrideSnapshot,
}

/// The schedule resolution engine.
///
/// Generic over its three providers; all view methods take the reference
/// date as an explicit argument, so the engine never reads the wall clock
/// and is deterministic given its providers' contents.
#[derive(Debug)]
pub struct ScheduleEngine<R, S, O> {
    roster: R,
    rules: S,
    overrides: O,
    config: EngineConfig,
}

impl<R, S, O> ScheduleEngine<R, S, O>
where
    R: RosterProvider + Sync,
    S: RuleStore + Sync,
    O: OverrideStore + Sync,
{
    /// Creates an engine over the given providers and configuration.
    pub fn new(roster: R, rules: S, overrides: O, config: EngineConfig) -> Self {
        Self {
            roster,
            rules,
            overrides,
            config,
        }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Subscribes to override-store change notifications for a date range.
    pub fn subscribe_overrides(&self, start: NaiveDate, end: NaiveDate) -> watch::Receiver<u64> {
        self.overrides.subscribe_range(start, end)
    }

    /// Resolves the whole roster for one date.
    pub async fn day_schedule(&self, date: NaiveDate) -> DaySchedule {
        let context = self.load_context(date, date).await;
        day_schedule(
            &context.roster,
            date,
            &context.rules,
            &context.overrides,
            &self.config,
        )
    }

    /// Resolves one date and partitions the staff into primary/secondary
    /// groups.
    pub async fn day_schedule_with_groups(&self, date: NaiveDate) -> (DaySchedule, StaffGroups) {
        let schedule = self.day_schedule(date).await;
        let groups = split_staff(&schedule.staff, date, &self.config);
        (schedule, groups)
    }

    /// Resolves the week containing `any_date`, Sunday through Saturday.
    pub async fn week_schedule(&self, any_date: NaiveDate) -> Vec<DaySchedule> {
        let context = self
            .load_context(start_of_week(any_date), end_of_week(any_date))
            .await;
        week_schedule(
            &context.roster,
            any_date,
            &context.rules,
            &context.overrides,
            &self.config,
        )
    }

    /// Resolves every day of the month containing `any_date`.
    pub async fn month_schedule(&self, any_date: NaiveDate) -> MonthSchedule {
        let context = self
            .load_context(start_of_month(any_date), end_of_month(any_date))
            .await;
        month_schedule(
            &context.roster,
            any_date,
            &context.rules,
            &context.overrides,
            &self.config,
        )
    }

    /// Resolves one person's week, with placeholders when the person is
    /// absent from the roster.
    pub async fn my_schedule(&self, person_id: &str, any_date: NaiveDate) -> Vec<DaySchedule> {
        let context = self
            .load_context(start_of_week(any_date), end_of_week(any_date))
            .await;
        my_schedule(
            &context.roster,
            person_id,
            any_date,
            &context.rules,
            &context.overrides,
            &self.config,
        )
    }

    /// Fetches roster, rules, and overrides for the range, degrading each
    /// failed layer to an empty collection.
    async fn load_context(&self, start: NaiveDate, end: NaiveDate) -> ResolutionContext {
        let (roster, documents) = tokio::join!(
            self.roster.get_all(),
            self.overrides.get_range(start, end)
        );

        let roster = roster.unwrap_or_else(|err| {
            warn!(error = %err, "Roster fetch failed; resolving with an empty roster");
            Vec::new()
        });
        let documents = documents.unwrap_or_else(|err| {
            warn!(error = %err, "Override fetch failed; resolving without overrides");
            Vec::new()
        });

        let person_ids: Vec<String> = roster.iter().map(|person| person.id.clone()).collect();
        let rules = self
            .rules
            .get_all_for_roster(&person_ids)
            .await
            .unwrap_or_else(|err| {
                warn!(error = %err, "Rule fetch failed; resolving with defaults only");
                Vec::new()
            });

        ResolutionContext {
            roster,
            rules,
            overrides: OverrideSnapshot::new(documents),
        }
    }
}
