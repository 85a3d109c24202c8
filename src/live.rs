//! Live view refresh with stale-fetch discard.
//!
//! A supervisor's edit to an override document must reach open views without
//! an explicit refresh, and a slow fetch for a previously viewed date must
//! never clobber the view of the date requested after it. Races resolve by
//! "last range requested wins", not by arrival order: every recompute takes
//! a token from a [`RefreshGate`] and only the holder of the newest token
//! may publish.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::NaiveDate;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::engine::ScheduleEngine;
use crate::models::DaySchedule;
use crate::providers::{OverrideStore, RosterProvider, RuleStore};

/// A generation counter deciding which in-flight refresh is allowed to
/// publish.
///
/// # Example
///
/// ```
/// use schedule_engine::live::RefreshGate;
///
/// let gate = RefreshGate::new();
/// let older = gate.begin();
/// let newer = gate.begin();
/// assert!(!gate.is_current(older));
/// assert!(gate.is_current(newer));
/// ```
#[derive(Debug, Default)]
pub struct RefreshGate {
    generation: AtomicU64,
}

impl RefreshGate {
    /// Creates a gate with no refresh in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new refresh, invalidating every earlier token.
    pub fn begin(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns true if no newer refresh has begun since the token was taken.
    pub fn is_current(&self, token: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == token
    }
}

/// A continuously refreshed single-day view.
///
/// Spawns a worker that recomputes the day schedule whenever the override
/// store signals a change or the viewed date moves, publishing through a
/// watch channel. Dropping the view stops the worker.
#[derive(Debug)]
pub struct LiveDayView {
    dates: mpsc::UnboundedSender<NaiveDate>,
    output: watch::Receiver<Option<DaySchedule>>,
    worker: JoinHandle<()>,
}

impl LiveDayView {
    /// Spawns a live view over the engine, initially showing `date`.
    pub fn spawn<R, S, O>(engine: Arc<ScheduleEngine<R, S, O>>, date: NaiveDate) -> Self
    where
        R: RosterProvider + Send + Sync + 'static,
        S: RuleStore + Send + Sync + 'static,
        O: OverrideStore + Send + Sync + 'static,
    {
        let (date_sender, mut date_receiver) = mpsc::unbounded_channel();
        let (output_sender, output_receiver) = watch::channel(None);
        let gate = Arc::new(RefreshGate::new());

        let worker = tokio::spawn(async move {
            let mut date = date;
            let mut changes = engine.subscribe_overrides(date, date);
            refresh(&engine, &gate, &output_sender, date);

            loop {
                tokio::select! {
                    changed = changes.changed() => {
                        if changed.is_err() {
                            break;
                        }
                        refresh(&engine, &gate, &output_sender, date);
                    }
                    next = date_receiver.recv() => {
                        match next {
                            Some(new_date) => {
                                date = new_date;
                                changes = engine.subscribe_overrides(date, date);
                                refresh(&engine, &gate, &output_sender, date);
                            }
                            None => break,
                        }
                    }
                }
            }
        });

        Self {
            dates: date_sender,
            output: output_receiver,
            worker,
        }
    }

    /// Moves the view to a different date.
    ///
    /// Returns false if the worker has already stopped.
    pub fn set_date(&self, date: NaiveDate) -> bool {
        self.dates.send(date).is_ok()
    }

    /// Returns a receiver of published schedules.
    ///
    /// Holds `None` until the first refresh completes.
    pub fn subscribe(&self) -> watch::Receiver<Option<DaySchedule>> {
        self.output.clone()
    }

    /// Returns the most recently published schedule, if any.
    pub fn latest(&self) -> Option<DaySchedule> {
        self.output.borrow().clone()
    }
}

impl Drop for LiveDayView {
    fn drop(&mut self) {
        self.worker.abort();
    }
}

/// Starts one guarded recompute. The result is published only if no newer
/// recompute has begun by the time it finishes.
fn refresh<R, S, O>(
    engine: &Arc<ScheduleEngine<R, S, O>>,
    gate: &Arc<RefreshGate>,
    output: &watch::Sender<Option<DaySchedule>>,
    date: NaiveDate,
) where
    R: RosterProvider + Send + Sync + 'static,
    S: RuleStore + Send + Sync + 'static,
    O: OverrideStore + Send + Sync + 'static,
{
    let token = gate.begin();
    let engine = Arc::clone(engine);
    let gate = Arc::clone(gate);
    let output = output.clone();

    tokio::spawn(async move {
        let schedule = engine.day_schedule(date).await;
        if gate.is_current(token) {
            let _ = output.send(Some(schedule));
        } else {
            debug!(date = %date, "Discarding stale schedule refresh");
        }
    });
}
