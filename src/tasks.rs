//! Scheduled-task table with a background ticker.
//!
//! Reminder-style follow-ups used to live in ad-hoc per-role timer handles
//! that leaked across session reloads. Here they are an explicit table of
//! due times: callers schedule and cancel entries, and a single background
//! ticker re-evaluates what is due on every tick and hands due tasks to the
//! caller's handler. What the handler does with a due task (and whether
//! anything is delivered anywhere) is entirely the caller's concern.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::debug;
use uuid::Uuid;

/// One scheduled follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask {
    /// Unique identifier, returned by [`TaskTable::schedule`].
    pub id: Uuid,
    /// The instant the task becomes due.
    pub due_at: DateTime<Utc>,
    /// Caller-defined label describing the follow-up.
    pub label: String,
}

/// An explicit table of scheduled tasks.
///
/// # Example
///
/// ```
/// use schedule_engine::tasks::TaskTable;
/// use chrono::{Duration, Utc};
///
/// let table = TaskTable::new();
/// let now = Utc::now();
/// let id = table.schedule(now - Duration::minutes(5), "confirm saturday coverage");
/// table.schedule(now + Duration::hours(2), "review next week's roster");
///
/// let due = table.take_due(now);
/// assert_eq!(due.len(), 1);
/// assert_eq!(due[0].id, id);
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct TaskTable {
    tasks: Mutex<Vec<ScheduledTask>>,
}

impl TaskTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task and returns its id.
    pub fn schedule(&self, due_at: DateTime<Utc>, label: impl Into<String>) -> Uuid {
        let task = ScheduledTask {
            id: Uuid::new_v4(),
            due_at,
            label: label.into(),
        };
        let id = task.id;
        self.tasks
            .lock()
            .expect("task table lock poisoned")
            .push(task);
        id
    }

    /// Removes a task by id. Returns false if no such task exists.
    pub fn cancel(&self, id: Uuid) -> bool {
        let mut tasks = self.tasks.lock().expect("task table lock poisoned");
        let before = tasks.len();
        tasks.retain(|task| task.id != id);
        tasks.len() != before
    }

    /// Removes and returns every task due at or before `now`, earliest
    /// first.
    ///
    /// The reference instant is an explicit argument, so due evaluation is
    /// testable without touching the system clock.
    pub fn take_due(&self, now: DateTime<Utc>) -> Vec<ScheduledTask> {
        let mut tasks = self.tasks.lock().expect("task table lock poisoned");
        let mut due: Vec<_> = tasks.iter().filter(|task| task.due_at <= now).cloned().collect();
        tasks.retain(|task| task.due_at > now);
        due.sort_by_key(|task| task.due_at);
        due
    }

    /// The number of pending tasks.
    pub fn len(&self) -> usize {
        self.tasks.lock().expect("task table lock poisoned").len()
    }

    /// Returns true when no tasks are pending.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Spawns the background ticker that drains due tasks every `period`.
///
/// The returned handle runs until aborted; dropping it does not stop the
/// ticker.
pub fn run_ticker<F>(table: Arc<TaskTable>, period: Duration, mut handler: F) -> JoinHandle<()>
where
    F: FnMut(ScheduledTask) + Send + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        loop {
            ticker.tick().await;
            for task in table.take_due(Utc::now()) {
                debug!(task_id = %task.id, label = %task.label, "Task due");
                handler(task);
            }
        }
    })
}
