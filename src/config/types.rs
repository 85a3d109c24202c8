//! Configuration types for the schedule resolution engine.
//!
//! The defaults encode the engine's standard vocabulary; a deployment can
//! relabel statuses or extend the off-status set through a YAML file without
//! touching the resolution logic.

use serde::Deserialize;

/// The status labels the engine emits when no rule or override supplies one.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatusVocabulary {
    /// Label for a normally working person (weekday default).
    #[serde(default = "default_scheduled")]
    pub scheduled: String,
    /// Label for a normally non-working person (weekend default).
    #[serde(default = "default_off")]
    pub off: String,
    /// Label for a person absent from the roster in "my schedule" views.
    #[serde(default = "default_not_scheduled")]
    pub not_scheduled: String,
}

fn default_scheduled() -> String {
    "Scheduled".to_string()
}

fn default_off() -> String {
    "Off".to_string()
}

fn default_not_scheduled() -> String {
    "Not Scheduled".to_string()
}

impl Default for StatusVocabulary {
    fn default() -> Self {
        Self {
            scheduled: default_scheduled(),
            off: default_off(),
            not_scheduled: default_not_scheduled(),
        }
    }
}

/// The complete engine configuration.
///
/// # Example
///
/// ```
/// use schedule_engine::config::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.statuses.scheduled, "Scheduled");
/// assert!(config.is_off_status("Vacation"));
/// assert!(!config.is_off_status("Scheduled"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EngineConfig {
    /// Status labels the engine emits itself.
    #[serde(default)]
    pub statuses: StatusVocabulary,
    /// Statuses treated as "not working" by the primary/secondary grouping,
    /// compared case-insensitively.
    #[serde(default = "default_off_statuses")]
    pub off_statuses: Vec<String>,
}

fn default_off_statuses() -> Vec<String> {
    ["off", "sick", "vacation", "no-call-no-show"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            statuses: StatusVocabulary::default(),
            off_statuses: default_off_statuses(),
        }
    }
}

impl EngineConfig {
    /// Returns true if the status label counts as "not working" for grouping.
    ///
    /// Comparison ignores ASCII case, so "Vacation" and "vacation" agree.
    pub fn is_off_status(&self, status: &str) -> bool {
        self.off_statuses.iter().any(|s| s.eq_ignore_ascii_case(status))
    }

    /// Returns true if the status label is the "normally working" label.
    pub fn is_scheduled_status(&self, status: &str) -> bool {
        self.statuses.scheduled.eq_ignore_ascii_case(status)
    }
}
