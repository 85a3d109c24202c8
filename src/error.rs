//! Error types for the Staff Schedule Resolution Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during schedule resolution.
//!
//! Missing data is deliberately not represented here: an absent override
//! document, a rule that matches nobody, or an empty roster slice all fall
//! through to the next precedence layer and produce a valid (possibly
//! all-default) schedule.

use std::fmt;

/// The main error type for the Staff Schedule Resolution Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use schedule_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/engine.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/engine.yaml");
/// ```
#[derive(Debug)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A date string did not match the `YYYY-MM-DD` key format.
    InvalidDateKey {
        /// The value that failed to parse.
        value: String,
    },

    /// An external data provider (roster, rule store, override store) failed.
    ///
    /// The engine never propagates this to a view: the failed layer is
    /// replaced with an empty collection and the schedule degrades to the
    /// best known answer.
    ProviderFailure {
        /// The name of the provider that failed.
        source: String,
        /// A description of the failure.
        message: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::ConfigNotFound { path } => {
                write!(f, "Configuration file not found: {path}")
            }
            EngineError::ConfigParseError { path, message } => {
                write!(f, "Failed to parse configuration file '{path}': {message}")
            }
            EngineError::InvalidDateKey { value } => {
                write!(f, "Invalid date key: '{value}'")
            }
            EngineError::ProviderFailure { source, message } => {
                write!(f, "Provider '{source}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
