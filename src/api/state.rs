//! Application state for the schedule API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::ScheduleEngine;

/// Shared application state.
///
/// Wraps the engine in an `Arc` so every handler sees the same providers
/// and configuration. Generic over the engine's providers, so the same
/// router serves in-memory stores in tests and real store adapters in
/// production.
#[derive(Debug)]
pub struct AppState<R, S, O> {
    engine: Arc<ScheduleEngine<R, S, O>>,
}

impl<R, S, O> Clone for AppState<R, S, O> {
    fn clone(&self) -> Self {
        Self {
            engine: Arc::clone(&self.engine),
        }
    }
}

impl<R, S, O> AppState<R, S, O> {
    /// Creates a new application state owning the engine.
    pub fn new(engine: ScheduleEngine<R, S, O>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Creates an application state sharing an already-wrapped engine.
    pub fn from_shared(engine: Arc<ScheduleEngine<R, S, O>>) -> Self {
        Self { engine }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &ScheduleEngine<R, S, O> {
        &self.engine
    }
}
