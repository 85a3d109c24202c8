//! Engine configuration.
//!
//! This module provides the status vocabulary and grouping configuration
//! used by the resolution and aggregation layers, plus a YAML loader.

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, StatusVocabulary};
