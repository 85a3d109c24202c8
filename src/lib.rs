//! Staff Schedule Resolution Engine for field-operations rosters.
//!
//! This crate computes the effective daily work status ("Scheduled", "Off",
//! "Vacation", custom) for every person on a roster from three layered inputs
//! (a weekday/weekend default policy, recurring availability rules, and
//! day-specific overrides) and aggregates the per-person results into day,
//! week, month, and single-person schedule views.

#![warn(missing_docs)]

pub mod api;
pub mod calendar;
pub mod config;
pub mod engine;
pub mod error;
pub mod live;
pub mod models;
pub mod providers;
pub mod resolution;
pub mod schedule;
pub mod tasks;
