//! HTTP API module for the Staff Schedule Resolution Engine.
//!
//! This module provides the REST endpoints exposing the day, week, month,
//! and single-person schedule views to the UI layer.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DateQuery, PersonDateQuery};
pub use response::{ApiError, DayView, MonthView, MyScheduleView, WeekView};
pub use state::AppState;
