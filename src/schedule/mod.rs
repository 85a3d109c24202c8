//! Period aggregation for the schedule engine.
//!
//! This module builds the day, week, month, and single-person views by
//! running the resolver across a date range for the whole roster, plus the
//! weekday/weekend-aware primary/secondary grouping used by day and week
//! views. Every aggregation is a pure recomputation from roster + rules +
//! overrides + date range; nothing persists between calls.

mod day_view;
mod grouping;
mod month_view;
mod my_schedule;
mod week_view;

pub use day_view::day_schedule;
pub use grouping::split_staff;
pub use month_view::month_schedule;
pub use my_schedule::my_schedule;
pub use week_view::week_schedule;
