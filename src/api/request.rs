//! Request types for the schedule API.
//!
//! All view endpoints are GET requests parameterized by query string; the
//! reference date always arrives explicitly rather than being read from the
//! server clock.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_date_key;

use super::response::ApiError;

/// Query parameters for the day, week, and month endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateQuery {
    /// The reference date in `YYYY-MM-DD` form.
    pub date: String,
}

impl DateQuery {
    /// Parses the date parameter, mapping bad input to an API error.
    pub fn parse_date(&self) -> Result<NaiveDate, ApiError> {
        parse_date_key(&self.date).ok_or_else(|| ApiError::invalid_date(&self.date))
    }
}

/// Query parameters for the "my schedule" endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDateQuery {
    /// The id of the person whose week is requested.
    pub person_id: String,
    /// The reference date in `YYYY-MM-DD` form.
    pub date: String,
}

impl PersonDateQuery {
    /// Parses the date parameter, mapping bad input to an API error.
    pub fn parse_date(&self) -> Result<NaiveDate, ApiError> {
        parse_date_key(&self.date).ok_or_else(|| ApiError::invalid_date(&self.date))
    }
}
