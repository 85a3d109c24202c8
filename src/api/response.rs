//! Response types for the schedule API.
//!
//! This module defines the view payloads returned by the endpoints and the
//! error response structures for the HTTP API.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{DaySchedule, MonthSchedule, ResolvedDayStatus, StaffGroups};

/// A day schedule together with its primary/secondary grouping.
///
/// The full staff list stays intact; the groups are views over it that
/// surface the exceptions to the expected working pattern first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayView {
    /// The date this view covers.
    pub date: NaiveDate,
    /// Supervisor notes for the day, empty if none.
    pub notes: String,
    /// The full resolved staff list, sorted by name.
    pub staff: Vec<ResolvedDayStatus>,
    /// The exceptional subset, surfaced first.
    pub primary: Vec<ResolvedDayStatus>,
    /// The routine majority.
    pub secondary: Vec<ResolvedDayStatus>,
}

impl DayView {
    /// Combines a resolved day schedule with its staff grouping.
    pub fn from_parts(schedule: DaySchedule, groups: StaffGroups) -> Self {
        Self {
            date: schedule.date,
            notes: schedule.notes,
            staff: schedule.staff,
            primary: groups.primary,
            secondary: groups.secondary,
        }
    }
}

/// A week of grouped day views, Sunday through Saturday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeekView {
    /// Exactly seven day views.
    pub days: Vec<DayView>,
}

/// A month of day schedules plus the grid lead-in count.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthView {
    /// Number of blank grid cells before the first day of the month.
    pub leading_blank_days: u32,
    /// One schedule per calendar day, in date order.
    pub days: Vec<DaySchedule>,
}

impl From<MonthSchedule> for MonthView {
    fn from(month: MonthSchedule) -> Self {
        Self {
            leading_blank_days: month.leading_blank_days,
            days: month.days,
        }
    }
}

/// One person's week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MyScheduleView {
    /// The id the week was requested for.
    pub person_id: String,
    /// Exactly seven single-person day schedules.
    pub days: Vec<DaySchedule>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid-date error response.
    pub fn invalid_date(value: &str) -> Self {
        Self::with_details(
            "INVALID_DATE",
            format!("Invalid date: '{}'", value),
            "Dates must use the YYYY-MM-DD format",
        )
    }

    /// Creates a missing-or-malformed-query error response.
    pub fn bad_query(message: impl Into<String>) -> Self {
        Self::new("BAD_QUERY", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidDateKey { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_date(&value),
            },
            EngineError::ProviderFailure { source, message } => ApiErrorResponse {
                status: StatusCode::SERVICE_UNAVAILABLE,
                error: ApiError::with_details(
                    "PROVIDER_FAILURE",
                    format!("Provider '{}' failed", source),
                    message,
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details")); // Should be skipped when None
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_invalid_date_error() {
        let error = ApiError::invalid_date("not-a-date");
        assert_eq!(error.code, "INVALID_DATE");
        assert!(error.message.contains("not-a-date"));
    }

    #[test]
    fn test_engine_error_to_api_error() {
        let engine_error = EngineError::InvalidDateKey {
            value: "bogus".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_DATE");
    }

    #[test]
    fn test_provider_failure_maps_to_service_unavailable() {
        let engine_error = EngineError::ProviderFailure {
            source: "roster".to_string(),
            message: "down".to_string(),
        };
        let api_error: ApiErrorResponse = engine_error.into();
        assert_eq!(api_error.status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_day_view_from_parts_preserves_all_lists() {
        let member = ResolvedDayStatus {
            person_id: "p1".to_string(),
            name: "Alex".to_string(),
            zone_name: String::new(),
            status: "Off".to_string(),
            hours: String::new(),
        };
        let schedule = DaySchedule {
            date: NaiveDate::from_ymd_opt(2024, 2, 7).unwrap(),
            notes: "note".to_string(),
            staff: vec![member.clone()],
        };
        let groups = StaffGroups {
            primary: vec![member],
            secondary: vec![],
        };
        let view = DayView::from_parts(schedule, groups);
        assert_eq!(view.staff.len(), 1);
        assert_eq!(view.primary.len(), 1);
        assert!(view.secondary.is_empty());
        assert_eq!(view.notes, "note");
    }
}
