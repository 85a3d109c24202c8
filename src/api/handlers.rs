//! HTTP request handlers for the schedule API.
//!
//! This module contains the handler functions for all view endpoints.
//! Provider failures never surface here: the engine degrades the affected
//! layer and the handlers always return a structurally valid schedule.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::providers::{OverrideStore, RosterProvider, RuleStore};
use crate::schedule::split_staff;

use super::request::{DateQuery, PersonDateQuery};
use super::response::{ApiError, DayView, MonthView, MyScheduleView, WeekView};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router<R, S, O>(state: AppState<R, S, O>) -> Router
where
    R: RosterProvider + Send + Sync + 'static,
    S: RuleStore + Send + Sync + 'static,
    O: OverrideStore + Send + Sync + 'static,
{
    Router::new()
        .route("/schedule/day", get(day_handler::<R, S, O>))
        .route("/schedule/week", get(week_handler::<R, S, O>))
        .route("/schedule/month", get(month_handler::<R, S, O>))
        .route("/schedule/my", get(my_schedule_handler::<R, S, O>))
        .with_state(state)
}

/// Handler for GET /schedule/day.
async fn day_handler<R, S, O>(
    State(state): State<AppState<R, S, O>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response
where
    R: RosterProvider + Send + Sync + 'static,
    S: RuleStore + Send + Sync + 'static,
    O: OverrideStore + Send + Sync + 'static,
{
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing day schedule request");

    let query = match unwrap_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let date = match query.parse_date() {
        Ok(date) => date,
        Err(error) => return invalid_date_response(correlation_id, &query.date, error),
    };

    let (schedule, groups) = state.engine().day_schedule_with_groups(date).await;
    info!(
        correlation_id = %correlation_id,
        date = %date,
        staff_count = schedule.staff.len(),
        "Day schedule resolved"
    );
    ok_json(DayView::from_parts(schedule, groups))
}

/// Handler for GET /schedule/week.
async fn week_handler<R, S, O>(
    State(state): State<AppState<R, S, O>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response
where
    R: RosterProvider + Send + Sync + 'static,
    S: RuleStore + Send + Sync + 'static,
    O: OverrideStore + Send + Sync + 'static,
{
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing week schedule request");

    let query = match unwrap_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let date = match query.parse_date() {
        Ok(date) => date,
        Err(error) => return invalid_date_response(correlation_id, &query.date, error),
    };

    let config = state.engine().config().clone();
    let days = state
        .engine()
        .week_schedule(date)
        .await
        .into_iter()
        .map(|schedule| {
            let groups = split_staff(&schedule.staff, schedule.date, &config);
            DayView::from_parts(schedule, groups)
        })
        .collect();
    info!(correlation_id = %correlation_id, date = %date, "Week schedule resolved");
    ok_json(WeekView { days })
}

/// Handler for GET /schedule/month.
async fn month_handler<R, S, O>(
    State(state): State<AppState<R, S, O>>,
    query: Result<Query<DateQuery>, QueryRejection>,
) -> Response
where
    R: RosterProvider + Send + Sync + 'static,
    S: RuleStore + Send + Sync + 'static,
    O: OverrideStore + Send + Sync + 'static,
{
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month schedule request");

    let query = match unwrap_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let date = match query.parse_date() {
        Ok(date) => date,
        Err(error) => return invalid_date_response(correlation_id, &query.date, error),
    };

    let month = state.engine().month_schedule(date).await;
    info!(
        correlation_id = %correlation_id,
        date = %date,
        day_count = month.days.len(),
        "Month schedule resolved"
    );
    ok_json(MonthView::from(month))
}

/// Handler for GET /schedule/my.
async fn my_schedule_handler<R, S, O>(
    State(state): State<AppState<R, S, O>>,
    query: Result<Query<PersonDateQuery>, QueryRejection>,
) -> Response
where
    R: RosterProvider + Send + Sync + 'static,
    S: RuleStore + Send + Sync + 'static,
    O: OverrideStore + Send + Sync + 'static,
{
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing my-schedule request");

    let query = match unwrap_query(query, correlation_id) {
        Ok(query) => query,
        Err(response) => return response,
    };
    let date = match query.parse_date() {
        Ok(date) => date,
        Err(error) => return invalid_date_response(correlation_id, &query.date, error),
    };

    let days = state.engine().my_schedule(&query.person_id, date).await;
    info!(
        correlation_id = %correlation_id,
        person_id = %query.person_id,
        date = %date,
        "My schedule resolved"
    );
    ok_json(MyScheduleView {
        person_id: query.person_id,
        days,
    })
}

/// Unwraps the query extractor, mapping rejections to a 400 response.
fn unwrap_query<T>(query: Result<Query<T>, QueryRejection>, correlation_id: Uuid) -> Result<T, Response> {
    match query {
        Ok(Query(query)) => Ok(query),
        Err(rejection) => {
            let body_text = rejection.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "Query rejection"
            );
            Err(bad_request(ApiError::bad_query(body_text)))
        }
    }
}

fn invalid_date_response(correlation_id: Uuid, value: &str, error: ApiError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        date = %value,
        "Invalid date parameter"
    );
    bad_request(error)
}

fn bad_request(error: ApiError) -> Response {
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}

fn ok_json<T: serde::Serialize>(payload: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(payload),
    )
        .into_response()
}
