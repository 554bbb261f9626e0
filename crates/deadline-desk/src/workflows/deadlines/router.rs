use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::calendar::BusinessCalendar;
use super::domain::Holiday;
use super::provider::CalendarProvider;
use crate::error::AppError;

/// Upper bound on a single deadline request, roughly a decade of court days.
pub const MAX_BUSINESS_DAYS: i64 = 2_500;

#[derive(Debug, Deserialize, Serialize)]
pub struct AddBusinessDaysRequest {
    pub start: NaiveDate,
    pub business_days: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct AddBusinessDaysResponse {
    pub start: NaiveDate,
    pub business_days: i64,
    pub deadline: NaiveDate,
    pub skipped_holidays: Vec<Holiday>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CountBusinessDaysRequest {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CountBusinessDaysResponse {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub business_days: i64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NextBusinessDayRequest {
    pub date: NaiveDate,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct NextBusinessDayResponse {
    pub requested: NaiveDate,
    pub date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<Holiday>,
}

#[derive(Debug, Default, Deserialize)]
pub struct HolidayQuery {
    #[serde(default)]
    pub movable: Option<bool>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct HolidayListResponse {
    pub year: i32,
    pub holidays: Vec<Holiday>,
}

/// Router exposing the business-day calculator over HTTP.
pub fn deadline_router(provider: Arc<CalendarProvider>) -> Router {
    Router::new()
        .route("/api/v1/holidays/:year", get(holidays_handler))
        .route("/api/v1/deadlines/add", post(add_business_days_handler))
        .route("/api/v1/deadlines/count", post(count_business_days_handler))
        .route(
            "/api/v1/deadlines/next-business-day",
            post(next_business_day_handler),
        )
        .with_state(provider)
}

pub(crate) async fn holidays_handler(
    State(provider): State<Arc<CalendarProvider>>,
    Path(year): Path<i32>,
    Query(query): Query<HolidayQuery>,
) -> Result<Json<HolidayListResponse>, AppError> {
    if NaiveDate::from_ymd_opt(year, 1, 1).is_none() {
        return Err(AppError::InvalidInput(format!("year {year} is out of range")));
    }

    let include_movable = query
        .movable
        .unwrap_or(provider.settings().include_movable_feasts);
    let holidays = provider.holidays_for_year(year, include_movable);

    Ok(Json(HolidayListResponse { year, holidays }))
}

pub(crate) async fn add_business_days_handler(
    State(provider): State<Arc<CalendarProvider>>,
    Json(request): Json<AddBusinessDaysRequest>,
) -> Result<Json<AddBusinessDaysResponse>, AppError> {
    if request.business_days > MAX_BUSINESS_DAYS {
        return Err(AppError::InvalidInput(format!(
            "business_days must not exceed {MAX_BUSINESS_DAYS}"
        )));
    }

    let body = add_business_days_report(&provider, request.start, request.business_days);
    debug!(start = %body.start, business_days = body.business_days, deadline = %body.deadline, "deadline computed");

    Ok(Json(body))
}

/// Computes a deadline and collects the weekday holidays it stepped over.
pub fn add_business_days_report(
    provider: &CalendarProvider,
    start: NaiveDate,
    business_days: i64,
) -> AddBusinessDaysResponse {
    let calendar = provider.calendar_for_deadline(start, business_days);
    let deadline = calendar.add_business_days(start, business_days);
    let skipped_holidays = calendar
        .holidays()
        .filter(|holiday| holiday.date > start && holiday.date <= deadline)
        .filter(|holiday| !BusinessCalendar::is_weekend(holiday.date))
        .cloned()
        .collect();

    AddBusinessDaysResponse {
        start,
        business_days,
        deadline,
        skipped_holidays,
    }
}

pub(crate) async fn count_business_days_handler(
    State(provider): State<Arc<CalendarProvider>>,
    Json(request): Json<CountBusinessDaysRequest>,
) -> Result<Json<CountBusinessDaysResponse>, AppError> {
    let span_years = (request.end.year() - request.start.year()).abs();
    if i64::from(span_years) * 365 > MAX_BUSINESS_DAYS * 2 {
        return Err(AppError::InvalidInput("date range is too wide".to_string()));
    }

    let calendar = provider.calendar_between(request.start, request.end);
    let business_days = calendar.count_business_days(request.start, request.end);

    Ok(Json(CountBusinessDaysResponse {
        start: request.start,
        end: request.end,
        business_days,
    }))
}

pub(crate) async fn next_business_day_handler(
    State(provider): State<Arc<CalendarProvider>>,
    Json(request): Json<NextBusinessDayRequest>,
) -> Json<NextBusinessDayResponse> {
    let calendar = provider.calendar_for_deadline(request.date, 0);
    let date = calendar.next_business_day(request.date);
    let holiday = calendar.holiday_on(request.date).cloned();

    Json(NextBusinessDayResponse {
        requested: request.date,
        date,
        holiday,
    })
}
