use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::{BlockedDatesResponse, CalendarResponse};
use crate::api::handlers::resource::find_resource;
use crate::domain::models::calendar_date::{CalendarDate, YearMonth};
use crate::domain::services::month_grid::render_grid;
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;

pub async fn get_blocked_dates(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    find_resource(&state, &resource_id).await?;

    let month = params.get("month").map(|m| YearMonth::parse(m)).transpose()?;
    let blocked = state.availability_service.blocked_dates(&resource_id).await?;

    Ok(Json(BlockedDatesResponse::new(resource_id, month, &blocked)))
}

/// Renders one month for the date-range picker. Query: `month` (YYYY-MM),
/// `min` (defaults to today), `start`, `end`.
pub async fn get_calendar(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    find_resource(&state, &resource_id).await?;

    let min_selectable = match params.get("min") {
        Some(raw) => CalendarDate::parse(raw)?,
        None => CalendarDate::today_in(state.config.timezone),
    };
    let start = params.get("start").map(|s| CalendarDate::parse(s)).transpose()?;
    let end = params.get("end").map(|s| CalendarDate::parse(s)).transpose()?;
    let month = match params.get("month") {
        Some(raw) => YearMonth::parse(raw)?,
        None => YearMonth::of(start.unwrap_or(min_selectable)),
    };

    let blocked = state.availability_service.blocked_dates_or_empty(&resource_id).await;
    let grid = render_grid(month, min_selectable, start, end, &blocked);

    Ok(Json(CalendarResponse::new(resource_id, grid)))
}
