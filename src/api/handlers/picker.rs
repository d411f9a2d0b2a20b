use axum::{extract::{State, Path}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{NavigateRequest, PickRequest};
use crate::api::dtos::responses::PickerResponse;
use crate::api::handlers::resource::find_resource;
use crate::domain::services::range_picker::RangePicker;
use crate::error::AppError;
use std::sync::Arc;
use tracing::debug;

/// Applies one click to the client's selection. Booked and past days are
/// refused here and come back with `changed: false`.
pub async fn pick(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Json(payload): Json<PickRequest>,
) -> Result<impl IntoResponse, AppError> {
    find_resource(&state, &resource_id).await?;

    let blocked = state.availability_service.blocked_dates_or_empty(&resource_id).await;
    let mut picker = RangePicker::new(payload.state, blocked);
    let changed = picker.dispatch_pick(payload.date);

    if !changed {
        debug!("Ignored pick on disabled day {} for {}", payload.date, resource_id);
    }

    let response = PickerResponse::new(resource_id, picker.state().clone(), changed, picker.blocked());
    Ok(Json(response))
}

pub async fn navigate(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Json(payload): Json<NavigateRequest>,
) -> Result<impl IntoResponse, AppError> {
    find_resource(&state, &resource_id).await?;

    let blocked = state.availability_service.blocked_dates_or_empty(&resource_id).await;
    let mut picker = RangePicker::new(payload.state, blocked);
    let before = picker.state().visible_month();
    picker.navigate_month(payload.delta);
    let changed = picker.state().visible_month() != before;

    let response = PickerResponse::new(resource_id, picker.state().clone(), changed, picker.blocked());
    Ok(Json(response))
}
