use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateReservationRequest, UpdateReservationStatusRequest};
use crate::api::handlers::resource::find_resource;
use crate::domain::models::calendar_date::CalendarDate;
use crate::domain::models::reservation::{NewReservationParams, Reservation, KNOWN_STATUSES};
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_reservation(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
    Json(payload): Json<CreateReservationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let resource = find_resource(&state, &resource_id).await?;

    let start_date = CalendarDate::parse(&payload.start_date)
        .map_err(|_| AppError::Validation("Invalid start_date".into()))?;
    let end_date = CalendarDate::parse(&payload.end_date)
        .map_err(|_| AppError::Validation("Invalid end_date".into()))?;

    if start_date > end_date {
        return Err(AppError::Validation("start_date must not be after end_date".into()));
    }
    if payload.guest_name.trim().is_empty() {
        return Err(AppError::Validation("guest_name must not be empty".into()));
    }
    if let Some(status) = &payload.status {
        check_status(&state, status)?;
    }

    let reservation = Reservation::new(NewReservationParams {
        resource_id: resource.id.clone(),
        guest_name: payload.guest_name,
        start_date,
        end_date,
        status: payload.status,
    });

    let created = if reservation.status == state.config.confirmed_status {
        state.reservation_repo.create_confirmed(&reservation, &state.config.confirmed_status).await
    } else {
        state.reservation_repo.create(&reservation).await
    }
    .inspect_err(|e| log_rejection(&resource.id, e))?;
    info!(
        "Created reservation {} for {} from {} to {} ({})",
        created.id, resource.id, created.start_date, created.end_date, created.status
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    find_resource(&state, &resource_id).await?;
    let reservations = state.reservation_repo.list_by_resource(&resource_id).await?;
    Ok(Json(reservations))
}

pub async fn update_reservation_status(
    State(state): State<Arc<AppState>>,
    Path(reservation_id): Path<String>,
    Json(payload): Json<UpdateReservationStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload.status.trim();
    check_status(&state, status)?;

    let reservation = state.reservation_repo.find_by_id(&reservation_id).await?
        .ok_or(AppError::NotFound("Reservation not found".into()))?;

    let updated = if status == state.config.confirmed_status && reservation.status != status {
        state.reservation_repo.confirm(&reservation_id, status).await
            .inspect_err(|e| log_rejection(&reservation.resource_id, e))?
    } else {
        state.reservation_repo.update_status(&reservation_id, status).await?
    };
    info!("Reservation {} status changed from {} to {}", updated.id, reservation.status, updated.status);
    Ok(Json(updated))
}

pub async fn delete_reservation(
    State(state): State<Arc<AppState>>,
    Path(reservation_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.reservation_repo.delete(&reservation_id).await?;
    info!("Deleted reservation: {}", reservation_id);
    Ok(Json(serde_json::json!({"status": "deleted"})))
}

/// Accepts the built-in statuses and the configured confirmed status, compared exactly.
fn check_status(state: &AppState, status: &str) -> Result<(), AppError> {
    if status.trim().is_empty() {
        return Err(AppError::Validation("status must not be empty".into()));
    }
    if !KNOWN_STATUSES.contains(&status) && status != state.config.confirmed_status {
        return Err(AppError::Validation(format!("Unknown status: {}", status)));
    }
    Ok(())
}

fn log_rejection(resource_id: &str, error: &AppError) {
    if let AppError::Conflict(reason) = error {
        warn!("Reservation rejected for {}: {}", resource_id, reason);
    }
}
