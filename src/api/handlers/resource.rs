use axum::{extract::{State, Path}, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateResourceRequest;
use crate::domain::models::resource::Resource;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_resource(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateResourceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let kind = payload.kind.trim().to_uppercase();
    if !Resource::is_valid_kind(&kind) {
        return Err(AppError::Validation("kind must be ROOM or TOUR".into()));
    }
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".into()));
    }

    let resource = Resource::new(kind, payload.name.trim().to_string());
    let created = state.resource_repo.create(&resource).await?;
    info!("Created {} resource {} ({})", created.kind, created.id, created.name);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_resources(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let resources = state.resource_repo.list().await?;
    Ok(Json(resources))
}

pub async fn get_resource(
    State(state): State<Arc<AppState>>,
    Path(resource_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let resource = find_resource(&state, &resource_id).await?;
    Ok(Json(resource))
}

pub(crate) async fn find_resource(state: &AppState, resource_id: &str) -> Result<Resource, AppError> {
    state.resource_repo.find_by_id(resource_id).await?
        .ok_or(AppError::NotFound("Resource not found".into()))
}
