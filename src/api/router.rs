use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, resource, reservation, calendar, picker};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Resources (rooms & tours)
        .route("/api/v1/resources", post(resource::create_resource).get(resource::list_resources))
        .route("/api/v1/resources/{resource_id}", get(resource::get_resource))

        // Reservations
        .route("/api/v1/resources/{resource_id}/reservations", post(reservation::create_reservation).get(reservation::list_reservations))
        .route("/api/v1/reservations/{reservation_id}/status", put(reservation::update_reservation_status))
        .route("/api/v1/reservations/{reservation_id}", delete(reservation::delete_reservation))

        // Availability
        .route("/api/v1/resources/{resource_id}/blocked-dates", get(calendar::get_blocked_dates))
        .route("/api/v1/resources/{resource_id}/calendar", get(calendar::get_calendar))

        // Range picker
        .route("/api/v1/resources/{resource_id}/picker/pick", post(picker::pick))
        .route("/api/v1/resources/{resource_id}/picker/navigate", post(picker::navigate))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
