use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, delete},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{availability, experience, health};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Experiences
        .route("/api/v1/experiences", post(experience::create_experience).get(experience::list_experiences))
        .route("/api/v1/experiences/{slug}", get(experience::get_experience).put(experience::update_experience).delete(experience::delete_experience))

        // Availability
        .route("/api/v1/availability/bulk", post(availability::bulk_create_availability))
        .route("/api/v1/experiences/{slug}/availability", get(availability::list_seasons))
        .route("/api/v1/experiences/{slug}/availability/{season_id}", delete(availability::delete_season))
        .route("/api/v1/experiences/{slug}/availability/slots", get(availability::get_slots))
        .route("/api/v1/experiences/{slug}/availability/dates", get(availability::get_available_dates))

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
