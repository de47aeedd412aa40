//! Combined router for the dashboard endpoints

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

/// Create the full dashboard router.
///
/// Endpoints:
/// - `GET /` - HTML dashboard page
/// - `GET /health` - liveness probe
/// - `GET /users/all`, `GET /users/find`, `POST /users/add`,
///   `PUT /users/update`, `DELETE /users/remove` - user CRUD
pub fn dashboard_router(state: AppState) -> Router {
    dashboard_router_no_trace(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(
                DefaultOnResponse::new()
                    .level(Level::INFO)
                    .latency_unit(LatencyUnit::Millis),
            ),
    )
}

/// Create the dashboard router without HTTP tracing
///
/// This is the same as `dashboard_router()` but without the HTTP tracing
/// middleware. Use this if you want to add your own tracing middleware.
pub fn dashboard_router_no_trace(state: AppState) -> Router {
    Router::new()
        .route("/", get(super::pages::dashboard))
        .route("/health", get(super::health::health_check))
        .nest("/users", super::users::router())
        .with_state(state)
}
