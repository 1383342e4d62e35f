pub mod analyze;
pub mod error;
pub mod health;

use axum::{
    http::{header, Method, StatusCode},
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::advisor::AppState;

pub fn router(state: AppState) -> Router {
    let server = state.cfg.server.clone();

    let mut router = Router::new()
        .route("/api/analyze", post(analyze::analyze_potential))
        .route("/health", get(health::health_check))
        .with_state(state);

    if server.enable_cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(server.max_upload_bytes))
                .layer(TimeoutLayer::with_status_code(
                    StatusCode::REQUEST_TIMEOUT,
                    Duration::from_secs(server.request_timeout_secs),
                )),
        )
        .layer(TraceLayer::new_for_http())
}
