//! Route definitions for the Tender Marketplace API
//!
//! Everything under `/api` except `/api/auth` sits behind the auth gateway.

use crate::auth::auth_middleware;
use crate::state::AppState;
use axum::{
    http::{header, Method},
    middleware,
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod applications;
mod auth;
mod companies;
mod extract;
mod health;
mod tenders;

#[cfg(test)]
mod auth_tests;

pub use applications::application_routes;
pub use auth::auth_routes;
pub use companies::company_routes;
pub use tenders::tender_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes(state.clone()))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes
fn api_routes(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .nest("/companies", companies::company_routes())
        .nest("/tenders", tenders::tender_routes())
        .nest("/applications", applications::application_routes())
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .nest("/auth", auth::auth_routes())
        .merge(protected)
}
