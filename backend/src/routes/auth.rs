//! Authentication routes
//!
//! Registration and login are the only unauthenticated API endpoints.

use crate::error::ApiResult;
use crate::routes::extract::ApiJson;
use crate::services::UserService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use tender_marketplace_shared::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
///
/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    let user = UserService::register(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(RegisterResponse { user })))
}

/// Login with email and password
///
/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let token = UserService::login(state.db(), state.jwt(), req).await?;
    Ok(Json(LoginResponse { token }))
}
