//! Application (proposal) API routes

use crate::error::ApiResult;
use crate::routes::extract::{ApiJson, ApiPath};
use crate::services::ApplicationService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use tender_marketplace_shared::{Application, MessageResponse, SubmitApplicationRequest};

/// Create application routes
pub fn application_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_application))
        .route("/tender/:tender_id", get(list_tender_applications))
        .route("/:id", delete(delete_application))
}

/// POST /api/applications - Submit a proposal
async fn submit_application(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<SubmitApplicationRequest>,
) -> ApiResult<(StatusCode, Json<Application>)> {
    let application = ApplicationService::submit(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(application)))
}

/// GET /api/applications/tender/:tenderId - Proposals for a tender
async fn list_tender_applications(
    State(state): State<AppState>,
    ApiPath(tender_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<Application>>> {
    let applications = ApplicationService::list_for_tender(state.db(), tender_id).await?;
    Ok(Json(applications))
}

/// DELETE /api/applications/:id - Withdraw a proposal
async fn delete_application(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    ApplicationService::delete(state.db(), id).await?;
    Ok(Json(MessageResponse::new("Proposal deleted successfully")))
}
