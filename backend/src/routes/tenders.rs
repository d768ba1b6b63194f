//! Tender API routes

use crate::error::ApiResult;
use crate::routes::extract::{ApiJson, ApiPath, ApiQuery};
use crate::services::TenderService;
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use tender_marketplace_shared::{
    CreateTenderRequest, MessageResponse, Tender, TenderListQuery, UpdateTenderRequest,
};

/// Create tender routes
pub fn tender_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tenders).post(create_tender))
        .route("/company/:company_id", get(list_company_tenders))
        .route("/:id", put(update_tender).delete(delete_tender))
}

/// GET /api/tenders?page=&limit= - Paginated tenders, newest first
async fn list_tenders(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TenderListQuery>,
) -> ApiResult<Json<Vec<Tender>>> {
    let tenders = TenderService::list(state.db(), &query).await?;
    Ok(Json(tenders))
}

/// GET /api/tenders/company/:companyId - Tenders posted by one company
async fn list_company_tenders(
    State(state): State<AppState>,
    ApiPath(company_id): ApiPath<i32>,
) -> ApiResult<Json<Vec<Tender>>> {
    let tenders = TenderService::list_by_company(state.db(), company_id).await?;
    Ok(Json(tenders))
}

/// POST /api/tenders - Post a tender
async fn create_tender(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateTenderRequest>,
) -> ApiResult<(StatusCode, Json<Tender>)> {
    let tender = TenderService::create(state.db(), req).await?;
    Ok((StatusCode::CREATED, Json(tender)))
}

/// PUT /api/tenders/:id - Update a tender
async fn update_tender(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<UpdateTenderRequest>,
) -> ApiResult<Json<Tender>> {
    let tender = TenderService::update(state.db(), id, req).await?;
    Ok(Json(tender))
}

/// DELETE /api/tenders/:id - Delete a tender
async fn delete_tender(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    TenderService::delete(state.db(), id).await?;
    Ok(Json(MessageResponse::new("Tender deleted successfully")))
}
