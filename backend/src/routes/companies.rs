//! Company API routes

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::routes::extract::{ApiJson, ApiPath, ApiQuery};
use crate::services::{CompanyService, Upserted};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, put},
    Json, Router,
};
use tender_marketplace_shared::{
    Company, CompanyListQuery, CompanyRequest, CompanySearchQuery, MessageResponse,
};

/// Create company routes
pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_companies).post(create_company).put(upsert_own_company),
        )
        .route("/search", get(search_companies))
        .route("/:id", put(update_company).delete(delete_company))
}

/// GET /api/companies?user_id= - List companies, optionally by owner
async fn list_companies(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CompanyListQuery>,
) -> ApiResult<Json<Vec<Company>>> {
    let companies = CompanyService::list(state.db(), query.user_id).await?;
    Ok(Json(companies))
}

/// POST /api/companies - Create a company owned by the caller
async fn create_company(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CompanyRequest>,
) -> ApiResult<(StatusCode, Json<Company>)> {
    let company = CompanyService::create(state.db(), auth.user_id, req).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// PUT /api/companies - Create or update the caller's own company
///
/// 201 when a company was created, 200 when the existing one was updated.
async fn upsert_own_company(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiJson(req): ApiJson<CompanyRequest>,
) -> ApiResult<Response> {
    let response = match CompanyService::upsert_own(state.db(), auth.user_id, req).await? {
        Upserted::Created(company) => (StatusCode::CREATED, Json(company)).into_response(),
        Upserted::Updated(company) => (StatusCode::OK, Json(company)).into_response(),
    };
    Ok(response)
}

/// GET /api/companies/search?q= - Case-insensitive search
async fn search_companies(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CompanySearchQuery>,
) -> ApiResult<Json<Vec<Company>>> {
    let companies = CompanyService::search(state.db(), &query.q).await?;
    Ok(Json(companies))
}

/// PUT /api/companies/:id - Update a company
async fn update_company(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(req): ApiJson<CompanyRequest>,
) -> ApiResult<Json<Company>> {
    let company = CompanyService::update(state.db(), id, req).await?;
    Ok(Json(company))
}

/// DELETE /api/companies/:id - Delete a company
async fn delete_company(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> ApiResult<Json<MessageResponse>> {
    CompanyService::delete(state.db(), id).await?;
    Ok(Json(MessageResponse::new("Company deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::Uri};
    use rstest::rstest;

    #[rstest]
    #[case("/api/companies", None)]
    #[case("/api/companies?user_id=", None)]
    #[case("/api/companies?user_id=9", Some(9))]
    fn test_list_filter_from_query_string(#[case] uri: &str, #[case] expected: Option<i32>) {
        let uri: Uri = uri.parse().unwrap();
        let Query(query) = Query::<CompanyListQuery>::try_from_uri(&uri).unwrap();
        assert_eq!(query.user_id, expected);
    }

    #[test]
    fn test_non_numeric_user_id_is_rejected() {
        let uri: Uri = "/api/companies?user_id=abc".parse().unwrap();
        assert!(Query::<CompanyListQuery>::try_from_uri(&uri).is_err());
    }
}
