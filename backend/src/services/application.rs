//! Application (proposal) service

use crate::error::ApiError;
use crate::repositories::{ApplicationRepository, CreateApplication};
use chrono::Utc;
use sqlx::PgPool;
use tender_marketplace_shared::{Application, SubmitApplicationRequest};
use tracing::info;
use validator::Validate;

/// Application service for business logic
pub struct ApplicationService;

impl ApplicationService {
    /// Submit a proposal against a tender
    ///
    /// An unknown tender or company is a bad request.
    pub async fn submit(pool: &PgPool, req: SubmitApplicationRequest) -> Result<Application, ApiError> {
        req.validate()?;

        let input = CreateApplication {
            tender_id: req.tender_id,
            company_id: req.company_id,
            proposal_text: req.proposal_text,
            submitted_at: req.submitted_at.unwrap_or_else(Utc::now),
        };

        let record = ApplicationRepository::create(pool, input)
            .await
            .map_err(|e| {
                ApiError::from_store_with(e, "Proposal already exists", "Invalid tender_id or company_id")
            })?;

        info!(
            application_id = record.id,
            tender_id = record.tender_id,
            company_id = record.company_id,
            "Proposal submitted"
        );
        Ok(record.into())
    }

    /// All proposals for a tender, most recent first
    pub async fn list_for_tender(pool: &PgPool, tender_id: i32) -> Result<Vec<Application>, ApiError> {
        let records = ApplicationRepository::list_by_tender(pool, tender_id)
            .await
            .map_err(ApiError::from_store)?;

        Ok(records.into_iter().map(Application::from).collect())
    }

    /// Delete any proposal by id
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = ApplicationRepository::delete(pool, id)
            .await
            .map_err(ApiError::from_store)?;

        if !deleted {
            return Err(ApiError::NotFound("Proposal not found".to_string()));
        }

        info!(application_id = id, "Proposal deleted");
        Ok(())
    }
}
