//! Tender service

use crate::error::ApiError;
use crate::repositories::{CreateTender, TenderRepository, UpdateTender};
use chrono::Utc;
use sqlx::PgPool;
use tender_marketplace_shared::{CreateTenderRequest, Tender, TenderListQuery, UpdateTenderRequest};
use tracing::info;
use validator::Validate;

/// Tender service for business logic
pub struct TenderService;

impl TenderService {
    /// One page of tenders, newest first
    pub async fn list(pool: &PgPool, query: &TenderListQuery) -> Result<Vec<Tender>, ApiError> {
        let records = TenderRepository::list_page(pool, query.limit, query.offset())
            .await
            .map_err(ApiError::from_store)?;

        Ok(records.into_iter().map(Tender::from).collect())
    }

    /// Tenders posted by one company, newest first
    pub async fn list_by_company(pool: &PgPool, company_id: i32) -> Result<Vec<Tender>, ApiError> {
        let records = TenderRepository::list_by_company(pool, company_id)
            .await
            .map_err(ApiError::from_store)?;

        Ok(records.into_iter().map(Tender::from).collect())
    }

    /// Post a tender for an existing company
    ///
    /// An unknown `company_id` is a bad request and inserts nothing.
    pub async fn create(pool: &PgPool, req: CreateTenderRequest) -> Result<Tender, ApiError> {
        req.validate()?;

        let input = CreateTender {
            company_id: req.company_id,
            title: req.title,
            description: req.description,
            deadline: req.deadline,
            budget: req.budget,
            created_at: req.created_at.unwrap_or_else(Utc::now),
        };

        let record = TenderRepository::create(pool, input)
            .await
            .map_err(|e| ApiError::from_store_with(e, "Tender already exists", "Invalid company_id"))?
            .ok_or_else(|| ApiError::BadRequest("Invalid company_id".to_string()))?;

        info!(tender_id = record.id, company_id = record.company_id, "Tender created");
        Ok(record.into())
    }

    /// Update any tender by id
    pub async fn update(pool: &PgPool, id: i32, req: UpdateTenderRequest) -> Result<Tender, ApiError> {
        req.validate()?;

        let input = UpdateTender {
            title: req.title,
            description: req.description,
            deadline: req.deadline,
            budget: req.budget,
        };

        let record = TenderRepository::update(pool, id, input)
            .await
            .map_err(ApiError::from_store)?
            .ok_or_else(|| ApiError::NotFound("Tender not found".to_string()))?;

        info!(tender_id = id, "Tender updated");
        Ok(record.into())
    }

    /// Delete any tender by id
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = TenderRepository::delete(pool, id)
            .await
            .map_err(ApiError::from_store)?;

        if !deleted {
            return Err(ApiError::NotFound("Tender not found".to_string()));
        }

        info!(tender_id = id, "Tender deleted");
        Ok(())
    }
}
