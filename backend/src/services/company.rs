//! Company service
//!
//! Companies are readable and editable by any authenticated user; only the
//! create and owner-upsert operations are scoped to the caller.

use crate::error::ApiError;
use crate::repositories::{contains_pattern, CompanyFields, CompanyRepository};
use sqlx::PgPool;
use tender_marketplace_shared::{Company, CompanyRequest};
use tracing::info;
use validator::Validate;

const ONE_COMPANY_PER_USER: &str = "User already owns a company";
const UNKNOWN_OWNER: &str = "Owner does not exist";

/// Outcome of an owner upsert
#[derive(Debug, Clone, PartialEq)]
pub enum Upserted {
    Created(Company),
    Updated(Company),
}

/// Company service for business logic
pub struct CompanyService;

impl CompanyService {
    /// List companies, optionally only those owned by `user_id`
    pub async fn list(pool: &PgPool, user_id: Option<i32>) -> Result<Vec<Company>, ApiError> {
        let records = match user_id {
            Some(user_id) => CompanyRepository::list_by_owner(pool, user_id).await,
            None => CompanyRepository::list(pool).await,
        }
        .map_err(ApiError::from_store)?;

        Ok(records.into_iter().map(Company::from).collect())
    }

    /// Search name, industry and description for `query`, ignoring case
    pub async fn search(pool: &PgPool, query: &str) -> Result<Vec<Company>, ApiError> {
        let records = CompanyRepository::search(pool, &contains_pattern(query))
            .await
            .map_err(ApiError::from_store)?;

        Ok(records.into_iter().map(Company::from).collect())
    }

    /// Create a company owned by the caller
    pub async fn create(pool: &PgPool, owner_id: i32, req: CompanyRequest) -> Result<Company, ApiError> {
        req.validate()?;

        let record = CompanyRepository::create(pool, owner_id, fields(req))
            .await
            .map_err(|e| ApiError::from_store_with(e, ONE_COMPANY_PER_USER, UNKNOWN_OWNER))?;

        info!(company_id = record.id, user_id = owner_id, "Company created");
        Ok(record.into())
    }

    /// Update any company by id
    pub async fn update(pool: &PgPool, id: i32, req: CompanyRequest) -> Result<Company, ApiError> {
        req.validate()?;

        let record = CompanyRepository::update(pool, id, fields(req))
            .await
            .map_err(ApiError::from_store)?
            .ok_or_else(|| ApiError::NotFound("Company not found".to_string()))?;

        info!(company_id = id, "Company updated");
        Ok(record.into())
    }

    /// Create the caller's company, or update it if one exists
    pub async fn upsert_own(pool: &PgPool, owner_id: i32, req: CompanyRequest) -> Result<Upserted, ApiError> {
        req.validate()?;

        let upserted = CompanyRepository::upsert_for_owner(pool, owner_id, fields(req))
            .await
            .map_err(|e| ApiError::from_store_with(e, ONE_COMPANY_PER_USER, UNKNOWN_OWNER))?;

        let company = Company::from(upserted.company);
        if upserted.inserted {
            info!(company_id = company.id, user_id = owner_id, "Company created by owner upsert");
            Ok(Upserted::Created(company))
        } else {
            info!(company_id = company.id, user_id = owner_id, "Company updated by owner upsert");
            Ok(Upserted::Updated(company))
        }
    }

    /// Delete any company by id
    pub async fn delete(pool: &PgPool, id: i32) -> Result<(), ApiError> {
        let deleted = CompanyRepository::delete(pool, id)
            .await
            .map_err(ApiError::from_store)?;

        if !deleted {
            return Err(ApiError::NotFound("Company not found".to_string()));
        }

        info!(company_id = id, "Company deleted");
        Ok(())
    }
}

fn fields(req: CompanyRequest) -> CompanyFields {
    CompanyFields {
        name: req.name,
        industry: req.industry,
        description: req.description,
        logo_url: req.logo_url,
    }
}
