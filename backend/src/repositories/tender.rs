//! Tender repository for database operations

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tender_marketplace_shared::Tender;

/// Tender record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TenderRecord {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<TenderRecord> for Tender {
    fn from(record: TenderRecord) -> Self {
        Self {
            id: record.id,
            company_id: record.company_id,
            title: record.title,
            description: record.description,
            deadline: record.deadline,
            budget: record.budget,
            created_at: record.created_at,
        }
    }
}

/// Input for creating a tender
#[derive(Debug, Clone)]
pub struct CreateTender {
    pub company_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// Input for updating a tender
#[derive(Debug, Clone)]
pub struct UpdateTender {
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub budget: Option<Decimal>,
}

/// Tender repository for database operations
pub struct TenderRepository;

impl TenderRepository {
    /// One page of tenders, newest first
    pub async fn list_page(pool: &PgPool, limit: i64, offset: i64) -> Result<Vec<TenderRecord>> {
        let records = sqlx::query_as::<_, TenderRecord>(
            r#"
            SELECT id, company_id, title, description, deadline, budget, created_at
            FROM tenders
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// All tenders posted by a company, newest first
    pub async fn list_by_company(pool: &PgPool, company_id: i32) -> Result<Vec<TenderRecord>> {
        let records = sqlx::query_as::<_, TenderRecord>(
            r#"
            SELECT id, company_id, title, description, deadline, budget, created_at
            FROM tenders
            WHERE company_id = $1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(company_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Create a tender if its company exists
    ///
    /// Returns `None`, inserting nothing, when `company_id` names no company.
    pub async fn create(pool: &PgPool, input: CreateTender) -> Result<Option<TenderRecord>> {
        let record = sqlx::query_as::<_, TenderRecord>(
            r#"
            INSERT INTO tenders (company_id, title, description, deadline, budget, created_at)
            SELECT c.id, $2, $3, $4, $5, $6
            FROM companies c
            WHERE c.id = $1
            RETURNING id, company_id, title, description, deadline, budget, created_at
            "#,
        )
        .bind(input.company_id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.deadline)
        .bind(input.budget)
        .bind(input.created_at)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Update a tender by id. Returns `None` if no such tender exists.
    pub async fn update(pool: &PgPool, id: i32, input: UpdateTender) -> Result<Option<TenderRecord>> {
        let record = sqlx::query_as::<_, TenderRecord>(
            r#"
            UPDATE tenders
            SET title = $1, description = $2, deadline = $3, budget = $4
            WHERE id = $5
            RETURNING id, company_id, title, description, deadline, budget, created_at
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.deadline)
        .bind(input.budget)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a tender by id. Returns false if nothing was deleted.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM tenders
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
