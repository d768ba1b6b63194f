//! Application (proposal) repository for database operations

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tender_marketplace_shared::Application;

/// Application record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ApplicationRecord {
    pub id: i32,
    pub tender_id: i32,
    pub company_id: i32,
    pub proposal_text: String,
    pub submitted_at: DateTime<Utc>,
}

impl From<ApplicationRecord> for Application {
    fn from(record: ApplicationRecord) -> Self {
        Self {
            id: record.id,
            tender_id: record.tender_id,
            company_id: record.company_id,
            proposal_text: record.proposal_text,
            submitted_at: record.submitted_at,
        }
    }
}

/// Input for submitting a proposal
#[derive(Debug, Clone)]
pub struct CreateApplication {
    pub tender_id: i32,
    pub company_id: i32,
    pub proposal_text: String,
    pub submitted_at: DateTime<Utc>,
}

/// Application repository for database operations
pub struct ApplicationRepository;

impl ApplicationRepository {
    /// Submit a proposal
    pub async fn create(pool: &PgPool, input: CreateApplication) -> Result<ApplicationRecord> {
        let record = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            INSERT INTO applications (tender_id, company_id, proposal_text, submitted_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, tender_id, company_id, proposal_text, submitted_at
            "#,
        )
        .bind(input.tender_id)
        .bind(input.company_id)
        .bind(&input.proposal_text)
        .bind(input.submitted_at)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// All proposals for a tender, most recent first
    pub async fn list_by_tender(pool: &PgPool, tender_id: i32) -> Result<Vec<ApplicationRecord>> {
        let records = sqlx::query_as::<_, ApplicationRecord>(
            r#"
            SELECT id, tender_id, company_id, proposal_text, submitted_at
            FROM applications
            WHERE tender_id = $1
            ORDER BY submitted_at DESC, id DESC
            "#,
        )
        .bind(tender_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Delete a proposal by id. Returns false if nothing was deleted.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
