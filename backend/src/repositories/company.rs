//! Company repository for database operations

use anyhow::Result;
use sqlx::PgPool;
use tender_marketplace_shared::Company;

/// Company record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CompanyRecord {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub user_id: i32,
}

impl From<CompanyRecord> for Company {
    fn from(record: CompanyRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            industry: record.industry,
            description: record.description,
            logo_url: record.logo_url,
            user_id: record.user_id,
        }
    }
}

/// Result of an owner upsert
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UpsertedCompany {
    #[sqlx(flatten)]
    pub company: CompanyRecord,
    /// True when the row was inserted rather than updated
    pub inserted: bool,
}

/// Editable company fields
#[derive(Debug, Clone)]
pub struct CompanyFields {
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
}

/// Company repository for database operations
pub struct CompanyRepository;

impl CompanyRepository {
    /// List all companies, newest first
    pub async fn list(pool: &PgPool) -> Result<Vec<CompanyRecord>> {
        let records = sqlx::query_as::<_, CompanyRecord>(
            r#"
            SELECT id, name, industry, description, logo_url, user_id
            FROM companies
            ORDER BY id DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// List the companies owned by a user, newest first
    pub async fn list_by_owner(pool: &PgPool, user_id: i32) -> Result<Vec<CompanyRecord>> {
        let records = sqlx::query_as::<_, CompanyRecord>(
            r#"
            SELECT id, name, industry, description, logo_url, user_id
            FROM companies
            WHERE user_id = $1
            ORDER BY id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Case-insensitive substring search over name, industry and description
    ///
    /// `pattern` is a complete ILIKE pattern; see [`contains_pattern`].
    pub async fn search(pool: &PgPool, pattern: &str) -> Result<Vec<CompanyRecord>> {
        let records = sqlx::query_as::<_, CompanyRecord>(
            r#"
            SELECT id, name, industry, description, logo_url, user_id
            FROM companies
            WHERE name ILIKE $1 OR industry ILIKE $1 OR description ILIKE $1
            ORDER BY id DESC
            "#,
        )
        .bind(pattern)
        .fetch_all(pool)
        .await?;

        Ok(records)
    }

    /// Create a company owned by `user_id`
    pub async fn create(pool: &PgPool, user_id: i32, fields: CompanyFields) -> Result<CompanyRecord> {
        let record = sqlx::query_as::<_, CompanyRecord>(
            r#"
            INSERT INTO companies (name, industry, description, logo_url, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, industry, description, logo_url, user_id
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.industry)
        .bind(&fields.description)
        .bind(&fields.logo_url)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Update a company by id. Returns `None` if no such company exists.
    pub async fn update(pool: &PgPool, id: i32, fields: CompanyFields) -> Result<Option<CompanyRecord>> {
        let record = sqlx::query_as::<_, CompanyRecord>(
            r#"
            UPDATE companies
            SET name = $1, industry = $2, description = $3, logo_url = $4
            WHERE id = $5
            RETURNING id, name, industry, description, logo_url, user_id
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.industry)
        .bind(&fields.description)
        .bind(&fields.logo_url)
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Create or update the company owned by `user_id` in one statement
    ///
    /// The UNIQUE constraint on `user_id` serializes concurrent calls from the
    /// same owner: exactly one inserts, the rest update. `xmax = 0` holds only
    /// for a freshly inserted tuple.
    pub async fn upsert_for_owner(
        pool: &PgPool,
        user_id: i32,
        fields: CompanyFields,
    ) -> Result<UpsertedCompany> {
        let record = sqlx::query_as::<_, UpsertedCompany>(
            r#"
            INSERT INTO companies (name, industry, description, logo_url, user_id)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE
            SET name = EXCLUDED.name,
                industry = EXCLUDED.industry,
                description = EXCLUDED.description,
                logo_url = EXCLUDED.logo_url
            RETURNING id, name, industry, description, logo_url, user_id,
                      (xmax = 0) AS inserted
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.industry)
        .bind(&fields.description)
        .bind(&fields.logo_url)
        .bind(user_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// Delete a company by id. Returns false if nothing was deleted.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool> {
        let result = sqlx::query(
            r#"
            DELETE FROM companies
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Build an ILIKE pattern matching `query` as a literal substring
///
/// `%`, `_` and the escape character itself are escaped, so user input never
/// acts as a wildcard. An empty query matches every row.
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "%%")]
    #[case("acme", "%acme%")]
    #[case("100%", "%100\\%%")]
    #[case("snake_case", "%snake\\_case%")]
    #[case("back\\slash", "%back\\\\slash%")]
    fn test_contains_pattern(#[case] query: &str, #[case] expected: &str) {
        assert_eq!(contains_pattern(query), expected);
    }
}
