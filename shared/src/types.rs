//! API request and response types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};
use validator::Validate;

use crate::models::User;

/// Default tender page size
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// API error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// Plain confirmation message, returned by delete endpoints
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Auth Types
// ============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "Password must be 1-128 characters"))]
    pub password: String,
}

/// Registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response carrying the identity token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

// ============================================================================
// Company Types
// ============================================================================

/// Company fields accepted by create, update and upsert
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompanyRequest {
    #[validate(length(min = 1, message = "Company name cannot be empty"))]
    pub name: String,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Company list filter
///
/// `?user_id=` with no value lists every company.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanyListQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub user_id: Option<i32>,
}

/// Query values arrive as strings; a blank one means the parameter is unset
fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

/// Company search query
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompanySearchQuery {
    #[serde(default)]
    pub q: String,
}

// ============================================================================
// Tender Types
// ============================================================================

/// Tender creation request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTenderRequest {
    pub company_id: i32,
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<Decimal>,
    /// Defaults to the time of insertion when absent
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Tender update request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateTenderRequest {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub budget: Option<Decimal>,
}

/// Tender pagination query
///
/// `limit` has no upper bound. A `page` below 1 is treated as the first page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TenderListQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    DEFAULT_PAGE_LIMIT
}

impl Default for TenderListQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl TenderListQuery {
    /// Row offset of the requested page
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit)
    }
}

// ============================================================================
// Application Types
// ============================================================================

/// Proposal submission request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    pub tender_id: i32,
    pub company_id: i32,
    #[validate(length(min = 1, message = "Proposal text cannot be empty"))]
    pub proposal_text: String,
    /// Defaults to the time of insertion when absent
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
}
