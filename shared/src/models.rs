//! Data models for the Tender Marketplace application

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Company profile, owned by exactly one user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub id: i32,
    pub name: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub user_id: i32,
}

/// A posted request for proposals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Tender {
    pub id: i32,
    pub company_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<NaiveDate>,
    pub budget: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

/// A proposal submitted by a company against a tender
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Application {
    pub id: i32,
    pub tender_id: i32,
    pub company_id: i32,
    pub proposal_text: String,
    pub submitted_at: DateTime<Utc>,
}
