//! Database repositories
//!
//! Provides data access layer for database operations. Each method runs a
//! single SQL statement.

pub mod application;
pub mod company;
pub mod tender;
pub mod user;

pub use application::{ApplicationRecord, ApplicationRepository, CreateApplication};
pub use company::{contains_pattern, CompanyFields, CompanyRecord, CompanyRepository, UpsertedCompany};
pub use tender::{CreateTender, TenderRecord, TenderRepository, UpdateTender};
pub use user::{UserRecord, UserRepository};
