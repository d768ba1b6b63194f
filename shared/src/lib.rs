//! Tender Marketplace Shared Library
//!
//! This crate contains the wire types used by the backend and its clients:
//! domain models, request/response payloads and error taxonomies.

pub mod errors;
pub mod models;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use models::{Application, Company, Tender, User};
pub use types::*;
