//! Business logic services
//!
//! Services validate input, call repositories and map store outcomes to
//! API error kinds.

pub mod application;
pub mod company;
pub mod tender;
pub mod user;

pub use application::ApplicationService;
pub use company::{CompanyService, Upserted};
pub use tender::TenderService;
pub use user::UserService;
