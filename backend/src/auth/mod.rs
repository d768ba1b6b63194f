//! Authentication module
//!
//! Provides JWT-based authentication with bcrypt password hashing.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, JwtService};
pub use middleware::{auth_middleware, authenticate, bearer_token, AuthUser};
pub use password::PasswordService;
