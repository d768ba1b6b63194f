//! Error types for the Tender Marketplace application

use thiserror::Error;

/// Authentication error types
///
/// Token failures deliberately collapse into `InvalidToken`: callers never
/// learn whether a token was malformed, forged or expired.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Token missing")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("User not found")]
    UserNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_wire_contract() {
        assert_eq!(AuthError::MissingToken.to_string(), "Token missing");
        assert_eq!(AuthError::InvalidToken.to_string(), "Invalid token");
        assert_eq!(AuthError::InvalidCredentials.to_string(), "Invalid credentials");
        assert_eq!(AuthError::UserNotFound.to_string(), "User not found");
    }
}
