//! Authentication gateway
//!
//! Every protected request is either verified, with its identity injected
//! into the request extensions, or rejected before reaching a handler:
//! no token is 403, a token that fails verification is 401.

use crate::auth::JwtService;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::{FromRef, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use tender_marketplace_shared::AuthError;

/// Identity resolved from a verified token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: i32,
}

/// Extract the token from `Authorization: Bearer <token>`
///
/// The token is the second whitespace-separated segment of the header.
/// A header without one counts as a missing token.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split_whitespace().nth(1))
        .ok_or(AuthError::MissingToken)
}

/// Resolve the caller's identity from request headers
pub fn authenticate(jwt: &JwtService, headers: &HeaderMap) -> Result<AuthUser, AuthError> {
    let token = bearer_token(headers)?;
    let claims = jwt.verify(token)?;
    Ok(AuthUser {
        user_id: claims.user_id,
    })
}

/// Gateway middleware for a group of protected routes
///
/// Apply with `axum::middleware::from_fn_with_state`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let user = authenticate(state.jwt(), request.headers()).map_err(|e| {
        tracing::debug!(path = %request.uri().path(), reason = %e, "Request rejected by auth gateway");
        ApiError::from(e)
    })?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Handlers take the injected identity as an extractor. Outside the gateway
/// layer the same verification runs inline.
#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(user) = parts.extensions.get::<AuthUser>() {
            return Ok(*user);
        }

        let app_state = AppState::from_ref(state);
        authenticate(app_state.jwt(), &parts.headers).map_err(ApiError::from)
    }
}
