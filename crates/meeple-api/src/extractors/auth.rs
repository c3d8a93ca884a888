//! Authentication extractor
//!
//! Resolves the Bearer token from the Authorization header into the
//! current user. The user record is loaded fresh on every request, so a
//! role change (promotion or demotion) applies to the next request, not
//! at token expiry. Absence of a valid session resolves to a redirect to
//! the login page rather than an error body.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use meeple_service::{CurrentUser, RedirectTarget};

use crate::response::ApiError;
use crate::state::AppState;

/// The authenticated user resolved from the request's Bearer token
#[derive(Debug, Clone)]
pub struct AuthUser(pub CurrentUser);

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header; a missing session is a soft
        // denial that sends the client to the login page
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::Denied(RedirectTarget::Login))?;

        let app_state = AppState::from_ref(state);

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::Denied(RedirectTarget::Login)
            })?;

        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::Denied(RedirectTarget::Login)
        })?;

        // Load the fresh user record so the current role applies
        let user = app_state
            .service_context()
            .user_repo()
            .find_by_id(user_id)
            .await
            .map_err(ApiError::Domain)?
            .ok_or(ApiError::Denied(RedirectTarget::Login))?;

        Ok(AuthUser(CurrentUser::from(&user)))
    }
}
