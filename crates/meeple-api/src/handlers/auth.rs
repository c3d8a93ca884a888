//! Authentication handlers
//!
//! Endpoints for registration, login, and token refresh.

use axum::{extract::State, Json};
use meeple_service::{AuthService, ServiceContext};
use meeple_service::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

fn service(ctx: &ServiceContext) -> AuthService<'_> {
    AuthService::new(ctx)
}

/// Register a new member account
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<Created<Json<AuthResponse>>> {
    let response = service(state.service_context()).register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = service(state.service_context()).login(request).await?;
    Ok(Json(response))
}

/// Exchange a refresh token for a fresh pair
///
/// POST /api/v1/auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let response = service(state.service_context())
        .refresh_tokens(request)
        .await?;
    Ok(Json(response))
}

/// Logout
///
/// POST /api/v1/auth/logout
///
/// Tokens are stateless; the client drops them. The endpoint exists so the
/// UI has a single sign-out call.
pub async fn logout(_auth: AuthUser) -> NoContent {
    NoContent
}

/// Current authenticated user
///
/// GET /api/v1/users/@me
pub async fn current_user(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let response = service(state.service_context()).me(user.id).await?;
    Ok(Json(response))
}
