//! Member administration handlers
//!
//! Admin endpoints for the member roster and role management.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::dto::{
    CurrentUserResponse, MemberDetailResponse, MemberResponse, UpdateMemberRoleRequest,
};
use meeple_service::MemberService;

use crate::extractors::{AuthUser, MemberIdPath};
use crate::response::ApiResult;
use crate::state::AppState;

/// List all members with activity counts
///
/// GET /api/v1/members
pub async fn list_members(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Json<Vec<MemberResponse>>> {
    let service = MemberService::new(state.service_context());
    let response = service.list_members(&actor).await?;
    Ok(Json(response))
}

/// Get a member's profile with their wishes
///
/// GET /api/v1/members/{member_id}
pub async fn get_member(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<MemberIdPath>,
) -> ApiResult<Json<MemberDetailResponse>> {
    let member_id = path.member_id()?;
    let service = MemberService::new(state.service_context());
    let response = service.get_member(&actor, member_id).await?;
    Ok(Json(response))
}

/// Set a member's role
///
/// PUT /api/v1/members/{member_id}/role
pub async fn update_member_role(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<MemberIdPath>,
    Json(request): Json<UpdateMemberRoleRequest>,
) -> ApiResult<Json<CurrentUserResponse>> {
    let member_id = path.member_id()?;
    let service = MemberService::new(state.service_context());
    let response = service.update_member_role(&actor, member_id, request).await?;
    Ok(Json(response))
}
