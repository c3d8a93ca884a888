//! Member administration service
//!
//! Admin-facing views over the member roster and the explicit role toggle.

use tracing::{info, instrument};

use meeple_core::Snowflake;

use crate::dto::{CurrentUserResponse, MemberDetailResponse, MemberResponse, UpdateMemberRoleRequest};

use super::access::{AccessGuard, CurrentUser};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Member administration service
pub struct MemberService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> MemberService<'a> {
    /// Create a new MemberService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all members with wish and notification counts, newest first
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_members(&self, actor: &CurrentUser) -> ServiceResult<Vec<MemberResponse>> {
        AccessGuard::require_admin(actor)?;

        let members = self.ctx.user_repo().list_with_counts().await?;
        Ok(members.iter().map(Into::into).collect())
    }

    /// Member profile with their wishes and order summaries
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get_member(
        &self,
        actor: &CurrentUser,
        member_id: Snowflake,
    ) -> ServiceResult<MemberDetailResponse> {
        AccessGuard::require_admin(actor)?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        let wishes = self.ctx.wish_repo().find_by_user(member_id).await?;
        let notification_count = self.ctx.notification_repo().count_by_user(member_id).await?;

        Ok(MemberDetailResponse {
            id: user.id.to_string(),
            name: user.name,
            email: user.email,
            role: user.role,
            email_verified: user.email_verified,
            image: user.image,
            created_at: user.created_at,
            updated_at: user.updated_at,
            wish_count: wishes.len() as i64,
            wishes: wishes.iter().map(Into::into).collect(),
            notification_count,
        })
    }

    /// Set a member's role (admin action, distinct from the allow-list
    /// promotion that runs at authentication time)
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn update_member_role(
        &self,
        actor: &CurrentUser,
        member_id: Snowflake,
        request: UpdateMemberRoleRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        AccessGuard::require_admin(actor)?;

        self.ctx
            .user_repo()
            .update_role(member_id, request.role)
            .await?;

        let user = self
            .ctx
            .user_repo()
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Member", member_id.to_string()))?;

        info!(member_id = %member_id, role = %user.role, "Member role updated");

        Ok(CurrentUserResponse::from(&user))
    }
}
