//! Wish service
//!
//! Members submit, list, and cancel their own wishes; admins review them
//! with the wish status machine, optionally recording a validated price.

use tracing::{info, instrument, warn};

use meeple_core::allocation::round_money;
use meeple_core::entities::{Wish, WishStatus};
use meeple_core::{DomainError, Snowflake};

use crate::dto::{
    CreateWishRequest, UpdateWishStatusRequest, WishResponse, WishWithMemberResponse,
    WishWithOrderResponse,
};

use super::access::{AccessGuard, CurrentUser};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Wish service
pub struct WishService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WishService<'a> {
    /// Create a new WishService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Submit a wish to an order (any authenticated member)
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn submit_wish(
        &self,
        actor: &CurrentUser,
        order_id: Snowflake,
        request: CreateWishRequest,
    ) -> ServiceResult<WishResponse> {
        // Wishes always attach to an existing order
        let order = self
            .ctx
            .order_repo()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id.to_string()))?;

        let mut wish = Wish::new(
            self.ctx.generate_id(),
            order.id,
            actor.id,
            request.product_name,
            request.quantity,
        );
        wish.product_url = request.product_url;
        wish.estimated_price = request.estimated_price.map(round_money);
        wish.member_comment = request.comment;

        self.ctx.wish_repo().create(&wish).await?;

        info!(wish_id = %wish.id, order_id = %order.id, "Wish submitted");

        Ok(WishResponse::from(&wish))
    }

    /// List the authenticated member's wishes with order summaries
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_my_wishes(
        &self,
        actor: &CurrentUser,
    ) -> ServiceResult<Vec<WishWithOrderResponse>> {
        let wishes = self.ctx.wish_repo().find_by_user(actor.id).await?;
        Ok(wishes.iter().map(Into::into).collect())
    }

    /// List an order's wishes with member identities (admin)
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_order_wishes(
        &self,
        actor: &CurrentUser,
        order_id: Snowflake,
    ) -> ServiceResult<Vec<WishWithMemberResponse>> {
        AccessGuard::require_admin(actor)?;

        let wishes = self.ctx.wish_repo().find_by_order(order_id).await?;
        Ok(wishes.iter().map(Into::into).collect())
    }

    /// Cancel one's own wish; only reachable while the wish is not in a
    /// terminal status
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn cancel_wish(
        &self,
        actor: &CurrentUser,
        wish_id: Snowflake,
    ) -> ServiceResult<WishResponse> {
        let mut wish = self.load_wish(wish_id).await?;

        if wish.user_id != actor.id {
            return Err(ServiceError::Domain(DomainError::NotWishOwner));
        }
        if !wish.is_cancellable() {
            return Err(ServiceError::Domain(DomainError::WishAlreadyClosed));
        }

        wish.set_status(WishStatus::Cancelled, None);
        self.ctx.wish_repo().update(&wish).await?;

        info!(wish_id = %wish.id, "Wish cancelled by its member");

        Ok(WishResponse::from(&wish))
    }

    /// Review a wish: set its status and, typically when validating,
    /// record the validated price (admin)
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn set_wish_status(
        &self,
        actor: &CurrentUser,
        wish_id: Snowflake,
        request: UpdateWishStatusRequest,
    ) -> ServiceResult<WishResponse> {
        AccessGuard::require_admin(actor)?;

        let mut wish = self.load_wish(wish_id).await?;

        if wish.status != request.status && !wish.status.can_transition_to(request.status) {
            warn!(
                wish_id = %wish.id,
                from = %wish.status,
                to = %request.status,
                "Wish status set outside the review flow"
            );
        }
        if request.status == WishStatus::Validated
            && request.validated_price.is_none()
            && wish.validated_price.is_none()
        {
            warn!(wish_id = %wish.id, "Wish validated without a validated price");
        }

        wish.set_status(request.status, request.validated_price.map(round_money));
        if let Some(admin_comment) = request.admin_comment {
            wish.admin_comment = Some(admin_comment);
        }

        self.ctx.wish_repo().update(&wish).await?;

        info!(wish_id = %wish.id, status = %wish.status, "Wish reviewed");

        Ok(WishResponse::from(&wish))
    }

    async fn load_wish(&self, wish_id: Snowflake) -> ServiceResult<Wish> {
        self.ctx
            .wish_repo()
            .find_by_id(wish_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Wish", wish_id.to_string()))
    }
}
