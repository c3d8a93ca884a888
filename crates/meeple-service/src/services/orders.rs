//! Order lifecycle service
//!
//! Owns order creation, updates, the status lifecycle, deletion, and the
//! order-item operations that feed cost allocation. Every operation here
//! is admin-gated and checks the guard before touching the store; request
//! validation happens before the first mutating call, so a failed request
//! writes nothing.

use rust_decimal::Decimal;
use tracing::{info, instrument, warn};

use meeple_core::allocation::{allocate_shared_costs, round_money};
use meeple_core::entities::{Order, OrderItem, OrderStatus};

use crate::dto::{
    CreateOrderItemRequest, CreateOrderRequest, OrderDetailResponse, OrderItemResponse,
    OrderResponse, OrderWithCountsResponse, UpdateOrderItemRequest, UpdateOrderRequest,
    UpdateOrderStatusRequest,
};
use meeple_core::Snowflake;

use super::access::{AccessGuard, CurrentUser};
use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Order lifecycle service
pub struct OrderService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> OrderService<'a> {
    /// Create a new OrderService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Create a new order in the `Planning` state
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn create_order(
        &self,
        actor: &CurrentUser,
        request: CreateOrderRequest,
    ) -> ServiceResult<OrderResponse> {
        AccessGuard::require_admin(actor)?;

        let mut order = Order::new(self.ctx.generate_id(), request.order_type, request.title);
        order.description = request.description;
        order.target_date = request.target_date;
        order.customs_fees = request.customs_fees.map(round_money);
        order.shipping_cost = request.shipping_cost.map(round_money);

        self.ctx.order_repo().create(&order).await?;

        info!(order_id = %order.id, order_type = %order.order_type, "Order created");

        Ok(OrderResponse::from(&order))
    }

    /// List all orders with child counts, newest first
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn list_orders(
        &self,
        actor: &CurrentUser,
    ) -> ServiceResult<Vec<OrderWithCountsResponse>> {
        AccessGuard::require_admin(actor)?;

        let orders = self.ctx.order_repo().list_with_counts().await?;
        Ok(orders.into_iter().map(OrderWithCountsResponse::from).collect())
    }

    /// Full order detail: counts plus embedded wishes and items
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn get_order(
        &self,
        actor: &CurrentUser,
        order_id: Snowflake,
    ) -> ServiceResult<OrderDetailResponse> {
        AccessGuard::require_admin(actor)?;

        let order = self.load_order(order_id).await?;
        let counts = self.ctx.order_repo().counts(order_id).await?;
        let wishes = self.ctx.wish_repo().find_by_order(order_id).await?;
        let items = self.ctx.order_item_repo().find_by_order(order_id).await?;

        Ok(OrderDetailResponse {
            order: OrderResponse::from(&order),
            wish_count: counts.wishes,
            item_count: counts.order_items,
            notification_count: counts.notifications,
            wishes: wishes.iter().map(Into::into).collect(),
            items: items.iter().map(Into::into).collect(),
        })
    }

    /// Update an order's fields; a change to the shared costs triggers a
    /// full reallocation of the order's items
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_order(
        &self,
        actor: &CurrentUser,
        order_id: Snowflake,
        request: UpdateOrderRequest,
    ) -> ServiceResult<OrderResponse> {
        AccessGuard::require_admin(actor)?;

        let mut order = self.load_order(order_id).await?;

        let reallocate = request.touches_shared_costs();

        if let Some(order_type) = request.order_type {
            order.order_type = order_type;
        }
        if let Some(status) = request.status {
            self.warn_on_lifecycle_jump(&order, status);
            order.status = status;
        }
        if let Some(title) = request.title {
            order.title = title;
        }
        if let Some(description) = request.description {
            order.description = description;
        }
        if let Some(target_date) = request.target_date {
            order.target_date = target_date;
        }
        if let Some(order_placed_at) = request.order_placed_at {
            order.order_placed_at = order_placed_at;
        }
        if let Some(delivery_expected_at) = request.delivery_expected_at {
            order.delivery_expected_at = delivery_expected_at;
        }
        if let Some(delivered_at) = request.delivered_at {
            order.delivered_at = delivered_at;
        }

        if let Some(customs_fees) = request.customs_fees {
            order.customs_fees = ensure_non_negative("customs_fees", customs_fees)?;
        }
        if let Some(shipping_cost) = request.shipping_cost {
            order.shipping_cost = ensure_non_negative("shipping_cost", shipping_cost)?;
        }

        self.ctx.order_repo().update(&order).await?;

        if reallocate {
            self.reallocate(&order).await?;
        }

        info!(order_id = %order.id, "Order updated");

        Ok(OrderResponse::from(&order))
    }

    /// Set the order's lifecycle status
    ///
    /// The new status is persisted unconditionally (the administrator owns
    /// the sequencing), but out-of-order jumps are logged.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn set_order_status(
        &self,
        actor: &CurrentUser,
        order_id: Snowflake,
        request: UpdateOrderStatusRequest,
    ) -> ServiceResult<OrderResponse> {
        AccessGuard::require_admin(actor)?;

        let mut order = self.load_order(order_id).await?;

        self.warn_on_lifecycle_jump(&order, request.status);
        order.set_status(request.status);
        self.ctx.order_repo().update(&order).await?;

        info!(order_id = %order.id, status = %order.status, "Order status updated");

        Ok(OrderResponse::from(&order))
    }

    /// Delete an order; wishes, items, and notifications go with it in one
    /// transaction
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn delete_order(&self, actor: &CurrentUser, order_id: Snowflake) -> ServiceResult<()> {
        AccessGuard::require_admin(actor)?;

        self.ctx.order_repo().delete(order_id).await?;

        info!(order_id = %order_id, "Order deleted with its wishes and items");

        Ok(())
    }

    // ========================================================================
    // Order items
    // ========================================================================

    /// Add a purchased line item to an order and reallocate shared costs
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn add_order_item(
        &self,
        actor: &CurrentUser,
        order_id: Snowflake,
        request: CreateOrderItemRequest,
    ) -> ServiceResult<OrderItemResponse> {
        AccessGuard::require_admin(actor)?;

        let order = self.load_order(order_id).await?;

        let mut item = OrderItem::new(
            self.ctx.generate_id(),
            order_id,
            request.product_name,
            request.quantity,
            round_money(request.unit_price),
        );
        item.product_url = request.product_url;

        self.ctx.order_item_repo().create(&item).await?;
        self.reallocate(&order).await?;

        // Reload to return the item with its allocated shares
        let item = self
            .ctx
            .order_item_repo()
            .find_by_id(item.id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", item.id.to_string()))?;

        info!(order_id = %order_id, item_id = %item.id, "Order item added");

        Ok(OrderItemResponse::from(&item))
    }

    /// Update a line item and reallocate shared costs
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id))]
    pub async fn update_order_item(
        &self,
        actor: &CurrentUser,
        item_id: Snowflake,
        request: UpdateOrderItemRequest,
    ) -> ServiceResult<OrderItemResponse> {
        AccessGuard::require_admin(actor)?;

        let mut item = self
            .ctx
            .order_item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", item_id.to_string()))?;

        if let Some(product_name) = request.product_name {
            item.product_name = product_name;
        }
        if let Some(product_url) = request.product_url {
            item.product_url = product_url;
        }
        if let Some(quantity) = request.quantity {
            item.quantity = quantity;
        }
        if let Some(unit_price) = request.unit_price {
            item.unit_price = round_money(unit_price);
        }

        self.ctx.order_item_repo().update(&item).await?;

        let order = self.load_order(item.order_id).await?;
        self.reallocate(&order).await?;

        let item = self
            .ctx
            .order_item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", item_id.to_string()))?;

        info!(item_id = %item.id, "Order item updated");

        Ok(OrderItemResponse::from(&item))
    }

    /// Remove a line item and reallocate shared costs over the remainder
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn remove_order_item(
        &self,
        actor: &CurrentUser,
        item_id: Snowflake,
    ) -> ServiceResult<()> {
        AccessGuard::require_admin(actor)?;

        let item = self
            .ctx
            .order_item_repo()
            .find_by_id(item_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order item", item_id.to_string()))?;

        self.ctx.order_item_repo().delete(item_id).await?;

        let order = self.load_order(item.order_id).await?;
        self.reallocate(&order).await?;

        info!(item_id = %item_id, order_id = %item.order_id, "Order item removed");

        Ok(())
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn load_order(&self, order_id: Snowflake) -> ServiceResult<Order> {
        self.ctx
            .order_repo()
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Order", order_id.to_string()))
    }

    /// Recompute every item's cost shares from the order's current fees.
    /// Always from scratch, never patched incrementally.
    async fn reallocate(&self, order: &Order) -> ServiceResult<()> {
        let mut items = self.ctx.order_item_repo().find_by_order(order.id).await?;
        if items.is_empty() {
            return Ok(());
        }

        allocate_shared_costs(&mut items, order.customs_fees, order.shipping_cost);
        self.ctx.order_item_repo().update_allocations(&items).await?;

        Ok(())
    }

    fn warn_on_lifecycle_jump(&self, order: &Order, target: OrderStatus) {
        if order.status != target && !order.status.can_transition_to(target) {
            warn!(
                order_id = %order.id,
                from = %order.status,
                to = %target,
                "Order status set outside the forward lifecycle"
            );
        }
    }
}

fn ensure_non_negative(
    field: &'static str,
    value: Option<Decimal>,
) -> ServiceResult<Option<Decimal>> {
    match value {
        Some(amount) if amount < Decimal::ZERO => {
            Err(ServiceError::validation(format!("{field} cannot be negative")))
        }
        Some(amount) => Ok(Some(round_money(amount))),
        None => Ok(None),
    }
}
