//! Order entity <-> model mapper

use meeple_core::entities::{Order, OrderStatus, OrderType};
use meeple_core::traits::OrderCounts;
use meeple_core::{DomainError, Snowflake};

use crate::models::{OrderModel, OrderWithCountsRow};

impl TryFrom<OrderModel> for Order {
    type Error = DomainError;

    fn try_from(model: OrderModel) -> Result<Self, Self::Error> {
        let order_type: OrderType = model
            .order_type
            .parse()
            .map_err(|e: String| DomainError::DatabaseError(format!("corrupt order row: {e}")))?;
        let status: OrderStatus = model
            .status
            .parse()
            .map_err(|e: String| DomainError::DatabaseError(format!("corrupt order row: {e}")))?;

        Ok(Order {
            id: Snowflake::new(model.id),
            order_type,
            status,
            title: model.title,
            description: model.description,
            target_date: model.target_date,
            order_placed_at: model.order_placed_at,
            delivery_expected_at: model.delivery_expected_at,
            delivered_at: model.delivered_at,
            customs_fees: model.customs_fees,
            shipping_cost: model.shipping_cost,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<OrderWithCountsRow> for (Order, OrderCounts) {
    type Error = DomainError;

    fn try_from(row: OrderWithCountsRow) -> Result<Self, Self::Error> {
        let counts = OrderCounts {
            wishes: row.wish_count,
            order_items: row.item_count,
            notifications: row.notification_count,
        };

        let order = Order::try_from(OrderModel {
            id: row.id,
            order_type: row.order_type,
            status: row.status,
            title: row.title,
            description: row.description,
            target_date: row.target_date,
            order_placed_at: row.order_placed_at,
            delivery_expected_at: row.delivery_expected_at,
            delivered_at: row.delivered_at,
            customs_fees: row.customs_fees,
            shipping_cost: row.shipping_cost,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;

        Ok((order, counts))
    }
}
