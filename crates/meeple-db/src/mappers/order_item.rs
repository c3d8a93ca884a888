//! Order item entity <-> model mapper

use meeple_core::entities::OrderItem;
use meeple_core::Snowflake;

use crate::models::OrderItemModel;

impl From<OrderItemModel> for OrderItem {
    fn from(model: OrderItemModel) -> Self {
        OrderItem {
            id: Snowflake::new(model.id),
            order_id: Snowflake::new(model.order_id),
            product_name: model.product_name,
            product_url: model.product_url,
            quantity: model.quantity,
            unit_price: model.unit_price,
            allocated_customs_fee: model.allocated_customs_fee,
            allocated_shipping: model.allocated_shipping,
            total_price: model.total_price,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
