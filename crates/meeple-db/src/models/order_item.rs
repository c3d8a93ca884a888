//! Order item database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the order_items table
#[derive(Debug, Clone, FromRow)]
pub struct OrderItemModel {
    pub id: i64,
    pub order_id: i64,
    pub product_name: String,
    pub product_url: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub allocated_customs_fee: Decimal,
    pub allocated_shipping: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
