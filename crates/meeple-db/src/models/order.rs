//! Order database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the orders table
#[derive(Debug, Clone, FromRow)]
pub struct OrderModel {
    pub id: i64,
    pub order_type: String,
    pub status: String,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub order_placed_at: Option<DateTime<Utc>>,
    pub delivery_expected_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub customs_fees: Option<Decimal>,
    pub shipping_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order row joined with child-record counts (admin order list)
#[derive(Debug, Clone, FromRow)]
pub struct OrderWithCountsRow {
    pub id: i64,
    pub order_type: String,
    pub status: String,
    pub title: String,
    pub description: Option<String>,
    pub target_date: Option<DateTime<Utc>>,
    pub order_placed_at: Option<DateTime<Utc>>,
    pub delivery_expected_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub customs_fees: Option<Decimal>,
    pub shipping_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub wish_count: i64,
    pub item_count: i64,
    pub notification_count: i64,
}
