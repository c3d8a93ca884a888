//! Wish database model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;

/// Database model for the wishes table
#[derive(Debug, Clone, FromRow)]
pub struct WishModel {
    pub id: i64,
    pub order_id: i64,
    pub user_id: i64,
    pub product_name: String,
    pub product_url: Option<String>,
    pub quantity: i32,
    pub estimated_price: Option<Decimal>,
    pub validated_price: Option<Decimal>,
    pub status: String,
    pub member_comment: Option<String>,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Wish row joined with the owning member's identity (admin order detail)
#[derive(Debug, Clone, FromRow)]
pub struct WishWithMemberRow {
    pub id: i64,
    pub order_id: i64,
    pub user_id: i64,
    pub product_name: String,
    pub product_url: Option<String>,
    pub quantity: i32,
    pub estimated_price: Option<Decimal>,
    pub validated_price: Option<Decimal>,
    pub status: String,
    pub member_comment: Option<String>,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub member_name: String,
    pub member_email: String,
}

/// Wish row joined with a summary of its order (member dashboard)
#[derive(Debug, Clone, FromRow)]
pub struct WishOfMemberRow {
    pub id: i64,
    pub order_id: i64,
    pub user_id: i64,
    pub product_name: String,
    pub product_url: Option<String>,
    pub quantity: i32,
    pub estimated_price: Option<Decimal>,
    pub validated_price: Option<Decimal>,
    pub status: String,
    pub member_comment: Option<String>,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order_title: String,
    pub order_status: String,
}
