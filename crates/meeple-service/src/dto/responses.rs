//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output. Snowflake IDs
//! are serialized as strings for JavaScript compatibility; monetary values
//! keep their 2-decimal form.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use meeple_core::entities::{OrderStatus, OrderType, UserRole, WishStatus};

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Order Responses
// ============================================================================

/// Basic order response
#[derive(Debug, Clone, Serialize)]
pub struct OrderResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_placed_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_expected_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_fees: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order list entry with child-record counts
#[derive(Debug, Clone, Serialize)]
pub struct OrderWithCountsResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub wish_count: i64,
    pub item_count: i64,
    pub notification_count: i64,
}

/// Full order detail: counts plus embedded wishes and items, newest first
#[derive(Debug, Serialize)]
pub struct OrderDetailResponse {
    #[serde(flatten)]
    pub order: OrderResponse,
    pub wish_count: i64,
    pub item_count: i64,
    pub notification_count: i64,
    pub wishes: Vec<WishWithMemberResponse>,
    pub items: Vec<OrderItemResponse>,
}

// ============================================================================
// Wish Responses
// ============================================================================

/// Basic wish response
#[derive(Debug, Clone, Serialize)]
pub struct WishResponse {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validated_price: Option<Decimal>,
    pub status: WishStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Identity of the member who submitted a wish
#[derive(Debug, Clone, Serialize)]
pub struct WishMemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Wish with its submitting member (admin order detail)
#[derive(Debug, Clone, Serialize)]
pub struct WishWithMemberResponse {
    #[serde(flatten)]
    pub wish: WishResponse,
    pub member: WishMemberResponse,
}

/// Shallow order summary attached to a member's wish
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummaryResponse {
    pub id: String,
    pub title: String,
    pub status: OrderStatus,
}

/// Wish with its order summary (member dashboard)
#[derive(Debug, Clone, Serialize)]
pub struct WishWithOrderResponse {
    #[serde(flatten)]
    pub wish: WishResponse,
    pub order: OrderSummaryResponse,
}

// ============================================================================
// Order Item Responses
// ============================================================================

/// Order item response with allocated cost shares
#[derive(Debug, Clone, Serialize)]
pub struct OrderItemResponse {
    pub id: String,
    pub order_id: String,
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub allocated_customs_fee: Decimal,
    pub allocated_shipping: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Member Responses
// ============================================================================

/// Member list entry with activity counts (admin)
#[derive(Debug, Clone, Serialize)]
pub struct MemberResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub wish_count: i64,
    pub notification_count: i64,
}

/// Member detail with their wishes (admin)
#[derive(Debug, Serialize)]
pub struct MemberDetailResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub wishes: Vec<WishWithOrderResponse>,
    pub wish_count: i64,
    pub notification_count: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Readiness response including a database round-trip
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}
