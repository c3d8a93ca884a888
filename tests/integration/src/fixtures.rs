//! Test fixtures and data generators
//!
//! Provides reusable request/response mirrors for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Member {suffix}"),
            email: format!("member{suffix}@example.com"),
            password: "TestPass123".to_string(),
        }
    }

    /// Registration with a fixed email (for allow-list tests)
    pub fn with_email(email: &str) -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Member {suffix}"),
            email: email.to_string(),
            password: "TestPass123".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub email_verified: bool,
}

/// Create order request
#[derive(Debug, Serialize)]
pub struct CreateOrderRequest {
    #[serde(rename = "type")]
    pub order_type: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customs_fees: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
}

impl CreateOrderRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            order_type: "MONTHLY".to_string(),
            title: format!("Commande {suffix}"),
            description: Some("Batch for the integration tests".to_string()),
            customs_fees: None,
            shipping_cost: None,
        }
    }

    pub fn with_fees(customs: f64, shipping: f64) -> Self {
        Self {
            customs_fees: Some(customs),
            shipping_cost: Some(shipping),
            ..Self::unique()
        }
    }
}

/// Order response
#[derive(Debug, Deserialize)]
pub struct OrderResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: String,
    pub status: String,
    pub title: String,
    pub description: Option<String>,
    pub customs_fees: Option<f64>,
    pub shipping_cost: Option<f64>,
}

/// Order detail response (counts plus embedded children)
#[derive(Debug, Deserialize)]
pub struct OrderDetailResponse {
    pub id: String,
    pub status: String,
    pub wish_count: i64,
    pub item_count: i64,
    pub notification_count: i64,
    pub wishes: Vec<Value>,
    pub items: Vec<OrderItemResponse>,
}

/// Create wish request
#[derive(Debug, Serialize)]
pub struct CreateWishRequest {
    pub product_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    pub quantity: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl CreateWishRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            product_name: format!("Board Game {suffix}"),
            product_url: None,
            quantity: 1,
            estimated_price: Some(59.99),
            comment: None,
        }
    }
}

/// Wish response
#[derive(Debug, Deserialize)]
pub struct WishResponse {
    pub id: String,
    pub order_id: String,
    pub user_id: String,
    pub status: String,
    pub quantity: i32,
    pub validated_price: Option<f64>,
}

/// Create order item request
#[derive(Debug, Serialize)]
pub struct CreateOrderItemRequest {
    pub product_name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

/// Order item response
#[derive(Debug, Deserialize)]
pub struct OrderItemResponse {
    pub id: String,
    pub order_id: String,
    pub quantity: i32,
    pub unit_price: f64,
    pub allocated_customs_fee: f64,
    pub allocated_shipping: f64,
    pub total_price: f64,
}
