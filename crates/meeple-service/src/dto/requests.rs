//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input
//! validation. Field constraints mirror the validation rules of the admin
//! order workflow: title 3-100 characters, quantities at least 1, shared
//! costs never negative. Validation messages are surfaced verbatim to the
//! client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use meeple_core::entities::{OrderStatus, OrderType, UserRole, WishStatus};

/// Reject negative monetary amounts (zero is allowed)
fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if *value < Decimal::ZERO {
        let mut error = ValidationError::new("negative_amount");
        error.message = Some("Amount cannot be negative".into());
        return Err(error);
    }
    Ok(())
}

/// Deserialize helper distinguishing an absent field (`None`) from an
/// explicit `null` (`Some(None)`), so updates can clear optional columns.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Order Requests
// ============================================================================

/// Create order request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderRequest {
    #[serde(rename = "type")]
    pub order_type: OrderType,

    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: String,

    pub description: Option<String>,

    /// Deadline for members to submit wishes
    pub target_date: Option<DateTime<Utc>>,

    #[validate(custom(function = "validate_non_negative"))]
    pub customs_fees: Option<Decimal>,

    #[validate(custom(function = "validate_non_negative"))]
    pub shipping_cost: Option<Decimal>,
}

/// Update order request
///
/// Every field is optional; the clearable columns use a two-level `Option`
/// so an explicit `null` clears the stored value while an absent field
/// leaves it untouched. Monetary fields are re-checked for sign by the
/// order service before anything is written.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOrderRequest {
    #[serde(rename = "type")]
    pub order_type: Option<OrderType>,

    pub status: Option<OrderStatus>,

    #[validate(length(min = 3, max = 100, message = "Title must be 3-100 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    pub target_date: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "double_option")]
    pub order_placed_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "double_option")]
    pub delivery_expected_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "double_option")]
    pub delivered_at: Option<Option<DateTime<Utc>>>,

    #[serde(default, deserialize_with = "double_option")]
    pub customs_fees: Option<Option<Decimal>>,

    #[serde(default, deserialize_with = "double_option")]
    pub shipping_cost: Option<Option<Decimal>>,
}

impl UpdateOrderRequest {
    /// Check whether the request touches the shared costs, which forces a
    /// reallocation of the order's items
    #[must_use]
    pub fn touches_shared_costs(&self) -> bool {
        self.customs_fees.is_some() || self.shipping_cost.is_some()
    }
}

/// Update order status request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

// ============================================================================
// Wish Requests
// ============================================================================

/// Submit wish request (member)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWishRequest {
    #[validate(length(min = 1, max = 200, message = "Product name must be 1-200 characters"))]
    pub product_name: String,

    #[validate(length(max = 500, message = "Product URL must be at most 500 characters"))]
    pub product_url: Option<String>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(custom(function = "validate_non_negative"))]
    pub estimated_price: Option<Decimal>,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub comment: Option<String>,
}

/// Update wish status request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateWishStatusRequest {
    pub status: WishStatus,

    #[validate(custom(function = "validate_non_negative"))]
    pub validated_price: Option<Decimal>,

    #[validate(length(max = 1000, message = "Comment must be at most 1000 characters"))]
    pub admin_comment: Option<String>,
}

// ============================================================================
// Order Item Requests
// ============================================================================

/// Create order item request (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderItemRequest {
    #[validate(length(min = 1, max = 200, message = "Product name must be 1-200 characters"))]
    pub product_name: String,

    #[validate(length(max = 500, message = "Product URL must be at most 500 characters"))]
    pub product_url: Option<String>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,

    #[validate(custom(function = "validate_non_negative"))]
    pub unit_price: Decimal,
}

/// Update order item request (admin)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateOrderItemRequest {
    #[validate(length(min = 1, max = 200, message = "Product name must be 1-200 characters"))]
    pub product_name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    pub product_url: Option<Option<String>>,

    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: Option<i32>,

    #[validate(custom(function = "validate_non_negative"))]
    pub unit_price: Option<Decimal>,
}

// ============================================================================
// Member Requests
// ============================================================================

/// Update member role request (admin)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateMemberRoleRequest {
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_order(title: &str, customs_cents: Option<i64>, shipping_cents: Option<i64>) -> CreateOrderRequest {
        CreateOrderRequest {
            order_type: OrderType::Monthly,
            title: title.to_string(),
            description: None,
            target_date: None,
            customs_fees: customs_cents.map(|c| Decimal::new(c, 2)),
            shipping_cost: shipping_cents.map(|c| Decimal::new(c, 2)),
        }
    }

    #[test]
    fn test_title_boundaries() {
        assert!(create_order("ab", None, None).validate().is_err());
        assert!(create_order("abc", None, None).validate().is_ok());
        assert!(create_order(&"x".repeat(100), None, None).validate().is_ok());
        assert!(create_order(&"x".repeat(101), None, None).validate().is_err());
    }

    #[test]
    fn test_negative_fees_rejected() {
        assert!(create_order("Janvier", Some(-1), None).validate().is_err());
        assert!(create_order("Janvier", None, Some(-100)).validate().is_err());
    }

    #[test]
    fn test_zero_fees_accepted() {
        assert!(create_order("Janvier", Some(0), Some(0)).validate().is_ok());
    }

    #[test]
    fn test_validation_error_names_the_field() {
        let errors = create_order("ab", Some(-1), None).validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("customs_fees"));
        assert!(!fields.contains_key("shipping_cost"));
    }

    #[test]
    fn test_update_title_boundaries() {
        let request = UpdateOrderRequest {
            title: Some("ab".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());

        let request = UpdateOrderRequest {
            title: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_distinguishes_absent_from_null() {
        let request: UpdateOrderRequest = serde_json::from_str(r#"{"title": "Mars"}"#).unwrap();
        assert!(request.customs_fees.is_none());
        assert!(!request.touches_shared_costs());

        let request: UpdateOrderRequest =
            serde_json::from_str(r#"{"customs_fees": null}"#).unwrap();
        assert_eq!(request.customs_fees, Some(None));
        assert!(request.touches_shared_costs());

        let request: UpdateOrderRequest =
            serde_json::from_str(r#"{"customs_fees": 40.00}"#).unwrap();
        assert_eq!(request.customs_fees, Some(Some(Decimal::new(4000, 2))));
    }

    #[test]
    fn test_unknown_status_rejected_at_deserialization() {
        let result: Result<UpdateOrderStatusRequest, _> =
            serde_json::from_str(r#"{"status": "SHIPPED"}"#);
        assert!(result.is_err());

        let request: UpdateOrderStatusRequest =
            serde_json::from_str(r#"{"status": "IN_PROGRESS"}"#).unwrap();
        assert_eq!(request.status, OrderStatus::InProgress);
    }

    #[test]
    fn test_wish_quantity_must_be_positive() {
        let wish = CreateWishRequest {
            product_name: "Root".to_string(),
            product_url: None,
            quantity: 0,
            estimated_price: None,
            comment: None,
        };
        assert!(wish.validate().is_err());
    }

    #[test]
    fn test_register_request_bounds() {
        let request = RegisterRequest {
            name: "A".to_string(),
            email: "not-an-email".to_string(),
            password: "short".to_string(),
        };
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
