//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::UserRole;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Order not found: {0}")]
    OrderNotFound(Snowflake),

    #[error("Wish not found: {0}")]
    WishNotFound(Snowflake),

    #[error("Order item not found: {0}")]
    OrderItemNotFound(Snowflake),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error on {field}: {message}")]
    FieldInvalid { field: &'static str, message: String },

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Title must be between {min} and {max} characters")]
    TitleLength { min: usize, max: usize },

    #[error("{field} cannot be negative")]
    NegativeAmount { field: &'static str },

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    #[error("Invalid order type: {0}")]
    InvalidOrderType(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Requires {0} role")]
    RoleRequired(UserRole),

    #[error("Wish belongs to another member")]
    NotWishOwner,

    // =========================================================================
    // Conflict / Business Rule Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Wish is already in a terminal status")]
    WishAlreadyClosed,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::OrderNotFound(_) => "UNKNOWN_ORDER",
            Self::WishNotFound(_) => "UNKNOWN_WISH",
            Self::OrderItemNotFound(_) => "UNKNOWN_ORDER_ITEM",

            // Validation
            Self::FieldInvalid { .. } => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::TitleLength { .. } => "INVALID_TITLE_LENGTH",
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidOrderType(_) => "INVALID_ORDER_TYPE",

            // Authorization
            Self::NotAuthenticated => "NOT_AUTHENTICATED",
            Self::RoleRequired(_) => "ROLE_REQUIRED",
            Self::NotWishOwner => "NOT_WISH_OWNER",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::WishAlreadyClosed => "WISH_ALREADY_CLOSED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::OrderNotFound(_)
                | Self::WishNotFound(_)
                | Self::OrderItemNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::FieldInvalid { .. }
                | Self::InvalidEmail
                | Self::TitleLength { .. }
                | Self::NegativeAmount { .. }
                | Self::InvalidStatus(_)
                | Self::InvalidOrderType(_)
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotAuthenticated | Self::RoleRequired(_) | Self::NotWishOwner
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailAlreadyExists | Self::WishAlreadyClosed)
    }
}
