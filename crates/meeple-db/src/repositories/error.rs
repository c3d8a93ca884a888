//! Error handling utilities for repositories

use meeple_core::{DomainError, Snowflake};
use sqlx::Error as SqlxError;

/// Convert a SQLx error to a DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return the given conflict error, falling
/// back to a generic database error otherwise
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create an "order not found" error
pub fn order_not_found(id: Snowflake) -> DomainError {
    DomainError::OrderNotFound(id)
}

/// Create a "wish not found" error
pub fn wish_not_found(id: Snowflake) -> DomainError {
    DomainError::WishNotFound(id)
}

/// Create an "order item not found" error
pub fn order_item_not_found(id: Snowflake) -> DomainError {
    DomainError::OrderItemNotFound(id)
}
