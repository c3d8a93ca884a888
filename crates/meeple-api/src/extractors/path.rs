//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters.

use meeple_core::Snowflake;

use crate::response::ApiError;

/// Path parameters with order_id
#[derive(Debug, serde::Deserialize)]
pub struct OrderIdPath {
    pub order_id: String,
}

impl OrderIdPath {
    /// Parse order_id as Snowflake
    pub fn order_id(&self) -> Result<Snowflake, ApiError> {
        self.order_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid order_id format"))
    }
}

/// Path parameters with wish_id
#[derive(Debug, serde::Deserialize)]
pub struct WishIdPath {
    pub wish_id: String,
}

impl WishIdPath {
    /// Parse wish_id as Snowflake
    pub fn wish_id(&self) -> Result<Snowflake, ApiError> {
        self.wish_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid wish_id format"))
    }
}

/// Path parameters with item_id
#[derive(Debug, serde::Deserialize)]
pub struct ItemIdPath {
    pub item_id: String,
}

impl ItemIdPath {
    /// Parse item_id as Snowflake
    pub fn item_id(&self) -> Result<Snowflake, ApiError> {
        self.item_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid item_id format"))
    }
}

/// Path parameters with member_id
#[derive(Debug, serde::Deserialize)]
pub struct MemberIdPath {
    pub member_id: String,
}

impl MemberIdPath {
    /// Parse member_id as Snowflake
    pub fn member_id(&self) -> Result<Snowflake, ApiError> {
        self.member_id
            .parse()
            .map_err(|_| ApiError::invalid_path("Invalid member_id format"))
    }
}
