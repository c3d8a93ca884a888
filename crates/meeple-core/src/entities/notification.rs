//! Notification entity - auxiliary record tied to a user and optionally an order
//!
//! The core only counts notifications and removes them when their order is
//! deleted; delivery and read-tracking live outside this service.

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Notification record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: Snowflake,
    pub user_id: Snowflake,
    pub order_id: Option<Snowflake>,
    pub message: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Create a new unread notification
    pub fn new(id: Snowflake, user_id: Snowflake, order_id: Option<Snowflake>, message: String) -> Self {
        Self {
            id,
            user_id,
            order_id,
            message,
            read_at: None,
            created_at: Utc::now(),
        }
    }

    /// Check whether the notification has been read
    #[inline]
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }
}
