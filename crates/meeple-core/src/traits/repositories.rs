//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs from the store; the database
//! layer provides the implementation. Aggregate counts are computed by the
//! store, not by walking collections in memory.

use async_trait::async_trait;

use crate::entities::{Notification, Order, OrderItem, OrderStatus, User, UserRole, Wish};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Aggregate records
// ============================================================================

/// Child-record counts for an order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderCounts {
    pub wishes: i64,
    pub order_items: i64,
    pub notifications: i64,
}

/// A user together with their activity counts (admin member list)
#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub user: User,
    pub wish_count: i64,
    pub notification_count: i64,
}

/// A wish joined with the identifying fields of its owning member
#[derive(Debug, Clone)]
pub struct WishWithMember {
    pub wish: Wish,
    pub member_id: Snowflake,
    pub member_name: String,
    pub member_email: String,
}

/// Shallow order fields attached to a member's wish listing
#[derive(Debug, Clone)]
pub struct OrderSummary {
    pub id: Snowflake,
    pub title: String,
    pub status: OrderStatus,
}

/// A wish joined with a summary of the order it belongs to
#[derive(Debug, Clone)]
pub struct WishOfMember {
    pub wish: Wish,
    pub order: OrderSummary,
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by email (matched case-insensitively)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if an email is already taken (case-insensitive)
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user
    async fn create(&self, user: &User, password_hash: &str) -> RepoResult<()>;

    /// Update an existing user's profile fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Set a user's role
    async fn update_role(&self, id: Snowflake, role: UserRole) -> RepoResult<()>;

    /// Get the stored password hash for authentication
    async fn get_password_hash(&self, id: Snowflake) -> RepoResult<Option<String>>;

    /// List all users with their wish/notification counts, newest first
    async fn list_with_counts(&self) -> RepoResult<Vec<MemberRecord>>;
}

// ============================================================================
// Order Repository
// ============================================================================

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Find order by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Order>>;

    /// List all orders with child counts, newest first
    async fn list_with_counts(&self) -> RepoResult<Vec<(Order, OrderCounts)>>;

    /// Child counts for one order
    async fn counts(&self, order_id: Snowflake) -> RepoResult<OrderCounts>;

    /// Create a new order
    async fn create(&self, order: &Order) -> RepoResult<()>;

    /// Update an existing order
    async fn update(&self, order: &Order) -> RepoResult<()>;

    /// Delete an order and all of its wishes, order items, and
    /// notifications in one transaction (all-or-nothing)
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Wish Repository
// ============================================================================

#[async_trait]
pub trait WishRepository: Send + Sync {
    /// Find wish by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Wish>>;

    /// List an order's wishes with member identities, newest first
    async fn find_by_order(&self, order_id: Snowflake) -> RepoResult<Vec<WishWithMember>>;

    /// List a member's wishes with order summaries, newest first
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<WishOfMember>>;

    /// Create a new wish
    async fn create(&self, wish: &Wish) -> RepoResult<()>;

    /// Update a wish's mutable fields (status, validated price, comments)
    async fn update(&self, wish: &Wish) -> RepoResult<()>;
}

// ============================================================================
// Order Item Repository
// ============================================================================

#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// Find order item by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<OrderItem>>;

    /// List an order's items, newest first
    async fn find_by_order(&self, order_id: Snowflake) -> RepoResult<Vec<OrderItem>>;

    /// Create a new order item
    async fn create(&self, item: &OrderItem) -> RepoResult<()>;

    /// Update an existing order item
    async fn update(&self, item: &OrderItem) -> RepoResult<()>;

    /// Delete an order item
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;

    /// Persist recomputed allocation shares for a batch of items in one
    /// transaction, so a reallocation pass is never half-applied
    async fn update_allocations(&self, items: &[OrderItem]) -> RepoResult<()>;
}

// ============================================================================
// Notification Repository
// ============================================================================

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    /// Count notifications for a user
    async fn count_by_user(&self, user_id: Snowflake) -> RepoResult<i64>;

    /// Count notifications attached to an order
    async fn count_by_order(&self, order_id: Snowflake) -> RepoResult<i64>;

    /// Create a notification
    async fn create(&self, notification: &Notification) -> RepoResult<()>;
}
