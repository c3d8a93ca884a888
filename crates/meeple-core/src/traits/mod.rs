//! Repository ports implemented by the database layer

mod repositories;

pub use repositories::{
    MemberRecord, NotificationRepository, OrderCounts, OrderItemRepository, OrderRepository,
    OrderSummary, RepoResult, UserRepository, WishOfMember, WishRepository, WishWithMember,
};
