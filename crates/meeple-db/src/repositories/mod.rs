//! PostgreSQL repository implementations

mod error;
mod notification;
mod order;
mod order_item;
mod user;
mod wish;

pub use notification::PgNotificationRepository;
pub use order::PgOrderRepository;
pub use order_item::PgOrderItemRepository;
pub use user::PgUserRepository;
pub use wish::PgWishRepository;
