//! Database row models

mod notification;
mod order;
mod order_item;
mod user;
mod wish;

pub use notification::NotificationModel;
pub use order::{OrderModel, OrderWithCountsRow};
pub use order_item::OrderItemModel;
pub use user::{MemberRecordRow, UserModel};
pub use wish::{WishModel, WishOfMemberRow, WishWithMemberRow};
