//! Notification entity <-> model mapper

use meeple_core::entities::Notification;
use meeple_core::Snowflake;

use crate::models::NotificationModel;

impl From<NotificationModel> for Notification {
    fn from(model: NotificationModel) -> Self {
        Notification {
            id: Snowflake::new(model.id),
            user_id: Snowflake::new(model.user_id),
            order_id: model.order_id.map(Snowflake::new),
            message: model.message,
            read_at: model.read_at,
            created_at: model.created_at,
        }
    }
}
