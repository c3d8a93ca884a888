//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use meeple_core::entities::{Order, OrderItem, User, Wish};
use meeple_core::traits::{MemberRecord, OrderCounts, OrderSummary, WishOfMember, WishWithMember};

use super::responses::{
    CurrentUserResponse, MemberResponse, OrderItemResponse, OrderResponse, OrderSummaryResponse,
    OrderWithCountsResponse, WishMemberResponse, WishResponse, WishWithMemberResponse,
    WishWithOrderResponse,
};

// ============================================================================
// User Mappers
// ============================================================================

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            email_verified: user.email_verified,
            image: user.image.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for CurrentUserResponse {
    fn from(user: User) -> Self {
        Self::from(&user)
    }
}

impl From<&MemberRecord> for MemberResponse {
    fn from(record: &MemberRecord) -> Self {
        Self {
            id: record.user.id.to_string(),
            name: record.user.name.clone(),
            email: record.user.email.clone(),
            role: record.user.role,
            email_verified: record.user.email_verified,
            image: record.user.image.clone(),
            created_at: record.user.created_at,
            wish_count: record.wish_count,
            notification_count: record.notification_count,
        }
    }
}

// ============================================================================
// Order Mappers
// ============================================================================

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_type: order.order_type,
            status: order.status,
            title: order.title.clone(),
            description: order.description.clone(),
            target_date: order.target_date,
            order_placed_at: order.order_placed_at,
            delivery_expected_at: order.delivery_expected_at,
            delivered_at: order.delivered_at,
            customs_fees: order.customs_fees,
            shipping_cost: order.shipping_cost,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self::from(&order)
    }
}

impl From<(Order, OrderCounts)> for OrderWithCountsResponse {
    fn from((order, counts): (Order, OrderCounts)) -> Self {
        Self {
            order: OrderResponse::from(&order),
            wish_count: counts.wishes,
            item_count: counts.order_items,
            notification_count: counts.notifications,
        }
    }
}

// ============================================================================
// Wish Mappers
// ============================================================================

impl From<&Wish> for WishResponse {
    fn from(wish: &Wish) -> Self {
        Self {
            id: wish.id.to_string(),
            order_id: wish.order_id.to_string(),
            user_id: wish.user_id.to_string(),
            product_name: wish.product_name.clone(),
            product_url: wish.product_url.clone(),
            quantity: wish.quantity,
            estimated_price: wish.estimated_price,
            validated_price: wish.validated_price,
            status: wish.status,
            member_comment: wish.member_comment.clone(),
            admin_comment: wish.admin_comment.clone(),
            created_at: wish.created_at,
            updated_at: wish.updated_at,
        }
    }
}

impl From<Wish> for WishResponse {
    fn from(wish: Wish) -> Self {
        Self::from(&wish)
    }
}

impl From<&WishWithMember> for WishWithMemberResponse {
    fn from(record: &WishWithMember) -> Self {
        Self {
            wish: WishResponse::from(&record.wish),
            member: WishMemberResponse {
                id: record.member_id.to_string(),
                name: record.member_name.clone(),
                email: record.member_email.clone(),
            },
        }
    }
}

impl From<&OrderSummary> for OrderSummaryResponse {
    fn from(summary: &OrderSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            title: summary.title.clone(),
            status: summary.status,
        }
    }
}

impl From<&WishOfMember> for WishWithOrderResponse {
    fn from(record: &WishOfMember) -> Self {
        Self {
            wish: WishResponse::from(&record.wish),
            order: OrderSummaryResponse::from(&record.order),
        }
    }
}

// ============================================================================
// Order Item Mappers
// ============================================================================

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            id: item.id.to_string(),
            order_id: item.order_id.to_string(),
            product_name: item.product_name.clone(),
            product_url: item.product_url.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price,
            allocated_customs_fee: item.allocated_customs_fee,
            allocated_shipping: item.allocated_shipping,
            total_price: item.total_price,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self::from(&item)
    }
}
