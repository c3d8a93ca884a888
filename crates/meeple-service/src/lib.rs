//! # meeple-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AuthResponse, CreateOrderItemRequest, CreateOrderRequest, CreateWishRequest,
    CurrentUserResponse, LoginRequest, MemberDetailResponse, MemberResponse, OrderDetailResponse,
    OrderItemResponse, OrderResponse, OrderWithCountsResponse, RefreshTokenRequest,
    RegisterRequest, UpdateMemberRoleRequest, UpdateOrderItemRequest, UpdateOrderRequest,
    UpdateOrderStatusRequest, UpdateWishStatusRequest, WishResponse, WishWithMemberResponse,
    WishWithOrderResponse,
};
pub use services::{
    AccessGuard, AuthService, CurrentUser, MemberService, OrderService, RedirectTarget,
    RolePromotion, ServiceContext, ServiceContextBuilder, ServiceError, ServiceResult,
    WishService,
};
