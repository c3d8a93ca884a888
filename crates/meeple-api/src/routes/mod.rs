//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, health, members, orders, wishes};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health, which is
/// mounted separately so probes bypass rate limiting)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(order_routes())
        .merge(wish_routes())
        .merge(member_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
        .route("/users/@me", get(auth::current_user))
}

/// Order routes (admin)
fn order_routes() -> Router<AppState> {
    Router::new()
        // Order CRUD and lifecycle
        .route("/orders", post(orders::create_order))
        .route("/orders", get(orders::list_orders))
        .route("/orders/:order_id", get(orders::get_order))
        .route("/orders/:order_id", patch(orders::update_order))
        .route("/orders/:order_id", delete(orders::delete_order))
        .route("/orders/:order_id/status", put(orders::set_order_status))
        // Purchased line items and cost allocation
        .route("/orders/:order_id/items", post(orders::add_order_item))
        .route("/items/:item_id", patch(orders::update_order_item))
        .route("/items/:item_id", delete(orders::remove_order_item))
}

/// Wish routes
fn wish_routes() -> Router<AppState> {
    Router::new()
        .route("/orders/:order_id/wishes", post(wishes::submit_wish))
        .route("/orders/:order_id/wishes", get(wishes::list_order_wishes))
        .route("/wishes/@me", get(wishes::list_my_wishes))
        .route("/wishes/:wish_id/cancel", post(wishes::cancel_wish))
        .route("/wishes/:wish_id/status", put(wishes::set_wish_status))
}

/// Member administration routes (admin)
fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/members", get(members::list_members))
        .route("/members/:member_id", get(members::get_member))
        .route("/members/:member_id/role", put(members::update_member_role))
}
