//! Order handlers
//!
//! Admin endpoints for the order lifecycle and its purchased line items.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::dto::{
    CreateOrderItemRequest, CreateOrderRequest, OrderDetailResponse, OrderItemResponse,
    OrderResponse, OrderWithCountsResponse, UpdateOrderItemRequest, UpdateOrderRequest,
    UpdateOrderStatusRequest,
};
use meeple_service::OrderService;

use crate::extractors::{AuthUser, ItemIdPath, OrderIdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Create a new order
///
/// POST /api/v1/orders
pub async fn create_order(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    ValidatedJson(request): ValidatedJson<CreateOrderRequest>,
) -> ApiResult<Created<Json<OrderResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.create_order(&actor, request).await?;
    Ok(Created(Json(response)))
}

/// List all orders with child counts
///
/// GET /api/v1/orders
pub async fn list_orders(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Json<Vec<OrderWithCountsResponse>>> {
    let service = OrderService::new(state.service_context());
    let response = service.list_orders(&actor).await?;
    Ok(Json(response))
}

/// Get order detail with wishes and items
///
/// GET /api/v1/orders/{order_id}
pub async fn get_order(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
) -> ApiResult<Json<OrderDetailResponse>> {
    let order_id = path.order_id()?;
    let service = OrderService::new(state.service_context());
    let response = service.get_order(&actor, order_id).await?;
    Ok(Json(response))
}

/// Update an order
///
/// PATCH /api/v1/orders/{order_id}
pub async fn update_order(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateOrderRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let order_id = path.order_id()?;
    let service = OrderService::new(state.service_context());
    let response = service.update_order(&actor, order_id, request).await?;
    Ok(Json(response))
}

/// Set the order lifecycle status
///
/// PUT /api/v1/orders/{order_id}/status
pub async fn set_order_status(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateOrderStatusRequest>,
) -> ApiResult<Json<OrderResponse>> {
    let order_id = path.order_id()?;
    let service = OrderService::new(state.service_context());
    let response = service.set_order_status(&actor, order_id, request).await?;
    Ok(Json(response))
}

/// Delete an order and everything attached to it
///
/// DELETE /api/v1/orders/{order_id}
pub async fn delete_order(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
) -> ApiResult<NoContent> {
    let order_id = path.order_id()?;
    let service = OrderService::new(state.service_context());
    service.delete_order(&actor, order_id).await?;
    Ok(NoContent)
}

/// Add a purchased line item to an order
///
/// POST /api/v1/orders/{order_id}/items
pub async fn add_order_item(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
    ValidatedJson(request): ValidatedJson<CreateOrderItemRequest>,
) -> ApiResult<Created<Json<OrderItemResponse>>> {
    let order_id = path.order_id()?;
    let service = OrderService::new(state.service_context());
    let response = service.add_order_item(&actor, order_id, request).await?;
    Ok(Created(Json(response)))
}

/// Update a purchased line item
///
/// PATCH /api/v1/items/{item_id}
pub async fn update_order_item(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<ItemIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateOrderItemRequest>,
) -> ApiResult<Json<OrderItemResponse>> {
    let item_id = path.item_id()?;
    let service = OrderService::new(state.service_context());
    let response = service.update_order_item(&actor, item_id, request).await?;
    Ok(Json(response))
}

/// Remove a purchased line item
///
/// DELETE /api/v1/items/{item_id}
pub async fn remove_order_item(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<ItemIdPath>,
) -> ApiResult<NoContent> {
    let item_id = path.item_id()?;
    let service = OrderService::new(state.service_context());
    service.remove_order_item(&actor, item_id).await?;
    Ok(NoContent)
}
