//! Wish handlers
//!
//! Member endpoints for submitting and cancelling wishes, plus the admin
//! review endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use meeple_service::dto::{
    CreateWishRequest, UpdateWishStatusRequest, WishResponse, WishWithMemberResponse,
    WishWithOrderResponse,
};
use meeple_service::WishService;

use crate::extractors::{AuthUser, OrderIdPath, ValidatedJson, WishIdPath};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Submit a wish to an order
///
/// POST /api/v1/orders/{order_id}/wishes
pub async fn submit_wish(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
    ValidatedJson(request): ValidatedJson<CreateWishRequest>,
) -> ApiResult<Created<Json<WishResponse>>> {
    let order_id = path.order_id()?;
    let service = WishService::new(state.service_context());
    let response = service.submit_wish(&actor, order_id, request).await?;
    Ok(Created(Json(response)))
}

/// List an order's wishes with member identities (admin)
///
/// GET /api/v1/orders/{order_id}/wishes
pub async fn list_order_wishes(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<OrderIdPath>,
) -> ApiResult<Json<Vec<WishWithMemberResponse>>> {
    let order_id = path.order_id()?;
    let service = WishService::new(state.service_context());
    let response = service.list_order_wishes(&actor, order_id).await?;
    Ok(Json(response))
}

/// List the authenticated member's wishes
///
/// GET /api/v1/wishes/@me
pub async fn list_my_wishes(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
) -> ApiResult<Json<Vec<WishWithOrderResponse>>> {
    let service = WishService::new(state.service_context());
    let response = service.list_my_wishes(&actor).await?;
    Ok(Json(response))
}

/// Cancel one's own wish
///
/// POST /api/v1/wishes/{wish_id}/cancel
pub async fn cancel_wish(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<WishIdPath>,
) -> ApiResult<Json<WishResponse>> {
    let wish_id = path.wish_id()?;
    let service = WishService::new(state.service_context());
    let response = service.cancel_wish(&actor, wish_id).await?;
    Ok(Json(response))
}

/// Review a wish: set status and optionally the validated price (admin)
///
/// PUT /api/v1/wishes/{wish_id}/status
pub async fn set_wish_status(
    State(state): State<AppState>,
    AuthUser(actor): AuthUser,
    Path(path): Path<WishIdPath>,
    ValidatedJson(request): ValidatedJson<UpdateWishStatusRequest>,
) -> ApiResult<Json<WishResponse>> {
    let wish_id = path.wish_id()?;
    let service = WishService::new(state.service_context());
    let response = service.set_wish_status(&actor, wish_id, request).await?;
    Ok(Json(response))
}
