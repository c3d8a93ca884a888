//! API integration tests
//!
//! These tests require a running PostgreSQL instance reachable through the
//! `DATABASE_URL` environment variable (schema migrations are applied on
//! server startup). Without it every test is skipped.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::StatusCode;

/// Register a fresh admin account on a server whose allow-list contains it
async fn register_admin(server: &TestServer, email: &str) -> AuthResponse {
    let request = RegisterRequest::with_email(email);
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.role, "ADMIN", "allow-listed email should be admin");
    auth
}

/// Register a fresh regular member account
async fn register_member(server: &TestServer) -> AuthResponse {
    let request = RegisterRequest::unique();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_json(response, StatusCode::CREATED).await.unwrap()
}

fn admin_email() -> String {
    format!("admin{}@example.com", unique_suffix())
}

// ============================================================================
// Health Checks
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Auth & Role Promotion
// ============================================================================

#[tokio::test]
async fn test_register_and_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "MEMBER");
    assert!(!auth.access_token.is_empty());

    let login = LoginRequest::from_register(&request);
    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(auth.user.email, request.email);
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    server.post("/api/v1/auth/register", &request).await.unwrap();
    let response = server.post("/api/v1/auth/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let login = LoginRequest {
        email: "nonexistent@example.com".to_string(),
        password: "WrongPass123".to_string(),
    };

    let response = server.post("/api/v1/auth/login", &login).await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_allow_listed_email_is_admin_after_first_auth() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();

    // Case differs from the configured allow-list entry on purpose
    let auth = register_admin(&server, &email.to_uppercase()).await;
    assert_eq!(auth.user.role, "ADMIN");

    // A user not on the list stays a member
    let member = register_member(&server).await;
    assert_eq!(member.user.role, "MEMBER");
}

#[tokio::test]
async fn test_refresh_token_flow() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let auth = register_member(&server).await;

    let response = server
        .post(
            "/api/v1/auth/refresh",
            &serde_json::json!({ "refresh_token": auth.refresh_token }),
        )
        .await
        .unwrap();
    let refreshed: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(refreshed.user.id, auth.user.id);
}

// ============================================================================
// Access Guard
// ============================================================================

#[tokio::test]
async fn test_unauthenticated_request_redirects_to_login() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.unwrap();
    let response = server.get("/api/v1/orders").await.unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/login");
}

#[tokio::test]
async fn test_non_admin_is_denied_and_nothing_is_written() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;
    let member = register_member(&server).await;

    let attempted = CreateOrderRequest::unique();

    // The denial is a redirect to the dashboard, not an error body
    let response = server
        .post_auth("/api/v1/orders", &member.access_token, &attempted)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get("location").unwrap(), "/dashboard");

    // No mutation is observable afterwards
    let after: Vec<serde_json::Value> = assert_json(
        server.get_auth("/api/v1/orders", &admin.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(after.iter().all(|order| order["title"] != attempted.title));
}

// ============================================================================
// Order Lifecycle
// ============================================================================

#[tokio::test]
async fn test_create_order_roundtrip() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let request = CreateOrderRequest::with_fees(40.0, 20.0);
    let response = server
        .post_auth("/api/v1/orders", &admin.access_token, &request)
        .await
        .unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Created orders always start in PLANNING with fields intact
    assert_eq!(order.status, "PLANNING");
    assert_eq!(order.order_type, request.order_type);
    assert_eq!(order.title, request.title);
    assert_eq!(order.description, request.description);
    assert_eq!(order.customs_fees, Some(40.0));
    assert_eq!(order.shipping_cost, Some(20.0));
}

#[tokio::test]
async fn test_create_order_title_boundaries() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    for (title, expected) in [
        ("ab".to_string(), StatusCode::BAD_REQUEST),
        ("abc".to_string(), StatusCode::CREATED),
        ("x".repeat(100), StatusCode::CREATED),
        ("x".repeat(101), StatusCode::BAD_REQUEST),
    ] {
        let request = CreateOrderRequest {
            title,
            ..CreateOrderRequest::unique()
        };
        let response = server
            .post_auth("/api/v1/orders", &admin.access_token, &request)
            .await
            .unwrap();
        assert_status(response, expected).await.unwrap();
    }
}

#[tokio::test]
async fn test_negative_fees_rejected_zero_accepted() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let response = server
        .post_auth(
            "/api/v1/orders",
            &admin.access_token,
            &CreateOrderRequest::with_fees(-1.0, 20.0),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .post_auth(
            "/api/v1/orders",
            &admin.access_token,
            &CreateOrderRequest::with_fees(0.0, 0.0),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    // Update path enforces the same bound
    let response = server
        .post_auth(
            "/api/v1/orders",
            &admin.access_token,
            &CreateOrderRequest::unique(),
        )
        .await
        .unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/orders/{}", order.id),
            &admin.access_token,
            &serde_json::json!({ "shipping_cost": -5.0 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_set_order_status() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let response = server
        .post_auth(
            "/api/v1/orders",
            &admin.access_token,
            &CreateOrderRequest::unique(),
        )
        .await
        .unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/orders/{}/status", order.id),
            &admin.access_token,
            &serde_json::json!({ "status": "IN_PROGRESS" }),
        )
        .await
        .unwrap();
    let updated: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.status, "IN_PROGRESS");

    // Unknown enum values are rejected before anything is written
    let response = server
        .put_auth(
            &format!("/api/v1/orders/{}/status", order.id),
            &admin.access_token,
            &serde_json::json!({ "status": "SHIPPED" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_get_unknown_order_is_not_found() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let response = server
        .get_auth("/api/v1/orders/1234567890", &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Wishes
// ============================================================================

#[tokio::test]
async fn test_member_submits_and_cancels_wish() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;
    let member = register_member(&server).await;

    let response = server
        .post_auth(
            "/api/v1/orders",
            &admin.access_token,
            &CreateOrderRequest::unique(),
        )
        .await
        .unwrap();
    let order: OrderResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Member submits a wish
    let response = server
        .post_auth(
            &format!("/api/v1/orders/{}/wishes", order.id),
            &member.access_token,
            &CreateWishRequest::unique(),
        )
        .await
        .unwrap();
    let wish: WishResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert_eq!(wish.status, "SUBMITTED");
    assert_eq!(wish.user_id, member.user.id);

    // Member sees it in their own listing
    let mine: Vec<serde_json::Value> = assert_json(
        server.get_auth("/api/v1/wishes/@me", &member.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(mine.len(), 1);

    // Another member cannot cancel it
    let other = register_member(&server).await;
    let response = server
        .post_auth(
            &format!("/api/v1/wishes/{}/cancel", wish.id),
            &other.access_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // The owner can
    let response = server
        .post_auth(
            &format!("/api/v1/wishes/{}/cancel", wish.id),
            &member.access_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    let cancelled: WishResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(cancelled.status, "CANCELLED");

    // Cancelling a terminal wish conflicts
    let response = server
        .post_auth(
            &format!("/api/v1/wishes/{}/cancel", wish.id),
            &member.access_token,
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_admin_validates_wish_with_price() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;
    let member = register_member(&server).await;

    let order: OrderResponse = assert_json(
        server
            .post_auth(
                "/api/v1/orders",
                &admin.access_token,
                &CreateOrderRequest::unique(),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let wish: WishResponse = assert_json(
        server
            .post_auth(
                &format!("/api/v1/orders/{}/wishes", order.id),
                &member.access_token,
                &CreateWishRequest::unique(),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let response = server
        .put_auth(
            &format!("/api/v1/wishes/{}/status", wish.id),
            &admin.access_token,
            &serde_json::json!({ "status": "VALIDATED", "validated_price": 54.99 }),
        )
        .await
        .unwrap();
    let validated: WishResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(validated.status, "VALIDATED");
    assert_eq!(validated.validated_price, Some(54.99));

    // A member cannot drive the review flow
    let response = server
        .put_auth(
            &format!("/api/v1/wishes/{}/status", wish.id),
            &member.access_token,
            &serde_json::json!({ "status": "CONFIRMED" }),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

// ============================================================================
// Cost Allocation
// ============================================================================

#[tokio::test]
async fn test_cost_allocation_proportional_split() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let order: OrderResponse = assert_json(
        server
            .post_auth(
                "/api/v1/orders",
                &admin.access_token,
                &CreateOrderRequest::with_fees(40.0, 20.0),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // Two items with subtotals 100 and 300: a 1:3 split of the fees
    for (name, quantity, unit_price) in [("Small box", 1, 100.0), ("Big box", 3, 100.0)] {
        let response = server
            .post_auth(
                &format!("/api/v1/orders/{}/items", order.id),
                &admin.access_token,
                &CreateOrderItemRequest {
                    product_name: name.to_string(),
                    quantity,
                    unit_price,
                },
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let detail: OrderDetailResponse = assert_json(
        server
            .get_auth(&format!("/api/v1/orders/{}", order.id), &admin.access_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(detail.item_count, 2);
    let mut items = detail.items;
    items.sort_by(|a, b| a.total_price.partial_cmp(&b.total_price).unwrap());

    assert_eq!(items[0].allocated_customs_fee, 10.0);
    assert_eq!(items[0].allocated_shipping, 5.0);
    assert_eq!(items[0].total_price, 115.0);

    assert_eq!(items[1].allocated_customs_fee, 30.0);
    assert_eq!(items[1].allocated_shipping, 15.0);
    assert_eq!(items[1].total_price, 345.0);

    // Shares sum back to the configured fees
    let customs_sum: f64 = items.iter().map(|i| i.allocated_customs_fee).sum();
    let shipping_sum: f64 = items.iter().map(|i| i.allocated_shipping).sum();
    assert!((customs_sum - 40.0).abs() < 0.01);
    assert!((shipping_sum - 20.0).abs() < 0.01);
}

#[tokio::test]
async fn test_changing_fees_recomputes_allocation() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let order: OrderResponse = assert_json(
        server
            .post_auth(
                "/api/v1/orders",
                &admin.access_token,
                &CreateOrderRequest::with_fees(40.0, 20.0),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let item: OrderItemResponse = assert_json(
        server
            .post_auth(
                &format!("/api/v1/orders/{}/items", order.id),
                &admin.access_token,
                &CreateOrderItemRequest {
                    product_name: "Lone item".to_string(),
                    quantity: 1,
                    unit_price: 100.0,
                },
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // One item carries the full fees
    assert_eq!(item.allocated_customs_fee, 40.0);
    assert_eq!(item.allocated_shipping, 20.0);
    assert_eq!(item.total_price, 160.0);

    // Clearing the fees recomputes from scratch, not incrementally
    let response = server
        .patch_auth(
            &format!("/api/v1/orders/{}", order.id),
            &admin.access_token,
            &serde_json::json!({ "customs_fees": null, "shipping_cost": 10.0 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let detail: OrderDetailResponse = assert_json(
        server
            .get_auth(&format!("/api/v1/orders/{}", order.id), &admin.access_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();

    assert_eq!(detail.items[0].allocated_customs_fee, 0.0);
    assert_eq!(detail.items[0].allocated_shipping, 10.0);
    assert_eq!(detail.items[0].total_price, 110.0);
}

#[tokio::test]
async fn test_fee_update_with_no_items_does_not_error() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;

    let order: OrderResponse = assert_json(
        server
            .post_auth(
                "/api/v1/orders",
                &admin.access_token,
                &CreateOrderRequest::unique(),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // Setting fees on an empty order performs no allocation and no division
    let response = server
        .patch_auth(
            &format!("/api/v1/orders/{}", order.id),
            &admin.access_token,
            &serde_json::json!({ "customs_fees": 40.0, "shipping_cost": 20.0 }),
        )
        .await
        .unwrap();
    let updated: OrderResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.customs_fees, Some(40.0));
}

// ============================================================================
// Cascade Delete
// ============================================================================

#[tokio::test]
async fn test_delete_order_cascades_to_children() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;
    let member = register_member(&server).await;

    let order: OrderResponse = assert_json(
        server
            .post_auth(
                "/api/v1/orders",
                &admin.access_token,
                &CreateOrderRequest::unique(),
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    // Two wishes and one item hang off the order
    let mut wish_ids = Vec::new();
    for _ in 0..2 {
        let wish: WishResponse = assert_json(
            server
                .post_auth(
                    &format!("/api/v1/orders/{}/wishes", order.id),
                    &member.access_token,
                    &CreateWishRequest::unique(),
                )
                .await
                .unwrap(),
            StatusCode::CREATED,
        )
        .await
        .unwrap();
        wish_ids.push(wish.id);
    }

    let item: OrderItemResponse = assert_json(
        server
            .post_auth(
                &format!("/api/v1/orders/{}/items", order.id),
                &admin.access_token,
                &CreateOrderItemRequest {
                    product_name: "Doomed item".to_string(),
                    quantity: 1,
                    unit_price: 25.0,
                },
            )
            .await
            .unwrap(),
        StatusCode::CREATED,
    )
    .await
    .unwrap();

    let detail: OrderDetailResponse = assert_json(
        server
            .get_auth(&format!("/api/v1/orders/{}", order.id), &admin.access_token)
            .await
            .unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert_eq!(detail.wish_count, 2);
    assert_eq!(detail.item_count, 1);

    // Delete the order
    let response = server
        .delete_auth(&format!("/api/v1/orders/{}", order.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    // The order and every dependent row are gone
    let response = server
        .get_auth(&format!("/api/v1/orders/{}", order.id), &admin.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/items/{}", item.id),
            &admin.access_token,
            &serde_json::json!({ "quantity": 2 }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    for wish_id in wish_ids {
        let response = server
            .put_auth(
                &format!("/api/v1/wishes/{wish_id}/status"),
                &admin.access_token,
                &serde_json::json!({ "status": "REJECTED" }),
            )
            .await
            .unwrap();
        assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
    }

    let mine: Vec<serde_json::Value> = assert_json(
        server.get_auth("/api/v1/wishes/@me", &member.access_token).await.unwrap(),
        StatusCode::OK,
    )
    .await
    .unwrap();
    assert!(mine.is_empty());
}

// ============================================================================
// Member Administration
// ============================================================================

#[tokio::test]
async fn test_admin_manages_member_roles() {
    if !check_test_env() {
        return;
    }

    let email = admin_email();
    let server = TestServer::start_with_admins(&[&email]).await.unwrap();
    let admin = register_admin(&server, &email).await;
    let member = register_member(&server).await;

    // Promote the member by explicit admin action
    let response = server
        .put_auth(
            &format!("/api/v1/members/{}/role", member.user.id),
            &admin.access_token,
            &serde_json::json!({ "role": "ADMIN" }),
        )
        .await
        .unwrap();
    let updated: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.role, "ADMIN");

    // The fresh role applies on the member's next request
    let response = server
        .get_auth("/api/v1/members", &member.access_token)
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    // And can be taken away again
    let response = server
        .put_auth(
            &format!("/api/v1/members/{}/role", member.user.id),
            &admin.access_token,
            &serde_json::json!({ "role": "MEMBER" }),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server
        .get_auth("/api/v1/members", &member.access_token)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}
