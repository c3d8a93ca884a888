//! Server setup and initialization
//!
//! Provides the application builder and server runner. The PostgreSQL
//! pool is created here, once, and handed to the service context; there
//! is no global store client anywhere else in the workspace.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use meeple_common::{AppConfig, AppError, JwtService};
use meeple_core::SnowflakeGenerator;
use meeple_db::{
    create_pool, PgNotificationRepository, PgOrderItemRepository, PgOrderRepository,
    PgUserRepository, PgWishRepository,
};
use meeple_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    // Health probes bypass the rate limiter
    health_routes().merge(api).with_state(state)
}

/// Initialize all dependencies and create the AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create the database pool
    info!("Connecting to PostgreSQL...");
    let db_config = meeple_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply embedded schema migrations (idempotent)
    meeple_db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create the JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.auth.jwt_secret,
        config.auth.access_token_expiry,
        config.auth.refresh_token_expiry,
    ));

    // Create the Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));
    let wish_repo = Arc::new(PgWishRepository::new(pool.clone()));
    let order_item_repo = Arc::new(PgOrderItemRepository::new(pool.clone()));
    let notification_repo = Arc::new(PgNotificationRepository::new(pool.clone()));

    // Build the service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .order_repo(order_repo)
        .wish_repo(wish_repo)
        .order_item_repo(order_item_repo)
        .notification_repo(notification_repo)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .admin_config(Arc::new(config.admin.clone()))
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until it exits
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
