//! Service context - dependency container for services
//!
//! Holds the repositories, auth services, and configuration needed by the
//! service layer. The PostgreSQL pool is created once by the process entry
//! point and injected here; no module owns a global store client.

use std::sync::Arc;

use meeple_common::{AdminConfig, JwtService};
use meeple_core::traits::{
    NotificationRepository, OrderItemRepository, OrderRepository, UserRepository, WishRepository,
};
use meeple_core::{Snowflake, SnowflakeGenerator};
use meeple_db::PgPool;

use super::error::ServiceError;

/// Service context containing all dependencies
///
/// This is the dependency container passed to every service. It provides:
/// - Database repositories
/// - JWT service for authentication
/// - Snowflake generator for ID generation
/// - The admin email allow-list
#[derive(Clone)]
pub struct ServiceContext {
    pool: PgPool,

    user_repo: Arc<dyn UserRepository>,
    order_repo: Arc<dyn OrderRepository>,
    wish_repo: Arc<dyn WishRepository>,
    order_item_repo: Arc<dyn OrderItemRepository>,
    notification_repo: Arc<dyn NotificationRepository>,

    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
    admin_config: Arc<AdminConfig>,
}

impl ServiceContext {
    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the order repository
    pub fn order_repo(&self) -> &dyn OrderRepository {
        self.order_repo.as_ref()
    }

    /// Get the wish repository
    pub fn wish_repo(&self) -> &dyn WishRepository {
        self.wish_repo.as_ref()
    }

    /// Get the order item repository
    pub fn order_item_repo(&self) -> &dyn OrderItemRepository {
        self.order_item_repo.as_ref()
    }

    /// Get the notification repository
    pub fn notification_repo(&self) -> &dyn NotificationRepository {
        self.notification_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the admin email allow-list
    pub fn admin_config(&self) -> &AdminConfig {
        self.admin_config.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .field("admin_config", &self.admin_config)
            .finish()
    }
}

/// Builder for creating a ServiceContext
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    order_repo: Option<Arc<dyn OrderRepository>>,
    wish_repo: Option<Arc<dyn WishRepository>>,
    order_item_repo: Option<Arc<dyn OrderItemRepository>>,
    notification_repo: Option<Arc<dyn NotificationRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
    admin_config: Option<Arc<AdminConfig>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn order_repo(mut self, repo: Arc<dyn OrderRepository>) -> Self {
        self.order_repo = Some(repo);
        self
    }

    pub fn wish_repo(mut self, repo: Arc<dyn WishRepository>) -> Self {
        self.wish_repo = Some(repo);
        self
    }

    pub fn order_item_repo(mut self, repo: Arc<dyn OrderItemRepository>) -> Self {
        self.order_item_repo = Some(repo);
        self
    }

    pub fn notification_repo(mut self, repo: Arc<dyn NotificationRepository>) -> Self {
        self.notification_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    pub fn admin_config(mut self, config: Arc<AdminConfig>) -> Self {
        self.admin_config = Some(config);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> Result<ServiceContext, ServiceError> {
        let missing = |what: &str| ServiceError::validation(format!("{what} is required"));

        Ok(ServiceContext {
            pool: self.pool.ok_or_else(|| missing("pool"))?,
            user_repo: self.user_repo.ok_or_else(|| missing("user_repo"))?,
            order_repo: self.order_repo.ok_or_else(|| missing("order_repo"))?,
            wish_repo: self.wish_repo.ok_or_else(|| missing("wish_repo"))?,
            order_item_repo: self
                .order_item_repo
                .ok_or_else(|| missing("order_item_repo"))?,
            notification_repo: self
                .notification_repo
                .ok_or_else(|| missing("notification_repo"))?,
            jwt_service: self.jwt_service.ok_or_else(|| missing("jwt_service"))?,
            snowflake_generator: self
                .snowflake_generator
                .ok_or_else(|| missing("snowflake_generator"))?,
            admin_config: self.admin_config.unwrap_or_default(),
        })
    }
}
