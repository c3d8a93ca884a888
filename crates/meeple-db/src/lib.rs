//! # meeple-db
//!
//! Database layer implementing the domain repository traits with
//! PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations (runtime-bound queries, no macros)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use meeple_db::{create_pool, DatabaseConfig, PgUserRepository};
//! use meeple_core::UserRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env();
//!     let pool = create_pool(&config).await?;
//!     let user_repo = PgUserRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

/// Embedded schema migrations, applied by the server and test harness at startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, DatabaseConfig, PgPool};
pub use repositories::{
    PgNotificationRepository, PgOrderItemRepository, PgOrderRepository, PgUserRepository,
    PgWishRepository,
};
