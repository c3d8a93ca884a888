//! Seed command: admin allow-list reconciliation.
//!
//! Reads the `ADMIN_EMAILS` allow-list, reports non-interactively on which
//! configured admin emails already have accounts, and promotes existing
//! matching users to ADMIN. Users not yet registered are promoted
//! automatically on their first successful authentication.
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//! - `ADMIN_EMAILS` - comma-separated admin email allow-list

use meeple_common::AdminConfig;
use meeple_core::entities::UserRole;
use meeple_core::traits::UserRepository;
use meeple_db::PgUserRepository;
use thiserror::Error;

/// Errors that can occur during seeding.
#[derive(Debug, Error)]
pub enum SeedError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Repository-level failure.
    #[error("Seed failed: {0}")]
    Repository(#[from] meeple_core::DomainError),
}

/// Run the seed routine.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    tracing::info!("Starting seed...");

    let admin = std::env::var("ADMIN_EMAILS")
        .ok()
        .map(|raw| AdminConfig::from_list(&raw))
        .unwrap_or_default();

    if admin.admin_emails.is_empty() {
        tracing::warn!("No ADMIN_EMAILS configured in environment.");
        tracing::warn!("Admins must sign up normally and be promoted via the ADMIN_EMAILS env var.");
        tracing::info!("Seed completed");
        return Ok(());
    }

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| SeedError::MissingEnvVar("DATABASE_URL"))?;

    tracing::info!("Connecting to database...");
    let pool = sqlx::PgPool::connect(&database_url).await?;
    let users = PgUserRepository::new(pool);

    tracing::info!(
        "Found {} admin email(s) in configuration",
        admin.admin_emails.len()
    );

    for email in &admin.admin_emails {
        match users.find_by_email(email).await? {
            Some(user) if user.role == UserRole::Admin => {
                tracing::info!("  {email}: already an admin");
            }
            Some(user) => {
                users.update_role(user.id, UserRole::Admin).await?;
                tracing::info!("  {email}: existing user promoted to ADMIN");
            }
            None => {
                tracing::info!("  {email}: not registered yet, will be promoted on first login");
            }
        }
    }

    tracing::info!("Seed completed");
    Ok(())
}
