//! Post-authentication role promotion
//!
//! After every successful sign-up or login, the authenticated email is
//! checked (case-insensitively) against the configured admin allow-list;
//! on a match the user is promoted to admin through the user repository.
//! Modeled as an explicit listener invoked by the auth service, not inline
//! in request handling, so it is testable without any HTTP plumbing. The
//! seed CLI applies the same rule to already-registered users.

use meeple_common::AdminConfig;
use meeple_core::entities::{User, UserRole};
use meeple_core::traits::UserRepository;
use tracing::{info, instrument};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Allow-list driven promotion listener
pub struct RolePromotion<'a> {
    admin: &'a AdminConfig,
    users: &'a dyn UserRepository,
}

impl<'a> RolePromotion<'a> {
    /// Create a listener over an explicit allow-list and repository
    pub fn new(admin: &'a AdminConfig, users: &'a dyn UserRepository) -> Self {
        Self { admin, users }
    }

    /// Create a listener wired from the service context
    pub fn from_context(ctx: &'a ServiceContext) -> Self {
        Self::new(ctx.admin_config(), ctx.user_repo())
    }

    /// Invoked after a successful authentication event. Promotes the user
    /// to admin when their email is on the allow-list; returns whether a
    /// promotion happened. Users not on the list are left untouched.
    #[instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn on_authenticated(&self, user: &mut User) -> ServiceResult<bool> {
        if user.role == UserRole::Admin || !self.admin.is_admin_email(&user.email) {
            return Ok(false);
        }

        self.users.update_role(user.id, UserRole::Admin).await?;
        user.set_role(UserRole::Admin);
        info!(email = %user.email, "Auto-promoted to ADMIN");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use meeple_core::traits::{MemberRecord, RepoResult};
    use meeple_core::Snowflake;
    use std::sync::Mutex;

    /// Records role updates without a database
    #[derive(Default)]
    struct RecordingUserRepository {
        role_updates: Mutex<Vec<(Snowflake, UserRole)>>,
    }

    #[async_trait]
    impl UserRepository for RecordingUserRepository {
        async fn find_by_id(&self, _id: Snowflake) -> RepoResult<Option<User>> {
            Ok(None)
        }

        async fn find_by_email(&self, _email: &str) -> RepoResult<Option<User>> {
            Ok(None)
        }

        async fn email_exists(&self, _email: &str) -> RepoResult<bool> {
            Ok(false)
        }

        async fn create(&self, _user: &User, _password_hash: &str) -> RepoResult<()> {
            Ok(())
        }

        async fn update(&self, _user: &User) -> RepoResult<()> {
            Ok(())
        }

        async fn update_role(&self, id: Snowflake, role: UserRole) -> RepoResult<()> {
            self.role_updates.lock().unwrap().push((id, role));
            Ok(())
        }

        async fn get_password_hash(&self, _id: Snowflake) -> RepoResult<Option<String>> {
            Ok(None)
        }

        async fn list_with_counts(&self) -> RepoResult<Vec<MemberRecord>> {
            Ok(vec![])
        }
    }

    fn member(email: &str) -> User {
        User::new(Snowflake::new(7), email.to_string(), "Alice".to_string())
    }

    #[tokio::test]
    async fn test_allow_listed_email_is_promoted() {
        let admin = AdminConfig::from_list("alice@example.com");
        let repo = RecordingUserRepository::default();
        let listener = RolePromotion::new(&admin, &repo);

        let mut user = member("Alice@Example.COM");
        let promoted = listener.on_authenticated(&mut user).await.unwrap();

        assert!(promoted);
        assert_eq!(user.role, UserRole::Admin);
        assert_eq!(
            repo.role_updates.lock().unwrap().as_slice(),
            &[(Snowflake::new(7), UserRole::Admin)]
        );
    }

    #[tokio::test]
    async fn test_unlisted_email_keeps_member_role() {
        let admin = AdminConfig::from_list("alice@example.com");
        let repo = RecordingUserRepository::default();
        let listener = RolePromotion::new(&admin, &repo);

        let mut user = member("mallory@example.com");
        let promoted = listener.on_authenticated(&mut user).await.unwrap();

        assert!(!promoted);
        assert_eq!(user.role, UserRole::Member);
        assert!(repo.role_updates.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_existing_admin_is_not_promoted_again() {
        let admin = AdminConfig::from_list("alice@example.com");
        let repo = RecordingUserRepository::default();
        let listener = RolePromotion::new(&admin, &repo);

        let mut user = member("alice@example.com");
        user.set_role(UserRole::Admin);
        let promoted = listener.on_authenticated(&mut user).await.unwrap();

        assert!(!promoted);
        assert!(repo.role_updates.lock().unwrap().is_empty());
    }
}
