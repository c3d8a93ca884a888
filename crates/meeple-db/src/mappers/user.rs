//! User entity <-> model mapper

use meeple_core::entities::{User, UserRole};
use meeple_core::traits::MemberRecord;
use meeple_core::{DomainError, Snowflake};

use crate::models::{MemberRecordRow, UserModel};

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let role: UserRole = model
            .role
            .parse()
            .map_err(|e: String| DomainError::DatabaseError(format!("corrupt user row: {e}")))?;

        Ok(User {
            id: Snowflake::new(model.id),
            email: model.email,
            name: model.name,
            role,
            email_verified: model.email_verified,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<MemberRecordRow> for MemberRecord {
    type Error = DomainError;

    fn try_from(row: MemberRecordRow) -> Result<Self, Self::Error> {
        let user = User::try_from(UserModel {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role,
            email_verified: row.email_verified,
            image: row.image,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;

        Ok(MemberRecord {
            user,
            wish_count: row.wish_count,
            notification_count: row.notification_count,
        })
    }
}
