//! PostgreSQL implementation of WishRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::Wish;
use meeple_core::traits::{RepoResult, WishOfMember, WishRepository, WishWithMember};
use meeple_core::value_objects::Snowflake;

use crate::models::{WishModel, WishOfMemberRow, WishWithMemberRow};

use super::error::{map_db_error, wish_not_found};

const WISH_COLUMNS: &str = "id, order_id, user_id, product_name, product_url, quantity, \
     estimated_price, validated_price, status, member_comment, admin_comment, \
     created_at, updated_at";

/// PostgreSQL implementation of WishRepository
#[derive(Clone)]
pub struct PgWishRepository {
    pool: PgPool,
}

impl PgWishRepository {
    /// Create a new PgWishRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishRepository for PgWishRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Wish>> {
        let result = sqlx::query_as::<_, WishModel>(&format!(
            "SELECT {WISH_COLUMNS} FROM wishes WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Wish::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_order(&self, order_id: Snowflake) -> RepoResult<Vec<WishWithMember>> {
        let rows = sqlx::query_as::<_, WishWithMemberRow>(
            r"
            SELECT w.id, w.order_id, w.user_id, w.product_name, w.product_url, w.quantity,
                   w.estimated_price, w.validated_price, w.status, w.member_comment,
                   w.admin_comment, w.created_at, w.updated_at,
                   u.name AS member_name, u.email AS member_email
            FROM wishes w
            JOIN users u ON u.id = w.user_id
            WHERE w.order_id = $1
            ORDER BY w.created_at DESC
            ",
        )
        .bind(order_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: Snowflake) -> RepoResult<Vec<WishOfMember>> {
        let rows = sqlx::query_as::<_, WishOfMemberRow>(
            r"
            SELECT w.id, w.order_id, w.user_id, w.product_name, w.product_url, w.quantity,
                   w.estimated_price, w.validated_price, w.status, w.member_comment,
                   w.admin_comment, w.created_at, w.updated_at,
                   o.title AS order_title, o.status AS order_status
            FROM wishes w
            JOIN orders o ON o.id = w.order_id
            WHERE w.user_id = $1
            ORDER BY w.created_at DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    #[instrument(skip(self, wish))]
    async fn create(&self, wish: &Wish) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO wishes (id, order_id, user_id, product_name, product_url, quantity,
                                estimated_price, validated_price, status, member_comment,
                                admin_comment, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(wish.id.into_inner())
        .bind(wish.order_id.into_inner())
        .bind(wish.user_id.into_inner())
        .bind(&wish.product_name)
        .bind(&wish.product_url)
        .bind(wish.quantity)
        .bind(wish.estimated_price)
        .bind(wish.validated_price)
        .bind(wish.status.as_str())
        .bind(&wish.member_comment)
        .bind(&wish.admin_comment)
        .bind(wish.created_at)
        .bind(wish.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, wish))]
    async fn update(&self, wish: &Wish) -> RepoResult<()> {
        // The order and user references are immutable by design and stay
        // out of the SET list.
        let result = sqlx::query(
            r"
            UPDATE wishes
            SET product_name = $2, product_url = $3, quantity = $4, estimated_price = $5,
                validated_price = $6, status = $7, member_comment = $8, admin_comment = $9,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(wish.id.into_inner())
        .bind(&wish.product_name)
        .bind(&wish.product_url)
        .bind(wish.quantity)
        .bind(wish.estimated_price)
        .bind(wish.validated_price)
        .bind(wish.status.as_str())
        .bind(&wish.member_comment)
        .bind(&wish.admin_comment)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(wish_not_found(wish.id));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgWishRepository>();
    }
}
