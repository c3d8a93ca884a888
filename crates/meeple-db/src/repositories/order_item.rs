//! PostgreSQL implementation of OrderItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::OrderItem;
use meeple_core::traits::{OrderItemRepository, RepoResult};
use meeple_core::value_objects::Snowflake;

use crate::models::OrderItemModel;

use super::error::{map_db_error, order_item_not_found};

const ITEM_COLUMNS: &str = "id, order_id, product_name, product_url, quantity, unit_price, \
     allocated_customs_fee, allocated_shipping, total_price, created_at, updated_at";

/// PostgreSQL implementation of OrderItemRepository
#[derive(Clone)]
pub struct PgOrderItemRepository {
    pool: PgPool,
}

impl PgOrderItemRepository {
    /// Create a new PgOrderItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderItemRepository for PgOrderItemRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<OrderItem>> {
        let result = sqlx::query_as::<_, OrderItemModel>(&format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(OrderItem::from))
    }

    #[instrument(skip(self))]
    async fn find_by_order(&self, order_id: Snowflake) -> RepoResult<Vec<OrderItem>> {
        let results = sqlx::query_as::<_, OrderItemModel>(&format!(
            "SELECT {ITEM_COLUMNS} FROM order_items WHERE order_id = $1 ORDER BY created_at DESC"
        ))
        .bind(order_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(OrderItem::from).collect())
    }

    #[instrument(skip(self, item))]
    async fn create(&self, item: &OrderItem) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO order_items (id, order_id, product_name, product_url, quantity,
                                     unit_price, allocated_customs_fee, allocated_shipping,
                                     total_price, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ",
        )
        .bind(item.id.into_inner())
        .bind(item.order_id.into_inner())
        .bind(&item.product_name)
        .bind(&item.product_url)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(item.allocated_customs_fee)
        .bind(item.allocated_shipping)
        .bind(item.total_price)
        .bind(item.created_at)
        .bind(item.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, item))]
    async fn update(&self, item: &OrderItem) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE order_items
            SET product_name = $2, product_url = $3, quantity = $4, unit_price = $5,
                allocated_customs_fee = $6, allocated_shipping = $7, total_price = $8,
                updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(item.id.into_inner())
        .bind(&item.product_name)
        .bind(&item.product_url)
        .bind(item.quantity)
        .bind(item.unit_price)
        .bind(item.allocated_customs_fee)
        .bind(item.allocated_shipping)
        .bind(item.total_price)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_item_not_found(item.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM order_items WHERE id = $1")
            .bind(id.into_inner())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_item_not_found(id));
        }

        Ok(())
    }

    /// A reallocation pass writes every item's shares in one transaction,
    /// so a failure midway never leaves an order half-reallocated.
    #[instrument(skip(self, items))]
    async fn update_allocations(&self, items: &[OrderItem]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for item in items {
            let result = sqlx::query(
                r"
                UPDATE order_items
                SET allocated_customs_fee = $2, allocated_shipping = $3, total_price = $4,
                    updated_at = NOW()
                WHERE id = $1
                ",
            )
            .bind(item.id.into_inner())
            .bind(item.allocated_customs_fee)
            .bind(item.allocated_shipping)
            .bind(item.total_price)
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

            if result.rows_affected() == 0 {
                tx.rollback().await.map_err(map_db_error)?;
                return Err(order_item_not_found(item.id));
            }
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}
