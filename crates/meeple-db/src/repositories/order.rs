//! PostgreSQL implementation of OrderRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meeple_core::entities::Order;
use meeple_core::traits::{OrderCounts, OrderRepository, RepoResult};
use meeple_core::value_objects::Snowflake;

use crate::models::{OrderModel, OrderWithCountsRow};

use super::error::{map_db_error, order_not_found};

const ORDER_COLUMNS: &str = "id, order_type, status, title, description, target_date, \
     order_placed_at, delivery_expected_at, delivered_at, customs_fees, shipping_cost, \
     created_at, updated_at";

/// PostgreSQL implementation of OrderRepository
#[derive(Clone)]
pub struct PgOrderRepository {
    pool: PgPool,
}

impl PgOrderRepository {
    /// Create a new PgOrderRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PgOrderRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Order>> {
        let result = sqlx::query_as::<_, OrderModel>(&format!(
            "SELECT {ORDER_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(Order::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_with_counts(&self) -> RepoResult<Vec<(Order, OrderCounts)>> {
        let rows = sqlx::query_as::<_, OrderWithCountsRow>(
            r"
            SELECT o.id, o.order_type, o.status, o.title, o.description, o.target_date,
                   o.order_placed_at, o.delivery_expected_at, o.delivered_at,
                   o.customs_fees, o.shipping_cost, o.created_at, o.updated_at,
                   (SELECT COUNT(*) FROM wishes w WHERE w.order_id = o.id) AS wish_count,
                   (SELECT COUNT(*) FROM order_items i WHERE i.order_id = o.id) AS item_count,
                   (SELECT COUNT(*) FROM notifications n WHERE n.order_id = o.id) AS notification_count
            FROM orders o
            ORDER BY o.created_at DESC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    #[instrument(skip(self))]
    async fn counts(&self, order_id: Snowflake) -> RepoResult<OrderCounts> {
        let (wishes, order_items, notifications) = sqlx::query_as::<_, (i64, i64, i64)>(
            r"
            SELECT (SELECT COUNT(*) FROM wishes w WHERE w.order_id = $1),
                   (SELECT COUNT(*) FROM order_items i WHERE i.order_id = $1),
                   (SELECT COUNT(*) FROM notifications n WHERE n.order_id = $1)
            ",
        )
        .bind(order_id.into_inner())
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(OrderCounts {
            wishes,
            order_items,
            notifications,
        })
    }

    #[instrument(skip(self, order))]
    async fn create(&self, order: &Order) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO orders (id, order_type, status, title, description, target_date,
                                order_placed_at, delivery_expected_at, delivered_at,
                                customs_fees, shipping_cost, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ",
        )
        .bind(order.id.into_inner())
        .bind(order.order_type.as_str())
        .bind(order.status.as_str())
        .bind(&order.title)
        .bind(&order.description)
        .bind(order.target_date)
        .bind(order.order_placed_at)
        .bind(order.delivery_expected_at)
        .bind(order.delivered_at)
        .bind(order.customs_fees)
        .bind(order.shipping_cost)
        .bind(order.created_at)
        .bind(order.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, order))]
    async fn update(&self, order: &Order) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE orders
            SET order_type = $2, status = $3, title = $4, description = $5, target_date = $6,
                order_placed_at = $7, delivery_expected_at = $8, delivered_at = $9,
                customs_fees = $10, shipping_cost = $11, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(order.id.into_inner())
        .bind(order.order_type.as_str())
        .bind(order.status.as_str())
        .bind(&order.title)
        .bind(&order.description)
        .bind(order.target_date)
        .bind(order.order_placed_at)
        .bind(order.delivery_expected_at)
        .bind(order.delivered_at)
        .bind(order.customs_fees)
        .bind(order.shipping_cost)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(order_not_found(order.id));
        }

        Ok(())
    }

    /// Cascade delete: child wishes, order items, and notifications go in
    /// the same transaction as the order row, so a failure midway leaves
    /// everything in place.
    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("DELETE FROM notifications WHERE order_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        sqlx::query("DELETE FROM wishes WHERE order_id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id.into_inner())
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            // Nothing deleted: roll the child deletions back too
            tx.rollback().await.map_err(map_db_error)?;
            return Err(order_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}
