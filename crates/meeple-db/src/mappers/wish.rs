//! Wish entity <-> model mapper

use meeple_core::entities::{Wish, WishStatus};
use meeple_core::traits::{OrderSummary, WishOfMember, WishWithMember};
use meeple_core::{DomainError, Snowflake};

use crate::models::{WishModel, WishOfMemberRow, WishWithMemberRow};

impl TryFrom<WishModel> for Wish {
    type Error = DomainError;

    fn try_from(model: WishModel) -> Result<Self, Self::Error> {
        let status: WishStatus = model
            .status
            .parse()
            .map_err(|e: String| DomainError::DatabaseError(format!("corrupt wish row: {e}")))?;

        Ok(Wish {
            id: Snowflake::new(model.id),
            order_id: Snowflake::new(model.order_id),
            user_id: Snowflake::new(model.user_id),
            product_name: model.product_name,
            product_url: model.product_url,
            quantity: model.quantity,
            estimated_price: model.estimated_price,
            validated_price: model.validated_price,
            status,
            member_comment: model.member_comment,
            admin_comment: model.admin_comment,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

impl TryFrom<WishWithMemberRow> for WishWithMember {
    type Error = DomainError;

    fn try_from(row: WishWithMemberRow) -> Result<Self, Self::Error> {
        let member_id = Snowflake::new(row.user_id);
        let member_name = row.member_name.clone();
        let member_email = row.member_email.clone();

        let wish = Wish::try_from(WishModel {
            id: row.id,
            order_id: row.order_id,
            user_id: row.user_id,
            product_name: row.product_name,
            product_url: row.product_url,
            quantity: row.quantity,
            estimated_price: row.estimated_price,
            validated_price: row.validated_price,
            status: row.status,
            member_comment: row.member_comment,
            admin_comment: row.admin_comment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;

        Ok(WishWithMember {
            wish,
            member_id,
            member_name,
            member_email,
        })
    }
}

impl TryFrom<WishOfMemberRow> for WishOfMember {
    type Error = DomainError;

    fn try_from(row: WishOfMemberRow) -> Result<Self, Self::Error> {
        let order = OrderSummary {
            id: Snowflake::new(row.order_id),
            title: row.order_title.clone(),
            status: row.order_status.parse().map_err(|e: String| {
                DomainError::DatabaseError(format!("corrupt order row: {e}"))
            })?,
        };

        let wish = Wish::try_from(WishModel {
            id: row.id,
            order_id: row.order_id,
            user_id: row.user_id,
            product_name: row.product_name,
            product_url: row.product_url,
            quantity: row.quantity,
            estimated_price: row.estimated_price,
            validated_price: row.validated_price,
            status: row.status,
            member_comment: row.member_comment,
            admin_comment: row.admin_comment,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;

        Ok(WishOfMember { wish, order })
    }
}
