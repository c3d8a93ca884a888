//! OrderItem entity - a priced line item actually purchased for an order

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::value_objects::Snowflake;

/// A purchased line item, derived from validated wishes
///
/// Invariant: `total_price = unit_price * quantity + allocated_customs_fee
/// + allocated_shipping`, all components non-negative. The allocation
/// fields are owned by the reallocation pass and overwritten whenever the
/// order's items or shared costs change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: Snowflake,
    pub order_id: Snowflake,
    pub product_name: String,
    pub product_url: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub allocated_customs_fee: Decimal,
    pub allocated_shipping: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl OrderItem {
    /// Create a new line item with no allocation yet
    pub fn new(
        id: Snowflake,
        order_id: Snowflake,
        product_name: String,
        quantity: i32,
        unit_price: Decimal,
    ) -> Self {
        let now = Utc::now();
        let mut item = Self {
            id,
            order_id,
            product_name,
            product_url: None,
            quantity,
            unit_price,
            allocated_customs_fee: Decimal::ZERO,
            allocated_shipping: Decimal::ZERO,
            total_price: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };
        item.total_price = item.subtotal();
        item
    }

    /// Item value before shared costs: `unit_price * quantity`
    #[inline]
    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Overwrite the allocated shares and recompute the total
    pub fn apply_allocation(&mut self, customs_fee: Decimal, shipping: Decimal) {
        self.allocated_customs_fee = customs_fee;
        self.allocated_shipping = shipping;
        self.total_price = self.subtotal() + customs_fee + shipping;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, unit_price: Decimal) -> OrderItem {
        OrderItem::new(
            Snowflake::new(1),
            Snowflake::new(10),
            "Spirit Island".to_string(),
            quantity,
            unit_price,
        )
    }

    #[test]
    fn test_new_item_total_equals_subtotal() {
        let item = item(3, Decimal::new(2500, 2));
        assert_eq!(item.subtotal(), Decimal::new(7500, 2));
        assert_eq!(item.total_price, Decimal::new(7500, 2));
        assert_eq!(item.allocated_customs_fee, Decimal::ZERO);
        assert_eq!(item.allocated_shipping, Decimal::ZERO);
    }

    #[test]
    fn test_apply_allocation_updates_total() {
        let mut item = item(2, Decimal::new(5000, 2));
        item.apply_allocation(Decimal::new(1000, 2), Decimal::new(500, 2));
        assert_eq!(item.allocated_customs_fee, Decimal::new(1000, 2));
        assert_eq!(item.allocated_shipping, Decimal::new(500, 2));
        // 100.00 + 10.00 + 5.00
        assert_eq!(item.total_price, Decimal::new(11_500, 2));
    }

    #[test]
    fn test_reapplying_allocation_is_not_cumulative() {
        let mut item = item(1, Decimal::new(10_000, 2));
        item.apply_allocation(Decimal::new(1000, 2), Decimal::new(500, 2));
        item.apply_allocation(Decimal::new(2000, 2), Decimal::ZERO);
        assert_eq!(item.total_price, Decimal::new(12_000, 2));
    }
}
