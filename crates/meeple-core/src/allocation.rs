//! Proportional distribution of shared order costs across line items
//!
//! Customs fees and shipping are split across an order's items in
//! proportion to each item's share of the order value. The allocation is
//! always recomputed from scratch; patching shares incrementally would
//! accumulate rounding drift.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::OrderItem;

/// Round a monetary value to 2 decimal places, half away from zero
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Distribute an order's shared costs across its items.
///
/// Each item receives `fee * subtotal_i / Σ subtotal`, rounded to 2 decimal
/// places, and its total is recomputed as
/// `subtotal + customs share + shipping share`. Absent fees count as zero.
///
/// When the combined subtotal is zero (no items, or only zero-priced
/// items), every share is reset to zero and totals collapse to the
/// subtotals; in particular there is no division by zero.
pub fn allocate_shared_costs(
    items: &mut [OrderItem],
    customs_fees: Option<Decimal>,
    shipping_cost: Option<Decimal>,
) {
    let customs = customs_fees.unwrap_or(Decimal::ZERO);
    let shipping = shipping_cost.unwrap_or(Decimal::ZERO);

    let combined: Decimal = items.iter().map(OrderItem::subtotal).sum();

    if combined.is_zero() {
        for item in items.iter_mut() {
            item.apply_allocation(Decimal::ZERO, Decimal::ZERO);
        }
        return;
    }

    for item in items.iter_mut() {
        let weight = item.subtotal() / combined;
        let customs_share = round_money(customs * weight);
        let shipping_share = round_money(shipping * weight);
        item.apply_allocation(customs_share, shipping_share);
    }
}
