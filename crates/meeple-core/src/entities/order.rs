//! Order entity - an administrator-managed group-purchase batch

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Kind of group order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Recurring monthly batch open to all members
    #[default]
    Monthly,
    /// One-off batch for a private sale
    PrivateSale,
}

impl OrderType {
    /// Wire/storage form of the order type
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Monthly => "MONTHLY",
            Self::PrivateSale => "PRIVATE_SALE",
        }
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MONTHLY" => Ok(Self::Monthly),
            "PRIVATE_SALE" => Ok(Self::PrivateSale),
            _ => Err(format!("invalid order type: {s}")),
        }
    }
}

/// Order lifecycle status
///
/// Forward path is `Planning → InProgress → InDelivery → Completed`;
/// `Cancelled` is reachable from any non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Collecting wishes; the initial state
    #[default]
    Planning,
    /// Order placed with the supplier
    InProgress,
    /// Shipment on its way
    InDelivery,
    /// Delivered and settled; terminal
    Completed,
    /// Abandoned; terminal
    Cancelled,
}

impl OrderStatus {
    /// Wire/storage form of the status
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "PLANNING",
            Self::InProgress => "IN_PROGRESS",
            Self::InDelivery => "IN_DELIVERY",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Check whether this status admits no further transitions
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Pure transition predicate over the lifecycle state machine.
    ///
    /// The set-status operation does not enforce this (the sequencing
    /// responsibility sits with the calling administrator), but callers can
    /// consult it to warn about or reject out-of-order jumps.
    pub fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::Planning => matches!(target, Self::InProgress | Self::Cancelled),
            Self::InProgress => matches!(target, Self::InDelivery | Self::Cancelled),
            Self::InDelivery => matches!(target, Self::Completed | Self::Cancelled),
            Self::Completed | Self::Cancelled => false,
        }
    }

    /// Valid target statuses from this state
    pub fn valid_targets(self) -> Vec<Self> {
        [
            Self::Planning,
            Self::InProgress,
            Self::InDelivery,
            Self::Completed,
            Self::Cancelled,
        ]
        .into_iter()
        .filter(|target| self.can_transition_to(*target))
        .collect()
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PLANNING" => Ok(Self::Planning),
            "IN_PROGRESS" => Ok(Self::InProgress),
            "IN_DELIVERY" => Ok(Self::InDelivery),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("invalid order status: {s}")),
        }
    }
}

/// Order entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: Snowflake,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub title: String,
    pub description: Option<String>,
    /// Deadline for members to submit wishes
    pub target_date: Option<DateTime<Utc>>,
    pub order_placed_at: Option<DateTime<Utc>>,
    pub delivery_expected_at: Option<DateTime<Utc>>,
    pub delivered_at: Option<DateTime<Utc>>,
    pub customs_fees: Option<Decimal>,
    pub shipping_cost: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Minimum title length accepted on create/update
    pub const TITLE_MIN: usize = 3;
    /// Maximum title length accepted on create/update
    pub const TITLE_MAX: usize = 100;

    /// Create a new order in the `Planning` state
    pub fn new(id: Snowflake, order_type: OrderType, title: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            order_type,
            status: OrderStatus::Planning,
            title,
            description: None,
            target_date: None,
            order_placed_at: None,
            delivery_expected_at: None,
            delivered_at: None,
            customs_fees: None,
            shipping_cost: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the lifecycle status
    pub fn set_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Update the shared costs that get distributed across order items
    pub fn set_shared_costs(
        &mut self,
        customs_fees: Option<Decimal>,
        shipping_cost: Option<Decimal>,
    ) {
        self.customs_fees = customs_fees;
        self.shipping_cost = shipping_cost;
        self.updated_at = Utc::now();
    }
}
