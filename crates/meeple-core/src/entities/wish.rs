//! Wish entity - a member's product request within an order

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// Wish review status
///
/// Forward path is `Submitted → Validated → Confirmed`; `Rejected` is
/// reachable while the wish is under review, `Cancelled` from any
/// non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WishStatus {
    /// Awaiting admin review; the initial state
    #[default]
    Submitted,
    /// Accepted by an admin, usually with a validated price
    Validated,
    /// Declined by an admin; terminal
    Rejected,
    /// Purchased as part of the order; terminal
    Confirmed,
    /// Withdrawn; terminal
    Cancelled,
}

impl WishStatus {
    /// Wire/storage form of the status
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Submitted => "SUBMITTED",
            Self::Validated => "VALIDATED",
            Self::Rejected => "REJECTED",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Check whether this status admits no further transitions
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Confirmed | Self::Rejected | Self::Cancelled)
    }

    /// Pure transition predicate over the wish state machine
    pub fn can_transition_to(self, target: Self) -> bool {
        match self {
            Self::Submitted => {
                matches!(target, Self::Validated | Self::Rejected | Self::Cancelled)
            }
            Self::Validated => {
                matches!(target, Self::Confirmed | Self::Rejected | Self::Cancelled)
            }
            Self::Rejected | Self::Confirmed | Self::Cancelled => false,
        }
    }
}

impl std::fmt::Display for WishStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WishStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SUBMITTED" => Ok(Self::Submitted),
            "VALIDATED" => Ok(Self::Validated),
            "REJECTED" => Ok(Self::Rejected),
            "CONFIRMED" => Ok(Self::Confirmed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(format!("invalid wish status: {s}")),
        }
    }
}

/// Wish entity
///
/// The order and user references are immutable once created; only status,
/// validated price, and the admin comment change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wish {
    pub id: Snowflake,
    pub order_id: Snowflake,
    pub user_id: Snowflake,
    pub product_name: String,
    pub product_url: Option<String>,
    pub quantity: i32,
    /// Price guessed by the member at submission time
    pub estimated_price: Option<Decimal>,
    /// Price confirmed by an admin during review
    pub validated_price: Option<Decimal>,
    pub status: WishStatus,
    pub member_comment: Option<String>,
    pub admin_comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Wish {
    /// Create a new wish in the `Submitted` state
    pub fn new(
        id: Snowflake,
        order_id: Snowflake,
        user_id: Snowflake,
        product_name: String,
        quantity: i32,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            order_id,
            user_id,
            product_name,
            product_url: None,
            quantity,
            estimated_price: None,
            validated_price: None,
            status: WishStatus::Submitted,
            member_comment: None,
            admin_comment: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether the owning member may still cancel this wish
    #[inline]
    pub fn is_cancellable(&self) -> bool {
        !self.status.is_terminal()
    }

    /// Set the review status, optionally recording the validated price
    pub fn set_status(&mut self, status: WishStatus, validated_price: Option<Decimal>) {
        self.status = status;
        if validated_price.is_some() {
            self.validated_price = validated_price;
        }
        self.updated_at = Utc::now();
    }
}
