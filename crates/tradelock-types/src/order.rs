//! # Order — the escrowed offer and its state machine
//!
//! An `Order` is a seller's offer of a fixed amount of one asset kind, held
//! in engine custody from creation until payout or refund.
//!
//! ## State Machine
//!
//! ```text
//!   ┌──────┐  register   ┌─────────────────┐  fulfill   ┌───────────┐
//!   │ OPEN ├────────────▶│ BUYER_REGISTERED├───────────▶│ FULFILLED │
//!   └──┬───┘             └─────────────────┘            └───────────┘
//!      │ cancel
//!      ▼
//!   ┌───────────┐
//!   │ CANCELLED │
//!   └───────────┘
//! ```
//!
//! `FULFILLED` and `CANCELLED` are terminal: records are never deleted and
//! terminal orders stay queryable forever. Transitions are the ledger's
//! exclusive business — nothing else mutates an order's status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetKind, OrderId};

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Created and funded; waiting for a buyer to register.
    Open,
    /// Exactly one buyer is registered with a commitment.
    BuyerRegistered,
    /// Seller confirmed; escrow paid out to the buyer. **Terminal.**
    Fulfilled,
    /// Seller withdrew the offer; escrow refunded. **Terminal.**
    Cancelled,
}

impl OrderStatus {
    /// Can an order in this status move to `target`?
    #[must_use]
    pub fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Open, Self::BuyerRegistered | Self::Cancelled)
                | (Self::BuyerRegistered, Self::Fulfilled)
        )
    }

    /// Terminal statuses admit no further transitions.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Fulfilled | Self::Cancelled)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::BuyerRegistered => write!(f, "BUYER_REGISTERED"),
            Self::Fulfilled => write!(f, "FULFILLED"),
            Self::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

/// A seller's escrowed offer. Amounts are in the asset's smallest unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Ledger-allocated sequence number (doubles as arena index).
    pub id: OrderId,
    /// Who created and funded the order; the only identity allowed to
    /// fulfil or cancel it.
    pub seller: AccountId,
    /// What kind of value is escrowed.
    pub asset: AssetKind,
    /// Escrowed amount, smallest unit. Always > 0.
    pub amount: u128,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// When the order was created.
    pub created_at: DateTime<Utc>,
    /// When the status last changed.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// A freshly created, funded, open order.
    #[must_use]
    pub fn new(id: OrderId, seller: AccountId, asset: AssetKind, amount: u128) -> Self {
        let now = Utc::now();
        Self {
            id,
            seller,
            asset,
            amount,
            status: OrderStatus::Open,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the escrowed value is still in custody (not yet paid out or
    /// refunded).
    #[must_use]
    pub fn holds_escrow(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_transitions_valid() {
        assert!(OrderStatus::Open.can_transition_to(OrderStatus::BuyerRegistered));
        assert!(OrderStatus::Open.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::BuyerRegistered.can_transition_to(OrderStatus::Fulfilled));
    }

    #[test]
    fn status_transitions_invalid() {
        assert!(!OrderStatus::Open.can_transition_to(OrderStatus::Fulfilled));
        assert!(!OrderStatus::BuyerRegistered.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::BuyerRegistered.can_transition_to(OrderStatus::Open));
        assert!(!OrderStatus::Fulfilled.can_transition_to(OrderStatus::Open));
        assert!(!OrderStatus::Fulfilled.can_transition_to(OrderStatus::BuyerRegistered));
        assert!(!OrderStatus::Cancelled.can_transition_to(OrderStatus::Open));
    }

    #[test]
    fn terminal_statuses() {
        assert!(!OrderStatus::Open.is_terminal());
        assert!(!OrderStatus::BuyerRegistered.is_terminal());
        assert!(OrderStatus::Fulfilled.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
    }

    #[test]
    fn status_display() {
        assert_eq!(format!("{}", OrderStatus::Open), "OPEN");
        assert_eq!(format!("{}", OrderStatus::BuyerRegistered), "BUYER_REGISTERED");
        assert_eq!(format!("{}", OrderStatus::Fulfilled), "FULFILLED");
        assert_eq!(format!("{}", OrderStatus::Cancelled), "CANCELLED");
    }

    #[test]
    fn new_order_is_open() {
        let seller = AccountId::random();
        let order = Order::new(OrderId(0), seller, AssetKind::Native, 100);
        assert_eq!(order.status, OrderStatus::Open);
        assert_eq!(order.seller, seller);
        assert_eq!(order.amount, 100);
        assert!(order.holds_escrow());
    }

    #[test]
    fn terminal_order_releases_escrow() {
        let mut order = Order::new(OrderId(0), AccountId::random(), AssetKind::Native, 1);
        order.status = OrderStatus::Fulfilled;
        assert!(!order.holds_escrow());
    }

    #[test]
    fn serde_roundtrip() {
        let order = Order::new(
            OrderId(3),
            AccountId::random(),
            AssetKind::Token(crate::TokenAddress::random()),
            1_000_000,
        );
        let json = serde_json::to_string(&order).unwrap();
        let back: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order.id, back.id);
        assert_eq!(order.amount, back.amount);
        assert_eq!(order.status, back.status);
    }
}
