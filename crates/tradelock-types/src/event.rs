//! Lifecycle events for the TradeLock audit trail.
//!
//! Every successful state-changing operation appends exactly one event to
//! the engine's log. The log is append-only and ordered, so external
//! indexers can replay an order's full history from it.

use serde::{Deserialize, Serialize};

use crate::{AccountId, AssetKind, Commitment, OrderId};

/// A lifecycle event emitted by the escrow engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum EscrowEvent {
    /// A seller created and funded an order.
    OrderCreated {
        order_id: OrderId,
        seller: AccountId,
        asset: AssetKind,
        amount: u128,
    },
    /// A buyer registered a claim with a commitment.
    BuyerRegistered {
        order_id: OrderId,
        buyer: AccountId,
        commitment: Commitment,
    },
    /// The seller confirmed and escrow was paid out to the buyer.
    OrderFulfilled {
        order_id: OrderId,
        buyer: AccountId,
        commitment: Commitment,
    },
    /// The seller withdrew an open order and was refunded.
    OrderCancelled { order_id: OrderId },
}

impl EscrowEvent {
    /// The order this event belongs to.
    #[must_use]
    pub fn order_id(&self) -> OrderId {
        match self {
            Self::OrderCreated { order_id, .. }
            | Self::BuyerRegistered { order_id, .. }
            | Self::OrderFulfilled { order_id, .. }
            | Self::OrderCancelled { order_id } => *order_id,
        }
    }
}

impl std::fmt::Display for EscrowEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OrderCreated {
                order_id,
                seller,
                asset,
                amount,
            } => write!(f, "ORDER_CREATED {order_id} seller={seller} asset={asset} amount={amount}"),
            Self::BuyerRegistered {
                order_id,
                buyer,
                commitment,
            } => write!(f, "BUYER_REGISTERED {order_id} buyer={buyer} {commitment}"),
            Self::OrderFulfilled {
                order_id,
                buyer,
                commitment,
            } => write!(f, "ORDER_FULFILLED {order_id} buyer={buyer} {commitment}"),
            Self::OrderCancelled { order_id } => write!(f, "ORDER_CANCELLED {order_id}"),
        }
    }
}
