//! Buyer registration: the 1:1 claim record attached to an open order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Commitment, OrderId};

/// A buyer's claim on an order, created at most once per order.
///
/// Once created it is immutable; fulfillment verifies the supplied
/// `(buyer, commitment)` pair against this record byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyerRegistration {
    /// The order this registration claims.
    pub order_id: OrderId,
    /// The identity that will receive the escrowed value.
    pub buyer: AccountId,
    /// The release tag the seller must present at fulfillment.
    pub commitment: Commitment,
    /// When the buyer registered.
    pub registered_at: DateTime<Utc>,
}

impl BuyerRegistration {
    #[must_use]
    pub fn new(order_id: OrderId, buyer: AccountId, commitment: Commitment) -> Self {
        Self {
            order_id,
            buyer,
            commitment,
            registered_at: Utc::now(),
        }
    }

    /// Exact match on both the buyer identity and the commitment.
    #[must_use]
    pub fn matches(&self, buyer: AccountId, commitment: Commitment) -> bool {
        self.buyer == buyer && self.commitment == commitment
    }
}
