//! Order ledger — the authoritative, append-only order arena.
//!
//! Orders are stored in a growable arena indexed by sequence number, so an
//! [`OrderId`] is also its lookup position. Records are never deleted;
//! terminal orders stay queryable. [`OrderLedger::transition`] is the sole
//! mutation path for status, which makes bypassing the state machine
//! impossible from outside this module.

use chrono::Utc;
use tradelock_types::{AccountId, AssetKind, EscrowError, Order, OrderId, OrderStatus, Result};

/// The authoritative mapping of order ids to order records.
#[derive(Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next sequence number and store a new Open order.
    ///
    /// The caller (the engine) has already taken custody of `amount`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn create(&mut self, seller: AccountId, asset: AssetKind, amount: u128) -> OrderId {
        let id = OrderId(self.orders.len() as u64);
        self.orders.push(Order::new(id, seller, asset, amount));
        id
    }

    /// Look up an order.
    ///
    /// # Errors
    /// `OrderNotFound` if the id was never allocated.
    pub fn get(&self, order_id: OrderId) -> Result<&Order> {
        self.orders
            .get(order_id.index())
            .ok_or(EscrowError::OrderNotFound(order_id))
    }

    /// Atomically check-and-advance an order's status.
    ///
    /// Fails without touching the record if the current status is not
    /// `expected`, or if `expected → next` is not a legal edge of the
    /// state machine.
    ///
    /// # Errors
    /// `OrderNotFound`, `InvalidState`.
    pub fn transition(
        &mut self,
        order_id: OrderId,
        expected: OrderStatus,
        next: OrderStatus,
    ) -> Result<()> {
        let order = self
            .orders
            .get_mut(order_id.index())
            .ok_or(EscrowError::OrderNotFound(order_id))?;

        if order.status != expected {
            return Err(EscrowError::InvalidState {
                expected,
                actual: order.status,
            });
        }
        if !expected.can_transition_to(next) {
            return Err(EscrowError::InvalidState {
                expected,
                actual: order.status,
            });
        }

        order.status = next;
        order.updated_at = Utc::now();
        Ok(())
    }

    /// Compensation path: undo a transition after a downstream value
    /// transfer failed, restoring the pre-call status.
    ///
    /// This deliberately skips the legality check — `FULFILLED →
    /// BUYER_REGISTERED` is not a forward edge — and is only reachable
    /// from the engine's rollback handling.
    pub(crate) fn rollback(&mut self, order_id: OrderId, from: OrderStatus, to: OrderStatus) {
        if let Some(order) = self.orders.get_mut(order_id.index()) {
            if order.status == from {
                order.status = to;
                order.updated_at = Utc::now();
            }
        }
    }

    /// Sum of `amount` over all orders still holding escrow in `asset`.
    ///
    /// Invariant: equals the adapter's custody counter for `asset` after
    /// every public operation.
    #[must_use]
    pub fn escrowed_total(&self, asset: AssetKind) -> u128 {
        self.orders
            .iter()
            .filter(|o| o.asset == asset && o.holds_escrow())
            .map(|o| o.amount)
            .sum()
    }

    /// Number of orders ever created.
    #[must_use]
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
