//! Commitment registry — one buyer claim per order.
//!
//! The registry enforces the single-registration rule and validates the
//! claim inputs; the order's lifecycle stage is supplied by the caller
//! (the engine reads it from the ledger) so the registry itself stays a
//! plain map.

use std::collections::HashMap;

use tradelock_types::{
    AccountId, BuyerRegistration, Commitment, EscrowError, OrderId, OrderStatus, Result,
};

/// Records at most one `(buyer, commitment)` claim per order.
#[derive(Debug, Default)]
pub struct CommitmentRegistry {
    registrations: HashMap<OrderId, BuyerRegistration>,
}

impl CommitmentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `buyer` with `commitment` for `order_id`.
    ///
    /// # Errors
    /// - `InvalidState` unless the order is currently Open
    /// - `AlreadyRegistered` if a claim already exists for this order
    /// - `ZeroAddress` / `EmptyCommitment` on malformed input
    pub fn register(
        &mut self,
        order_id: OrderId,
        buyer: AccountId,
        commitment: Commitment,
        order_status: OrderStatus,
    ) -> Result<()> {
        // The existing-claim check comes before the stage gate: a second
        // registration attempt reports AlreadyRegistered, not the
        // InvalidState the first claim's transition would otherwise cause.
        if self.registrations.contains_key(&order_id) {
            return Err(EscrowError::AlreadyRegistered(order_id));
        }
        if order_status != OrderStatus::Open {
            return Err(EscrowError::InvalidState {
                expected: OrderStatus::Open,
                actual: order_status,
            });
        }
        if buyer.is_zero() {
            return Err(EscrowError::ZeroAddress);
        }
        if commitment.is_empty() {
            return Err(EscrowError::EmptyCommitment);
        }

        self.registrations
            .insert(order_id, BuyerRegistration::new(order_id, buyer, commitment));
        Ok(())
    }

    /// True iff a registration exists for `order_id` with exactly this
    /// `(buyer, commitment)` pair.
    #[must_use]
    pub fn verify(&self, order_id: OrderId, buyer: AccountId, commitment: Commitment) -> bool {
        self.registrations
            .get(&order_id)
            .is_some_and(|reg| reg.matches(buyer, commitment))
    }

    /// The registration for `order_id`, if any.
    #[must_use]
    pub fn get(&self, order_id: OrderId) -> Option<&BuyerRegistration> {
        self.registrations.get(&order_id)
    }

    /// Number of registered claims.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_and_verify() {
        let mut registry = CommitmentRegistry::new();
        let buyer = AccountId::random();
        let commitment = Commitment::random();

        registry
            .register(OrderId(0), buyer, commitment, OrderStatus::Open)
            .unwrap();

        assert!(registry.verify(OrderId(0), buyer, commitment));
        assert_eq!(registry.get(OrderId(0)).unwrap().buyer, buyer);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn verify_rejects_wrong_pair() {
        let mut registry = CommitmentRegistry::new();
        let buyer = AccountId::random();
        let commitment = Commitment::random();
        registry
            .register(OrderId(0), buyer, commitment, OrderStatus::Open)
            .unwrap();

        assert!(!registry.verify(OrderId(0), AccountId::random(), commitment));
        assert!(!registry.verify(OrderId(0), buyer, Commitment::random()));
        assert!(!registry.verify(OrderId(1), buyer, commitment));
    }

    #[test]
    fn second_registration_blocked() {
        let mut registry = CommitmentRegistry::new();
        let first_buyer = AccountId::random();
        let first_commitment = Commitment::random();
        registry
            .register(OrderId(0), first_buyer, first_commitment, OrderStatus::Open)
            .unwrap();

        let err = registry
            .register(
                OrderId(0),
                AccountId::random(),
                Commitment::random(),
                OrderStatus::Open,
            )
            .unwrap_err();
        assert!(matches!(err, EscrowError::AlreadyRegistered(OrderId(0))));

        // First claim is unchanged.
        let reg = registry.get(OrderId(0)).unwrap();
        assert_eq!(reg.buyer, first_buyer);
        assert_eq!(reg.commitment, first_commitment);
    }

    #[test]
    fn register_requires_open_order() {
        let mut registry = CommitmentRegistry::new();
        let err = registry
            .register(
                OrderId(0),
                AccountId::random(),
                Commitment::random(),
                OrderStatus::Fulfilled,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            EscrowError::InvalidState {
                expected: OrderStatus::Open,
                actual: OrderStatus::Fulfilled,
            }
        ));
        assert!(registry.is_empty());
    }

    #[test]
    fn zero_buyer_rejected() {
        let mut registry = CommitmentRegistry::new();
        let err = registry
            .register(
                OrderId(0),
                AccountId::ZERO,
                Commitment::random(),
                OrderStatus::Open,
            )
            .unwrap_err();
        assert!(matches!(err, EscrowError::ZeroAddress));
        // The slot is still free for a valid claim.
        assert!(registry.is_empty());
    }

    #[test]
    fn empty_commitment_rejected() {
        let mut registry = CommitmentRegistry::new();
        let err = registry
            .register(
                OrderId(0),
                AccountId::random(),
                Commitment::EMPTY,
                OrderStatus::Open,
            )
            .unwrap_err();
        assert!(matches!(err, EscrowError::EmptyCommitment));
        assert!(registry.is_empty());
    }
}
