//! Escrow engine — public entry points and caller authorization.
//!
//! One `EscrowEngine` instance owns the ledger, registry, adapter, and the
//! lifecycle event log, and is threaded through every entry point; there is
//! no process-wide state. Every operation runs to completion against
//! `&mut self`, so calls are serialized and each one either fully commits
//! or leaves no trace.
//!
//! Ordering rule: the status transition is recorded before any value
//! leaves custody, so a recipient re-entering through the payment path can
//! never observe a stale status. If the transfer then fails, the
//! transition is rolled back and the whole call reports the failure with
//! no side effects.

use tracing::{info, warn};
use tradelock_types::{
    AccountId, AssetKind, BuyerRegistration, Commitment, EngineConfig, EscrowError, EscrowEvent,
    Order, OrderId, OrderStatus, Result,
};

use crate::adapter::{TransferBackend, ValueAdapter};
use crate::ledger::OrderLedger;
use crate::registry::CommitmentRegistry;

/// The escrow engine: custody, order state machine, and claim verification
/// behind four public operations.
pub struct EscrowEngine<B: TransferBackend> {
    ledger: OrderLedger,
    registry: CommitmentRegistry,
    adapter: ValueAdapter<B>,
    events: Vec<EscrowEvent>,
    config: EngineConfig,
}

impl<B: TransferBackend> EscrowEngine<B> {
    /// Engine with default configuration. `vault` is the account all
    /// escrowed value sits in.
    #[must_use]
    pub fn new(backend: B, vault: AccountId) -> Self {
        Self::with_config(backend, vault, EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(backend: B, vault: AccountId, config: EngineConfig) -> Self {
        Self {
            ledger: OrderLedger::new(),
            registry: CommitmentRegistry::new(),
            adapter: ValueAdapter::new(backend, vault),
            events: Vec::new(),
            config,
        }
    }

    /// Seller creates and funds an order.
    ///
    /// Native orders carry their value as `attached_payment`, which must
    /// equal `amount`; token orders are non-payable and pull `amount` from
    /// the allowance the seller granted the vault.
    ///
    /// # Errors
    /// `InvalidAmount`, `ZeroAddress`, `AmountMismatch`,
    /// `InsufficientBalance`, `InsufficientAllowance`, `TransferFailed`.
    pub fn create_order(
        &mut self,
        caller: AccountId,
        asset: AssetKind,
        amount: u128,
        attached_payment: u128,
    ) -> Result<OrderId> {
        if amount == 0 {
            return Err(EscrowError::InvalidAmount);
        }
        if caller.is_zero() {
            return Err(EscrowError::ZeroAddress);
        }

        // Take custody first; a failed deposit leaves no order behind.
        self.adapter.deposit(caller, asset, amount, attached_payment)?;
        let order_id = self.ledger.create(caller, asset, amount);

        self.events.push(EscrowEvent::OrderCreated {
            order_id,
            seller: caller,
            asset,
            amount,
        });
        info!(%order_id, seller = %caller.short(), %asset, amount, "order created");
        Ok(order_id)
    }

    /// Buyer registers a claim on an open order with a commitment.
    ///
    /// # Errors
    /// `OrderNotFound`, `Unauthorized` (seller self-registration under the
    /// default config), `InvalidState`, `AlreadyRegistered`, `ZeroAddress`,
    /// `EmptyCommitment`.
    pub fn register_as_buyer(
        &mut self,
        caller: AccountId,
        order_id: OrderId,
        commitment: Commitment,
    ) -> Result<()> {
        let order = self.ledger.get(order_id)?;
        let (seller, status) = (order.seller, order.status);

        if caller == seller && !self.config.allow_seller_self_register {
            return Err(EscrowError::Unauthorized {
                reason: "seller may not register as buyer of their own order".into(),
            });
        }

        self.registry.register(order_id, caller, commitment, status)?;
        // `register` guaranteed the order is Open, so this cannot fail.
        self.ledger
            .transition(order_id, OrderStatus::Open, OrderStatus::BuyerRegistered)?;

        self.events.push(EscrowEvent::BuyerRegistered {
            order_id,
            buyer: caller,
            commitment,
        });
        info!(%order_id, buyer = %caller.short(), %commitment, "buyer registered");
        Ok(())
    }

    /// Seller confirms off-ledger fulfillment and releases escrow to the
    /// registered buyer.
    ///
    /// The supplied `(buyer, commitment)` pair must exactly match the
    /// stored registration. The transition to FULFILLED is committed
    /// before the payout and rolled back if the payout fails, so the call
    /// is all-or-nothing and a reentrant payout callback cannot re-trigger
    /// release of the same order.
    ///
    /// # Errors
    /// `OrderNotFound`, `Unauthorized`, `InvalidState`,
    /// `CommitmentMismatch`, plus any payout failure.
    pub fn fulfill_order(
        &mut self,
        caller: AccountId,
        order_id: OrderId,
        buyer: AccountId,
        commitment: Commitment,
    ) -> Result<()> {
        let order = self.ledger.get(order_id)?;
        let (seller, status, asset, amount) =
            (order.seller, order.status, order.asset, order.amount);

        if caller != seller {
            return Err(EscrowError::Unauthorized {
                reason: "only the seller may fulfill an order".into(),
            });
        }
        if status != OrderStatus::BuyerRegistered {
            return Err(EscrowError::InvalidState {
                expected: OrderStatus::BuyerRegistered,
                actual: status,
            });
        }
        if !self.registry.verify(order_id, buyer, commitment) {
            return Err(EscrowError::CommitmentMismatch(order_id));
        }

        self.ledger
            .transition(order_id, OrderStatus::BuyerRegistered, OrderStatus::Fulfilled)?;

        if let Err(err) = self.adapter.payout(buyer, asset, amount) {
            self.ledger
                .rollback(order_id, OrderStatus::Fulfilled, OrderStatus::BuyerRegistered);
            warn!(%order_id, error = %err, "payout failed, fulfillment rolled back");
            return Err(err);
        }

        self.events.push(EscrowEvent::OrderFulfilled {
            order_id,
            buyer,
            commitment,
        });
        info!(%order_id, buyer = %buyer.short(), amount, "order fulfilled");
        Ok(())
    }

    /// Seller withdraws an open order and gets the escrow back.
    ///
    /// # Errors
    /// `CancellationDisabled`, `OrderNotFound`, `Unauthorized`,
    /// `InvalidState`, plus any refund failure.
    pub fn cancel_order(&mut self, caller: AccountId, order_id: OrderId) -> Result<()> {
        if !self.config.enable_cancellation {
            return Err(EscrowError::CancellationDisabled);
        }

        let order = self.ledger.get(order_id)?;
        let (seller, status, asset, amount) =
            (order.seller, order.status, order.asset, order.amount);

        if caller != seller {
            return Err(EscrowError::Unauthorized {
                reason: "only the seller may cancel an order".into(),
            });
        }
        if status != OrderStatus::Open {
            return Err(EscrowError::InvalidState {
                expected: OrderStatus::Open,
                actual: status,
            });
        }

        self.ledger
            .transition(order_id, OrderStatus::Open, OrderStatus::Cancelled)?;

        if let Err(err) = self.adapter.refund(seller, asset, amount) {
            self.ledger
                .rollback(order_id, OrderStatus::Cancelled, OrderStatus::Open);
            warn!(%order_id, error = %err, "refund failed, cancellation rolled back");
            return Err(err);
        }

        self.events.push(EscrowEvent::OrderCancelled { order_id });
        info!(%order_id, amount, "order cancelled, seller refunded");
        Ok(())
    }

    // -----------------------------------------------------------------
    // Read surface
    // -----------------------------------------------------------------

    /// Look up an order.
    pub fn order(&self, order_id: OrderId) -> Result<&Order> {
        self.ledger.get(order_id)
    }

    /// The registration for an order, if a buyer has claimed it.
    #[must_use]
    pub fn registration(&self, order_id: OrderId) -> Option<&BuyerRegistration> {
        self.registry.get(order_id)
    }

    /// The append-only lifecycle event log, in emission order.
    #[must_use]
    pub fn events(&self) -> &[EscrowEvent] {
        &self.events
    }

    /// Current custody for `asset`.
    #[must_use]
    pub fn held(&self, asset: AssetKind) -> u128 {
        self.adapter.held(asset)
    }

    /// Sum of escrowed amounts over non-terminal orders in `asset`.
    /// Always equals [`Self::held`] for the same asset.
    #[must_use]
    pub fn escrowed_total(&self, asset: AssetKind) -> u128 {
        self.ledger.escrowed_total(asset)
    }

    /// Number of orders ever created.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.ledger.len()
    }

    /// The vault account escrowed value sits in.
    #[must_use]
    pub fn vault(&self) -> AccountId {
        self.adapter.vault()
    }

    /// The external value backend (balances, allowances).
    #[must_use]
    pub fn backend(&self) -> &B {
        self.adapter.backend()
    }

    /// Mutable backend access, for funding accounts and granting
    /// allowances. Custody counters stay adapter-private.
    pub fn backend_mut(&mut self) -> &mut B {
        self.adapter.backend_mut()
    }
}
