//! # tradelock-engine
//!
//! The TradeLock escrow engine: custody of a seller's value between order
//! creation and release to a registered buyer.
//!
//! ## Architecture
//!
//! The engine composes three leaf components behind one orchestrator:
//! 1. **ValueAdapter**: uniform deposit/payout/refund over native currency
//!    and external fungible tokens, with explicit custody accounting
//! 2. **OrderLedger**: the authoritative order arena; sole owner of every
//!    status transition
//! 3. **CommitmentRegistry**: one buyer claim per order, verified byte for
//!    byte at fulfillment
//! 4. **EscrowEngine**: public entry points, caller authorization, and the
//!    append-only lifecycle event log
//!
//! ## Order Flow
//!
//! ```text
//! seller → create_order      → adapter.deposit  → ledger.create      → OrderCreated
//! buyer  → register_as_buyer → registry.register → OPEN→BUYER_REGISTERED → BuyerRegistered
//! seller → fulfill_order     → registry.verify  → BUYER_REGISTERED→FULFILLED
//!                            → adapter.payout(buyer)                 → OrderFulfilled
//! ```
//!
//! The status transition is always recorded before value leaves custody,
//! and rolled back if the transfer fails, so every operation is
//! all-or-nothing.

pub mod adapter;
pub mod engine;
pub mod ledger;
pub mod registry;

pub use adapter::{InMemoryBank, TransferBackend, ValueAdapter};
pub use engine::EscrowEngine;
pub use ledger::OrderLedger;
pub use registry::CommitmentRegistry;
