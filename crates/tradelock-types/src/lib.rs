//! # tradelock-types
//!
//! Shared types, errors, and configuration for the **TradeLock** escrow engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`OrderId`], [`AccountId`], [`TokenAddress`]
//! - **Asset model**: [`AssetKind`]
//! - **Commitment model**: [`Commitment`]
//! - **Order model**: [`Order`], [`OrderStatus`]
//! - **Registration model**: [`BuyerRegistration`]
//! - **Lifecycle events**: [`EscrowEvent`]
//! - **Configuration**: [`EngineConfig`]
//! - **Errors**: [`EscrowError`] with `TL_ERR_` prefix codes
//! - **Constants**: system-wide limits and defaults

pub mod asset;
pub mod commitment;
pub mod config;
pub mod constants;
pub mod error;
pub mod event;
pub mod ids;
pub mod order;
pub mod registration;

// Re-export all primary types at crate root for ergonomic imports:
//   use tradelock_types::{Order, OrderStatus, AssetKind, Commitment, ...};

pub use asset::*;
pub use commitment::*;
pub use config::*;
pub use error::*;
pub use event::*;
pub use ids::*;
pub use order::*;
pub use registration::*;

// Constants are accessed via `tradelock_types::constants::FOO`
// (not re-exported to avoid name collisions).
