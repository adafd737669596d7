//! Engine configuration.
//!
//! The two toggles gate behaviors the base state machine works without:
//! the self-dealing guard and seller-initiated cancellation. Both default
//! to the safe side.

use serde::{Deserialize, Serialize};

/// Configuration for an [`EscrowEngine`](https://docs.rs/tradelock-engine)
/// instance, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether a seller may register as the buyer of their own order.
    /// Off by default: self-dealing lets a seller release escrow to
    /// themselves and fake trade volume.
    pub allow_seller_self_register: bool,
    /// Whether sellers may cancel open orders for a refund.
    pub enable_cancellation: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            allow_seller_self_register: false,
            enable_cancellation: true,
        }
    }
}
