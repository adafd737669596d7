//! System-wide constants for the TradeLock escrow engine.

/// Byte width of account and token addresses.
pub const ADDRESS_BYTES: usize = 20;

/// Byte width of a buyer commitment.
pub const COMMITMENT_BYTES: usize = 32;

/// Sequence number of the first order an engine allocates.
pub const FIRST_ORDER_SEQ: u64 = 0;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "TradeLock";
