//! Identifiers used throughout TradeLock.
//!
//! `OrderId` is a ledger-allocated sequence number (the first order is 0),
//! matching the append-only arena the ledger stores orders in. Account and
//! token identifiers are 20-byte addresses, displayed as hex.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::ADDRESS_BYTES;

// ---------------------------------------------------------------------------
// OrderId
// ---------------------------------------------------------------------------

/// Monotonically increasing order identifier, allocated by the ledger.
///
/// Ids are dense: order `N` lives at arena position `N`, so an id doubles
/// as a lookup index and never needs a hash map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct OrderId(pub u64);

impl OrderId {
    /// The id the very first order receives.
    pub const FIRST: Self = Self(0);

    /// The next id in sequence.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// The arena position backing this id.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "order:{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// AccountId
// ---------------------------------------------------------------------------

/// Caller identity: a 20-byte address supplied by the execution context.
///
/// The engine never authenticates addresses itself — the surrounding
/// platform establishes who the caller is; the engine only compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct AccountId(pub [u8; ADDRESS_BYTES]);

impl AccountId {
    /// The all-zero sentinel address. Never a valid participant.
    pub const ZERO: Self = Self([0u8; ADDRESS_BYTES]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; ADDRESS_BYTES] {
        &self.0
    }

    /// Whether this is the zero sentinel.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_BYTES]
    }

    /// Short hex form for logs.
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..4])
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

/// Random test accounts. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl AccountId {
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}

// ---------------------------------------------------------------------------
// TokenAddress
// ---------------------------------------------------------------------------

/// Reference to an external fungible-token ledger (20-byte address).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct TokenAddress(pub [u8; ADDRESS_BYTES]);

impl TokenAddress {
    /// The zero sentinel: stands for "no token" in the flat wire view,
    /// i.e. the native asset kind.
    pub const ZERO: Self = Self([0u8; ADDRESS_BYTES]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; ADDRESS_BYTES]) -> Self {
        Self(bytes)
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; ADDRESS_BYTES]
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token:0x{}", hex::encode(self.0))
    }
}

/// Random test token addresses. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl TokenAddress {
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
