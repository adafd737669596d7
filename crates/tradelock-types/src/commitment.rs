//! # Commitment — the buyer's release tag
//!
//! A `Commitment` is the 32-byte opaque value a buyer supplies when
//! registering for an order. The seller must present the exact same value
//! (together with the buyer's address) to release the escrowed funds, so it
//! acts as a shared reference tag binding the off-ledger payment to the
//! on-ledger release.
//!
//! The engine only ever compares commitments for equality, which leaves the
//! scheme open to the caller:
//!
//! - **Reference tag** (the observed baseline): buyer picks a random value
//!   and shares it with the seller over the payment channel.
//! - **Commit-reveal** (hardened): buyer registers
//!   [`Commitment::from_secret`]`(s)` and the seller fulfils with the same
//!   derived tag after learning `s`; the raw secret never has to appear in
//!   the registration.
//!
//! The all-zero value is reserved as "no commitment" and rejected at
//! registration.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::constants::COMMITMENT_BYTES;

/// Opaque 32-byte tag binding a buyer registration to its fulfillment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment(pub [u8; COMMITMENT_BYTES]);

impl Commitment {
    /// The reserved "no commitment" value. Rejected at registration.
    pub const EMPTY: Self = Self([0u8; COMMITMENT_BYTES]);

    #[must_use]
    pub fn from_bytes(bytes: [u8; COMMITMENT_BYTES]) -> Self {
        Self(bytes)
    }

    /// Derive a commitment as `SHA-256(secret)`.
    ///
    /// Domain-separated so a tag derived here can never collide with a raw
    /// 32-byte value that happens to equal a bare hash.
    #[must_use]
    pub fn from_secret(secret: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(b"tradelock:commitment:v1:");
        hasher.update(secret);
        Self(hasher.finalize().into())
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8; COMMITMENT_BYTES] {
        &self.0
    }

    /// Whether this is the reserved empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == [0u8; COMMITMENT_BYTES]
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c:{}", hex::encode(&self.0[..8]))
    }
}

/// Random test commitments. **Never use in production.**
#[cfg(any(test, feature = "test-helpers"))]
impl Commitment {
    #[must_use]
    pub fn random() -> Self {
        Self(rand::random())
    }
}
