//! Asset model: what kind of value an order escrows.
//!
//! An order holds either the native currency of the execution platform or
//! a balance on an external fungible-token ledger. Encoding this as an enum
//! (instead of a `(token_address, is_token)` pair with a zero sentinel)
//! makes "token address present iff token kind" unrepresentable to violate;
//! [`AssetKind::from_parts`] keeps the flat wire view available.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TokenAddress;

/// The kind of value an order escrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKind {
    /// Native currency, transferred with the call itself.
    Native,
    /// Fungible token on an external balance ledger, pulled via allowance.
    Token(TokenAddress),
}

impl AssetKind {
    /// Build from the flat `(token_ref, is_token)` wire representation.
    ///
    /// When `is_token` is false the token reference is ignored and must be
    /// the zero sentinel by convention; callers holding a real address with
    /// `is_token == false` have a bug upstream.
    #[must_use]
    pub fn from_parts(token_ref: TokenAddress, is_token: bool) -> Self {
        if is_token {
            Self::Token(token_ref)
        } else {
            Self::Native
        }
    }

    /// The flat token reference: the token's address, or the zero sentinel
    /// for the native kind.
    #[must_use]
    pub fn token_ref(&self) -> TokenAddress {
        match self {
            Self::Native => TokenAddress::ZERO,
            Self::Token(addr) => *addr,
        }
    }

    #[must_use]
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    #[must_use]
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "NATIVE"),
            Self::Token(addr) => write!(f, "{addr}"),
        }
    }
}
