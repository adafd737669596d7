//! Error types for the TradeLock escrow engine.
//!
//! All errors use the `TL_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Order / ledger errors
//! - 2xx: Registration / commitment errors
//! - 3xx: Value transfer errors
//! - 4xx: Authorization errors
//! - 9xx: General / internal errors
//!
//! Every error aborts the whole operation with no partial state change; the
//! engine never retries internally.

use thiserror::Error;

use crate::{OrderId, OrderStatus};

/// Central error enum for all TradeLock operations.
#[derive(Debug, Error)]
pub enum EscrowError {
    // =================================================================
    // Order / Ledger Errors (1xx)
    // =================================================================
    /// The requested order id was never allocated.
    #[error("TL_ERR_100: Order not found: {0}")]
    OrderNotFound(OrderId),

    /// Order amount must be strictly positive.
    #[error("TL_ERR_101: Invalid amount: must be > 0")]
    InvalidAmount,

    /// The order is in the wrong lifecycle stage for the requested
    /// operation.
    #[error("TL_ERR_102: Invalid state: expected {expected}, got {actual}")]
    InvalidState {
        expected: OrderStatus,
        actual: OrderStatus,
    },

    /// Attached native payment disagrees with the declared amount (or a
    /// non-payable token order carried a payment).
    #[error("TL_ERR_103: Amount mismatch: declared {declared}, attached {attached}")]
    AmountMismatch { declared: u128, attached: u128 },

    // =================================================================
    // Registration / Commitment Errors (2xx)
    // =================================================================
    /// A buyer is already registered for this order.
    #[error("TL_ERR_200: Buyer already registered for {0}")]
    AlreadyRegistered(OrderId),

    /// The zero address cannot participate.
    #[error("TL_ERR_202: Zero address is not a valid participant")]
    ZeroAddress,

    /// The all-zero commitment is reserved and cannot be registered.
    #[error("TL_ERR_203: Empty commitment")]
    EmptyCommitment,

    /// The supplied (buyer, commitment) pair does not match the stored
    /// registration.
    #[error("TL_ERR_204: Commitment mismatch for {0}")]
    CommitmentMismatch(OrderId),

    // =================================================================
    // Value Transfer Errors (3xx)
    // =================================================================
    /// The underlying transfer was rejected by the backend.
    #[error("TL_ERR_300: Transfer failed: {reason}")]
    TransferFailed { reason: String },

    /// The token pull exceeds the approved allowance.
    #[error("TL_ERR_301: Insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance { needed: u128, approved: u128 },

    /// The paying account does not hold enough value.
    #[error("TL_ERR_302: Insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: u128, available: u128 },

    // =================================================================
    // Authorization Errors (4xx)
    // =================================================================
    /// The caller identity is not allowed to perform this operation.
    #[error("TL_ERR_400: Unauthorized: {reason}")]
    Unauthorized { reason: String },

    /// Order cancellation is disabled by engine configuration.
    #[error("TL_ERR_401: Cancellation is disabled")]
    CancellationDisabled,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error (custody accounting violation etc.).
    #[error("TL_ERR_900: Internal error: {0}")]
    Internal(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, EscrowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_contains_prefix() {
        let err = EscrowError::OrderNotFound(OrderId(7));
        let msg = format!("{err}");
        assert!(msg.starts_with("TL_ERR_100"), "Got: {msg}");
        assert!(msg.contains("order:7"));
    }

    #[test]
    fn invalid_state_display() {
        let err = EscrowError::InvalidState {
            expected: OrderStatus::Open,
            actual: OrderStatus::Fulfilled,
        };
        let msg = format!("{err}");
        assert!(msg.contains("TL_ERR_102"));
        assert!(msg.contains("OPEN"));
        assert!(msg.contains("FULFILLED"));
    }

    #[test]
    fn amount_mismatch_display() {
        let err = EscrowError::AmountMismatch {
            declared: 100,
            attached: 99,
        };
        let msg = format!("{err}");
        assert!(msg.contains("TL_ERR_103"));
        assert!(msg.contains("100"));
        assert!(msg.contains("99"));
    }

    #[test]
    fn all_errors_have_tl_err_prefix() {
        let errors: Vec<Box<dyn std::error::Error>> = vec![
            Box::new(EscrowError::InvalidAmount),
            Box::new(EscrowError::AlreadyRegistered(OrderId(0))),
            Box::new(EscrowError::ZeroAddress),
            Box::new(EscrowError::EmptyCommitment),
            Box::new(EscrowError::CommitmentMismatch(OrderId(1))),
            Box::new(EscrowError::TransferFailed {
                reason: "test".into(),
            }),
            Box::new(EscrowError::InsufficientAllowance {
                needed: 2,
                approved: 1,
            }),
            Box::new(EscrowError::Unauthorized {
                reason: "caller is not the seller".into(),
            }),
            Box::new(EscrowError::CancellationDisabled),
            Box::new(EscrowError::Internal("test".into())),
        ];
        for err in errors {
            let msg = format!("{err}");
            assert!(
                msg.starts_with("TL_ERR_"),
                "Error missing TL_ERR_ prefix: {msg}"
            );
        }
    }
}
