//! Error types for the ledger client interface.
//! Defines specific errors that can occur while submitting transactions and
//! awaiting their receipts.
use alloy::primitives::TxHash;
use thiserror::Error;

/// Represents errors that can occur within a ledger client implementation.
///
/// Implementations map their transport-level failures into these variants so
/// the pipeline stays agnostic of the underlying client.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("No receipt available for transaction: {0}")]
    UnknownTransaction(TxHash),

    #[error("Timed out waiting for transaction: {0}")]
    Timeout(TxHash),
}
