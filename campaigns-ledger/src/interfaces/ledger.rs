//! This module defines the `LedgerClient` trait, which provides an interface
//! for submitting transactions to the underlying ledger and awaiting their
//! inclusion receipts. It abstracts the network client used for submission.
use alloy::primitives::TxHash;
use campaigns_shared::types::{Receipt, TransactionRequest};

use crate::errors::LedgerError;

/// A trait that defines the interface for interacting with the ledger.
///
/// Implementors of this trait provide methods for submitting a transaction
/// and blocking on its confirmation. Timeouts are the implementation's
/// concern and surface as [`LedgerError::Timeout`].
#[async_trait::async_trait]
pub trait LedgerClient: Send + Sync {
    /// Submits a transaction for inclusion.
    ///
    /// Returns as soon as the transaction is accepted by the ledger; the
    /// transaction is not yet confirmed at that point.
    ///
    /// # Arguments
    ///
    /// * `tx` - The transaction to submit.
    ///
    /// # Returns
    ///
    /// A `Result` holding the transaction hash, or a `LedgerError` if
    /// submission fails.
    async fn submit_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, LedgerError>;

    /// Blocks until the ledger confirms the given transaction.
    ///
    /// # Arguments
    ///
    /// * `tx_hash` - Hash of a previously submitted transaction.
    ///
    /// # Returns
    ///
    /// A `Result` holding the inclusion `Receipt` (status and emitted logs),
    /// or a `LedgerError` if confirmation fails.
    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, LedgerError>;
}
