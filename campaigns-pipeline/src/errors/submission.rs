//! Error types for the submission state machine.
//! Configuration errors surface before anything is submitted; revert errors
//! carry the failing transaction hash so a caller can diagnose the failure
//! off-chain. None of these are retried automatically.
use alloy::primitives::{Address, TxHash};
use campaigns_ledger::errors::{CodecError, LedgerError};
use thiserror::Error;

/// Represents errors that can occur while submitting a campaign.
#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("No protocol deployment registered for chain id {0}")]
    UnsupportedChain(u64),

    #[error("Descriptor chain id {found} does not match target chain {expected}")]
    ChainMismatch { expected: u64, found: u64 },

    #[error("Validator caller {caller} is not the core contract {core}")]
    ValidatorCallerMismatch { caller: Address, core: Address },

    /// Fatal for the attempt; the cause (balance, allowance, protocol-side
    /// rejection) is not distinguishable without off-chain inspection.
    #[error("Approval transaction reverted: {tx_hash}")]
    ApprovalReverted { tx_hash: TxHash },

    #[error("Creation transaction reverted: {tx_hash}")]
    CreationReverted { tx_hash: TxHash },

    /// A success receipt without a creation event indicates an ABI or
    /// event-signature mismatch with the protocol, never a transient failure.
    #[error("Creation receipt {tx_hash} carries no campaign creation event")]
    MissingCreationEvent { tx_hash: TxHash },

    #[error("Submission already reached a terminal state")]
    AlreadyTerminal,

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("Codec error: {0}")]
    Codec(#[from] CodecError),
}
