//! Error types for the campaign codec.
//! Defines specific errors that can occur while encoding campaign payloads
//! or decoding creation events from receipt logs.
use thiserror::Error;

/// Represents errors that can occur within the ABI codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The event action carried a step count the on-chain schema rejects.
    #[error("Action step arity mismatch: expected {expected}, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// A log matched the creation event signature but its topics were
    /// malformed. Points at an ABI/version mismatch with the protocol.
    #[error("Malformed campaign creation log")]
    MalformedCreationLog,
}
