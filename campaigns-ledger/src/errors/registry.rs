//! Error types for the budget registry interface.
//! Defines specific errors that can occur while looking up or deploying
//! budget clones through the protocol registry.
use alloy::primitives::B256;
use thiserror::Error;

/// Represents errors that can occur within a budget registry implementation.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Transport error: {0}")]
    Transport(String),

    /// The registry rejected a deployment label that is already taken.
    /// Labels are registry-unique; collisions are not handled locally.
    #[error("Deployment label already taken: {0}")]
    LabelTaken(String),

    #[error("Unknown clone identifier: {0}")]
    UnknownClone(B256),
}
