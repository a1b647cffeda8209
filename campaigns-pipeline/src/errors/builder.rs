//! Error types for the descriptor builders.
//! Defines the configuration errors raised while assembling action,
//! incentive, and claim-policy descriptors. All of these are caller-fixable
//! and raised before any transaction is submitted.
use thiserror::Error;

/// Represents errors that can occur while building campaign descriptors.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Filter value is not a hex string: {0}")]
    InvalidFilterValue(String),

    #[error("Filter field index {index} out of range for event with {field_count} fields")]
    InvalidFilterField { index: u64, field_count: usize },

    #[error("Claimant field index {index} does not reference an address field")]
    InvalidClaimantField { index: u64 },

    #[error("Amount is not a decimal number: {0}")]
    InvalidAmount(String),

    /// The human-readable amount carries non-zero fractional digits beyond
    /// what the asset's decimals can represent. Truncating would silently
    /// change the reward, so this is an error instead.
    #[error("Amount {amount} cannot be represented with {decimals} decimals")]
    PrecisionLoss { amount: String, decimals: u8 },

    #[error("Reward amount must be greater than zero")]
    ZeroReward,

    #[error("Claim limit must be at least 1")]
    InvalidClaimLimit,

    #[error("Deny-list policy requires an owner")]
    MissingOwner,

    /// An unclaimable campaign is a configuration error, not a valid state.
    #[error("Validator signer set must not be empty")]
    EmptySignerSet,
}
