//! This module defines the `CampaignCodec` trait, which provides an
//! interface to the smart-contract ABI layer: encoding approval and creation
//! calldata, and decoding creation events from receipt logs.
use alloy::primitives::{Address, Bytes, U256};
use campaigns_shared::types::{CampaignCreationPayload, CreationEvent, FundingInstruction, RawLog};

use crate::errors::CodecError;

/// A trait that defines the ABI boundary of the campaign pipeline.
///
/// Implementors own the protocol's on-chain schema; the pipeline never
/// touches raw ABI layouts itself.
pub trait CampaignCodec: Send + Sync {
    /// Encodes an ERC20 approval authorizing `spender` to pull `amount`
    /// units of the reward asset.
    ///
    /// # Arguments
    ///
    /// * `spender` - The budget contract being authorized.
    /// * `amount` - Fee-inclusive allowance in smallest denomination.
    ///
    /// # Returns
    ///
    /// A `Result` holding the approval calldata, or a `CodecError` if
    /// encoding fails.
    fn encode_approval(&self, spender: Address, amount: U256) -> Result<Bytes, CodecError>;

    /// Encodes the campaign creation call carrying the assembled payload and
    /// the funding instruction moving funds into the budget at creation time.
    ///
    /// # Arguments
    ///
    /// * `payload` - The assembled campaign creation payload.
    /// * `funding` - Asset and fee-inclusive amount transferred on creation.
    ///
    /// # Returns
    ///
    /// A `Result` holding the creation calldata, or a `CodecError` if the
    /// payload violates the on-chain schema.
    fn encode_creation(
        &self,
        payload: &CampaignCreationPayload,
        funding: &FundingInstruction,
    ) -> Result<Bytes, CodecError>;

    /// Decodes the protocol's campaign-creation events from receipt logs.
    ///
    /// Logs that do not match the creation event signature are skipped.
    ///
    /// # Arguments
    ///
    /// * `logs` - Raw logs from a creation receipt.
    ///
    /// # Returns
    ///
    /// A `Result` holding the decoded creation events in log order, or a
    /// `CodecError` if a matching log is malformed.
    fn decode_creation_events(&self, logs: &[RawLog]) -> Result<Vec<CreationEvent>, CodecError>;
}
