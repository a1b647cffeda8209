//! Allow-list and claim-validator builders.
use alloy::primitives::Address;
use campaigns_shared::types::{AllowMode, AllowPolicy, ClaimValidator};

use crate::errors::BuilderError;

/// Builds the allow/deny policy for a campaign.
///
/// `Open` mode ignores `owner` and `denied`; `DenyList` mode requires an
/// owner and accepts a possibly empty denied set.
///
/// # Arguments
///
/// * `mode` - Requested allow-list mode.
/// * `owner` - Deny-list owner, required in `DenyList` mode.
/// * `denied` - Addresses barred from claiming.
///
/// # Returns
///
/// A `Result` holding the `AllowPolicy`, or `BuilderError::MissingOwner` for
/// an ownerless deny list.
pub fn build_allow_policy(
    mode: AllowMode,
    owner: Option<Address>,
    denied: Vec<Address>,
) -> Result<AllowPolicy, BuilderError> {
    match mode {
        AllowMode::Open => Ok(AllowPolicy::Open),
        AllowMode::DenyList => {
            let owner = owner.ok_or(BuilderError::MissingOwner)?;
            Ok(AllowPolicy::DenyList { owner, denied })
        }
    }
}

/// Builds the claim-validation policy for a campaign.
///
/// # Arguments
///
/// * `signers` - Addresses authorized to sign claims; must be non-empty.
/// * `validator_caller` - The protocol core contract that invokes the
///   validator; checked against the chain's core address at submission time.
/// * `max_claim_count` - Maximum claims per address; must be at least 1.
///
/// # Returns
///
/// A `Result` holding the `ClaimValidator`, or a `BuilderError` if the
/// signer set is empty or the claim limit is zero.
pub fn build_validator(
    signers: Vec<Address>,
    validator_caller: Address,
    max_claim_count: u64,
) -> Result<ClaimValidator, BuilderError> {
    if signers.is_empty() {
        return Err(BuilderError::EmptySignerSet);
    }
    if max_claim_count == 0 {
        return Err(BuilderError::InvalidClaimLimit);
    }

    Ok(ClaimValidator {
        signers,
        validator_caller,
        max_claim_count,
    })
}
