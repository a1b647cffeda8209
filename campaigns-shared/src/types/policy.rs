use alloy::primitives::Address;

/// Allow-list mode requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllowMode {
    /// Any address may claim.
    Open,
    /// Any address may claim except those on an owner-maintained deny list.
    DenyList,
}

/// Who may claim a campaign's rewards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowPolicy {
    Open,
    DenyList {
        owner: Address,
        denied: Vec<Address>,
    },
}

/// Claim-validation policy enforcing signer-authorized, rate-limited claims.
///
/// `validator_caller` must equal the protocol's core contract address on the
/// target chain; the submission layer checks this before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimValidator {
    pub signers: Vec<Address>,
    pub validator_caller: Address,
    /// Maximum number of claims per address.
    pub max_claim_count: u64,
}
