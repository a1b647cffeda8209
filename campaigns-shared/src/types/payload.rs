use alloy::primitives::{Address, U256};

use super::{AllowPolicy, BudgetReference, ClaimValidator, EventActionDescriptor, IncentiveDescriptor};

/// The assembled campaign creation request sent to the protocol core.
///
/// All chain ids across nested descriptors must match `chain_id`; the
/// submission layer validates this before encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignCreationPayload {
    pub chain_id: u64,
    pub budget: BudgetReference,
    pub action: EventActionDescriptor,
    pub incentives: Vec<IncentiveDescriptor>,
    pub allow_policy: AllowPolicy,
    pub validator: ClaimValidator,
    /// Account that owns the created campaign.
    pub owner: Address,
}

/// Funds moved into the budget at creation time.
///
/// `amount` is fee-inclusive: the protocol fee has already been added on top
/// of the raw reward amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FundingInstruction {
    pub asset: Address,
    pub amount: U256,
}
