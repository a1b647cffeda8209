use alloy::primitives::{Address, U256};

/// How the reward pool is distributed across qualifying claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionStrategy {
    /// Fixed reward per claim, drawn from a pre-funded pool.
    Pool,
    /// Reward minted on claim.
    Mint,
    /// Pool is raffled among claimants.
    Raffle,
}

/// Reward issued per qualifying claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncentiveDescriptor {
    pub asset: Address,
    /// Reward per claim in the asset's smallest denomination.
    pub reward: U256,
    /// Maximum number of claims this incentive funds.
    pub limit: U256,
    pub strategy: DistributionStrategy,
}
