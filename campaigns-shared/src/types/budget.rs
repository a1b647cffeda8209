use alloy::primitives::Address;

/// Authorization role granted on a managed budget at deployment time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Manager,
}

/// Funding source for a campaign's rewards.
///
/// A transparent budget is a protocol-wide singleton per chain; a managed
/// budget is deployed on demand and always belongs to exactly one owning
/// account, which the variant carries structurally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BudgetReference {
    /// Shared, protocol-owned budget contract.
    Transparent { address: Address },
    /// Per-account budget contract deployed through the registry.
    Managed { address: Address, owner: Address },
}

impl BudgetReference {
    /// Returns the budget contract address regardless of kind.
    pub fn address(&self) -> Address {
        match self {
            BudgetReference::Transparent { address } => *address,
            BudgetReference::Managed { address, .. } => *address,
        }
    }

    /// Returns `true` for a per-account managed budget.
    pub fn is_managed(&self) -> bool {
        matches!(self, BudgetReference::Managed { .. })
    }
}
