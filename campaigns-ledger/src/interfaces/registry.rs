//! This module defines the `BudgetRegistry` trait, which provides an
//! interface for looking up prior budget deployments and deploying new
//! managed budgets through the protocol registry.
use alloy::primitives::{Address, B256};
use campaigns_shared::types::Role;

use crate::errors::RegistryError;

/// One prior deployment recorded by the registry for an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneRecord {
    pub identifier: B256,
    pub instance: Address,
}

/// Parameters for deploying a new managed budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedBudgetSpec {
    /// Registry-unique human-readable deployment label.
    pub label: String,
    pub owner: Address,
    /// Addresses authorized on the budget, paired positionally with `roles`.
    pub authorized: Vec<Address>,
    pub roles: Vec<Role>,
}

/// A trait that defines the interface for interacting with the protocol's
/// budget registry.
///
/// The registry is external mutable state: lookups and deployments carry no
/// transactional guarantee of atomicity across calls.
#[async_trait::async_trait]
pub trait BudgetRegistry: Send + Sync {
    /// Returns the account's prior budget deployments, most recent last.
    ///
    /// # Arguments
    ///
    /// * `account` - The owning account to query.
    ///
    /// # Returns
    ///
    /// A `Result` holding the recorded clones, or a `RegistryError` if the
    /// query fails.
    async fn clones(&self, account: Address) -> Result<Vec<CloneRecord>, RegistryError>;

    /// Resolves a clone identifier to its deployed instance address.
    ///
    /// # Arguments
    ///
    /// * `identifier` - Registry identifier of the clone.
    ///
    /// # Returns
    ///
    /// A `Result` holding the instance address, or
    /// `RegistryError::UnknownClone` if the identifier is not recorded.
    async fn clone_instance(&self, identifier: B256) -> Result<Address, RegistryError>;

    /// Deploys a new managed budget under a registry-unique label.
    ///
    /// # Arguments
    ///
    /// * `spec` - Owner, authorized accounts, roles, and deployment label.
    ///
    /// # Returns
    ///
    /// A `Result` holding the freshly deployed budget address, or
    /// `RegistryError::LabelTaken` if the label is already in use.
    async fn deploy_managed_budget(&self, spec: &ManagedBudgetSpec)
        -> Result<Address, RegistryError>;
}
