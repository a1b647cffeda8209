//! Budget resolution.
//!
//! Chooses or creates the account that funds a campaign's rewards: either
//! the protocol's shared transparent budget for the chain, or a per-account
//! managed budget looked up through the registry and lazily deployed when
//! absent.
use std::sync::Arc;

use alloy::primitives::Address;
use campaigns_ledger::addresses::AddressBook;
use campaigns_ledger::interfaces::{BudgetRegistry, ManagedBudgetSpec};
use campaigns_shared::types::{BudgetReference, Role};
use uuid::Uuid;

use crate::errors::ResolverError;

/// Resolves funding budgets against the injected address table and the
/// protocol registry.
pub struct BudgetResolver {
    registry: Arc<dyn BudgetRegistry>,
    addresses: AddressBook,
}

impl BudgetResolver {
    /// Creates a new `BudgetResolver` instance.
    ///
    /// # Arguments
    ///
    /// * `registry` - The protocol registry used for managed budget lookups
    ///   and deployments.
    /// * `addresses` - Read-only per-chain protocol address table.
    ///
    /// # Returns
    ///
    /// A new `BudgetResolver` instance.
    pub fn new(registry: Arc<dyn BudgetRegistry>, addresses: AddressBook) -> Self {
        Self {
            registry,
            addresses,
        }
    }

    /// Resolves the chain's shared transparent budget.
    ///
    /// Pure table lookup; this path never touches the network and never
    /// mutates state.
    ///
    /// # Arguments
    ///
    /// * `chain_id` - Target chain.
    ///
    /// # Returns
    ///
    /// A `Result` holding the transparent `BudgetReference`, or
    /// `ResolverError::UnsupportedChain` if the chain has no registered
    /// transparent budget.
    pub fn transparent(&self, chain_id: u64) -> Result<BudgetReference, ResolverError> {
        self.addresses
            .transparent_budget(chain_id)
            .map(|address| BudgetReference::Transparent { address })
            .ok_or(ResolverError::UnsupportedChain(chain_id))
    }

    /// Resolves the account's managed budget, deploying one if absent.
    ///
    /// Queries the registry for the account's prior deployments and returns
    /// the most recent one when it exists (idempotent path, nothing is
    /// deployed). Otherwise deploys a fresh managed budget owned by the
    /// account with the chain's core contract authorized as a manager, under
    /// a registry-unique label.
    ///
    /// This is a check-then-act sequence against external mutable state with
    /// no atomicity guarantee: two concurrent resolutions for the same
    /// account may both observe "absent" and both deploy. Callers that need
    /// exactly-once deployment must serialize resolution per account.
    ///
    /// # Arguments
    ///
    /// * `account` - The owning account.
    /// * `chain_id` - Target chain, used to authorize the core contract.
    ///
    /// # Returns
    ///
    /// A `Result` holding the managed `BudgetReference`, or a
    /// `ResolverError` if the chain is unknown or the registry fails.
    pub async fn managed(
        &self,
        account: Address,
        chain_id: u64,
    ) -> Result<BudgetReference, ResolverError> {
        let clones = self.registry.clones(account).await?;
        if let Some(record) = clones.last() {
            let address = self.registry.clone_instance(record.identifier).await?;
            return Ok(BudgetReference::Managed {
                address,
                owner: account,
            });
        }

        let core = self
            .addresses
            .core(chain_id)
            .ok_or(ResolverError::UnsupportedChain(chain_id))?;
        let spec = ManagedBudgetSpec {
            label: format!("budget_{}", Uuid::new_v4().simple()),
            owner: account,
            authorized: vec![account, core],
            roles: vec![Role::Admin, Role::Manager],
        };
        let address = self.registry.deploy_managed_budget(&spec).await?;
        Ok(BudgetReference::Managed {
            address,
            owner: account,
        })
    }
}
