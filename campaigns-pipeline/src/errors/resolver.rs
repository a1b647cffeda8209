//! Error types for the budget resolver.
//! Defines specific errors that can occur while resolving transparent or
//! managed funding budgets.
use campaigns_ledger::errors::RegistryError;
use thiserror::Error;

/// Represents errors that can occur within the budget resolver.
#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("No protocol deployment registered for chain id {0}")]
    UnsupportedChain(u64),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}
