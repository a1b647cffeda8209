//! Per-chain protocol address tables.
//!
//! The core logic is chain-agnostic: callers inject an `AddressBook` built
//! from the protocol's deployment records instead of relying on embedded
//! constants, which also makes the resolver testable against fixture tables.
use alloy::primitives::Address;
use std::collections::HashMap;

/// Protocol contract addresses deployed on one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainAddresses {
    /// The protocol's core contract.
    pub core: Address,
    /// The shared transparent budget singleton, if the protocol deployed one
    /// on this chain.
    pub transparent_budget: Option<Address>,
}

/// Read-only lookup of protocol addresses keyed by chain id.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    entries: HashMap<u64, ChainAddresses>,
}

impl AddressBook {
    /// Creates an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the protocol addresses for a chain, replacing any previous
    /// entry for the same chain id.
    pub fn with_chain(mut self, chain_id: u64, addresses: ChainAddresses) -> Self {
        self.entries.insert(chain_id, addresses);
        self
    }

    /// Returns the core contract address for a chain, if registered.
    pub fn core(&self, chain_id: u64) -> Option<Address> {
        self.entries.get(&chain_id).map(|a| a.core)
    }

    /// Returns the transparent budget singleton for a chain, if one exists.
    pub fn transparent_budget(&self, chain_id: u64) -> Option<Address> {
        self.entries.get(&chain_id).and_then(|a| a.transparent_budget)
    }
}
