//! # Campaigns Ledger
//! This crate provides the trait interfaces for the external ledger client,
//! budget registry, and ABI codec consumed by the campaign pipeline. It
//! includes definitions for errors, interfaces, the concrete protocol codec,
//! the per-chain address book, and in-memory fixture implementations.
pub mod abi;
pub mod addresses;
pub mod errors;
pub mod fixtures;
pub mod interfaces;

pub use abi::ProtocolCodec;
pub use addresses::{AddressBook, ChainAddresses};
pub use errors::{CodecError, LedgerError, RegistryError};
pub use interfaces::{
    BudgetRegistry, CampaignCodec, CloneRecord, LedgerClient, ManagedBudgetSpec,
};
