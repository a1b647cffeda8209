mod codec;
mod ledger;
mod registry;

pub use codec::CodecError;
pub use ledger::LedgerError;
pub use registry::RegistryError;
