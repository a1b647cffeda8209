mod codec;
mod ledger;
mod registry;

pub use codec::CampaignCodec;
pub use ledger::LedgerClient;
pub use registry::{BudgetRegistry, CloneRecord, ManagedBudgetSpec};
