use alloy::primitives::{Address, Bytes, TxHash, B256, U256};

/// A transaction ready for submission through the ledger client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub to: Address,
    pub data: Bytes,
    pub value: Option<U256>,
}

/// Outcome of a transaction's on-chain execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReceiptStatus {
    Success,
    Reverted,
}

/// Undecoded log emitted during a transaction's execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLog {
    pub address: Address,
    pub topics: Vec<B256>,
    pub data: Bytes,
}

/// Confirmation record of an included transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub status: ReceiptStatus,
    pub logs: Vec<RawLog>,
}

/// A decoded campaign-creation event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreationEvent {
    pub campaign_id: U256,
}

/// Outcome of a campaign submission attempt.
///
/// `campaign_id` is present iff the creation receipt succeeded and exactly
/// one creation event was decoded from its logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub tx_hash: TxHash,
    pub status: ReceiptStatus,
    pub campaign_id: Option<U256>,
}
