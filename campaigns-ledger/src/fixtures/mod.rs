//! Deterministic in-memory implementations of the external interfaces.
//!
//! `ScriptedLedger` replays a scripted sequence of receipts and records every
//! submitted transaction; `InMemoryRegistry` stores clone records in a map
//! and counts deployments. The pipeline test-suite drives the submission
//! state machine against these, and the demo binary wires them in for
//! offline payload preparation.
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;

use alloy::primitives::{Address, TxHash, B256, U256};
use campaigns_shared::types::{Receipt, TransactionRequest};

use crate::errors::{LedgerError, RegistryError};
use crate::interfaces::{BudgetRegistry, CloneRecord, LedgerClient, ManagedBudgetSpec};

/// Ledger client that replays a scripted receipt sequence.
///
/// Each `submit_transaction` returns a hash derived from the submission
/// index; each `wait_for_receipt` pops the next scripted receipt. Running
/// past the script yields `LedgerError::UnknownTransaction`.
pub struct ScriptedLedger {
    receipts: Mutex<VecDeque<Receipt>>,
    submitted: Mutex<Vec<TransactionRequest>>,
}

impl ScriptedLedger {
    /// Creates a ledger that will confirm transactions with `receipts`, in
    /// order.
    pub fn new(receipts: Vec<Receipt>) -> Self {
        Self {
            receipts: Mutex::new(receipts.into()),
            submitted: Mutex::new(Vec::new()),
        }
    }

    /// Returns every transaction submitted so far, in submission order.
    pub fn submitted(&self) -> Vec<TransactionRequest> {
        self.submitted.lock().expect("submitted lock poisoned").clone()
    }
}

#[async_trait::async_trait]
impl LedgerClient for ScriptedLedger {
    async fn submit_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, LedgerError> {
        let mut submitted = self.submitted.lock().expect("submitted lock poisoned");
        submitted.push(tx.clone());
        Ok(TxHash::from(U256::from(submitted.len() as u64)))
    }

    async fn wait_for_receipt(&self, tx_hash: TxHash) -> Result<Receipt, LedgerError> {
        self.receipts
            .lock()
            .expect("receipts lock poisoned")
            .pop_front()
            .ok_or(LedgerError::UnknownTransaction(tx_hash))
    }
}

/// Budget registry backed by in-process maps.
///
/// Deployed instances get deterministic addresses derived from the
/// deployment counter, so tests can assert on exact references.
#[derive(Default)]
pub struct InMemoryRegistry {
    state: Mutex<RegistryState>,
}

#[derive(Default)]
struct RegistryState {
    clones: HashMap<Address, Vec<CloneRecord>>,
    labels: HashSet<String>,
    deployments: u64,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deployments performed through this registry.
    pub fn deployments(&self) -> u64 {
        self.state.lock().expect("registry lock poisoned").deployments
    }
}

#[async_trait::async_trait]
impl BudgetRegistry for InMemoryRegistry {
    async fn clones(&self, account: Address) -> Result<Vec<CloneRecord>, RegistryError> {
        let state = self.state.lock().expect("registry lock poisoned");
        Ok(state.clones.get(&account).cloned().unwrap_or_default())
    }

    async fn clone_instance(&self, identifier: B256) -> Result<Address, RegistryError> {
        let state = self.state.lock().expect("registry lock poisoned");
        state
            .clones
            .values()
            .flatten()
            .find(|record| record.identifier == identifier)
            .map(|record| record.instance)
            .ok_or(RegistryError::UnknownClone(identifier))
    }

    async fn deploy_managed_budget(
        &self,
        spec: &ManagedBudgetSpec,
    ) -> Result<Address, RegistryError> {
        let mut state = self.state.lock().expect("registry lock poisoned");
        if !state.labels.insert(spec.label.clone()) {
            return Err(RegistryError::LabelTaken(spec.label.clone()));
        }

        state.deployments += 1;
        let instance = Address::with_last_byte(state.deployments as u8);
        let identifier = B256::from(U256::from(state.deployments));
        state
            .clones
            .entry(spec.owner)
            .or_default()
            .push(CloneRecord {
                identifier,
                instance,
            });
        Ok(instance)
    }
}
