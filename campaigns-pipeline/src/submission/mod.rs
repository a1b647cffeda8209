//! Campaign submission state machine.
//!
//! Orchestrates the two-phase on-chain flow: a token approval authorizing
//! the budget to pull the fee-inclusive reward amount, then the creation
//! transaction carrying the assembled payload, each confirmed by receipt
//! before the next step. Partial-failure states (approved but not created)
//! are first-class: a caller that persists the machine's state and last
//! transaction hash can observe exactly where a flow stopped.
//!
//! Resubmitting an already-successful creation is not idempotent at the
//! protocol layer; the machine performs no deduplication, so callers must
//! track issued transaction hashes themselves before retrying.
use std::sync::Arc;

use alloy::primitives::{Address, Bytes, TxHash, U256};
use campaigns_ledger::addresses::AddressBook;
use campaigns_ledger::interfaces::{CampaignCodec, LedgerClient};
use campaigns_shared::types::{
    CampaignCreationPayload, FundingInstruction, Receipt, ReceiptStatus, SubmissionResult,
    TransactionRequest,
};

use crate::errors::SubmissionError;
use crate::fee::{with_fee, PROTOCOL_FEE_BPS};

/// Terminal failure reasons recorded on the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    ApprovalReverted { tx_hash: TxHash },
    CreationReverted { tx_hash: TxHash },
    MissingCreationEvent { tx_hash: TxHash },
}

/// State of one campaign submission.
///
/// Success path: `Built → Approving → Approved → Creating → Created →
/// Confirmed`. Any failure moves the machine to `Failed` and stays there.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Built,
    Approving { tx_hash: TxHash },
    Approved { approval_tx: TxHash },
    Creating { tx_hash: TxHash },
    Created { tx_hash: TxHash, receipt: Receipt },
    Confirmed(SubmissionResult),
    Failed(FailureReason),
}

impl SubmissionState {
    /// Returns `true` once the machine can no longer advance.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Confirmed(_) | SubmissionState::Failed(_)
        )
    }
}

/// One in-flight campaign submission.
///
/// Created through [`CampaignSubmitter::begin`] and advanced one transition
/// at a time; holds the validated payload, the fee-inclusive funding
/// instruction, and the current state.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignSubmission {
    payload: CampaignCreationPayload,
    funding: FundingInstruction,
    state: SubmissionState,
}

impl CampaignSubmission {
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn payload(&self) -> &CampaignCreationPayload {
        &self.payload
    }

    /// The fee-inclusive funding moved into the budget at creation time.
    pub fn funding(&self) -> &FundingInstruction {
        &self.funding
    }
}

/// Drives campaign submissions against the injected ledger client and codec.
///
/// A single submitter can serve many submissions; all per-flow state lives
/// in the [`CampaignSubmission`] it hands out.
pub struct CampaignSubmitter {
    ledger: Arc<dyn LedgerClient>,
    codec: Arc<dyn CampaignCodec>,
    addresses: AddressBook,
}

impl CampaignSubmitter {
    /// Creates a new `CampaignSubmitter` instance.
    ///
    /// # Arguments
    ///
    /// * `ledger` - Client used to submit transactions and await receipts.
    /// * `codec` - ABI codec for approval/creation calldata and creation
    ///   event decoding.
    /// * `addresses` - Read-only per-chain protocol address table.
    ///
    /// # Returns
    ///
    /// A new `CampaignSubmitter` instance.
    pub fn new(
        ledger: Arc<dyn LedgerClient>,
        codec: Arc<dyn CampaignCodec>,
        addresses: AddressBook,
    ) -> Self {
        Self {
            ledger,
            codec,
            addresses,
        }
    }

    fn core_for(&self, chain_id: u64) -> Result<Address, SubmissionError> {
        self.addresses
            .core(chain_id)
            .ok_or(SubmissionError::UnsupportedChain(chain_id))
    }

    /// Validates the payload's cross-field consistency rules.
    ///
    /// Every nested chain id must match the target chain, and the validator
    /// caller must be the chain's core contract. Raised before anything is
    /// encoded or submitted.
    fn validate(&self, payload: &CampaignCreationPayload) -> Result<Address, SubmissionError> {
        let core = self.core_for(payload.chain_id)?;

        let nested_chains = payload
            .action
            .steps
            .iter()
            .map(|step| step.chain_id)
            .chain(std::iter::once(payload.action.claimant.chain_id));
        for found in nested_chains {
            if found != payload.chain_id {
                return Err(SubmissionError::ChainMismatch {
                    expected: payload.chain_id,
                    found,
                });
            }
        }

        if payload.validator.validator_caller != core {
            return Err(SubmissionError::ValidatorCallerMismatch {
                caller: payload.validator.validator_caller,
                core,
            });
        }

        Ok(core)
    }

    fn fee_adjusted_funding(asset: Address, reward_total: U256) -> FundingInstruction {
        FundingInstruction {
            asset,
            amount: with_fee(reward_total, PROTOCOL_FEE_BPS),
        }
    }

    /// Encodes the creation calldata without submitting anything.
    ///
    /// The `Built → Prepared` terminal path for callers that sign offline or
    /// relay cross-chain: runs the same validation and fee adjustment as a
    /// live submission, then returns the unsubmitted calldata.
    ///
    /// # Arguments
    ///
    /// * `payload` - The assembled campaign creation payload.
    /// * `asset` - Reward asset funding the budget.
    /// * `reward_total` - Total reward amount before the protocol fee.
    ///
    /// # Returns
    ///
    /// A `Result` holding the encoded creation calldata, or a
    /// `SubmissionError` if validation or encoding fails.
    pub fn prepare(
        &self,
        payload: &CampaignCreationPayload,
        asset: Address,
        reward_total: U256,
    ) -> Result<Bytes, SubmissionError> {
        self.validate(payload)?;
        let funding = Self::fee_adjusted_funding(asset, reward_total);
        Ok(self.codec.encode_creation(payload, &funding)?)
    }

    /// Validates the payload and returns a submission machine in `Built`.
    ///
    /// # Arguments
    ///
    /// * `payload` - The assembled campaign creation payload.
    /// * `asset` - Reward asset funding the budget.
    /// * `reward_total` - Total reward amount before the protocol fee; the
    ///   machine approves and transfers `with_fee(reward_total)`.
    ///
    /// # Returns
    ///
    /// A `Result` holding the new `CampaignSubmission`, or a
    /// `SubmissionError` if the payload is inconsistent.
    pub fn begin(
        &self,
        payload: CampaignCreationPayload,
        asset: Address,
        reward_total: U256,
    ) -> Result<CampaignSubmission, SubmissionError> {
        self.validate(&payload)?;
        let funding = Self::fee_adjusted_funding(asset, reward_total);
        Ok(CampaignSubmission {
            payload,
            funding,
            state: SubmissionState::Built,
        })
    }

    /// Performs exactly one state transition.
    ///
    /// Reverted receipts move the machine to `Failed` and surface the
    /// failing transaction hash in the returned error; a success receipt
    /// without a creation event does the same with
    /// [`SubmissionError::MissingCreationEvent`]. Advancing a terminal
    /// machine returns [`SubmissionError::AlreadyTerminal`].
    ///
    /// # Arguments
    ///
    /// * `submission` - The machine to advance.
    ///
    /// # Returns
    ///
    /// A `Result` indicating the transition happened, or the
    /// `SubmissionError` that moved the machine to `Failed`.
    pub async fn advance(
        &self,
        submission: &mut CampaignSubmission,
    ) -> Result<(), SubmissionError> {
        match submission.state.clone() {
            SubmissionState::Built => {
                let data = self
                    .codec
                    .encode_approval(submission.payload.budget.address(), submission.funding.amount)?;
                let tx = TransactionRequest {
                    to: submission.funding.asset,
                    data,
                    value: None,
                };
                let tx_hash = self.ledger.submit_transaction(&tx).await?;
                submission.state = SubmissionState::Approving { tx_hash };
            }
            SubmissionState::Approving { tx_hash } => {
                let receipt = self.ledger.wait_for_receipt(tx_hash).await?;
                if receipt.status == ReceiptStatus::Reverted {
                    submission.state =
                        SubmissionState::Failed(FailureReason::ApprovalReverted { tx_hash });
                    return Err(SubmissionError::ApprovalReverted { tx_hash });
                }
                submission.state = SubmissionState::Approved { approval_tx: tx_hash };
            }
            SubmissionState::Approved { .. } => {
                let core = self.core_for(submission.payload.chain_id)?;
                let data = self
                    .codec
                    .encode_creation(&submission.payload, &submission.funding)?;
                let tx = TransactionRequest {
                    to: core,
                    data,
                    value: None,
                };
                let tx_hash = self.ledger.submit_transaction(&tx).await?;
                submission.state = SubmissionState::Creating { tx_hash };
            }
            SubmissionState::Creating { tx_hash } => {
                let receipt = self.ledger.wait_for_receipt(tx_hash).await?;
                if receipt.status == ReceiptStatus::Reverted {
                    submission.state =
                        SubmissionState::Failed(FailureReason::CreationReverted { tx_hash });
                    return Err(SubmissionError::CreationReverted { tx_hash });
                }
                submission.state = SubmissionState::Created { tx_hash, receipt };
            }
            SubmissionState::Created { tx_hash, receipt } => {
                let events = self.codec.decode_creation_events(&receipt.logs)?;
                match events.first() {
                    Some(event) => {
                        submission.state = SubmissionState::Confirmed(SubmissionResult {
                            tx_hash,
                            status: ReceiptStatus::Success,
                            campaign_id: Some(event.campaign_id),
                        });
                    }
                    None => {
                        submission.state = SubmissionState::Failed(
                            FailureReason::MissingCreationEvent { tx_hash },
                        );
                        return Err(SubmissionError::MissingCreationEvent { tx_hash });
                    }
                }
            }
            SubmissionState::Confirmed(_) | SubmissionState::Failed(_) => {
                return Err(SubmissionError::AlreadyTerminal);
            }
        }
        Ok(())
    }

    /// Runs a submission from `Built` to `Confirmed`.
    ///
    /// # Arguments
    ///
    /// * `payload` - The assembled campaign creation payload.
    /// * `asset` - Reward asset funding the budget.
    /// * `reward_total` - Total reward amount before the protocol fee.
    ///
    /// # Returns
    ///
    /// A `Result` holding the `SubmissionResult` with the extracted campaign
    /// id, or the `SubmissionError` that terminated the flow.
    pub async fn run(
        &self,
        payload: CampaignCreationPayload,
        asset: Address,
        reward_total: U256,
    ) -> Result<SubmissionResult, SubmissionError> {
        let mut submission = self.begin(payload, asset, reward_total)?;
        println!(
            "{} - Begin campaign submission (funding {})",
            chrono::Utc::now().to_rfc3339(),
            submission.funding.amount
        );

        loop {
            self.advance(&mut submission).await?;
            if let SubmissionState::Confirmed(result) = submission.state() {
                println!(
                    "{} - Campaign confirmed in tx {}",
                    chrono::Utc::now().to_rfc3339(),
                    result.tx_hash
                );
                return Ok(result.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::B256;
    use campaigns_ledger::addresses::ChainAddresses;
    use campaigns_ledger::fixtures::ScriptedLedger;
    use campaigns_ledger::ProtocolCodec;
    use campaigns_shared::types::{
        ActionClaimant, ActionParameter, ActionStep, AllowPolicy, BudgetReference, ClaimValidator,
        EventActionDescriptor, FieldKind, FilterOp, IncentiveDescriptor, SignatureKind,
        DistributionStrategy, ACTION_STEP_ARITY,
    };

    const CHAIN_ID: u64 = 8453;

    fn core_address() -> Address {
        Address::with_last_byte(0xC0)
    }

    fn asset() -> Address {
        Address::with_last_byte(0x13)
    }

    fn budget_address() -> Address {
        Address::with_last_byte(0xB0)
    }

    fn owner() -> Address {
        Address::with_last_byte(0xAA)
    }

    fn demo_addresses() -> AddressBook {
        AddressBook::new().with_chain(
            CHAIN_ID,
            ChainAddresses {
                core: core_address(),
                transparent_budget: Some(budget_address()),
            },
        )
    }

    fn sample_step(chain_id: u64) -> ActionStep {
        ActionStep {
            chain_id,
            signature: B256::from(U256::from(7)),
            signature_kind: SignatureKind::Event,
            target_contract: owner(),
            parameter: ActionParameter {
                filter_op: FilterOp::Equal,
                field_kind: FieldKind::Uint,
                field_index: 0,
                filter_data: Bytes::from(vec![0x07, 0x93]),
            },
        }
    }

    fn sample_payload() -> CampaignCreationPayload {
        CampaignCreationPayload {
            chain_id: CHAIN_ID,
            budget: BudgetReference::Transparent {
                address: budget_address(),
            },
            action: EventActionDescriptor {
                claimant: ActionClaimant {
                    chain_id: CHAIN_ID,
                    signature: B256::from(U256::from(7)),
                    signature_kind: SignatureKind::Event,
                    target_contract: owner(),
                    field_index: 3,
                },
                steps: vec![sample_step(CHAIN_ID); ACTION_STEP_ARITY],
            },
            incentives: vec![IncentiveDescriptor {
                asset: asset(),
                reward: U256::from(1_000_000u64),
                limit: U256::from(1u64),
                strategy: DistributionStrategy::Pool,
            }],
            allow_policy: AllowPolicy::Open,
            validator: ClaimValidator {
                signers: vec![owner()],
                validator_caller: core_address(),
                max_claim_count: 1,
            },
            owner: owner(),
        }
    }

    fn reverted_receipt() -> Receipt {
        Receipt {
            status: ReceiptStatus::Reverted,
            logs: vec![],
        }
    }

    fn submitter(ledger: Arc<ScriptedLedger>) -> CampaignSubmitter {
        CampaignSubmitter::new(ledger, Arc::new(ProtocolCodec::new()), demo_addresses())
    }

    #[tokio::test]
    async fn test_reverted_approval_is_terminal_and_skips_creation() {
        let ledger = Arc::new(ScriptedLedger::new(vec![reverted_receipt()]));
        let submitter = submitter(ledger.clone());

        let result = submitter
            .run(sample_payload(), asset(), U256::from(1_000_000u64))
            .await;
        assert!(matches!(
            result,
            Err(SubmissionError::ApprovalReverted { .. })
        ));
        // Only the approval was ever submitted.
        assert_eq!(ledger.submitted().len(), 1);
        assert_eq!(ledger.submitted()[0].to, asset());
    }

    #[tokio::test]
    async fn test_failed_machine_stays_failed() {
        let ledger = Arc::new(ScriptedLedger::new(vec![reverted_receipt()]));
        let submitter = submitter(ledger);

        let mut submission = submitter
            .begin(sample_payload(), asset(), U256::from(1_000_000u64))
            .unwrap();
        submitter.advance(&mut submission).await.unwrap();
        assert!(submitter.advance(&mut submission).await.is_err());
        assert!(submission.state().is_terminal());
        assert!(matches!(
            submitter.advance(&mut submission).await,
            Err(SubmissionError::AlreadyTerminal)
        ));
    }

    #[tokio::test]
    async fn test_chain_mismatch_rejected_before_submission() {
        let ledger = Arc::new(ScriptedLedger::new(vec![]));
        let submitter = submitter(ledger.clone());

        let mut payload = sample_payload();
        payload.action.steps[2] = sample_step(1);
        let result = submitter.begin(payload, asset(), U256::from(1u64));
        assert!(matches!(
            result,
            Err(SubmissionError::ChainMismatch {
                expected: CHAIN_ID,
                found: 1
            })
        ));
        assert!(ledger.submitted().is_empty());
    }

    #[tokio::test]
    async fn test_validator_caller_must_be_core() {
        let ledger = Arc::new(ScriptedLedger::new(vec![]));
        let submitter = submitter(ledger);

        let mut payload = sample_payload();
        payload.validator.validator_caller = owner();
        assert!(matches!(
            submitter.begin(payload, asset(), U256::from(1u64)),
            Err(SubmissionError::ValidatorCallerMismatch { .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_chain_rejected() {
        let ledger = Arc::new(ScriptedLedger::new(vec![]));
        let submitter = submitter(ledger);

        let mut payload = sample_payload();
        payload.chain_id = 1;
        // Nested descriptors still carry 8453, but the chain table lookup
        // fails first.
        assert!(matches!(
            submitter.begin(payload, asset(), U256::from(1u64)),
            Err(SubmissionError::UnsupportedChain(1))
        ));
    }

    #[tokio::test]
    async fn test_funding_amount_is_fee_adjusted() {
        let ledger = Arc::new(ScriptedLedger::new(vec![]));
        let submitter = submitter(ledger);

        let submission = submitter
            .begin(sample_payload(), asset(), U256::from(1_000_000u64))
            .unwrap();
        assert_eq!(submission.funding().amount, U256::from(1_100_000u64));
        assert_eq!(*submission.state(), SubmissionState::Built);
    }

    #[tokio::test]
    async fn test_prepare_returns_calldata_without_submitting() {
        let ledger = Arc::new(ScriptedLedger::new(vec![]));
        let submitter = submitter(ledger.clone());

        let calldata = submitter
            .prepare(&sample_payload(), asset(), U256::from(1_000_000u64))
            .unwrap();
        assert!(!calldata.is_empty());
        assert!(ledger.submitted().is_empty());
    }
}
