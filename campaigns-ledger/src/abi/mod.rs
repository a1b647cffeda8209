//! Concrete protocol codec built on `alloy`'s `sol!` definitions.
//!
//! Mirrors the protocol's on-chain schema: the campaign payload is
//! ABI-encoded as a struct tree and carried as `bytes` into the creation
//! call, alongside the funding asset and fee-inclusive amount. The creation
//! event carries the campaign id as its first indexed topic.
use alloy::primitives::{Address, Bytes, U256};
use alloy::sol;
use alloy::sol_types::{SolCall, SolEvent, SolValue};
use campaigns_shared::types::{
    AllowPolicy, CampaignCreationPayload, CreationEvent, DistributionStrategy, FieldKind,
    FilterOp, FundingInstruction, RawLog, SignatureKind, ACTION_STEP_ARITY,
};

use crate::errors::CodecError;
use crate::interfaces::CampaignCodec;

sol! {
    struct OnChainActionParameter {
        uint8 filterOp;
        uint8 fieldKind;
        uint64 fieldIndex;
        bytes filterData;
    }

    struct OnChainActionStep {
        uint64 chainId;
        bytes32 signature;
        uint8 signatureKind;
        address targetContract;
        OnChainActionParameter parameter;
    }

    struct OnChainActionClaimant {
        uint64 chainId;
        bytes32 signature;
        uint8 signatureKind;
        address targetContract;
        uint64 fieldIndex;
    }

    struct OnChainEventAction {
        OnChainActionClaimant claimant;
        OnChainActionStep[] steps;
    }

    struct OnChainIncentive {
        address asset;
        uint256 reward;
        uint256 limit;
        uint8 strategy;
    }

    struct OnChainAllowPolicy {
        uint8 mode;
        address owner;
        address[] denied;
    }

    struct OnChainValidator {
        address[] signers;
        address validatorCaller;
        uint64 maxClaimCount;
    }

    struct OnChainCampaign {
        uint64 chainId;
        address budget;
        OnChainEventAction action;
        OnChainIncentive[] incentives;
        OnChainAllowPolicy allowList;
        OnChainValidator validator;
        address owner;
    }

    function approve(address spender, uint256 value) external returns (bool);

    function createCampaign(bytes data_, address asset, uint256 amount) external returns (uint256);

    event CampaignCreated(uint256 indexed campaignId, address indexed owner, address indexed budget);
}

fn signature_kind_code(kind: SignatureKind) -> u8 {
    match kind {
        SignatureKind::Event => 0,
        SignatureKind::Function => 1,
    }
}

fn filter_op_code(op: FilterOp) -> u8 {
    match op {
        FilterOp::Equal => 0,
        FilterOp::NotEqual => 1,
        FilterOp::GreaterThan => 2,
        FilterOp::LessThan => 3,
        FilterOp::Contains => 4,
    }
}

fn field_kind_code(kind: FieldKind) -> u8 {
    match kind {
        FieldKind::Address => 0,
        FieldKind::Bytes => 1,
        FieldKind::Uint => 2,
        FieldKind::String => 3,
    }
}

fn strategy_code(strategy: DistributionStrategy) -> u8 {
    match strategy {
        DistributionStrategy::Pool => 0,
        DistributionStrategy::Mint => 1,
        DistributionStrategy::Raffle => 2,
    }
}

/// Protocol codec implementing [`CampaignCodec`] over the `sol!` schema.
///
/// Stateless; a single instance can be shared across submissions.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtocolCodec;

impl ProtocolCodec {
    pub fn new() -> Self {
        Self
    }

    /// Topic-0 signature of the protocol's campaign creation event.
    pub fn creation_event_signature() -> alloy::primitives::B256 {
        CampaignCreated::SIGNATURE_HASH
    }

    fn lower_campaign(payload: &CampaignCreationPayload) -> Result<OnChainCampaign, CodecError> {
        if payload.action.steps.len() != ACTION_STEP_ARITY {
            return Err(CodecError::ArityMismatch {
                expected: ACTION_STEP_ARITY,
                got: payload.action.steps.len(),
            });
        }

        let steps = payload
            .action
            .steps
            .iter()
            .map(|step| OnChainActionStep {
                chainId: step.chain_id,
                signature: step.signature,
                signatureKind: signature_kind_code(step.signature_kind),
                targetContract: step.target_contract,
                parameter: OnChainActionParameter {
                    filterOp: filter_op_code(step.parameter.filter_op),
                    fieldKind: field_kind_code(step.parameter.field_kind),
                    fieldIndex: step.parameter.field_index,
                    filterData: step.parameter.filter_data.clone(),
                },
            })
            .collect();

        let claimant = &payload.action.claimant;
        let action = OnChainEventAction {
            claimant: OnChainActionClaimant {
                chainId: claimant.chain_id,
                signature: claimant.signature,
                signatureKind: signature_kind_code(claimant.signature_kind),
                targetContract: claimant.target_contract,
                fieldIndex: claimant.field_index,
            },
            steps,
        };

        let incentives = payload
            .incentives
            .iter()
            .map(|incentive| OnChainIncentive {
                asset: incentive.asset,
                reward: incentive.reward,
                limit: incentive.limit,
                strategy: strategy_code(incentive.strategy),
            })
            .collect();

        let allow_list = match &payload.allow_policy {
            AllowPolicy::Open => OnChainAllowPolicy {
                mode: 0,
                owner: Address::ZERO,
                denied: Vec::new(),
            },
            AllowPolicy::DenyList { owner, denied } => OnChainAllowPolicy {
                mode: 1,
                owner: *owner,
                denied: denied.clone(),
            },
        };

        Ok(OnChainCampaign {
            chainId: payload.chain_id,
            budget: payload.budget.address(),
            action,
            incentives,
            allowList: allow_list,
            validator: OnChainValidator {
                signers: payload.validator.signers.clone(),
                validatorCaller: payload.validator.validator_caller,
                maxClaimCount: payload.validator.max_claim_count,
            },
            owner: payload.owner,
        })
    }
}

impl CampaignCodec for ProtocolCodec {
    fn encode_approval(&self, spender: Address, amount: U256) -> Result<Bytes, CodecError> {
        let call = approveCall {
            spender,
            value: amount,
        };
        Ok(Bytes::from(call.abi_encode()))
    }

    fn encode_creation(
        &self,
        payload: &CampaignCreationPayload,
        funding: &FundingInstruction,
    ) -> Result<Bytes, CodecError> {
        let campaign = Self::lower_campaign(payload)?;
        let call = createCampaignCall {
            data_: Bytes::from(campaign.abi_encode()),
            asset: funding.asset,
            amount: funding.amount,
        };
        Ok(Bytes::from(call.abi_encode()))
    }

    fn decode_creation_events(&self, logs: &[RawLog]) -> Result<Vec<CreationEvent>, CodecError> {
        let mut events = Vec::new();
        for log in logs {
            match log.topics.first() {
                Some(topic) if *topic == CampaignCreated::SIGNATURE_HASH => {
                    let id_topic = log
                        .topics
                        .get(1)
                        .ok_or(CodecError::MalformedCreationLog)?;
                    events.push(CreationEvent {
                        campaign_id: U256::from_be_bytes(id_topic.0),
                    });
                }
                _ => {}
            }
        }
        Ok(events)
    }
}
