//! End-to-end campaign submission against scripted fixtures: descriptors are
//! built from caller scalars, the budget resolved from the address table,
//! and the two-phase submission driven to a confirmed campaign id.
use std::sync::Arc;

use alloy::hex::FromHex;
use alloy::primitives::{Address, Bytes, B256, U256};
use campaigns_ledger::addresses::{AddressBook, ChainAddresses};
use campaigns_ledger::fixtures::{InMemoryRegistry, ScriptedLedger};
use campaigns_ledger::ProtocolCodec;
use campaigns_pipeline::builders::{
    build_allow_policy, build_event_action, build_incentive, build_validator, EventActionParams,
};
use campaigns_pipeline::{BudgetResolver, CampaignSubmitter, SubmissionError};
use campaigns_shared::types::{
    AllowMode, CampaignCreationPayload, EventSchema, FieldKind, FilterOp, RawLog, Receipt,
    ReceiptStatus,
};

const CHAIN_ID: u64 = 8453;

fn core_address() -> Address {
    Address::from_hex("0x378632819f39c74c4f56b1429e760739c5fb51b7").unwrap()
}

fn transparent_budget() -> Address {
    Address::from_hex("0x894a1a70311cd19a3ef33a38b18eab618394d6dd").unwrap()
}

fn usdc() -> Address {
    Address::from_hex("0x833589fcd6edb6e08f4c7c32d4f71b54bda02913").unwrap()
}

fn crowdfund_contract() -> Address {
    Address::from_hex("0x016df4c52fb5c0e1cb3432ebd6071a90b1f6dcd9").unwrap()
}

fn account() -> Address {
    Address::from_hex("0x4d6e6ef749d2c0e3ee89fc788a00e28db71aa6b5").unwrap()
}

fn signer() -> Address {
    Address::from_hex("0xcbd0c302040bc803b4b2edaf21be0e49deff5480").unwrap()
}

fn demo_addresses() -> AddressBook {
    AddressBook::new().with_chain(
        CHAIN_ID,
        ChainAddresses {
            core: core_address(),
            transparent_budget: Some(transparent_budget()),
        },
    )
}

fn donation_schema() -> EventSchema {
    EventSchema {
        signature: B256::from_hex(
            "0x78143f48dfa1849efc52492df442294aeac95fa001fd9fdc45a8bb47aa9167f7",
        )
        .unwrap(),
        // crowdfund id, amount, token, donor
        fields: vec![
            FieldKind::Uint,
            FieldKind::Uint,
            FieldKind::Address,
            FieldKind::Address,
        ],
    }
}

/// Assembles the donation-campaign payload the way a caller would: builders
/// fed with scalars, budget resolved from the injected table.
fn donation_payload(resolver: &BudgetResolver, reward: &str) -> CampaignCreationPayload {
    let action = build_event_action(EventActionParams {
        chain_id: CHAIN_ID,
        target_contract: crowdfund_contract(),
        schema: donation_schema(),
        filter_op: FilterOp::Equal,
        filter_field_index: 0,
        filter_value: "793".to_string(),
        claimant_field_index: 3,
    })
    .unwrap();

    let incentive = build_incentive(
        usdc(),
        6,
        reward,
        1,
        campaigns_shared::types::DistributionStrategy::Pool,
    )
    .unwrap();

    CampaignCreationPayload {
        chain_id: CHAIN_ID,
        budget: resolver.transparent(CHAIN_ID).unwrap(),
        action,
        incentives: vec![incentive],
        allow_policy: build_allow_policy(AllowMode::Open, None, vec![]).unwrap(),
        validator: build_validator(vec![signer()], core_address(), 1).unwrap(),
        owner: account(),
    }
}

fn resolver() -> BudgetResolver {
    BudgetResolver::new(Arc::new(InMemoryRegistry::new()), demo_addresses())
}

fn success_receipt(logs: Vec<RawLog>) -> Receipt {
    Receipt {
        status: ReceiptStatus::Success,
        logs,
    }
}

fn creation_log(campaign_id: u64) -> RawLog {
    RawLog {
        address: core_address(),
        topics: vec![
            ProtocolCodec::creation_event_signature(),
            B256::from(U256::from(campaign_id)),
            B256::ZERO,
            B256::ZERO,
        ],
        data: Bytes::new(),
    }
}

#[tokio::test]
async fn test_end_to_end_submission_extracts_campaign_id() {
    let resolver = resolver();
    let payload = donation_payload(&resolver, "1");
    let reward_total = payload.incentives[0].reward;

    let ledger = Arc::new(ScriptedLedger::new(vec![
        success_receipt(vec![]),
        success_receipt(vec![creation_log(42)]),
    ]));
    let submitter = CampaignSubmitter::new(
        ledger.clone(),
        Arc::new(ProtocolCodec::new()),
        demo_addresses(),
    );

    let result = submitter.run(payload, usdc(), reward_total).await.unwrap();
    assert_eq!(result.status, ReceiptStatus::Success);
    assert_eq!(result.campaign_id, Some(U256::from(42)));

    // Approval to the asset contract first, then creation to the core.
    let submitted = ledger.submitted();
    assert_eq!(submitted.len(), 2);
    assert_eq!(submitted[0].to, usdc());
    assert_eq!(submitted[1].to, core_address());

    // Reward "1" with 6 decimals plus the 10% protocol fee moves 1_100_000,
    // visible as the approval allowance argument.
    let allowance_word = &submitted[0].data[4 + 32..4 + 64];
    assert_eq!(
        U256::from_be_slice(allowance_word),
        U256::from(1_100_000u64)
    );
}

#[tokio::test]
async fn test_success_receipt_without_creation_event_is_fatal() {
    let resolver = resolver();
    let payload = donation_payload(&resolver, "1");
    let reward_total = payload.incentives[0].reward;

    let ledger = Arc::new(ScriptedLedger::new(vec![
        success_receipt(vec![]),
        success_receipt(vec![]),
    ]));
    let submitter = CampaignSubmitter::new(ledger, Arc::new(ProtocolCodec::new()), demo_addresses());

    let result = submitter.run(payload, usdc(), reward_total).await;
    assert!(matches!(
        result,
        Err(SubmissionError::MissingCreationEvent { .. })
    ));
}

#[tokio::test]
async fn test_reverted_creation_is_fatal() {
    let resolver = resolver();
    let payload = donation_payload(&resolver, "1");
    let reward_total = payload.incentives[0].reward;

    let ledger = Arc::new(ScriptedLedger::new(vec![
        success_receipt(vec![]),
        Receipt {
            status: ReceiptStatus::Reverted,
            logs: vec![],
        },
    ]));
    let submitter = CampaignSubmitter::new(
        ledger.clone(),
        Arc::new(ProtocolCodec::new()),
        demo_addresses(),
    );

    let result = submitter.run(payload, usdc(), reward_total).await;
    assert!(matches!(
        result,
        Err(SubmissionError::CreationReverted { .. })
    ));
    assert_eq!(ledger.submitted().len(), 2);
}
