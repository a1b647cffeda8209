use std::sync::Arc;

use alloy::hex::FromHex;
use alloy::primitives::{Address, B256, U256};
use campaigns_ledger::addresses::{AddressBook, ChainAddresses};
use campaigns_ledger::fixtures::{InMemoryRegistry, ScriptedLedger};
use campaigns_ledger::ProtocolCodec;
use campaigns_pipeline::builders::{
    build_allow_policy, build_event_action, build_incentive, build_validator, EventActionParams,
};
use campaigns_pipeline::{BudgetResolver, CampaignSubmitter};
use campaigns_shared::types::{
    AllowMode, CampaignCreationPayload, DistributionStrategy, EventSchema, FieldKind, FilterOp,
};

use crate::errors::CreatorError;

// Demo deployment of the incentive protocol on Base.
const DEMO_CHAIN_ID: u64 = 8453;
const CORE_CONTRACT: &str = "0x378632819f39c74c4f56b1429e760739c5fb51b7";
const TRANSPARENT_BUDGET: &str = "0x894a1a70311cd19a3ef33a38b18eab618394d6dd";

// Demo campaign parameters: reward donors to one crowdfund with USDC.
const CROWDFUND_CONTRACT: &str = "0x016df4c52fb5c0e1cb3432ebd6071a90b1f6dcd9";
const DONATION_EVENT: &str = "0x78143f48dfa1849efc52492df442294aeac95fa001fd9fdc45a8bb47aa9167f7";
const REWARD_TOKEN: &str = "0x833589fcd6edb6e08f4c7c32d4f71b54bda02913";
const REWARD_TOKEN_DECIMALS: u8 = 6;
const CLAIM_SIGNER: &str = "0xcbd0c302040bc803b4b2edaf21be0e49deff5480";
const DEMO_ACCOUNT: &str = "0x4d6e6ef749d2c0e3ee89fc788a00e28db71aa6b5";
const DEMO_REWARD_AMOUNT: &str = "0.1";
const DEMO_CROWDFUND_ID: &str = "793";

fn parse_address(raw: &str) -> Result<Address, CreatorError> {
    Address::from_hex(raw).map_err(|_| CreatorError::InvalidAddress(raw.to_string()))
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// `Dependencies` struct holds the wired components for the campaign
/// creation demo.
///
/// It includes the budget resolver, the campaign submitter, and the demo
/// campaign scalars taken from the environment (falling back to the demo
/// constants above).
pub struct Dependencies {
    pub resolver: BudgetResolver,
    pub submitter: CampaignSubmitter,
    pub chain_id: u64,
    pub account: Address,
    pub reward_token: Address,
    pub reward_amount: String,
    pub crowdfund_id: String,
}

impl Dependencies {
    /// Creates a new `Dependencies` instance from the environment.
    ///
    /// Reads `CHAIN_ID`, `ACCOUNT_ADDRESS`, `TOKEN_ADDRESS`, `REWARD_AMOUNT`
    /// and `CROWDFUND_ID`, falling back to the demo constants when unset.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on successful wiring or a
    /// `CreatorError` if a setting cannot be parsed.
    pub fn new() -> Result<Self, CreatorError> {
        let chain_id_raw = env_or("CHAIN_ID", &DEMO_CHAIN_ID.to_string());
        let chain_id = chain_id_raw
            .parse::<u64>()
            .map_err(|_| CreatorError::InvalidChainId(chain_id_raw))?;

        Self::from_values(
            chain_id,
            &env_or("ACCOUNT_ADDRESS", DEMO_ACCOUNT),
            &env_or("TOKEN_ADDRESS", REWARD_TOKEN),
            env_or("REWARD_AMOUNT", DEMO_REWARD_AMOUNT),
            env_or("CROWDFUND_ID", DEMO_CROWDFUND_ID),
        )
    }

    /// Wires the components from explicit values.
    ///
    /// The ledger is a fixture: the demo only prepares payloads, nothing is
    /// submitted.
    pub fn from_values(
        chain_id: u64,
        account: &str,
        reward_token: &str,
        reward_amount: String,
        crowdfund_id: String,
    ) -> Result<Self, CreatorError> {
        let addresses = AddressBook::new().with_chain(
            chain_id,
            ChainAddresses {
                core: parse_address(CORE_CONTRACT)?,
                transparent_budget: Some(parse_address(TRANSPARENT_BUDGET)?),
            },
        );

        let resolver = BudgetResolver::new(Arc::new(InMemoryRegistry::new()), addresses.clone());
        let submitter = CampaignSubmitter::new(
            Arc::new(ScriptedLedger::new(vec![])),
            Arc::new(ProtocolCodec::new()),
            addresses,
        );

        Ok(Dependencies {
            resolver,
            submitter,
            chain_id,
            account: parse_address(account)?,
            reward_token: parse_address(reward_token)?,
            reward_amount,
            crowdfund_id,
        })
    }

    /// Assembles the demo campaign payload: donors to the configured
    /// crowdfund qualify once each for the configured USDC reward, funded
    /// from the chain's transparent budget.
    ///
    /// # Returns
    ///
    /// A `Result` holding the payload and the pre-fee reward total, or a
    /// `CreatorError` if a builder rejects the configured scalars.
    pub fn demo_payload(&self) -> Result<(CampaignCreationPayload, U256), CreatorError> {
        let schema = EventSchema {
            signature: B256::from_hex(DONATION_EVENT)
                .map_err(|_| CreatorError::InvalidAddress(DONATION_EVENT.to_string()))?,
            // crowdfund id, amount, token, donor
            fields: vec![
                FieldKind::Uint,
                FieldKind::Uint,
                FieldKind::Address,
                FieldKind::Address,
            ],
        };

        let action = build_event_action(EventActionParams {
            chain_id: self.chain_id,
            target_contract: parse_address(CROWDFUND_CONTRACT)?,
            schema,
            filter_op: FilterOp::Equal,
            filter_field_index: 0,
            filter_value: self.crowdfund_id.clone(),
            claimant_field_index: 3,
        })?;

        let incentive = build_incentive(
            self.reward_token,
            REWARD_TOKEN_DECIMALS,
            &self.reward_amount,
            1,
            DistributionStrategy::Pool,
        )?;
        let reward_total = incentive.reward;

        let payload = CampaignCreationPayload {
            chain_id: self.chain_id,
            budget: self.resolver.transparent(self.chain_id)?,
            action,
            incentives: vec![incentive],
            allow_policy: build_allow_policy(AllowMode::Open, None, vec![])?,
            validator: build_validator(vec![parse_address(CLAIM_SIGNER)?], parse_address(CORE_CONTRACT)?, 1)?,
            owner: self.account,
        };

        Ok((payload, reward_total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campaigns_shared::types::ACTION_STEP_ARITY;

    fn demo_dependencies() -> Dependencies {
        Dependencies::from_values(
            DEMO_CHAIN_ID,
            DEMO_ACCOUNT,
            REWARD_TOKEN,
            DEMO_REWARD_AMOUNT.to_string(),
            DEMO_CROWDFUND_ID.to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_demo_payload_is_buildable() {
        let deps = demo_dependencies();
        let (payload, reward_total) = deps.demo_payload().unwrap();

        assert_eq!(payload.chain_id, DEMO_CHAIN_ID);
        assert_eq!(payload.action.steps.len(), ACTION_STEP_ARITY);
        assert_eq!(reward_total, U256::from(100_000u64));
        assert!(!payload.budget.is_managed());
    }

    #[test]
    fn test_demo_payload_prepares_without_submitting() {
        let deps = demo_dependencies();
        let (payload, reward_total) = deps.demo_payload().unwrap();

        let calldata = deps
            .submitter
            .prepare(&payload, deps.reward_token, reward_total)
            .unwrap();
        assert!(!calldata.is_empty());
    }

    #[test]
    fn test_invalid_account_rejected() {
        let result = Dependencies::from_values(
            DEMO_CHAIN_ID,
            "not-an-address",
            REWARD_TOKEN,
            DEMO_REWARD_AMOUNT.to_string(),
            DEMO_CROWDFUND_ID.to_string(),
        );
        assert!(matches!(result, Err(CreatorError::InvalidAddress(_))));
    }
}
