//! Event action builder.
//!
//! Constructs the qualification rule for a campaign: the ordered list of
//! event-match conditions and the claimant extraction rule. The on-chain
//! schema requires [`ACTION_STEP_ARITY`] steps even when only one distinct
//! condition exists, so the single built step is replicated to fill the
//! schema.
use alloy::primitives::{Address, Bytes};
use campaigns_shared::types::{
    ActionClaimant, ActionParameter, ActionStep, EventActionDescriptor, EventSchema, FieldKind,
    FilterOp, SignatureKind, ACTION_STEP_ARITY,
};

use crate::errors::BuilderError;

/// Caller-supplied scalars for a single-condition event action.
#[derive(Debug, Clone, PartialEq)]
pub struct EventActionParams {
    pub chain_id: u64,
    pub target_contract: Address,
    /// Declared field layout of the matched event, from the contract ABI.
    pub schema: EventSchema,
    pub filter_op: FilterOp,
    /// Index of the event field the filter compares against.
    pub filter_field_index: u64,
    /// Hex comparison value, with or without a `0x` prefix.
    pub filter_value: String,
    /// Index of the address-typed event field holding the claimant.
    pub claimant_field_index: u64,
}

/// Normalizes a hex filter value into its canonical `0x`-prefixed form.
///
/// An odd digit count is left-padded with one zero nibble; right-padding
/// would change the encoded numeric value, and digits are never truncated.
/// The result always has an even digit count, so normalization is
/// idempotent.
///
/// # Arguments
///
/// * `raw` - Hex digits, with or without a `0x` prefix.
///
/// # Returns
///
/// A `Result` holding the canonical lowercase `0x…` string, or
/// `BuilderError::InvalidFilterValue` if the input is empty or not hex.
pub fn normalize_filter_value(raw: &str) -> Result<String, BuilderError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(BuilderError::InvalidFilterValue(raw.to_string()));
    }

    let lower = digits.to_ascii_lowercase();
    if lower.len() % 2 == 1 {
        Ok(format!("0x0{lower}"))
    } else {
        Ok(format!("0x{lower}"))
    }
}

/// Builds the full qualification rule for a single-condition campaign.
///
/// Validates the filter and claimant field indices against the declared
/// event schema, normalizes the filter value into canonical bytes, builds
/// one `ActionStep`, and replicates it [`ACTION_STEP_ARITY`] times. The
/// claimant rule carries the same chain, contract, and signature.
///
/// # Arguments
///
/// * `params` - Caller-supplied scalars for the action.
///
/// # Returns
///
/// A `Result` holding the assembled `EventActionDescriptor`, or a
/// `BuilderError` describing which scalar is invalid.
pub fn build_event_action(params: EventActionParams) -> Result<EventActionDescriptor, BuilderError> {
    let field_count = params.schema.fields.len();
    if params.filter_field_index as usize >= field_count {
        return Err(BuilderError::InvalidFilterField {
            index: params.filter_field_index,
            field_count,
        });
    }

    let claimant_kind = params
        .schema
        .fields
        .get(params.claimant_field_index as usize)
        .copied();
    if claimant_kind != Some(FieldKind::Address) {
        return Err(BuilderError::InvalidClaimantField {
            index: params.claimant_field_index,
        });
    }

    let normalized = normalize_filter_value(&params.filter_value)?;
    let filter_data = alloy::hex::decode(&normalized)
        .map(Bytes::from)
        .map_err(|_| BuilderError::InvalidFilterValue(params.filter_value.clone()))?;

    let step = ActionStep {
        chain_id: params.chain_id,
        signature: params.schema.signature,
        signature_kind: SignatureKind::Event,
        target_contract: params.target_contract,
        parameter: ActionParameter {
            filter_op: params.filter_op,
            field_kind: params.schema.fields[params.filter_field_index as usize],
            field_index: params.filter_field_index,
            filter_data,
        },
    };

    let claimant = ActionClaimant {
        chain_id: params.chain_id,
        signature: params.schema.signature,
        signature_kind: SignatureKind::Event,
        target_contract: params.target_contract,
        field_index: params.claimant_field_index,
    };

    Ok(EventActionDescriptor {
        claimant,
        steps: vec![step; ACTION_STEP_ARITY],
    })
}
