use alloy::primitives::{Address, Bytes, B256};

/// Number of action steps the protocol schema requires per event action.
///
/// The on-chain schema has a fixed arity: a single-condition action still
/// carries this many structurally identical steps. A future protocol version
/// with a different arity is a one-constant change here.
pub const ACTION_STEP_ARITY: usize = 4;

/// Kind of signature an action step matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureKind {
    /// An event emitted by the target contract.
    Event,
    /// A function selector on the target contract.
    Function,
}

/// Comparison operator applied to the filtered event field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Equal,
    NotEqual,
    GreaterThan,
    LessThan,
    Contains,
}

/// Declared type of an event field, as taken from the contract ABI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Address,
    Bytes,
    Uint,
    String,
}

/// Declared field layout of the event an action matches.
///
/// Supplied by the caller from the contract ABI; the action builder validates
/// field indices and field types against it before constructing steps.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSchema {
    pub signature: B256,
    pub fields: Vec<FieldKind>,
}

/// Filter applied to one field of a matched event.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionParameter {
    pub filter_op: FilterOp,
    pub field_kind: FieldKind,
    pub field_index: u64,
    /// Canonical byte encoding of the comparison value (even-length,
    /// big-endian, zero-padded on the left).
    pub filter_data: Bytes,
}

/// One on-chain event condition that must match for a claim to qualify.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionStep {
    pub chain_id: u64,
    pub signature: B256,
    pub signature_kind: SignatureKind,
    pub target_contract: Address,
    pub parameter: ActionParameter,
}

/// Rule extracting the claimant's address from a matched event.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionClaimant {
    pub chain_id: u64,
    pub signature: B256,
    pub signature_kind: SignatureKind,
    pub target_contract: Address,
    /// Index of the address-typed event field holding the claimant.
    pub field_index: u64,
}

/// Full qualification rule for a campaign.
///
/// Holds the claimant extraction rule and the ordered list of action steps.
/// The step list always has [`ACTION_STEP_ARITY`] entries; for a
/// single-condition action they are replicas of the same step.
#[derive(Debug, Clone, PartialEq)]
pub struct EventActionDescriptor {
    pub claimant: ActionClaimant,
    pub steps: Vec<ActionStep>,
}
