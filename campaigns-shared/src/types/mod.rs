mod action;
mod budget;
mod incentive;
mod payload;
mod policy;
mod submission;

pub use action::{
    ActionClaimant, ActionParameter, ActionStep, EventActionDescriptor, EventSchema, FieldKind,
    FilterOp, SignatureKind, ACTION_STEP_ARITY,
};
pub use budget::{BudgetReference, Role};
pub use incentive::{DistributionStrategy, IncentiveDescriptor};
pub use payload::{CampaignCreationPayload, FundingInstruction};
pub use policy::{AllowMode, AllowPolicy, ClaimValidator};
pub use submission::{
    CreationEvent, RawLog, Receipt, ReceiptStatus, SubmissionResult, TransactionRequest,
};
