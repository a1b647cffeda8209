//! # Campaigns Pipeline
//! Core logic of the campaign creation pipeline: fee-adjusted reward
//! computation, descriptor builders, budget resolution, and the two-phase
//! submission state machine that turns an assembled payload into an on-chain
//! campaign id.
pub mod builders;
pub mod errors;
pub mod fee;
pub mod resolver;
pub mod submission;

pub use errors::{BuilderError, ResolverError, SubmissionError};
pub use resolver::BudgetResolver;
pub use submission::{CampaignSubmission, CampaignSubmitter, FailureReason, SubmissionState};
