//! Descriptor builders for the campaign creation pipeline.
//! Each builder validates caller-supplied scalars and produces an immutable
//! descriptor; all validation failures surface as [`crate::BuilderError`]
//! before anything touches the network.
mod action;
mod incentive;
mod policy;

pub use action::{build_event_action, normalize_filter_value, EventActionParams};
pub use incentive::{build_incentive, format_units, to_smallest_units};
pub use policy::{build_allow_policy, build_validator};
