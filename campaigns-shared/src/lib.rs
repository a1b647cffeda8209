//! # Campaigns Shared
//! This crate defines shared data structures and types used across the campaign
//! creation workspace. It includes common definitions for event actions,
//! incentives, claim policies, budget references, and transaction shapes.
pub mod types;
