//! Campaigns Creator
//!
//! This library provides the entry-point wiring for the campaign creation
//! demo: configuration management, error handling, and dependency injection.

pub mod config;
pub mod errors;

pub use config::Dependencies;
pub use errors::CreatorError;
