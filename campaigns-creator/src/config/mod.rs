//! Configuration module for the campaigns creator.
//! Defines and manages application-wide settings and dependencies.
mod dependencies;

pub use dependencies::Dependencies;
