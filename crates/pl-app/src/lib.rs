//! Placement Application Orchestration Layer
//!
//! This crate contains the onboarding use cases and the dependency grouping
//! used to assemble them.

pub mod deps;
pub mod usecases;

pub use deps::{App, AppDeps};
