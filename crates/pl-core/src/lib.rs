//! # pl-core
//!
//! Core domain models and ports for the Placement onboarding backend.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

pub mod candidate;
pub mod config;
pub mod dashboard;
pub mod ids;
pub mod onboarding;
pub mod ports;
pub mod session;

// Re-export commonly used types at the crate root
pub use candidate::{Candidate, CandidateSummary};
pub use config::AppConfig;
pub use ids::{CandidateId, UserId};
pub use onboarding::{OnboardingStepDefinition, OnboardingStepRecord, StepRegistry, StepStatus};
pub use session::{AuthenticatedUser, Session};
