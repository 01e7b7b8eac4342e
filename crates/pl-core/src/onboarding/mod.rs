//! Onboarding domain models
//!
//! This module defines the onboarding wizard's step registry, the per-step
//! tracking records persisted for each candidate, and the pure decision
//! functions used to reconcile the two.

pub mod progress;
pub mod record;
pub mod status;
pub mod step;

pub use progress::{evaluate, missing_steps, CompletionVerdict};
pub use record::{NewOnboardingStepRecord, OnboardingStepRecord};
pub use status::StepStatus;
pub use step::{OnboardingStepDefinition, RegistryError, StepRegistry, StepView};
